use crate::store::TagColumn;
use crate::util::StrExt;

/// Collapses a persisted tag column of uncertain shape into the canonical
/// tag vector. The backing table has held these fields as a native string
/// array, as a bare string, and as a string containing a JSON-encoded
/// array; nothing past this function sees any of those shapes.
pub fn normalize_column(column: TagColumn) -> Vec<String> {
    match column {
        TagColumn::Tags(values) => normalize_tags(values),
        TagColumn::Text(text) => match serde_json::from_str::<serde_json::Value>(&text) {
            Ok(serde_json::Value::Array(items)) => normalize_tags(
                items.into_iter().filter_map(|item| match item {
                    serde_json::Value::String(value) => Some(value),
                    _ => None,
                }),
            ),
            _ => normalize_tags(Some(text)),
        },
    }
}

/// Trims every value, drops blanks, and deduplicates while preserving the
/// first occurrence. Idempotent.
pub fn normalize_tags(values: impl IntoIterator<Item = String>) -> Vec<String> {
    let mut tags: Vec<String> = Vec::new();
    for value in values {
        let Some(tag) = value.nonblank_to_some() else {
            continue;
        };
        if !tags.contains(&tag) {
            tags.push(tag);
        }
    }
    tags
}
