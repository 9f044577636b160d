//! Selection state for the tag inputs: a text filter over candidate
//! values plus the set of chosen tags. Pure state transitions; rendering
//! and persistence live elsewhere.

use crate::tags::normalize_tags;
use crate::util::StrExt;

/// Composes a set of tags for one field from existing candidates or typed
/// free text. `selected` never holds duplicates or blanks; insertion order
/// is the chip display order. Mutating methods report whether the
/// selection changed so the owner knows to re-render.
#[derive(Clone, Debug, Default)]
pub struct TagPicker {
    options: Vec<String>,
    selected: Vec<String>,
    query: String,
}

impl TagPicker {
    pub fn new(
        options: impl IntoIterator<Item = String>,
        selected: impl IntoIterator<Item = String>,
    ) -> TagPicker {
        TagPicker {
            options: normalize_tags(options),
            selected: normalize_tags(selected),
            query: String::new(),
        }
    }

    pub fn selected(&self) -> &[String] {
        &self.selected
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
    }

    /// Candidates matching the typed text case-insensitively, minus values
    /// that are already selected.
    pub fn suggestions(&self) -> Vec<&str> {
        let needle = self.query.trim().to_lowercase();
        self.options
            .iter()
            .filter(|option| !self.selected.contains(option))
            .filter(|option| needle.is_empty() || option.to_lowercase().contains(&needle))
            .map(String::as_str)
            .collect()
    }

    /// The typed value, when creating it would not duplicate an existing
    /// candidate or selected tag (compared case-insensitively).
    pub fn creatable(&self) -> Option<&str> {
        let typed = self.query.trim();
        if typed.is_empty() {
            return None;
        }
        let typed_lower = typed.to_lowercase();
        let known = self
            .options
            .iter()
            .chain(&self.selected)
            .any(|value| value.to_lowercase() == typed_lower);
        (!known).then_some(typed)
    }

    pub fn select(&mut self, value: &str) -> bool {
        let Some(tag) = value.nonblank_to_some() else {
            return false;
        };
        if self.selected.contains(&tag) {
            return false;
        }
        self.selected.push(tag);
        true
    }

    pub fn remove(&mut self, value: &str) -> bool {
        let before = self.selected.len();
        self.selected.retain(|tag| tag != value);
        self.selected.len() != before
    }

    /// Create-or-select for the typed text: an existing candidate is
    /// selected under its canonical casing, anything else is created
    /// verbatim. Clears the typed text when the selection changed.
    pub fn press_enter(&mut self) -> bool {
        let typed = self.query.trim().to_owned();
        if typed.is_empty() {
            return false;
        }
        let typed_lower = typed.to_lowercase();
        if self.selected.iter().any(|tag| tag.to_lowercase() == typed_lower) {
            return false;
        }
        let value = self
            .options
            .iter()
            .find(|option| option.to_lowercase() == typed_lower)
            .cloned()
            .unwrap_or(typed);
        let changed = self.select(&value);
        if changed {
            self.query.clear();
        }
        changed
    }

    /// Backspace in an empty text field removes the most recently added
    /// tag.
    pub fn press_backspace(&mut self) -> bool {
        if !self.query.is_empty() {
            return false;
        }
        self.selected.pop().is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn picker() -> TagPicker {
        TagPicker::new(
            ["Math", "Biology", "History"].map(String::from),
            ["Math"].map(String::from),
        )
    }

    fn assert_invariant(picker: &TagPicker) {
        let selected = picker.selected();
        for (index, tag) in selected.iter().enumerate() {
            assert!(!tag.trim().is_empty(), "blank tag selected");
            assert!(
                !selected[index + 1..].contains(tag),
                "duplicate tag selected: {tag}",
            );
        }
    }

    #[test]
    fn suggestions_exclude_selected() {
        assert_eq!(picker().suggestions(), vec!["Biology", "History"]);
    }

    #[test]
    fn suggestions_filter_case_insensitively() {
        let mut picker = picker();
        picker.set_query("bIo");
        assert_eq!(picker.suggestions(), vec!["Biology"]);
    }

    #[test]
    fn typed_new_value_is_creatable() {
        let mut picker = picker();
        picker.set_query(" Chemistry ");
        assert_eq!(picker.creatable(), Some("Chemistry"));
    }

    #[test]
    fn existing_candidate_is_not_creatable() {
        let mut picker = picker();
        picker.set_query("history");
        assert_eq!(picker.creatable(), None);
    }

    #[test]
    fn selected_value_is_not_creatable() {
        let mut picker = picker();
        picker.set_query("MATH");
        assert_eq!(picker.creatable(), None);
    }

    #[test]
    fn enter_creates_and_clears_query() {
        let mut picker = picker();
        picker.set_query("Chemistry");
        assert!(picker.press_enter());
        assert_eq!(picker.selected(), ["Math", "Chemistry"]);
        assert_eq!(picker.query(), "");
        assert_invariant(&picker);
    }

    #[test]
    fn enter_selects_canonical_casing() {
        let mut picker = picker();
        picker.set_query("biology");
        assert!(picker.press_enter());
        assert_eq!(picker.selected(), ["Math", "Biology"]);
    }

    #[test]
    fn enter_on_duplicate_is_a_no_op() {
        let mut picker = picker();
        picker.set_query("math");
        assert!(!picker.press_enter());
        assert_eq!(picker.selected(), ["Math"]);
        assert_eq!(picker.query(), "math");
    }

    #[test]
    fn backspace_removes_last_added_only_when_query_is_empty() {
        let mut picker = picker();
        picker.select("Biology");
        picker.set_query("h");
        assert!(!picker.press_backspace());
        picker.set_query("");
        assert!(picker.press_backspace());
        assert_eq!(picker.selected(), ["Math"]);
        assert!(picker.press_backspace());
        assert!(!picker.press_backspace());
        assert!(picker.selected().is_empty());
    }

    #[test]
    fn remove_drops_the_chip() {
        let mut picker = picker();
        assert!(picker.remove("Math"));
        assert!(!picker.remove("Math"));
        assert!(picker.selected().is_empty());
    }

    #[test]
    fn arbitrary_event_sequence_keeps_the_invariant() {
        let mut picker = TagPicker::new(["Alpha", "Beta"].map(String::from), []);
        for query in ["alpha", "Gamma", "", " ", "Beta", "gamma", "Alpha"] {
            picker.set_query(query);
            picker.press_enter();
            assert_invariant(&picker);
        }
        picker.set_query("");
        picker.press_backspace();
        picker.select("");
        picker.select("Beta");
        assert_invariant(&picker);
    }
}
