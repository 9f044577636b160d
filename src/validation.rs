use std::collections::{BTreeMap, HashMap};

use crate::data::NoteDraft;
use crate::tags::normalize_tags;
use crate::util::StrExt;

/// Field name to one or more human-readable messages. Kept per field so
/// callers can attach errors next to the offending input.
pub type FieldErrors = BTreeMap<String, Vec<String>>;

/// A submitted form, as a plain field-name to values mapping. Fields like
/// `subject` legitimately carry several values.
#[derive(Clone, Debug, Default)]
pub struct FieldMap(HashMap<String, Vec<String>>);

impl FieldMap {
    pub fn new() -> FieldMap {
        FieldMap::default()
    }

    pub fn push(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.0.entry(name.into()).or_default().push(value.into());
    }

    pub fn first(&self, name: &str) -> Option<&str> {
        self.0.get(name).and_then(|values| values.first()).map(String::as_str)
    }

    pub fn all(&self, name: &str) -> &[String] {
        self.0.get(name).map(Vec::as_slice).unwrap_or_default()
    }
}

/// Checks a submitted payload against the note schema. Runs identically for
/// create and update.
pub fn validate_note(fields: &FieldMap) -> Result<NoteDraft, FieldErrors> {
    let mut errors = FieldErrors::new();

    let title = fields.first("title").and_then(|value| value.nonblank_to_some());
    if title.is_none() {
        add_error(&mut errors, "title", "Title is required.");
    }

    let subject = normalize_tags(fields.all("subject").to_vec());
    if subject.is_empty() {
        add_error(&mut errors, "subject", "At least one subject is required.");
    }

    let person = normalize_tags(fields.all("person").to_vec());
    if person.is_empty() {
        add_error(&mut errors, "person", "At least one person is required.");
    }

    let description = fields.first("description").and_then(|value| value.nonblank_to_some());
    if description.is_none() {
        add_error(&mut errors, "description", "Description is required.");
    }

    if !errors.is_empty() {
        return Err(errors);
    }
    Ok(NoteDraft {
        title: title.unwrap_or_default(),
        subject,
        person,
        description: description.unwrap_or_default(),
    })
}

fn add_error(errors: &mut FieldErrors, field: &str, message: &str) {
    errors.entry(field.to_owned()).or_default().push(message.to_owned());
}
