use serde::Serialize;
use time::OffsetDateTime;
use uuid::Uuid;

/// A saved note. `subject` and `person` carry set semantics: trimmed,
/// non-empty, no duplicates, insertion order preserved.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Note {
    pub id: Uuid,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
    pub title: String,
    pub subject: Vec<String>,
    pub person: Vec<String>,
    pub description: String,
}

/// A validated note payload, shared by the create and update paths.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct NoteDraft {
    pub title: String,
    pub subject: Vec<String>,
    pub person: Vec<String>,
    pub description: String,
}

/// A partial update; `None` fields are left untouched.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct NotePatch {
    pub title: Option<String>,
    pub subject: Option<Vec<String>>,
    pub person: Option<Vec<String>>,
    pub description: Option<String>,
}

impl From<NoteDraft> for NotePatch {
    fn from(draft: NoteDraft) -> Self {
        NotePatch {
            title: Some(draft.title),
            subject: Some(draft.subject),
            person: Some(draft.person),
            description: Some(draft.description),
        }
    }
}
