use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;
use uuid::Uuid;

use crate::store::errors::StoreError;

/// A note row as the backing table returns it. The tag columns have been
/// written in several shapes over the table's lifetime, so they arrive as
/// [`TagColumn`] and are only usable after normalization.
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct NoteRow {
    pub id: Uuid,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
    pub title: String,
    pub subject: TagColumn,
    pub person: TagColumn,
    pub description: String,
}

/// Either a native string array or a bare string (which may itself hold a
/// JSON-encoded array).
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
#[serde(untagged)]
pub enum TagColumn {
    Tags(Vec<String>),
    Text(String),
}

/// An insert payload; the table assigns `id` and `created_at`. Writes
/// always use the native array shape.
#[derive(Clone, Debug, Serialize)]
pub struct NewNoteRow {
    pub title: String,
    pub subject: Vec<String>,
    pub person: Vec<String>,
    pub description: String,
}

#[derive(Clone, Debug, Default, Serialize)]
pub struct NoteRowPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subject: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub person: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// The remote relational table holding the notes. Injected so the store
/// logic runs against anything that can select, insert, update, and
/// delete rows.
#[async_trait]
pub trait NoteTable: Send + Sync {
    /// All rows, newest first.
    async fn select_all(&self) -> Result<Vec<NoteRow>, StoreError>;

    async fn insert(&self, row: NewNoteRow) -> Result<NoteRow, StoreError>;

    /// `Ok(None)` when no row matches `id`.
    async fn update(&self, id: Uuid, patch: NoteRowPatch) -> Result<Option<NoteRow>, StoreError>;

    /// Deleting an absent row is not an error.
    async fn delete(&self, id: Uuid) -> Result<(), StoreError>;
}
