use log::error;
use uuid::Uuid;

use crate::data::{Note, NoteDraft, NotePatch};
use crate::store::errors::StoreError;
use crate::store::io_trait::{NewNoteRow, NoteRow, NoteRowPatch, NoteTable};
use crate::tags::normalize_column;

/// CRUD over the persisted note collection. Tag normalization happens
/// here, at the read edge; everything downstream sees canonical notes
/// only.
pub struct NoteStore {
    table: Box<dyn NoteTable>,
}

impl NoteStore {
    pub fn new(table: Box<dyn NoteTable>) -> NoteStore {
        NoteStore { table }
    }

    /// Every note, newest first. A failing backing query degrades to an
    /// empty collection so the board stays available; the cause is
    /// logged.
    pub async fn list(&self) -> Vec<Note> {
        match self.fetch_all().await {
            Ok(notes) => notes,
            Err(e) => {
                error!("failed to load notes: {e}");
                Vec::new()
            }
        }
    }

    pub async fn fetch_all(&self) -> Result<Vec<Note>, StoreError> {
        let rows = self.table.select_all().await?;
        let mut notes: Vec<Note> = rows.into_iter().map(note_from_row).collect();
        notes.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(notes)
    }

    pub async fn create(&self, draft: NoteDraft) -> Result<Note, StoreError> {
        let row = self
            .table
            .insert(NewNoteRow {
                title: draft.title,
                subject: draft.subject,
                person: draft.person,
                description: draft.description,
            })
            .await?;
        Ok(note_from_row(row))
    }

    /// Patches only the supplied fields; `Ok(None)` when no row matches.
    pub async fn update(&self, id: Uuid, patch: NotePatch) -> Result<Option<Note>, StoreError> {
        let row = self
            .table
            .update(
                id,
                NoteRowPatch {
                    title: patch.title,
                    subject: patch.subject,
                    person: patch.person,
                    description: patch.description,
                },
            )
            .await?;
        Ok(row.map(note_from_row))
    }

    pub async fn delete(&self, id: Uuid) -> Result<(), StoreError> {
        self.table.delete(id).await
    }
}

fn note_from_row(row: NoteRow) -> Note {
    Note {
        id: row.id,
        created_at: row.created_at,
        title: row.title,
        subject: normalize_column(row.subject),
        person: normalize_column(row.person),
        description: row.description,
    }
}
