use std::sync::atomic::{AtomicBool, AtomicI64, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use jotter::store::{NewNoteRow, NoteRow, NoteRowPatch, NoteTable, StoreError, TagColumn};
use time::macros::datetime;
use time::{Duration, OffsetDateTime};
use uuid::Uuid;

/// An in-memory stand-in for the remote notes table. Clones share state,
/// so a test can keep a handle for inspection and failure injection while
/// the application owns another.
#[derive(Clone, Default)]
pub struct MockNoteTable {
    state: Arc<MockState>,
}

#[derive(Default)]
struct MockState {
    rows: Mutex<Vec<NoteRow>>,
    inserted: AtomicI64,
    fail_select: AtomicBool,
    fail_insert: AtomicBool,
    fail_update: AtomicBool,
    fail_delete: AtomicBool,
}

impl MockNoteTable {
    pub fn new() -> MockNoteTable {
        MockNoteTable::default()
    }

    pub fn with_rows(rows: Vec<NoteRow>) -> MockNoteTable {
        let table = MockNoteTable::new();
        *table.state.rows.lock().expect("mock table lock") = rows;
        table
    }

    pub fn rows(&self) -> Vec<NoteRow> {
        self.state.rows.lock().expect("mock table lock").clone()
    }

    pub fn fail_select(&self, fail: bool) {
        self.state.fail_select.store(fail, Ordering::Relaxed);
    }

    pub fn fail_insert(&self, fail: bool) {
        self.state.fail_insert.store(fail, Ordering::Relaxed);
    }

    pub fn fail_update(&self, fail: bool) {
        self.state.fail_update.store(fail, Ordering::Relaxed);
    }

    pub fn fail_delete(&self, fail: bool) {
        self.state.fail_delete.store(fail, Ordering::Relaxed);
    }

    // Later inserts get later timestamps, deterministically.
    fn next_created_at(&self) -> OffsetDateTime {
        let n = self.state.inserted.fetch_add(1, Ordering::Relaxed);
        datetime!(2024-01-01 00:00 UTC) + Duration::minutes(n)
    }
}

fn injected(operation: &str) -> StoreError {
    StoreError::Backend {
        status: 500,
        body: format!("injected {operation} failure"),
    }
}

#[async_trait]
impl NoteTable for MockNoteTable {
    async fn select_all(&self) -> Result<Vec<NoteRow>, StoreError> {
        if self.state.fail_select.load(Ordering::Relaxed) {
            return Err(injected("select"));
        }
        Ok(self.rows())
    }

    async fn insert(&self, row: NewNoteRow) -> Result<NoteRow, StoreError> {
        if self.state.fail_insert.load(Ordering::Relaxed) {
            return Err(injected("insert"));
        }
        let stored = NoteRow {
            id: Uuid::new_v4(),
            created_at: self.next_created_at(),
            title: row.title,
            subject: TagColumn::Tags(row.subject),
            person: TagColumn::Tags(row.person),
            description: row.description,
        };
        self.state.rows.lock().expect("mock table lock").push(stored.clone());
        Ok(stored)
    }

    async fn update(&self, id: Uuid, patch: NoteRowPatch) -> Result<Option<NoteRow>, StoreError> {
        if self.state.fail_update.load(Ordering::Relaxed) {
            return Err(injected("update"));
        }
        let mut rows = self.state.rows.lock().expect("mock table lock");
        let Some(row) = rows.iter_mut().find(|row| row.id == id) else {
            return Ok(None);
        };
        if let Some(title) = patch.title {
            row.title = title;
        }
        if let Some(subject) = patch.subject {
            row.subject = TagColumn::Tags(subject);
        }
        if let Some(person) = patch.person {
            row.person = TagColumn::Tags(person);
        }
        if let Some(description) = patch.description {
            row.description = description;
        }
        Ok(Some(row.clone()))
    }

    async fn delete(&self, id: Uuid) -> Result<(), StoreError> {
        if self.state.fail_delete.load(Ordering::Relaxed) {
            return Err(injected("delete"));
        }
        self.state.rows.lock().expect("mock table lock").retain(|row| row.id != id);
        Ok(())
    }
}
