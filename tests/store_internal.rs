use test_utils::{MockNoteTable, heterogeneous_rows};

use jotter::data::{NoteDraft, NotePatch};
use jotter::store::{NoteStore, StoreError};
use uuid::Uuid;

fn store_with(table: MockNoteTable) -> NoteStore {
    NoteStore::new(Box::new(table))
}

fn draft() -> NoteDraft {
    NoteDraft {
        title: "Meeting with a client".to_owned(),
        subject: vec!["Math".to_owned(), "Bio".to_owned()],
        person: vec!["Al".to_owned()],
        description: "Prepare the presentation.".to_owned(),
    }
}

#[tokio::test]
async fn list_normalizes_every_persisted_tag_shape() {
    let store = store_with(MockNoteTable::with_rows(heterogeneous_rows()));
    let notes = store.list().await;
    assert_eq!(notes.len(), 3);
    // newest first; the oldest row held the native-array shape
    assert_eq!(notes[2].subject, vec!["Project Alpha"]);
    assert_eq!(notes[2].person, vec!["John Doe"]);
    assert_eq!(notes[1].subject, vec!["New Marketing Campaign", "Q4"]);
    assert_eq!(notes[1].person, vec!["Jane Smith"]);
    assert_eq!(notes[0].subject, vec!["Regular Check-up"]);
    assert_eq!(notes[0].person, vec!["Dr. Adams"]);
}

#[tokio::test]
async fn list_sorts_by_creation_time_descending() {
    let store = store_with(MockNoteTable::with_rows(heterogeneous_rows()));
    let notes = store.list().await;
    for pair in notes.windows(2) {
        assert!(pair[0].created_at >= pair[1].created_at);
    }
}

#[tokio::test]
async fn list_degrades_to_empty_on_select_failure() {
    let table = MockNoteTable::with_rows(heterogeneous_rows());
    table.fail_select(true);
    let store = store_with(table);
    assert!(store.list().await.is_empty());
}

#[tokio::test]
async fn fetch_all_reports_the_backing_failure() {
    let table = MockNoteTable::new();
    table.fail_select(true);
    let store = store_with(table);
    let err = store.fetch_all().await.expect_err("should fail");
    assert!(matches!(err, StoreError::Backend { .. }), "wrong error type: {err:#?}");
}

#[tokio::test]
async fn create_returns_the_normalized_note() {
    let table = MockNoteTable::new();
    let store = store_with(table.clone());
    let note = store.create(draft()).await.expect("create failed");
    assert_eq!(note.title, "Meeting with a client");
    assert_eq!(note.subject, vec!["Math", "Bio"]);
    assert_eq!(table.rows().len(), 1);
    assert_eq!(table.rows()[0].id, note.id);
}

#[tokio::test]
async fn create_failure_propagates() {
    let table = MockNoteTable::new();
    table.fail_insert(true);
    let store = store_with(table.clone());
    let err = store.create(draft()).await.expect_err("should fail");
    assert!(matches!(err, StoreError::Backend { .. }), "wrong error type: {err:#?}");
    assert!(table.rows().is_empty());
}

#[tokio::test]
async fn update_patches_only_supplied_fields() {
    let table = MockNoteTable::new();
    let store = store_with(table);
    let created = store.create(draft()).await.expect("create failed");

    let patch = NotePatch {
        description: Some("Rescheduled.".to_owned()),
        ..NotePatch::default()
    };
    let updated = store
        .update(created.id, patch)
        .await
        .expect("update failed")
        .expect("note should exist");

    assert_eq!(updated.id, created.id);
    assert_eq!(updated.created_at, created.created_at);
    assert_eq!(updated.title, created.title);
    assert_eq!(updated.subject, created.subject);
    assert_eq!(updated.description, "Rescheduled.");
}

#[tokio::test]
async fn update_of_a_missing_row_reports_none() {
    let store = store_with(MockNoteTable::new());
    let outcome = store
        .update(Uuid::from_u128(7), NotePatch::default())
        .await
        .expect("update should not fail");
    assert!(outcome.is_none());
}

#[tokio::test]
async fn delete_is_idempotent() {
    let table = MockNoteTable::new();
    let store = store_with(table.clone());
    let note = store.create(draft()).await.expect("create failed");

    store.delete(note.id).await.expect("first delete failed");
    store.delete(note.id).await.expect("second delete should also succeed");
    assert!(table.rows().is_empty());
}
