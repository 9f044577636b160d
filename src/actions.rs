//! The mutation boundary. Every attempt runs validate → persist and is
//! folded into a structured result; no storage or validation failure
//! escapes past this layer.

use log::error;
use serde::Serialize;
use uuid::Uuid;

use crate::data::NotePatch;
use crate::listing::ListingCache;
use crate::store::NoteStore;
use crate::validation::{FieldErrors, FieldMap, validate_note};

#[derive(Debug, Serialize)]
pub struct ActionResult {
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub errors: Option<FieldErrors>,
}

impl ActionResult {
    fn message(message: &str) -> ActionResult {
        ActionResult { message: message.to_owned(), errors: None }
    }

    fn invalid(errors: FieldErrors, message: &str) -> ActionResult {
        ActionResult { message: message.to_owned(), errors: Some(errors) }
    }
}

pub async fn create_note(
    store: &NoteStore,
    cache: &ListingCache,
    fields: &FieldMap,
) -> ActionResult {
    let draft = match validate_note(fields) {
        Ok(draft) => draft,
        Err(errors) => {
            return ActionResult::invalid(errors, "Missing Fields. Failed to Create Note.");
        }
    };
    match store.create(draft).await {
        Ok(_) => {
            cache.invalidate().await;
            ActionResult::message("Note created successfully.")
        }
        Err(e) => {
            error!("failed to create note: {e}");
            ActionResult::message("Database Error: Failed to Create Note.")
        }
    }
}

/// `id` is bound by the caller; the form carries only the note fields.
pub async fn update_note(
    store: &NoteStore,
    cache: &ListingCache,
    id: Uuid,
    fields: &FieldMap,
) -> ActionResult {
    let draft = match validate_note(fields) {
        Ok(draft) => draft,
        Err(errors) => {
            return ActionResult::invalid(errors, "Missing Fields. Failed to Update Note.");
        }
    };
    // A vanished target is "nothing happened", not a fault.
    match store.update(id, NotePatch::from(draft)).await {
        Ok(_) => {
            cache.invalidate().await;
            ActionResult::message("Note updated successfully.")
        }
        Err(e) => {
            error!("failed to update note {id}: {e}");
            ActionResult::message("Database Error: Failed to Update Note.")
        }
    }
}

pub async fn delete_note(store: &NoteStore, cache: &ListingCache, id: Uuid) -> ActionResult {
    match store.delete(id).await {
        Ok(()) => {
            cache.invalidate().await;
            ActionResult::message("Note deleted.")
        }
        Err(e) => {
            error!("failed to delete note {id}: {e}");
            ActionResult::message("Database Error: Failed to Delete Note.")
        }
    }
}
