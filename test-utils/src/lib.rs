mod data;
mod mock;

pub use data::{heterogeneous_rows, note_fields, note_form_body};
pub use mock::MockNoteTable;
