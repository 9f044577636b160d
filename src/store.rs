mod http;
mod internal;
mod io_trait;

pub mod errors;

pub use errors::StoreError;
pub use http::HttpNoteTable;
pub use internal::NoteStore;
pub use io_trait::{NewNoteRow, NoteRow, NoteRowPatch, NoteTable, TagColumn};
