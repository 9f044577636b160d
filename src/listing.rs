use std::collections::BTreeSet;
use std::sync::Arc;

use tokio::sync::RwLock;

use crate::data::Note;
use crate::store::NoteStore;

/// The note collection as the board displays it, with the derived filter
/// menus.
#[derive(Clone, Debug, Default)]
pub struct NoteListing {
    notes: Vec<Note>,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum EmptyState {
    /// No notes exist at all.
    NoNotes,
    /// Notes exist, but the current filters match none of them.
    NoMatches,
}

impl NoteListing {
    pub fn new(notes: Vec<Note>) -> NoteListing {
        NoteListing { notes }
    }

    pub fn notes(&self) -> &[Note] {
        &self.notes
    }

    /// Distinct subject values across every note, sorted.
    pub fn subjects(&self) -> Vec<String> {
        distinct_sorted(self.notes.iter().flat_map(|note| &note.subject))
    }

    /// Distinct person values across every note, sorted.
    pub fn people(&self) -> Vec<String> {
        distinct_sorted(self.notes.iter().flat_map(|note| &note.person))
    }

    /// Notes passing both filters. Each filter is a single tag value; an
    /// unset filter matches everything, so the two predicates are
    /// independent and commute.
    pub fn filtered(&self, subject: Option<&str>, person: Option<&str>) -> Vec<&Note> {
        self.notes
            .iter()
            .filter(|note| {
                subject.is_none_or(|value| note.subject.iter().any(|tag| tag == value))
                    && person.is_none_or(|value| note.person.iter().any(|tag| tag == value))
            })
            .collect()
    }

    pub fn empty_state(&self, visible: usize) -> Option<EmptyState> {
        if self.notes.is_empty() {
            Some(EmptyState::NoNotes)
        } else if visible == 0 {
            Some(EmptyState::NoMatches)
        } else {
            None
        }
    }
}

fn distinct_sorted<'a>(values: impl Iterator<Item = &'a String>) -> Vec<String> {
    values.cloned().collect::<BTreeSet<_>>().into_iter().collect()
}

/// The one cached copy of the listing. Reads share it until a successful
/// mutation invalidates it; the next read refetches the whole collection.
#[derive(Default)]
pub struct ListingCache {
    cached: RwLock<Option<Arc<NoteListing>>>,
}

impl ListingCache {
    pub fn new() -> ListingCache {
        ListingCache::default()
    }

    pub async fn get(&self, store: &NoteStore) -> Arc<NoteListing> {
        if let Some(listing) = self.cached.read().await.as_ref() {
            return listing.clone();
        }
        let listing = Arc::new(NoteListing::new(store.list().await));
        *self.cached.write().await = Some(listing.clone());
        listing
    }

    pub async fn invalidate(&self) {
        *self.cached.write().await = None;
    }
}
