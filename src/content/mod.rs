//! Compiled-in verse corpus.
//!
//! The store is built once per process and shared read-only. Cloning a
//! [`ContentStore`] only bumps a reference count.

mod corpus;

use crate::model::VerseEntry;
use std::sync::{Arc, OnceLock};
use tracing::debug;

/// Ordered, fixed-length sequence of verse entries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContentStore {
    entries: Arc<[VerseEntry]>,
}

static STORE: OnceLock<Arc<[VerseEntry]>> = OnceLock::new();

impl ContentStore {
    /// The bundled corpus.
    ///
    /// Built on first call; every later call returns a handle to the same
    /// entries in the same order.
    pub fn load() -> Self {
        let entries = STORE
            .get_or_init(|| {
                let entries: Arc<[VerseEntry]> = corpus::CORPUS
                    .iter()
                    .map(|&(korean, japanese, english, commentary)| {
                        VerseEntry::new(korean, japanese, english, commentary)
                    })
                    .collect();
                debug!(count = entries.len(), "Loaded bundled corpus");
                entries
            })
            .clone();
        Self { entries }
    }

    /// Store over an arbitrary entry list. Used by tests and by callers
    /// that want to browse a subset.
    pub fn from_entries(entries: Vec<VerseEntry>) -> Self {
        Self {
            entries: entries.into(),
        }
    }

    /// All entries, in canonical order.
    pub fn entries(&self) -> &[VerseEntry] {
        &self.entries
    }

    /// Shared handle to the entries, for handing to a browse session.
    pub fn shared(&self) -> Arc<[VerseEntry]> {
        Arc::clone(&self.entries)
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the store has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entry at `position`, or `None` past the end.
    pub fn get(&self, position: usize) -> Option<&VerseEntry> {
        self.entries.get(position)
    }
}
