//! Persisted note collection, loaded and saved wholesale per operation.

mod resolve;

pub use resolve::InvalidOrdinal;

use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::domain::{Note, NoteId};

/// Errors from loading or persisting the store file.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("store file {path} is corrupt: {source}")]
    Corrupt {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to read store file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to write store file {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to encode store: {source}")]
    Encode {
        #[source]
        source: serde_json::Error,
    },

    #[error("duplicate note id: {0}")]
    DuplicateId(NoteId),
}

/// The full note collection, in insertion order.
///
/// Insertion order is the canonical ordinal order for every listing and
/// resolution operation; it is never re-sorted. The store is persisted as a
/// JSON array of records, one per identity; the array preserves order across
/// load/save round trips, and `load`/`insert` together keep the identities
/// unique. There is no long-lived in-memory store: callers load at the start
/// of an operation and save at the end of a mutating one.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Store {
    notes: Vec<Note>,
}

impl Store {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads the store from `path`.
    ///
    /// A missing file is an empty store (the file is created lazily by the
    /// first save). A file that exists but cannot be parsed is fatal for the
    /// invocation: no silent recovery is attempted. A file that parses but
    /// repeats an identity is rejected the same way: every record goes
    /// through [`insert`](Store::insert), so the unique-id invariant holds
    /// for hand-edited and restored files too.
    pub fn load(path: &Path) -> Result<Self, StoreError> {
        let contents = match std::fs::read_to_string(path) {
            Ok(c) => c,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(Self::new()),
            Err(e) => {
                return Err(StoreError::Read {
                    path: path.to_path_buf(),
                    source: e,
                });
            }
        };

        let records: Vec<Note> =
            serde_json::from_str(&contents).map_err(|e| StoreError::Corrupt {
                path: path.to_path_buf(),
                source: e,
            })?;

        let mut store = Self::new();
        for note in records {
            store.insert(note)?;
        }
        Ok(store)
    }

    /// Writes the full collection back to `path`, replacing prior contents.
    ///
    /// Whole-file replace; last writer wins.
    pub fn save(&self, path: &Path) -> Result<(), StoreError> {
        let json = serde_json::to_string_pretty(&self.notes)
            .map_err(|e| StoreError::Encode { source: e })?;

        std::fs::write(path, json).map_err(|e| StoreError::Write {
            path: path.to_path_buf(),
            source: e,
        })
    }

    /// Appends a note at the end of the insertion order.
    ///
    /// ULID identities make collisions negligible, but a duplicate id is
    /// rejected rather than silently overwriting an existing note.
    pub fn insert(&mut self, note: Note) -> Result<(), StoreError> {
        if self.get(note.id()).is_some() {
            return Err(StoreError::DuplicateId(note.id().clone()));
        }
        self.notes.push(note);
        Ok(())
    }

    pub fn get(&self, id: &NoteId) -> Option<&Note> {
        self.notes.iter().find(|n| n.id() == id)
    }

    pub fn get_mut(&mut self, id: &NoteId) -> Option<&mut Note> {
        self.notes.iter_mut().find(|n| n.id() == id)
    }

    /// Removes the note with the given identity, if present.
    pub fn remove(&mut self, id: &NoteId) -> Option<Note> {
        let pos = self.notes.iter().position(|n| n.id() == id)?;
        Some(self.notes.remove(pos))
    }

    /// Drops every note.
    pub fn clear(&mut self) {
        self.notes.clear();
    }

    /// Notes in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &Note> {
        self.notes.iter()
    }

    /// Notes paired with their current 1-based ordinals.
    pub fn enumerate(&self) -> impl Iterator<Item = (usize, &Note)> {
        self.notes.iter().enumerate().map(|(i, n)| (i + 1, n))
    }

    pub fn len(&self) -> usize {
        self.notes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.notes.is_empty()
    }

    pub(crate) fn notes(&self) -> &[Note] {
        &self.notes
    }
}
