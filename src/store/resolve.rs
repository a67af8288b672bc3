//! Ordinal resolution: 1-based display position to stable identity.

use thiserror::Error;

use crate::domain::NoteId;
use crate::store::Store;

/// The user-supplied note number is outside `[1, count]`.
#[derive(Debug, Clone, Error)]
#[error("invalid note number {ordinal}: store has {count} note(s)")]
pub struct InvalidOrdinal {
    pub ordinal: usize,
    pub count: usize,
}

impl Store {
    /// Resolves a 1-based ordinal against this snapshot's iteration order.
    ///
    /// Ordinals are transient: they are a pure function of the snapshot they
    /// were computed from, and any mutation shifts them. Resolve against a
    /// store loaded in the same operation, never one from before a prior
    /// mutation.
    pub fn resolve(&self, ordinal: usize) -> Result<&NoteId, InvalidOrdinal> {
        if ordinal < 1 || ordinal > self.len() {
            return Err(InvalidOrdinal {
                ordinal,
                count: self.len(),
            });
        }
        Ok(self.notes()[ordinal - 1].id())
    }
}
