//! Note operations: each loads the store fresh, performs one logical
//! change, and persists.
//!
//! Ordinals are resolved against the snapshot loaded inside the same
//! operation, never one carried over from before a prior mutation. The
//! `*_by_id` variants serve the interactive workflow, which captures
//! identities from its menu snapshot and acts on them directly.

use std::collections::BTreeSet;
use std::path::Path;

use chrono::Utc;
use thiserror::Error;

use crate::domain::{Note, NoteId, Tag};
use crate::interact::{CollaboratorError, Editor, Prompt};
use crate::store::{InvalidOrdinal, Store, StoreError};

/// Errors surfaced by note operations.
#[derive(Debug, Error)]
pub enum OpError {
    #[error(transparent)]
    Store(#[from] StoreError),

    #[error(transparent)]
    Ordinal(#[from] InvalidOrdinal),

    #[error(transparent)]
    Collaborator(#[from] CollaboratorError),

    #[error("no note with id {0}")]
    Missing(NoteId),
}

pub type OpResult<T> = Result<T, OpError>;

/// Outcome of an edit pass through the external editor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditOutcome {
    /// Content replaced and persisted.
    Updated,
    /// Trimmed result equals the current content; nothing persisted.
    Unchanged,
    /// Result was whitespace-only; discarded, nothing persisted.
    Discarded,
}

/// Outcome of a confirmed single-note delete.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeleteOutcome {
    Deleted(NoteId),
    Declined,
}

/// Outcome of the delete-all operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WipeOutcome {
    /// Store was already empty; nothing asked, nothing done.
    Nothing,
    Declined,
    Wiped,
}

/// A note paired with its ordinal at the time of the query.
#[derive(Debug, Clone, PartialEq)]
pub struct Found {
    pub ordinal: usize,
    pub note: Note,
}

/// Creates a note from `content` with the given tags.
///
/// Whitespace-only content is discarded (`Ok(None)`), not an error;
/// nothing touches the store in that case.
pub fn create(store_path: &Path, content: &str, tags: Vec<Tag>) -> OpResult<Option<NoteId>> {
    if content.trim().is_empty() {
        return Ok(None);
    }

    let mut store = Store::load(store_path)?;
    let note = Note::new(NoteId::new(), Utc::now(), content.to_string(), tags);
    let id = note.id().clone();
    store.insert(note)?;
    store.save(store_path)?;
    Ok(Some(id))
}

/// Appends `text` on a new line to the note at `ordinal`.
pub fn append(store_path: &Path, ordinal: usize, text: &str) -> OpResult<NoteId> {
    let mut store = Store::load(store_path)?;
    let id = store.resolve(ordinal)?.clone();
    append_note(&mut store, &id, text)?;
    store.save(store_path)?;
    Ok(id)
}

/// Appends to a note addressed by identity (picker workflow).
pub fn append_by_id(store_path: &Path, id: &NoteId, text: &str) -> OpResult<()> {
    let mut store = Store::load(store_path)?;
    append_note(&mut store, id, text)?;
    store.save(store_path)?;
    Ok(())
}

fn append_note(store: &mut Store, id: &NoteId, text: &str) -> OpResult<()> {
    let note = store.get_mut(id).ok_or_else(|| OpError::Missing(id.clone()))?;
    note.append(text);
    Ok(())
}

/// Runs the editor seeded with the note's current content and applies the
/// result: unchanged-after-trim is a no-op, whitespace-only is discarded,
/// anything else replaces the content and persists.
pub fn edit(store_path: &Path, ordinal: usize, editor: &dyn Editor) -> OpResult<EditOutcome> {
    let mut store = Store::load(store_path)?;
    let id = store.resolve(ordinal)?.clone();
    edit_note(&mut store, store_path, &id, editor)
}

/// Edit addressed by identity (picker workflow).
pub fn edit_by_id(store_path: &Path, id: &NoteId, editor: &dyn Editor) -> OpResult<EditOutcome> {
    let mut store = Store::load(store_path)?;
    edit_note(&mut store, store_path, id, editor)
}

fn edit_note(
    store: &mut Store,
    store_path: &Path,
    id: &NoteId,
    editor: &dyn Editor,
) -> OpResult<EditOutcome> {
    let current = store
        .get(id)
        .ok_or_else(|| OpError::Missing(id.clone()))?
        .content()
        .to_string();

    let updated = editor.edit(&current)?;

    if updated.trim().is_empty() {
        return Ok(EditOutcome::Discarded);
    }
    if updated.trim() == current.trim() {
        return Ok(EditOutcome::Unchanged);
    }

    if let Some(note) = store.get_mut(id) {
        note.set_content(updated);
    }
    store.save(store_path)?;
    Ok(EditOutcome::Updated)
}

/// Deletes the note at `ordinal` after a yes/no confirmation.
///
/// Declining leaves the store untouched.
pub fn delete(store_path: &Path, ordinal: usize, prompt: &mut dyn Prompt) -> OpResult<DeleteOutcome> {
    let mut store = Store::load(store_path)?;
    let id = store.resolve(ordinal)?.clone();
    delete_note(&mut store, store_path, &id, prompt)
}

/// Confirmed delete addressed by identity (picker workflow).
pub fn delete_by_id(
    store_path: &Path,
    id: &NoteId,
    prompt: &mut dyn Prompt,
) -> OpResult<DeleteOutcome> {
    let mut store = Store::load(store_path)?;
    if store.get(id).is_none() {
        return Err(OpError::Missing(id.clone()));
    }
    delete_note(&mut store, store_path, id, prompt)
}

fn delete_note(
    store: &mut Store,
    store_path: &Path,
    id: &NoteId,
    prompt: &mut dyn Prompt,
) -> OpResult<DeleteOutcome> {
    if !prompt.confirm(&format!("Delete note {}?", id.prefix())) {
        return Ok(DeleteOutcome::Declined);
    }
    store.remove(id);
    store.save(store_path)?;
    Ok(DeleteOutcome::Deleted(id.clone()))
}

/// Removes every given identity and persists once.
///
/// All removals happen in memory against one snapshot, then a single save
/// makes the whole batch durable or none of it. Returns the number of
/// notes actually removed. Confirmation is the caller's job: the workflow
/// shows the selected identities before asking.
pub fn delete_many(store_path: &Path, ids: &[NoteId]) -> OpResult<usize> {
    let mut store = Store::load(store_path)?;
    let mut removed = 0;
    for id in ids {
        if store.remove(id).is_some() {
            removed += 1;
        }
    }
    store.save(store_path)?;
    Ok(removed)
}

/// Replaces the store with an empty collection after confirmation.
pub fn delete_all(store_path: &Path, prompt: &mut dyn Prompt) -> OpResult<WipeOutcome> {
    let mut store = Store::load(store_path)?;
    if store.is_empty() {
        return Ok(WipeOutcome::Nothing);
    }
    if !prompt.confirm("Are you sure you want to delete ALL notes?") {
        return Ok(WipeOutcome::Declined);
    }
    store.clear();
    store.save(store_path)?;
    Ok(WipeOutcome::Wiped)
}

/// Case-insensitive substring search over content only (tags are not
/// searched). Results keep store order and carry search-time ordinals.
pub fn search(store_path: &Path, keyword: &str) -> OpResult<Vec<Found>> {
    let store = Store::load(store_path)?;
    let needle = keyword.to_lowercase();
    Ok(store
        .enumerate()
        .filter(|(_, n)| n.content().to_lowercase().contains(&needle))
        .map(|(ordinal, n)| Found {
            ordinal,
            note: n.clone(),
        })
        .collect())
}

/// Notes carrying `tag` (exact, case-insensitive), in store order.
pub fn list_by_tag(store_path: &Path, tag: &Tag) -> OpResult<Vec<Found>> {
    let store = Store::load(store_path)?;
    Ok(store
        .enumerate()
        .filter(|(_, n)| n.has_tag(tag))
        .map(|(ordinal, n)| Found {
            ordinal,
            note: n.clone(),
        })
        .collect())
}

/// Every distinct tag across the store, sorted.
pub fn all_tags(store_path: &Path) -> OpResult<Vec<Tag>> {
    let store = Store::load(store_path)?;
    let set: BTreeSet<Tag> = store.iter().flat_map(|n| n.tags().iter().cloned()).collect();
    Ok(set.into_iter().collect())
}
