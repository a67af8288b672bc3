//! Interactive selection workflow: menu → picker → classify → dispatch.
//!
//! One pass per invocation: `Idle → MenuBuilt → PickerInvoked →
//! {NoSelection, SingleSelected, MultiSelected} → ActionDispatched`. The
//! menu and the identities it maps to come from a single store snapshot; no
//! mutation happens between building the menu and classifying the picker's
//! output, so the ordinals embedded in the returned lines are still valid.
//! Selected identities are captured before any action runs, which is what
//! keeps the bulk delete immune to ordinal shifts.

use std::path::Path;

use crate::cli::output::{preview, pretty_time, tag_suffix};
use crate::domain::NoteId;
use crate::ops::{self, DeleteOutcome, EditOutcome, OpResult};
use crate::store::Store;

use super::{CollaboratorError, Editor, Picker, Prompt};

/// Classified picker output.
#[derive(Debug, Clone, PartialEq)]
pub enum Selection {
    None,
    Single(NoteId),
    Multi(Vec<NoteId>),
}

/// One menu line per note: ordinal, short id, timestamp, preview, tags.
///
/// The ordinal is the leading tab-separated field; classification parses
/// it back out of whatever lines the picker returns.
pub fn build_menu(store: &Store) -> Vec<String> {
    store
        .enumerate()
        .map(|(ordinal, note)| {
            format!(
                "{}\t{}\t{}\t{}{}",
                ordinal,
                note.id().prefix(),
                pretty_time(note.created()),
                preview(note.content()),
                tag_suffix(note.tags()),
            )
        })
        .collect()
}

/// Maps returned menu lines back to identities via the same snapshot the
/// menu was built from.
pub fn classify(store: &Store, picked: &[String]) -> Result<Selection, CollaboratorError> {
    let mut ids = Vec::with_capacity(picked.len());
    for line in picked {
        let field = line.split('\t').next().unwrap_or("");
        let ordinal: usize = field
            .trim()
            .parse()
            .map_err(|_| CollaboratorError::Protocol { line: line.clone() })?;
        let id = store
            .resolve(ordinal)
            .map_err(|_| CollaboratorError::Protocol { line: line.clone() })?;
        ids.push(id.clone());
    }

    let selection = if ids.is_empty() {
        Selection::None
    } else if ids.len() == 1 {
        Selection::Single(ids.swap_remove(0))
    } else {
        Selection::Multi(ids)
    };
    Ok(selection)
}

/// Drives one full pass of the workflow against the store at `store_path`.
///
/// Picker failures (launch, protocol) are reported as a non-fatal message
/// and end the pass without mutation. Cancel paths (empty store, no
/// selection, declined confirmations) likewise mutate nothing.
pub fn run_picker(
    store_path: &Path,
    picker: &dyn Picker,
    editor: &dyn Editor,
    prompt: &mut dyn Prompt,
) -> OpResult<()> {
    // Idle -> MenuBuilt
    let store = Store::load(store_path)?;
    if store.is_empty() {
        println!("No notes to pick.");
        return Ok(());
    }
    let menu = build_menu(&store);

    // MenuBuilt -> PickerInvoked
    let picked = match picker.pick(&menu) {
        Ok(lines) => lines,
        Err(e) => {
            println!("Error using picker: {}", e);
            return Ok(());
        }
    };

    let selection = match classify(&store, &picked) {
        Ok(s) => s,
        Err(e) => {
            println!("Error using picker: {}", e);
            return Ok(());
        }
    };

    // -> ActionDispatched
    match selection {
        Selection::None => Ok(()),
        Selection::Single(id) => single_action(store_path, &store, &id, editor, prompt),
        Selection::Multi(ids) => bulk_delete(store_path, &ids, prompt),
    }
}

/// Secondary action menu for a single selected note.
fn single_action(
    store_path: &Path,
    snapshot: &Store,
    id: &NoteId,
    editor: &dyn Editor,
    prompt: &mut dyn Prompt,
) -> OpResult<()> {
    let action = prompt.line("Action? (v)iew (e)dit (a)ppend (d)elete > ");
    match action.trim().to_lowercase().as_str() {
        "v" => {
            if let Some(note) = snapshot.get(id) {
                println!("\n=== Note ===");
                println!("{}", note.content());
            }
            Ok(())
        }
        "e" => {
            match ops::edit_by_id(store_path, id, editor)? {
                EditOutcome::Updated => println!("Note updated."),
                EditOutcome::Unchanged => println!("No changes made."),
                EditOutcome::Discarded => println!("Empty note discarded."),
            }
            Ok(())
        }
        "a" => {
            let text = prompt.line("Append text: ");
            ops::append_by_id(store_path, id, &text)?;
            println!("Note updated.");
            Ok(())
        }
        "d" => {
            if let DeleteOutcome::Deleted(_) = ops::delete_by_id(store_path, id, prompt)? {
                println!("Note deleted.");
            }
            Ok(())
        }
        _ => {
            println!("Unknown action.");
            Ok(())
        }
    }
}

/// Confirmed bulk delete of every captured identity.
fn bulk_delete(store_path: &Path, ids: &[NoteId], prompt: &mut dyn Prompt) -> OpResult<()> {
    println!("Selected notes:");
    for id in ids {
        println!("- {}", id.prefix());
    }

    if !prompt.confirm("Delete all selected notes?") {
        println!("Cancelled.");
        return Ok(());
    }

    let removed = ops::delete_many(store_path, ids)?;
    println!("Deleted {} notes.", removed);
    Ok(())
}
