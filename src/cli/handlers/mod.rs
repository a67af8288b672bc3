//! Command handlers for the CLI.

mod add;
mod delete;
mod list;
mod pick;
mod search;
mod show_edit;
mod tags;
mod transfer;

use anyhow::{Context, Result};

use crate::domain::Tag;
use crate::ops::{OpError, OpResult};

// Re-export public items
pub use add::handle_add;
pub use delete::{handle_del, handle_delete_all};
pub use list::handle_list;
pub use pick::handle_pick;
pub use search::handle_search;
pub use show_edit::{handle_append, handle_edit, handle_show};
pub use tags::handle_tags;
pub use transfer::{handle_backup, handle_export, handle_import, handle_restore};

/// Maps operation errors to user messages.
///
/// User-level problems (bad note number, a collaborator that failed to
/// launch) print a message and yield `None`; the invocation still exits
/// cleanly. Storage errors propagate: a corrupt or unwritable store is
/// fatal for the invocation.
pub(crate) fn report_op<T>(result: OpResult<T>) -> Result<Option<T>> {
    match result {
        Ok(v) => Ok(Some(v)),
        Err(OpError::Ordinal(_)) => {
            println!("Invalid note number.");
            Ok(None)
        }
        Err(OpError::Missing(_)) => {
            println!("Note not found.");
            Ok(None)
        }
        Err(OpError::Collaborator(e)) => {
            eprintln!("{}", e);
            Ok(None)
        }
        Err(e @ OpError::Store(_)) => Err(e.into()),
    }
}

/// Parses and validates tag arguments.
pub(crate) fn parse_tags(tag_strs: &[String]) -> Result<Vec<Tag>> {
    tag_strs
        .iter()
        .map(|s| Tag::new(s).with_context(|| format!("invalid tag '{}'", s)))
        .collect()
}
