//! Show, edit, and append command handlers.

use anyhow::Result;
use std::path::Path;

use super::report_op;
use crate::cli::config::Config;
use crate::cli::{AppendArgs, EditArgs, ShowArgs};
use crate::interact::CommandEditor;
use crate::ops::{self, EditOutcome};
use crate::store::Store;

pub fn handle_show(args: &ShowArgs, store_path: &Path) -> Result<()> {
    let store = Store::load(store_path)?;
    match store.resolve(args.number) {
        Ok(id) => {
            if let Some(note) = store.get(id) {
                println!("{}", note.content());
            }
        }
        Err(_) => println!("Invalid note number."),
    }
    Ok(())
}

pub fn handle_append(args: &AppendArgs, store_path: &Path) -> Result<()> {
    let text = args.text.join(" ");
    if let Some(id) = report_op(ops::append(store_path, args.number, &text))? {
        println!("Appended to note {}", id.prefix());
    }
    Ok(())
}

pub fn handle_edit(args: &EditArgs, store_path: &Path, config: &Config) -> Result<()> {
    let editor = CommandEditor::new(config.editor());
    match report_op(ops::edit(store_path, args.number, &editor))? {
        Some(EditOutcome::Updated) => println!("Note updated."),
        Some(EditOutcome::Unchanged) => println!("No changes made."),
        Some(EditOutcome::Discarded) => println!("Empty note discarded."),
        None => {}
    }
    Ok(())
}
