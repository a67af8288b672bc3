//! Backup, restore, export, and import handlers.
//!
//! Backup and restore are raw copies of the store file; export and import
//! move a single note's content through a plain text file. None of these
//! merge anything.

use anyhow::{Context, Result, bail};
use std::path::Path;

use super::{parse_tags, report_op};
use crate::cli::{BackupArgs, ExportArgs, ImportArgs, RestoreArgs};
use crate::interact::{Prompt, StdinPrompt};
use crate::ops;
use crate::store::Store;

pub fn handle_backup(args: &BackupArgs, store_path: &Path) -> Result<()> {
    if !store_path.exists() {
        println!("No notes yet.");
        return Ok(());
    }
    std::fs::copy(store_path, &args.path)
        .with_context(|| format!("failed to back up store to {}", args.path.display()))?;
    println!("Backed up store to {}", args.path.display());
    Ok(())
}

pub fn handle_restore(args: &RestoreArgs, store_path: &Path) -> Result<()> {
    if !args.path.exists() {
        bail!("backup file not found: {}", args.path.display());
    }

    // Parse before copying so a corrupt file can't replace the live store.
    Store::load(&args.path)
        .with_context(|| format!("{} is not a valid store file", args.path.display()))?;

    let mut prompt = StdinPrompt::new();
    if !prompt.confirm(&format!(
        "Overwrite current store with {}?",
        args.path.display()
    )) {
        println!("Cancelled.");
        return Ok(());
    }

    std::fs::copy(&args.path, store_path)
        .with_context(|| format!("failed to restore store from {}", args.path.display()))?;
    println!("Store restored from {}", args.path.display());
    Ok(())
}

pub fn handle_export(args: &ExportArgs, store_path: &Path) -> Result<()> {
    let store = Store::load(store_path)?;
    let id = match store.resolve(args.number) {
        Ok(id) => id,
        Err(_) => {
            println!("Invalid note number.");
            return Ok(());
        }
    };

    // Content only; tags and timestamp stay behind.
    if let Some(note) = store.get(id) {
        std::fs::write(&args.path, note.content())
            .with_context(|| format!("failed to write {}", args.path.display()))?;
        println!("Exported note {} to {}", id.prefix(), args.path.display());
    }
    Ok(())
}

pub fn handle_import(args: &ImportArgs, store_path: &Path) -> Result<()> {
    let content = std::fs::read_to_string(&args.path)
        .with_context(|| format!("failed to read {}", args.path.display()))?;

    let tag_strs = if args.tags.is_empty() {
        let mut prompt = StdinPrompt::new();
        let line = prompt.line("Tags (space separated, empty for none): ");
        line.split_whitespace().map(String::from).collect()
    } else {
        args.tags.clone()
    };
    let tags = parse_tags(&tag_strs)?;

    match report_op(ops::create(store_path, &content, tags))? {
        Some(Some(id)) => println!("Note saved with ID {}", id.prefix()),
        Some(None) => println!("Empty note discarded."),
        None => {}
    }
    Ok(())
}
