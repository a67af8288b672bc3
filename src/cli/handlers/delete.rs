//! Delete command handlers (single note and delete-all).

use anyhow::Result;
use std::path::Path;

use super::report_op;
use crate::cli::DelArgs;
use crate::interact::StdinPrompt;
use crate::ops::{self, DeleteOutcome, WipeOutcome};

pub fn handle_del(args: &DelArgs, store_path: &Path) -> Result<()> {
    let mut prompt = StdinPrompt::new();
    match report_op(ops::delete(store_path, args.number, &mut prompt))? {
        Some(DeleteOutcome::Deleted(id)) => println!("Deleted note {}", id.prefix()),
        Some(DeleteOutcome::Declined) => println!("Cancelled."),
        None => {}
    }
    Ok(())
}

pub fn handle_delete_all(store_path: &Path) -> Result<()> {
    let mut prompt = StdinPrompt::new();
    match report_op(ops::delete_all(store_path, &mut prompt))? {
        Some(WipeOutcome::Nothing) => println!("No notes to delete."),
        Some(WipeOutcome::Declined) => println!("Cancelled."),
        Some(WipeOutcome::Wiped) => println!("All notes deleted."),
        None => {}
    }
    Ok(())
}
