//! List command handler.

use anyhow::{Context, Result};
use std::path::Path;

use crate::cli::ListArgs;
use crate::cli::output::{preview, pretty_time, tag_suffix};
use crate::domain::{Note, Tag};
use crate::ops;
use crate::store::Store;

pub fn handle_list(args: &ListArgs, store_path: &Path) -> Result<()> {
    if let Some(tag_str) = &args.tag {
        let tag = Tag::new(tag_str).with_context(|| format!("invalid tag '{}'", tag_str))?;
        let found = ops::list_by_tag(store_path, &tag)?;
        if found.is_empty() {
            println!("No notes tagged '{}'.", tag);
            return Ok(());
        }
        for f in &found {
            print_listing(args.all, f.ordinal, &f.note);
        }
        return Ok(());
    }

    let store = Store::load(store_path)?;
    if store.is_empty() {
        println!("No notes yet.");
        return Ok(());
    }
    for (ordinal, note) in store.enumerate() {
        print_listing(args.all, ordinal, note);
    }
    Ok(())
}

fn print_listing(all_info: bool, ordinal: usize, note: &Note) {
    let dt = pretty_time(note.created());
    let snippet = format!("{}{}", preview(note.content()), tag_suffix(note.tags()));
    if all_info {
        println!("{}\t{}\t{}\t{}", ordinal, note.id(), dt, snippet);
    } else {
        println!("{}\t{}\t{}", ordinal, dt, snippet);
    }
}
