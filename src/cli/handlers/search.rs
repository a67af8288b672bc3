//! Search command handler.

use anyhow::Result;
use std::path::Path;

use crate::cli::SearchArgs;
use crate::cli::output::{preview, pretty_time, tag_suffix};
use crate::ops;

pub fn handle_search(args: &SearchArgs, store_path: &Path) -> Result<()> {
    let keyword = args.keyword.join(" ");
    let found = ops::search(store_path, &keyword)?;

    if found.is_empty() {
        println!("No notes found containing '{}'.", keyword);
        return Ok(());
    }

    for f in &found {
        println!(
            "{}\t{}\t{}\t{}{}",
            f.ordinal,
            f.note.id().prefix(),
            pretty_time(f.note.created()),
            preview(f.note.content()),
            tag_suffix(f.note.tags()),
        );
    }
    Ok(())
}
