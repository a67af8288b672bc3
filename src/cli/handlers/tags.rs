//! Tags command handler.

use anyhow::Result;
use std::collections::BTreeMap;
use std::path::Path;

use crate::cli::TagsArgs;
use crate::domain::Tag;
use crate::ops;
use crate::store::Store;

pub fn handle_tags(args: &TagsArgs, store_path: &Path) -> Result<()> {
    if args.counts {
        let store = Store::load(store_path)?;
        let mut counts: BTreeMap<Tag, usize> = BTreeMap::new();
        for note in store.iter() {
            for tag in note.tags() {
                *counts.entry(tag.clone()).or_insert(0) += 1;
            }
        }
        if counts.is_empty() {
            println!("No tags found.");
            return Ok(());
        }
        for (tag, count) in &counts {
            println!("{} ({})", tag, count);
        }
        return Ok(());
    }

    let tags = ops::all_tags(store_path)?;
    if tags.is_empty() {
        println!("No tags found.");
        return Ok(());
    }
    for tag in &tags {
        println!("{}", tag);
    }
    Ok(())
}
