//! Add command handler: inline text or editor-composed notes.

use anyhow::Result;
use std::path::Path;

use super::{parse_tags, report_op};
use crate::cli::AddArgs;
use crate::cli::config::Config;
use crate::interact::{CommandEditor, Editor};
use crate::ops;

pub fn handle_add(args: &AddArgs, store_path: &Path, config: &Config) -> Result<()> {
    let tags = parse_tags(&args.tags)?;

    let content = if args.text.is_empty() {
        // No text on the command line: compose in the editor, seeded empty.
        let editor = CommandEditor::new(config.editor());
        match editor.edit("") {
            Ok(content) => content,
            Err(e) => {
                eprintln!("{}", e);
                return Ok(());
            }
        }
    } else {
        args.text.join(" ")
    };

    match report_op(ops::create(store_path, &content, tags))? {
        Some(Some(id)) => println!("Note saved with ID {}", id.prefix()),
        Some(None) => println!("Empty note discarded."),
        None => {}
    }
    Ok(())
}
