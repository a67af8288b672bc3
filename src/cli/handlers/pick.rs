//! Interactive picker entry point (no subcommand given).

use anyhow::Result;
use std::path::Path;

use super::report_op;
use crate::cli::config::Config;
use crate::interact::{CommandEditor, CommandPicker, StdinPrompt, run_picker};

pub fn handle_pick(store_path: &Path, config: &Config) -> Result<()> {
    let picker = match config.picker() {
        Some(cmd) => match CommandPicker::from_command(&cmd) {
            Ok(p) => p,
            Err(e) => {
                eprintln!("{}", e);
                return Ok(());
            }
        },
        None => CommandPicker::fzf(),
    };

    let editor = CommandEditor::new(config.editor());
    let mut prompt = StdinPrompt::new();

    report_op(run_picker(store_path, &picker, &editor, &mut prompt))?;
    Ok(())
}
