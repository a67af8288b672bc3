//! External editor port: seed a scratch file, block on the editor, read back.

use std::io::Write as IoWrite;
use std::process::Command;
use tempfile::NamedTempFile;

use super::CollaboratorError;

/// Synchronous editing collaborator.
///
/// Given existing content as a seed, yields the edited text once the
/// external process exits. Callers decide what to do with the result
/// (whitespace-only comparison, empty-content discard).
pub trait Editor {
    fn edit(&self, seed: &str) -> Result<String, CollaboratorError>;
}

/// Runs the configured editor command on a temporary scratch file.
///
/// The command string is split on whitespace, so args like `code --wait`
/// work. The scratch file is removed when this call returns, whatever the
/// outcome. A non-zero editor exit is best-effort: whatever the scratch
/// file holds at that point is still read back.
pub struct CommandEditor {
    command: String,
}

impl CommandEditor {
    pub fn new(command: impl Into<String>) -> Self {
        Self {
            command: command.into(),
        }
    }
}

impl Editor for CommandEditor {
    fn edit(&self, seed: &str) -> Result<String, CollaboratorError> {
        let parts: Vec<&str> = self.command.split_whitespace().collect();
        let Some((cmd, args)) = parts.split_first() else {
            return Err(CollaboratorError::EmptyCommand {
                name: "editor".to_string(),
            });
        };

        // Scratch file lives until the end of this call; drop removes it.
        let mut scratch =
            NamedTempFile::new().map_err(|e| CollaboratorError::Scratch { source: e })?;
        scratch
            .write_all(seed.as_bytes())
            .and_then(|_| scratch.flush())
            .map_err(|e| CollaboratorError::Scratch { source: e })?;

        let status = Command::new(cmd)
            .args(args)
            .arg(scratch.path())
            .status()
            .map_err(|e| CollaboratorError::Launch {
                name: format!("editor '{}'", self.command),
                source: e,
            })?;

        if !status.success() {
            eprintln!("editor '{}' exited with non-zero status", self.command);
        }

        std::fs::read_to_string(scratch.path())
            .map_err(|e| CollaboratorError::Scratch { source: e })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn noop_editor_returns_seed_unchanged() {
        // `true` exits immediately without touching the file.
        let editor = CommandEditor::new("true");
        let out = editor.edit("seed content\n").unwrap();
        assert_eq!(out, "seed content\n");
    }

    #[test]
    fn failing_editor_still_reads_back_scratch() {
        // `false` exits non-zero; the seed must still come back.
        let editor = CommandEditor::new("false");
        let out = editor.edit("kept despite failure").unwrap();
        assert_eq!(out, "kept despite failure");
    }

    #[test]
    fn missing_binary_is_a_launch_error() {
        let editor = CommandEditor::new("definitely-not-a-real-editor-binary");
        let err = editor.edit("x").unwrap_err();
        assert!(matches!(err, CollaboratorError::Launch { .. }));
    }

    #[test]
    fn empty_command_is_rejected() {
        let editor = CommandEditor::new("   ");
        let err = editor.edit("x").unwrap_err();
        assert!(matches!(err, CollaboratorError::EmptyCommand { .. }));
    }
}
