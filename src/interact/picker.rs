//! External fuzzy-finder port: menu lines in, selected lines out.

use std::io::Write as IoWrite;
use std::process::{Command, Stdio};

use super::CollaboratorError;

/// Synchronous picker collaborator.
///
/// Receives a line-oriented menu and returns the selected lines in the
/// order the picker emitted them. An empty vec means "no selection"
/// (cancel); it is not an error.
pub trait Picker {
    fn pick(&self, lines: &[String]) -> Result<Vec<String>, CollaboratorError>;
}

/// Pipes the menu through an external picker process (fzf by default).
///
/// The menu is written newline-joined to the child's stdin and selections
/// are captured from its stdout; stderr is inherited so fzf can draw its
/// interface. Non-zero exit or empty output is a cancel.
#[derive(Debug)]
pub struct CommandPicker {
    program: String,
    args: Vec<String>,
}

impl CommandPicker {
    /// The default picker: `fzf` with multi-selection enabled.
    pub fn fzf() -> Self {
        Self {
            program: "fzf".to_string(),
            args: vec![
                "--multi".to_string(),
                "--prompt=Select note(s): ".to_string(),
            ],
        }
    }

    /// Builds a picker from a whitespace-split command string
    /// (config `picker` key or `$JOT_PICKER`).
    pub fn from_command(command: &str) -> Result<Self, CollaboratorError> {
        let mut parts = command.split_whitespace().map(str::to_string);
        let Some(program) = parts.next() else {
            return Err(CollaboratorError::EmptyCommand {
                name: "picker".to_string(),
            });
        };
        Ok(Self {
            program,
            args: parts.collect(),
        })
    }
}

impl Picker for CommandPicker {
    fn pick(&self, lines: &[String]) -> Result<Vec<String>, CollaboratorError> {
        let name = || format!("picker '{}'", self.program);

        let mut child = Command::new(&self.program)
            .args(&self.args)
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .spawn()
            .map_err(|e| CollaboratorError::Launch {
                name: name(),
                source: e,
            })?;

        if let Some(mut stdin) = child.stdin.take() {
            let menu = lines.join("\n");
            // The picker may exit before reading everything (query match on
            // --select-1 style flags); a broken pipe here is not an error.
            let _ = stdin.write_all(menu.as_bytes());
        }

        let output = child
            .wait_with_output()
            .map_err(|e| CollaboratorError::Io {
                name: name(),
                source: e,
            })?;

        let stdout = String::from_utf8_lossy(&output.stdout);
        if !output.status.success() || stdout.trim().is_empty() {
            return Ok(Vec::new());
        }

        Ok(stdout
            .trim()
            .lines()
            .map(|l| l.to_string())
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn menu() -> Vec<String> {
        vec!["1\tfirst".to_string(), "2\tsecond".to_string()]
    }

    #[test]
    fn head_as_picker_selects_first_line() {
        let picker = CommandPicker::from_command("head -n1").unwrap();
        let picked = picker.pick(&menu()).unwrap();
        assert_eq!(picked, vec!["1\tfirst".to_string()]);
    }

    #[test]
    fn cat_as_picker_selects_everything() {
        let picker = CommandPicker::from_command("cat").unwrap();
        let picked = picker.pick(&menu()).unwrap();
        assert_eq!(picked.len(), 2);
    }

    #[test]
    fn nonzero_exit_means_no_selection() {
        let picker = CommandPicker::from_command("false").unwrap();
        assert!(picker.pick(&menu()).unwrap().is_empty());
    }

    #[test]
    fn empty_output_means_no_selection() {
        let picker = CommandPicker::from_command("true").unwrap();
        assert!(picker.pick(&menu()).unwrap().is_empty());
    }

    #[test]
    fn missing_binary_is_a_launch_error() {
        let picker = CommandPicker::from_command("no-such-picker-binary").unwrap();
        assert!(matches!(
            picker.pick(&menu()).unwrap_err(),
            CollaboratorError::Launch { .. }
        ));
    }

    #[test]
    fn empty_command_is_rejected() {
        assert!(matches!(
            CommandPicker::from_command("  ").unwrap_err(),
            CollaboratorError::EmptyCommand { .. }
        ));
    }
}
