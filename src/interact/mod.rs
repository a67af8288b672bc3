//! Synchronous ports to external collaborators (editor, picker, terminal
//! prompts) and the interactive selection workflow built on top of them.
//!
//! Each collaborator is a trait so tests can substitute doubles that return
//! canned content instead of spawning real subprocesses.

mod editor;
mod picker;
pub(crate) mod prompt;
mod workflow;

pub use editor::{CommandEditor, Editor};
pub use picker::{CommandPicker, Picker};
pub use prompt::{Prompt, StdinPrompt};
pub use workflow::{Selection, build_menu, classify, run_picker};

use std::io;
use thiserror::Error;

/// An external collaborator process failed to launch or misbehaved.
#[derive(Debug, Error)]
pub enum CollaboratorError {
    #[error("failed to launch {name}: {source}")]
    Launch {
        name: String,
        #[source]
        source: io::Error,
    },

    #[error("{name} command is empty")]
    EmptyCommand { name: String },

    #[error("scratch file error: {source}")]
    Scratch {
        #[source]
        source: io::Error,
    },

    #[error("failed to talk to {name}: {source}")]
    Io {
        name: String,
        #[source]
        source: io::Error,
    },

    #[error("picker returned an unrecognized line: {line}")]
    Protocol { line: String },
}
