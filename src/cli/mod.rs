//! CLI command definitions and handlers

pub mod config;
pub mod handlers;
pub mod output;

use clap::{ArgAction, Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

/// jot - a fast terminal note-taking tool
#[derive(Parser, Debug)]
#[command(name = "jot", version, about, long_about = None)]
pub struct Cli {
    /// Store file (overrides config file and the default ~/.jot.json)
    #[arg(short = 's', long, global = true)]
    pub store: Option<PathBuf>,

    /// With no command, launch the interactive picker
    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Add a note from arguments, or from your editor with no TEXT
    Add(AddArgs),

    /// List notes (number, timestamp, snippet)
    #[command(name = "ls")]
    List(ListArgs),

    /// Show a note's full content
    Show(ShowArgs),

    /// Delete a note by number (asks for confirmation)
    Del(DelArgs),

    /// Append text to an existing note
    Append(AppendArgs),

    /// Edit a note in your editor
    Edit(EditArgs),

    /// Search note contents for a keyword
    Search(SearchArgs),

    /// List all tags
    Tags(TagsArgs),

    /// Delete ALL notes (asks for confirmation)
    DeleteAll,

    /// Copy the store file to a backup path
    Backup(BackupArgs),

    /// Replace the store file from a backup (asks for confirmation)
    Restore(RestoreArgs),

    /// Write one note's content to a text file
    Export(ExportArgs),

    /// Create a note from a text file's contents
    Import(ImportArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

/// Arguments for the `add` command
#[derive(Parser, Debug)]
pub struct AddArgs {
    /// Note text; joined with spaces. Omit to compose in your editor.
    pub text: Vec<String>,

    /// Tag for the note (can be specified multiple times)
    #[arg(short, long = "tag", action = ArgAction::Append)]
    pub tags: Vec<String>,
}

/// Arguments for the `ls` (list) command
#[derive(Parser, Debug)]
pub struct ListArgs {
    /// Show all info (full note IDs)
    #[arg(short = 'a', long)]
    pub all: bool,

    /// Only notes carrying this tag (case-insensitive)
    #[arg(short, long)]
    pub tag: Option<String>,
}

/// Arguments for the `show` command
#[derive(Parser, Debug)]
pub struct ShowArgs {
    /// Note number from `jot ls`
    pub number: usize,
}

/// Arguments for the `del` command
#[derive(Parser, Debug)]
pub struct DelArgs {
    /// Note number from `jot ls`
    pub number: usize,
}

/// Arguments for the `append` command
#[derive(Parser, Debug)]
pub struct AppendArgs {
    /// Note number from `jot ls`
    pub number: usize,

    /// Text to append; joined with spaces
    #[arg(required = true)]
    pub text: Vec<String>,
}

/// Arguments for the `edit` command
#[derive(Parser, Debug)]
pub struct EditArgs {
    /// Note number from `jot ls`
    pub number: usize,
}

/// Arguments for the `search` command
#[derive(Parser, Debug)]
pub struct SearchArgs {
    /// Keyword; joined with spaces, matched case-insensitively
    #[arg(required = true)]
    pub keyword: Vec<String>,
}

/// Arguments for the `tags` command
#[derive(Parser, Debug)]
pub struct TagsArgs {
    /// Show note counts for each tag
    #[arg(long)]
    pub counts: bool,
}

/// Arguments for the `backup` command
#[derive(Parser, Debug)]
pub struct BackupArgs {
    /// Destination file
    pub path: PathBuf,
}

/// Arguments for the `restore` command
#[derive(Parser, Debug)]
pub struct RestoreArgs {
    /// Backup file to restore from
    pub path: PathBuf,
}

/// Arguments for the `export` command
#[derive(Parser, Debug)]
pub struct ExportArgs {
    /// Note number from `jot ls`
    pub number: usize,

    /// Destination text file
    pub path: PathBuf,
}

/// Arguments for the `import` command
#[derive(Parser, Debug)]
pub struct ImportArgs {
    /// Text file to read
    pub path: PathBuf,

    /// Tag for the new note (can be specified multiple times;
    /// prompts when omitted)
    #[arg(short, long = "tag", action = ArgAction::Append)]
    pub tags: Vec<String>,
}

/// Arguments for the `completions` command
#[derive(Parser, Debug)]
pub struct CompletionsArgs {
    /// Shell to generate completions for (bash, zsh, fish)
    #[arg(value_enum)]
    pub shell: Shell,
}
