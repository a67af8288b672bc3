//! jot - a fast terminal note-taking tool

pub mod cli;
pub mod domain;
pub mod interact;
pub mod ops;
pub mod store;

use anyhow::Result;
use clap::{CommandFactory, Parser};

use cli::{
    Cli, Command,
    config::Config,
    handlers::{
        handle_add, handle_append, handle_backup, handle_del, handle_delete_all, handle_edit,
        handle_export, handle_import, handle_list, handle_pick, handle_restore, handle_search,
        handle_show, handle_tags,
    },
};

/// Main entry point for the CLI application.
pub fn run() -> Result<()> {
    let cli = Cli::parse();
    let config = Config::load()?;
    let store_path = config.store_path(cli.store.as_ref());

    match &cli.command {
        None => handle_pick(&store_path, &config),
        Some(Command::Add(args)) => handle_add(args, &store_path, &config),
        Some(Command::List(args)) => handle_list(args, &store_path),
        Some(Command::Show(args)) => handle_show(args, &store_path),
        Some(Command::Del(args)) => handle_del(args, &store_path),
        Some(Command::Append(args)) => handle_append(args, &store_path),
        Some(Command::Edit(args)) => handle_edit(args, &store_path, &config),
        Some(Command::Search(args)) => handle_search(args, &store_path),
        Some(Command::Tags(args)) => handle_tags(args, &store_path),
        Some(Command::DeleteAll) => handle_delete_all(&store_path),
        Some(Command::Backup(args)) => handle_backup(args, &store_path),
        Some(Command::Restore(args)) => handle_restore(args, &store_path),
        Some(Command::Export(args)) => handle_export(args, &store_path),
        Some(Command::Import(args)) => handle_import(args, &store_path),
        Some(Command::Completions(args)) => {
            clap_complete::generate(
                args.shell,
                &mut Cli::command(),
                "jot",
                &mut std::io::stdout(),
            );
            Ok(())
        }
    }
}
