//! Command-line interface for tasks
//!
//! This module defines the CLI structure using clap derive macros.
//! Each subcommand is implemented in its own submodule.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::config::Config;
use crate::error::Result;
use crate::filter::StatusFilter;
use crate::repo::TaskRepository;
use crate::store::JsonStore;
use crate::task::Status;

mod add;
mod delete;
mod list;
mod mark;
mod update;

/// tasks - track a to-do list in a local JSON file
#[derive(Parser, Debug)]
#[command(name = "tasks")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to the data file (defaults to tasks.json in the current directory)
    #[arg(long, global = true)]
    pub file: Option<PathBuf>,

    /// Output in JSON format
    #[arg(long, global = true)]
    pub json: bool,

    /// Suppress non-essential output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Add a new task
    Add {
        /// What needs doing
        description: String,
    },

    /// Replace a task's description
    Update {
        /// Task id
        id: u64,

        /// New description
        description: String,
    },

    /// Delete a task
    Delete {
        /// Task id
        id: u64,
    },

    /// Mark a task as in progress
    MarkInProgress {
        /// Task id
        id: u64,
    },

    /// Mark a task as done
    MarkDone {
        /// Task id
        id: u64,
    },

    /// List tasks, optionally filtered by status
    List {
        /// Status filter: todo, in-progress, or done
        filter: Option<StatusFilter>,
    },
}

impl Cli {
    /// Execute the CLI command
    pub fn run(self) -> Result<()> {
        match self.command {
            Commands::Add { description } => add::run(add::AddOptions {
                description,
                file: self.file,
                json: self.json,
                quiet: self.quiet,
            }),
            Commands::Update { id, description } => update::run(update::UpdateOptions {
                id,
                description,
                file: self.file,
                json: self.json,
                quiet: self.quiet,
            }),
            Commands::Delete { id } => delete::run(delete::DeleteOptions {
                id,
                file: self.file,
                json: self.json,
                quiet: self.quiet,
            }),
            Commands::MarkInProgress { id } => mark::run(mark::MarkOptions {
                id,
                status: Status::InProgress,
                file: self.file,
                json: self.json,
                quiet: self.quiet,
            }),
            Commands::MarkDone { id } => mark::run(mark::MarkOptions {
                id,
                status: Status::Done,
                file: self.file,
                json: self.json,
                quiet: self.quiet,
            }),
            Commands::List { filter } => list::run(list::ListOptions {
                filter: filter.unwrap_or_default(),
                file: self.file,
                json: self.json,
                quiet: self.quiet,
            }),
        }
    }
}

/// Resolve configuration, initialize the store, and build the repository.
///
/// Precedence for the data file: `--file` flag, then `.tasks.toml`, then
/// the built-in `tasks.json` relative to the working directory.
fn open_repo(file: Option<PathBuf>) -> Result<TaskRepository> {
    let cwd = std::env::current_dir()?;
    let config = Config::load_from_dir(&cwd)?;
    let path = file.unwrap_or_else(|| cwd.join(&config.file));
    let store = JsonStore::new(path, config.lock_timeout_ms);
    store.ensure_initialized()?;
    Ok(TaskRepository::new(store))
}
