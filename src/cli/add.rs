//! tasks add command implementation.

use std::path::PathBuf;

use crate::cli::open_repo;
use crate::error::Result;
use crate::output::{emit_success, OutputOptions};

pub struct AddOptions {
    pub description: String,
    pub file: Option<PathBuf>,
    pub json: bool,
    pub quiet: bool,
}

pub fn run(opts: AddOptions) -> Result<()> {
    let repo = open_repo(opts.file)?;
    let task = repo.add(&opts.description)?;

    let human = format!("Task added successfully (ID: {})", task.id);
    emit_success(
        OutputOptions {
            json: opts.json,
            quiet: opts.quiet,
        },
        "add",
        &task,
        &human,
    )
}
