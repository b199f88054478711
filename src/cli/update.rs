//! tasks update command implementation.

use std::path::PathBuf;

use crate::cli::open_repo;
use crate::error::Result;
use crate::output::{emit_success, OutputOptions};

pub struct UpdateOptions {
    pub id: u64,
    pub description: String,
    pub file: Option<PathBuf>,
    pub json: bool,
    pub quiet: bool,
}

pub fn run(opts: UpdateOptions) -> Result<()> {
    let repo = open_repo(opts.file)?;
    let task = repo.update(opts.id, &opts.description)?;

    let human = format!("Task {} updated successfully", task.id);
    emit_success(
        OutputOptions {
            json: opts.json,
            quiet: opts.quiet,
        },
        "update",
        &task,
        &human,
    )
}
