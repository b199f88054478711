//! tasks delete command implementation.

use std::path::PathBuf;

use crate::cli::open_repo;
use crate::error::Result;
use crate::output::{emit_success, OutputOptions};

pub struct DeleteOptions {
    pub id: u64,
    pub file: Option<PathBuf>,
    pub json: bool,
    pub quiet: bool,
}

pub fn run(opts: DeleteOptions) -> Result<()> {
    let repo = open_repo(opts.file)?;
    let task = repo.delete(opts.id)?;

    let human = format!("Task {} deleted", task.id);
    emit_success(
        OutputOptions {
            json: opts.json,
            quiet: opts.quiet,
        },
        "delete",
        &task,
        &human,
    )
}
