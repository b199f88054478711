//! tasks mark-in-progress / mark-done command implementation.

use std::path::PathBuf;

use crate::cli::open_repo;
use crate::error::Result;
use crate::output::{emit_success, OutputOptions};
use crate::task::Status;

pub struct MarkOptions {
    pub id: u64,
    pub status: Status,
    pub file: Option<PathBuf>,
    pub json: bool,
    pub quiet: bool,
}

pub fn run(opts: MarkOptions) -> Result<()> {
    let repo = open_repo(opts.file)?;
    let task = repo.set_status(opts.id, opts.status)?;

    let (command, human) = match opts.status {
        Status::InProgress => (
            "mark-in-progress",
            format!("Task {} marked in progress", task.id),
        ),
        Status::Done => ("mark-done", format!("Task {} marked done", task.id)),
        Status::Todo => ("mark-todo", format!("Task {} marked todo", task.id)),
    };

    emit_success(
        OutputOptions {
            json: opts.json,
            quiet: opts.quiet,
        },
        command,
        &task,
        &human,
    )
}
