//! tasks list command implementation.

use std::path::PathBuf;

use serde::Serialize;

use crate::cli::open_repo;
use crate::error::Result;
use crate::filter::StatusFilter;
use crate::output::{emit_success, render_table, OutputOptions};
use crate::task::Task;

pub struct ListOptions {
    pub filter: StatusFilter,
    pub file: Option<PathBuf>,
    pub json: bool,
    pub quiet: bool,
}

#[derive(Serialize)]
struct ListReport {
    filter: StatusFilter,
    count: usize,
    tasks: Vec<Task>,
}

pub fn run(opts: ListOptions) -> Result<()> {
    let repo = open_repo(opts.file)?;
    let tasks = repo.list(opts.filter)?;

    let human = render_table(&tasks);
    let report = ListReport {
        filter: opts.filter,
        count: tasks.len(),
        tasks,
    };

    emit_success(
        OutputOptions {
            json: opts.json,
            quiet: opts.quiet,
        },
        "list",
        &report,
        &human,
    )
}
