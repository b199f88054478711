//! Shared output formatting for tasks CLI commands.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::error::Result;
use crate::task::Task;

pub const SCHEMA_VERSION: &str = "tasks.v1";

const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

#[derive(Debug, Clone, Copy)]
pub struct OutputOptions {
    pub json: bool,
    pub quiet: bool,
}

/// Emit a command result: a pretty JSON envelope under `--json`, otherwise
/// the human-readable text (suppressed by `--quiet`).
pub fn emit_success<T: Serialize>(
    options: OutputOptions,
    command: &str,
    data: &T,
    human: &str,
) -> Result<()> {
    if options.json {
        #[derive(Serialize)]
        struct Envelope<'a, T: Serialize> {
            schema_version: &'static str,
            command: &'a str,
            status: &'static str,
            data: &'a T,
        }

        let payload = Envelope {
            schema_version: SCHEMA_VERSION,
            command,
            status: "success",
            data,
        };

        println!("{}", serde_json::to_string_pretty(&payload)?);
        return Ok(());
    }

    if options.quiet {
        return Ok(());
    }

    println!("{human}");
    Ok(())
}

pub fn emit_error(command: &str, err: &crate::error::Error, json: bool) -> Result<()> {
    let hint = error_hint(err);
    if json {
        #[derive(Serialize)]
        struct ErrorBody<'a> {
            message: &'a str,
            code: i32,
            kind: &'static str,
            #[serde(skip_serializing_if = "Option::is_none")]
            hint: Option<&'a str>,
        }

        #[derive(Serialize)]
        struct Envelope<'a> {
            schema_version: &'static str,
            command: &'a str,
            status: &'static str,
            error: ErrorBody<'a>,
        }

        let payload = Envelope {
            schema_version: SCHEMA_VERSION,
            command,
            status: "error",
            error: ErrorBody {
                message: &err.to_string(),
                code: err.exit_code(),
                kind: error_kind(err),
                hint,
            },
        };

        println!("{}", serde_json::to_string_pretty(&payload)?);
        return Ok(());
    }

    eprintln!("error: {err}");
    if let Some(hint) = hint {
        eprintln!("hint: {hint}");
    }
    Ok(())
}

/// Render the task table: fixed-width ID, Description, Status, Created at,
/// Updated at columns. An empty collection renders the placeholder line.
pub fn render_table(tasks: &[Task]) -> String {
    if tasks.is_empty() {
        return "No tasks found".to_string();
    }

    let mut lines = Vec::with_capacity(tasks.len() + 2);
    lines.push(format!(
        "{:<6} {:<36} {:<13} {:<21} {:<21}",
        "ID", "Description", "Status", "Created at", "Updated at"
    ));
    lines.push("-".repeat(100));

    for task in tasks {
        lines.push(format!(
            "{:<6} {:<36} {:<13} {:<21} {:<21}",
            task.id,
            task.description,
            task.status,
            format_timestamp(&task.created_at),
            format_timestamp(&task.updated_at),
        ));
    }

    lines.join("\n")
}

fn format_timestamp(ts: &DateTime<Utc>) -> String {
    ts.format(TIMESTAMP_FORMAT).to_string()
}

pub fn infer_command_name_from_args() -> String {
    std::env::args()
        .skip(1)
        .find(|arg| !arg.starts_with('-'))
        .unwrap_or_else(|| "tasks".to_string())
}

fn error_kind(err: &crate::error::Error) -> &'static str {
    match err.exit_code() {
        2 => "user_error",
        _ => "operation_failed",
    }
}

fn error_hint(err: &crate::error::Error) -> Option<&'static str> {
    use crate::error::Error;

    match err {
        Error::CorruptStore { .. } => Some("fix or remove the data file, then retry"),
        Error::InvalidConfig(_) => Some("fix .tasks.toml then retry"),
        Error::TaskNotFound(_) => Some("tasks list"),
        Error::LockTimeout(_) => {
            Some("another invocation holds the lock; retry, or remove a stale .lock file")
        }
        _ => None,
    }
}
