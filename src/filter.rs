//! Status filters for listing tasks.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::error::Error;
use crate::task::{Status, Task};

/// Predicate over tasks for `list`; `All` is the no-filter default.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum StatusFilter {
    #[default]
    All,
    Todo,
    InProgress,
    Done,
}

impl StatusFilter {
    pub fn matches(&self, task: &Task) -> bool {
        match self {
            StatusFilter::All => true,
            StatusFilter::Todo => task.status == Status::Todo,
            StatusFilter::InProgress => task.status == Status::InProgress,
            StatusFilter::Done => task.status == Status::Done,
        }
    }
}

impl fmt::Display for StatusFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            StatusFilter::All => "all",
            StatusFilter::Todo => "todo",
            StatusFilter::InProgress => "in-progress",
            StatusFilter::Done => "done",
        };
        f.write_str(name)
    }
}

impl FromStr for StatusFilter {
    type Err = Error;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "all" => Ok(StatusFilter::All),
            "todo" => Ok(StatusFilter::Todo),
            "in-progress" | "in_progress" => Ok(StatusFilter::InProgress),
            "done" => Ok(StatusFilter::Done),
            _ => Err(Error::InvalidArgument(format!(
                "invalid filter '{}': must be todo, in-progress, or done",
                s
            ))),
        }
    }
}
