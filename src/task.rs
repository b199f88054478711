//! Task data model.
//!
//! A task is the sole persisted entity: a numeric id, a description, a
//! status, and a pair of timestamps. The full collection is a `Vec<Task>`
//! in insertion order; the JSON file holds exactly that array.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::Error;

/// Lifecycle state of a task.
///
/// Serialized as `todo` / `in_progress` / `done` in the store.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Status {
    #[default]
    Todo,
    InProgress,
    Done,
}

impl Status {
    pub fn as_str(&self) -> &'static str {
        match self {
            Status::Todo => "todo",
            Status::InProgress => "in_progress",
            Status::Done => "done",
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Status {
    type Err = Error;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "todo" => Ok(Status::Todo),
            "in-progress" | "in_progress" => Ok(Status::InProgress),
            "done" => Ok(Status::Done),
            _ => Err(Error::InvalidArgument(format!(
                "invalid status '{}': must be todo, in-progress, or done",
                s
            ))),
        }
    }
}

/// A single trackable unit of work.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    /// Positive, unique within the collection, immutable once assigned.
    pub id: u64,
    pub description: String,
    pub status: Status,
    /// Set once at creation.
    pub created_at: DateTime<Utc>,
    /// Refreshed on every mutation of description or status.
    pub updated_at: DateTime<Utc>,
}

impl Task {
    /// Create a new task with status `todo` and both timestamps set to now.
    pub fn new(id: u64, description: impl Into<String>) -> Self {
        let now = Utc::now();
        Self {
            id,
            description: description.into(),
            status: Status::default(),
            created_at: now,
            updated_at: now,
        }
    }

    /// Refresh `updated_at`; call after any field mutation.
    pub fn touch(&mut self) {
        self.updated_at = Utc::now();
    }
}
