//! Error types for tasks
//!
//! Exit codes:
//! - 0: Success
//! - 2: User error (unknown id, bad argument, invalid config)
//! - 4: Operation failed (unreadable or corrupt store, lock timeout)

use std::path::PathBuf;
use thiserror::Error;

/// Exit codes for the tasks CLI
pub mod exit_codes {
    pub const SUCCESS: i32 = 0;
    pub const USER_ERROR: i32 = 2;
    pub const OPERATION_FAILED: i32 = 4;
}

/// Main error type for task operations
#[derive(Error, Debug)]
pub enum Error {
    // User errors (exit code 2)
    #[error("Task with ID {0} not found")]
    TaskNotFound(u64),

    #[error("Task description cannot be empty")]
    EmptyDescription,

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    // Operation failures (exit code 4)
    #[error("Task store {path} is corrupt: {reason}")]
    CorruptStore { path: PathBuf, reason: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("Lock acquisition timed out: {0}")]
    LockTimeout(PathBuf),
}

impl Error {
    /// Get the exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            // User errors
            Error::TaskNotFound(_)
            | Error::EmptyDescription
            | Error::InvalidArgument(_)
            | Error::InvalidConfig(_) => exit_codes::USER_ERROR,

            // Operation failures
            Error::CorruptStore { .. }
            | Error::Io(_)
            | Error::Json(_)
            | Error::TomlParse(_)
            | Error::LockTimeout(_) => exit_codes::OPERATION_FAILED,
        }
    }
}

/// Result type alias for task operations
pub type Result<T> = std::result::Result<T, Error>;
