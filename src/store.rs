//! JSON-file persistence for the task collection.
//!
//! `JsonStore` owns the translation between the in-memory `Vec<Task>` and
//! its on-disk representation: a single JSON array of task objects. The
//! store is handed to the repository explicitly; nothing in this crate
//! hard-codes a global data file path.
//!
//! Writes go through `lock::write_atomic`, so a crashed save never leaves a
//! half-written file behind. Cross-process exclusion uses a sibling
//! `<file>.lock`; callers hold the lock for the whole load-mutate-save cycle.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::{Error, Result};
use crate::lock::{self, FileLock};
use crate::task::Task;

/// File-backed store for the task collection
#[derive(Debug, Clone)]
pub struct JsonStore {
    path: PathBuf,
    lock_timeout_ms: u64,
}

impl JsonStore {
    pub fn new(path: impl Into<PathBuf>, lock_timeout_ms: u64) -> Self {
        Self {
            path: path.into(),
            lock_timeout_ms,
        }
    }

    /// Path to the data file
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Path to the sibling lock file
    pub fn lock_path(&self) -> PathBuf {
        let mut name = self.path.as_os_str().to_os_string();
        name.push(".lock");
        PathBuf::from(name)
    }

    /// Acquire the exclusive advisory lock for this store
    pub fn lock(&self) -> Result<FileLock> {
        FileLock::acquire(self.lock_path(), self.lock_timeout_ms)
    }

    /// Create the data file holding an empty collection if it is absent.
    /// Idempotent; safe to call on every invocation.
    pub fn ensure_initialized(&self) -> Result<()> {
        if self.path.exists() {
            return Ok(());
        }
        debug!(path = %self.path.display(), "initializing empty task store");
        self.save(&[])
    }

    /// Load the full collection from disk.
    ///
    /// An absent file reads as an empty collection; a file that exists but
    /// does not parse as a task array is a corrupt store.
    pub fn load(&self) -> Result<Vec<Task>> {
        let contents = match fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(err) if err.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
            Err(err) => return Err(Error::Io(err)),
        };

        let tasks: Vec<Task> =
            serde_json::from_str(&contents).map_err(|err| Error::CorruptStore {
                path: self.path.clone(),
                reason: err.to_string(),
            })?;

        debug!(path = %self.path.display(), count = tasks.len(), "loaded tasks");
        Ok(tasks)
    }

    /// Serialize the full collection, atomically replacing the data file.
    pub fn save(&self, tasks: &[Task]) -> Result<()> {
        let mut contents = serde_json::to_string_pretty(tasks)?;
        contents.push('\n');
        lock::write_atomic_str(&self.path, &contents)?;
        debug!(path = %self.path.display(), count = tasks.len(), "saved tasks");
        Ok(())
    }

    /// Next id for a new task: 1 for an empty collection, else max + 1.
    ///
    /// Gaps left by deletions below the maximum are never reused.
    pub fn next_id(&self, tasks: &[Task]) -> u64 {
        tasks.iter().map(|task| task.id).max().map_or(1, |max| max + 1)
    }
}
