//! Task repository: the CRUD operations over the stored collection.
//!
//! Every operation is one complete cycle under the store's exclusive lock:
//! load, locate by id, mutate or fail, save if mutated. Reads take the lock
//! too, so a listing never observes another process mid-write.

use tracing::debug;

use crate::error::{Error, Result};
use crate::filter::StatusFilter;
use crate::store::JsonStore;
use crate::task::{Status, Task};

/// CRUD operations over a `JsonStore`
#[derive(Debug, Clone)]
pub struct TaskRepository {
    store: JsonStore,
}

impl TaskRepository {
    pub fn new(store: JsonStore) -> Self {
        Self { store }
    }

    /// The underlying store
    pub fn store(&self) -> &JsonStore {
        &self.store
    }

    /// Create a task with the next id and status `todo`, append it to the
    /// collection, and persist. Returns the created task.
    pub fn add(&self, description: &str) -> Result<Task> {
        let description = validated(description)?;

        let _guard = self.store.lock()?;
        let mut tasks = self.store.load()?;
        let task = Task::new(self.store.next_id(&tasks), description);
        tasks.push(task.clone());
        self.store.save(&tasks)?;

        debug!(id = task.id, "added task");
        Ok(task)
    }

    /// Replace a task's description and refresh its `updated_at`.
    pub fn update(&self, id: u64, description: &str) -> Result<Task> {
        let description = validated(description)?;

        let _guard = self.store.lock()?;
        let mut tasks = self.store.load()?;
        let task = find_mut(&mut tasks, id)?;
        task.description = description.to_string();
        task.touch();
        let updated = task.clone();
        self.store.save(&tasks)?;

        debug!(id, "updated task");
        Ok(updated)
    }

    /// Remove a task from the collection. Surviving tasks keep their ids.
    pub fn delete(&self, id: u64) -> Result<Task> {
        let _guard = self.store.lock()?;
        let mut tasks = self.store.load()?;
        let index = tasks
            .iter()
            .position(|task| task.id == id)
            .ok_or(Error::TaskNotFound(id))?;
        let removed = tasks.remove(index);
        self.store.save(&tasks)?;

        debug!(id, "deleted task");
        Ok(removed)
    }

    /// Set a task's status and refresh its `updated_at`.
    ///
    /// The command surface only drives `in_progress` and `done`; the state
    /// machine itself admits any transition, including back to `todo`.
    pub fn set_status(&self, id: u64, status: Status) -> Result<Task> {
        let _guard = self.store.lock()?;
        let mut tasks = self.store.load()?;
        let task = find_mut(&mut tasks, id)?;
        task.status = status;
        task.touch();
        let updated = task.clone();
        self.store.save(&tasks)?;

        debug!(id, status = %status, "set task status");
        Ok(updated)
    }

    /// Filtered view of the collection in insertion order. Non-mutating.
    pub fn list(&self, filter: StatusFilter) -> Result<Vec<Task>> {
        let _guard = self.store.lock()?;
        let mut tasks = self.store.load()?;
        tasks.retain(|task| filter.matches(task));
        Ok(tasks)
    }
}

fn validated(description: &str) -> Result<&str> {
    if description.trim().is_empty() {
        return Err(Error::EmptyDescription);
    }
    Ok(description)
}

fn find_mut(tasks: &mut [Task], id: u64) -> Result<&mut Task> {
    tasks
        .iter_mut()
        .find(|task| task.id == id)
        .ok_or(Error::TaskNotFound(id))
}
