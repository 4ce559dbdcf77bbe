//! In-memory task store.

use async_trait::async_trait;
use indexmap::IndexMap;
use std::sync::{Arc, RwLock};

use crate::task::{
    domain::{Task, TaskId},
    ports::{TaskStore, TaskStoreError, TaskStoreResult},
};

/// Thread-safe in-memory task store.
///
/// Insertion order is list order: replacing a task keeps its position and
/// removing one shifts later tasks down. Serves as the session-local store
/// and as the reference implementation of the port contract in tests.
#[derive(Debug, Clone, Default)]
pub struct InMemoryTaskStore {
    state: Arc<RwLock<IndexMap<TaskId, Task>>>,
}

impl InMemoryTaskStore {
    /// Creates an empty in-memory store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store seeded with the given tasks, in order.
    #[must_use]
    pub fn with_tasks(tasks: impl IntoIterator<Item = Task>) -> Self {
        let seeded: IndexMap<TaskId, Task> =
            tasks.into_iter().map(|task| (task.id(), task)).collect();
        Self {
            state: Arc::new(RwLock::new(seeded)),
        }
    }
}

#[async_trait]
impl TaskStore for InMemoryTaskStore {
    async fn list_all(&self) -> TaskStoreResult<Vec<Task>> {
        let state = self
            .state
            .read()
            .map_err(|err| TaskStoreError::unavailable(std::io::Error::other(err.to_string())))?;
        Ok(state.values().cloned().collect())
    }

    async fn upsert(&self, task: Task) -> TaskStoreResult<Task> {
        let mut state = self
            .state
            .write()
            .map_err(|err| TaskStoreError::write_failed(std::io::Error::other(err.to_string())))?;
        state.insert(task.id(), task.clone());
        Ok(task)
    }

    async fn remove(&self, id: TaskId) -> TaskStoreResult<()> {
        let mut state = self
            .state
            .write()
            .map_err(|err| TaskStoreError::write_failed(std::io::Error::other(err.to_string())))?;
        state.shift_remove(&id);
        Ok(())
    }
}
