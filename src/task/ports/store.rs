//! Store port for task persistence.

use crate::task::domain::{Task, TaskId};
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for task store operations.
pub type TaskStoreResult<T> = Result<T, TaskStoreError>;

/// Task persistence contract.
///
/// Operations are independent, non-coalesced calls; the store does not
/// batch or dedupe. Callers are responsible for not issuing overlapping
/// writes for the same task identifier.
#[async_trait]
pub trait TaskStore: Send + Sync {
    /// Returns every stored task in the store's display order.
    ///
    /// # Errors
    ///
    /// Returns [`TaskStoreError::Unavailable`] when the backing medium
    /// cannot be read.
    async fn list_all(&self) -> TaskStoreResult<Vec<Task>>;

    /// Replaces the task with the same identifier, or appends it.
    ///
    /// Returns the persisted task so the store may normalize fields.
    ///
    /// # Errors
    ///
    /// Returns [`TaskStoreError::WriteFailed`] when the write does not
    /// reach the backing medium.
    async fn upsert(&self, task: Task) -> TaskStoreResult<Task>;

    /// Deletes the task with the given identifier.
    ///
    /// Removing an identifier that is not present is a no-op success, not
    /// an error.
    ///
    /// # Errors
    ///
    /// Returns [`TaskStoreError::WriteFailed`] when the delete does not
    /// reach the backing medium.
    async fn remove(&self, id: TaskId) -> TaskStoreResult<()>;
}

/// Errors returned by task store implementations.
#[derive(Debug, Clone, Error)]
pub enum TaskStoreError {
    /// The backing medium cannot be read.
    #[error("task store unavailable: {0}")]
    Unavailable(Arc<dyn std::error::Error + Send + Sync>),

    /// A write did not reach the backing medium.
    #[error("task store write failed: {0}")]
    WriteFailed(Arc<dyn std::error::Error + Send + Sync>),
}

impl TaskStoreError {
    /// Wraps a read-path failure.
    pub fn unavailable(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Unavailable(Arc::new(err))
    }

    /// Wraps a write-path failure.
    pub fn write_failed(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::WriteFailed(Arc::new(err))
    }
}
