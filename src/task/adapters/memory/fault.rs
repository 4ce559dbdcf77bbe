//! Fault-injecting wrapper for exercising store failure paths.

use async_trait::async_trait;
use std::sync::atomic::{AtomicBool, Ordering};

use crate::task::{
    domain::{Task, TaskId},
    ports::{TaskStore, TaskStoreError, TaskStoreResult},
};

/// Store wrapper that can be switched into failing modes.
///
/// Read faults surface as [`TaskStoreError::Unavailable`], write faults as
/// [`TaskStoreError::WriteFailed`]. A fault stays armed until cleared, so a
/// repaired medium is modeled by switching the fault off and retrying.
#[derive(Debug, Default)]
pub struct FaultInjectingTaskStore<S> {
    inner: S,
    read_fault: AtomicBool,
    write_fault: AtomicBool,
}

impl<S> FaultInjectingTaskStore<S> {
    /// Wraps a store with both fault switches off.
    pub fn new(inner: S) -> Self {
        Self {
            inner,
            read_fault: AtomicBool::new(false),
            write_fault: AtomicBool::new(false),
        }
    }

    /// Arms or clears the read fault.
    pub fn fail_reads(&self, enabled: bool) {
        self.read_fault.store(enabled, Ordering::SeqCst);
    }

    /// Arms or clears the write fault.
    pub fn fail_writes(&self, enabled: bool) {
        self.write_fault.store(enabled, Ordering::SeqCst);
    }

    /// Returns the wrapped store.
    pub const fn inner(&self) -> &S {
        &self.inner
    }
}

#[async_trait]
impl<S: TaskStore> TaskStore for FaultInjectingTaskStore<S> {
    async fn list_all(&self) -> TaskStoreResult<Vec<Task>> {
        if self.read_fault.load(Ordering::SeqCst) {
            return Err(TaskStoreError::unavailable(std::io::Error::other(
                "injected read fault",
            )));
        }
        self.inner.list_all().await
    }

    async fn upsert(&self, task: Task) -> TaskStoreResult<Task> {
        if self.write_fault.load(Ordering::SeqCst) {
            return Err(TaskStoreError::write_failed(std::io::Error::other(
                "injected write fault",
            )));
        }
        self.inner.upsert(task).await
    }

    async fn remove(&self, id: TaskId) -> TaskStoreResult<()> {
        if self.write_fault.load(Ordering::SeqCst) {
            return Err(TaskStoreError::write_failed(std::io::Error::other(
                "injected write fault",
            )));
        }
        self.inner.remove(id).await
    }
}
