//! Service layer for the task surface: the canonical collection and the
//! modal workflow it feeds.

use crate::task::{
    domain::{Task, TaskDomainError, TaskId, TaskTitle, Workflow},
    ports::{TaskStore, TaskStoreError},
};
use indexmap::IndexMap;
use log::{debug, warn};
use mockable::Clock;
use std::sync::Arc;
use thiserror::Error;

/// Save candidate carried by the add and edit forms.
///
/// `None` fields are omitted in the merge sense: an edit that never touched
/// the completion flag leaves it as stored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskDraft {
    id: Option<TaskId>,
    title: String,
    description: Option<String>,
    completed: Option<bool>,
}

impl TaskDraft {
    /// Creates a draft with the given title text.
    #[must_use]
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            id: None,
            title: title.into(),
            description: None,
            completed: None,
        }
    }

    /// Targets an existing task by identifier.
    #[must_use]
    pub const fn with_id(mut self, id: TaskId) -> Self {
        self.id = Some(id);
        self
    }

    /// Sets the draft description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Sets the draft completion flag.
    #[must_use]
    pub const fn with_completed(mut self, completed: bool) -> Self {
        self.completed = Some(completed);
        self
    }
}

/// Service-level errors recorded for inline display.
#[derive(Debug, Clone, Error)]
pub enum TaskWorkflowError {
    /// The draft was rejected before any store call was made.
    #[error(transparent)]
    Validation(#[from] TaskDomainError),

    /// The store could not be read at load time.
    #[error("could not load tasks: {0}")]
    StoreUnavailable(#[source] TaskStoreError),

    /// A store write failed; the triggering workflow stays open for retry.
    #[error("could not persist task change: {0}")]
    Persistence(#[source] TaskStoreError),
}

/// Result type for task workflow operations.
pub type TaskWorkflowResult<T> = Result<T, TaskWorkflowError>;

/// Task workflow orchestration service.
///
/// Owns the canonical task collection for the session (the single source of
/// truth for the presentation layer), mediates every mutation through the
/// store port, and keeps at most one modal workflow active. Every operation
/// takes `&mut self`: the exclusive borrow is what guarantees a second
/// conflicting intent cannot start while a store call for the same task is
/// still in flight.
pub struct TaskWorkflowService<S, C>
where
    S: TaskStore,
    C: Clock + Send + Sync,
{
    store: Arc<S>,
    clock: Arc<C>,
    tasks: IndexMap<TaskId, Task>,
    workflow: Workflow,
    last_error: Option<TaskWorkflowError>,
}

impl<S, C> TaskWorkflowService<S, C>
where
    S: TaskStore,
    C: Clock + Send + Sync,
{
    /// Creates a service with an empty collection and no active workflow.
    #[must_use]
    pub fn new(store: Arc<S>, clock: Arc<C>) -> Self {
        Self {
            store,
            clock,
            tasks: IndexMap::new(),
            workflow: Workflow::Idle,
            last_error: None,
        }
    }

    /// Returns the canonical tasks in display order.
    pub fn tasks(&self) -> impl Iterator<Item = &Task> {
        self.tasks.values()
    }

    /// Returns the number of tasks in the canonical collection.
    #[must_use]
    pub fn task_count(&self) -> usize {
        self.tasks.len()
    }

    /// Returns the task with the given identifier, if present.
    #[must_use]
    pub fn task(&self, id: TaskId) -> Option<&Task> {
        self.tasks.get(&id)
    }

    /// Returns the currently active workflow.
    #[must_use]
    pub const fn workflow(&self) -> &Workflow {
        &self.workflow
    }

    /// Returns the most recently recorded error, if any.
    #[must_use]
    pub const fn last_error(&self) -> Option<&TaskWorkflowError> {
        self.last_error.as_ref()
    }

    /// Replaces the canonical collection from the store.
    ///
    /// On failure the collection is left empty and the load error is
    /// recorded for display. There is no automatic retry; calling `load`
    /// again is the manual reload.
    ///
    /// # Errors
    ///
    /// Returns [`TaskWorkflowError::StoreUnavailable`] when the store
    /// cannot be read.
    pub async fn load(&mut self) -> TaskWorkflowResult<()> {
        self.tasks.clear();
        let outcome = self.store.list_all().await;
        match outcome {
            Ok(listed) => {
                self.tasks = listed.into_iter().map(|task| (task.id(), task)).collect();
                self.last_error = None;
                debug!("loaded {} tasks", self.tasks.len());
                Ok(())
            }
            Err(err) => {
                warn!("task load failed: {err}");
                Err(self.record(TaskWorkflowError::StoreUnavailable(err)))
            }
        }
    }

    /// Opens the empty add-task form.
    pub fn request_add(&mut self) {
        self.workflow = Workflow::Add;
        self.last_error = None;
    }

    /// Opens the edit form over a snapshot of the selected task.
    ///
    /// The snapshot is a clone; form edits never reach the canonical
    /// collection until saved. Returns whether the identifier was known; an
    /// unknown identifier leaves the workflow untouched.
    pub fn request_edit(&mut self, id: TaskId) -> bool {
        let Some(snapshot) = self.tasks.get(&id).cloned() else {
            return false;
        };
        self.workflow = Workflow::Edit(snapshot);
        self.last_error = None;
        true
    }

    /// Arms the delete confirmation for the selected task.
    ///
    /// Arming performs no mutation; only [`Self::confirm_delete`] does.
    /// Returns whether the identifier was known.
    pub fn request_delete(&mut self, id: TaskId) -> bool {
        let Some(snapshot) = self.tasks.get(&id).cloned() else {
            return false;
        };
        self.workflow = Workflow::Delete(snapshot);
        self.last_error = None;
        true
    }

    /// Clears the active workflow, discarding any unsaved form state.
    ///
    /// Valid from every state.
    pub fn cancel(&mut self) {
        self.workflow = Workflow::Idle;
        self.last_error = None;
    }

    /// Persists a draft from the add or edit form.
    ///
    /// A draft whose trimmed title is empty is rejected before any store
    /// call: the workflow stays open and the validation error is recorded.
    /// A draft targeting a known identifier merges onto the stored task,
    /// with omitted fields preserved. An absent or unknown identifier
    /// creates a new task with a fresh identifier and the completion flag
    /// forced off. On success the store's returned task enters the
    /// collection and the workflow closes; on store failure the workflow
    /// stays open so the same draft can be retried.
    ///
    /// # Errors
    ///
    /// Returns [`TaskWorkflowError::Validation`] for an empty title and
    /// [`TaskWorkflowError::Persistence`] when the store write fails.
    pub async fn save(&mut self, draft: TaskDraft) -> TaskWorkflowResult<Task> {
        let title = match TaskTitle::new(draft.title) {
            Ok(validated) => validated,
            Err(err) => return Err(self.record(TaskWorkflowError::Validation(err))),
        };

        let existing = draft.id.and_then(|id| self.tasks.get(&id).cloned());
        let candidate = match existing {
            Some(mut task) => {
                task.revise(title, draft.description, draft.completed, &*self.clock);
                task
            }
            None => Task::new(title, draft.description, &*self.clock),
        };

        let outcome = self.store.upsert(candidate).await;
        match outcome {
            Ok(stored) => {
                debug!(
                    "saved task {} from {} workflow",
                    stored.id(),
                    self.workflow.as_str()
                );
                self.tasks.insert(stored.id(), stored.clone());
                self.workflow = Workflow::Idle;
                self.last_error = None;
                Ok(stored)
            }
            Err(err) => {
                warn!("task save failed: {err}");
                Err(self.record(TaskWorkflowError::Persistence(err)))
            }
        }
    }

    /// Flips the completion flag for the given task.
    ///
    /// The flip lands in the canonical collection first and is then routed
    /// through the store; a write failure restores the pre-flip snapshot
    /// before the error is surfaced, so the collection and the store stay
    /// converged. Returns whether the identifier was known. This operation
    /// has no workflow state.
    ///
    /// # Errors
    ///
    /// Returns [`TaskWorkflowError::Persistence`] when the store write
    /// fails; the collection is left as it was before the call.
    pub async fn toggle_complete(&mut self, id: TaskId) -> TaskWorkflowResult<bool> {
        let Some(original) = self.tasks.get(&id).cloned() else {
            return Ok(false);
        };
        let mut flipped = original.clone();
        flipped.toggle_completed(&*self.clock);
        self.tasks.insert(id, flipped.clone());

        let outcome = self.store.upsert(flipped).await;
        match outcome {
            Ok(stored) => {
                self.tasks.insert(stored.id(), stored);
                Ok(true)
            }
            Err(err) => {
                self.tasks.insert(id, original);
                warn!("task toggle failed: {err}");
                Err(self.record(TaskWorkflowError::Persistence(err)))
            }
        }
    }

    /// Completes an armed delete confirmation.
    ///
    /// Returns the removed identifier, or `None` when no delete was armed
    /// (the call is then a no-op). On success exactly the selected task
    /// leaves the collection and the workflow closes. On store failure the
    /// confirmation stays armed so the user can retry or cancel.
    ///
    /// # Errors
    ///
    /// Returns [`TaskWorkflowError::Persistence`] when the store delete
    /// fails; the collection and workflow are left unchanged.
    pub async fn confirm_delete(&mut self) -> TaskWorkflowResult<Option<TaskId>> {
        let Workflow::Delete(selected) = &self.workflow else {
            return Ok(None);
        };
        let id = selected.id();

        let outcome = self.store.remove(id).await;
        match outcome {
            Ok(()) => {
                self.tasks.shift_remove(&id);
                self.workflow = Workflow::Idle;
                self.last_error = None;
                debug!("deleted task {id}");
                Ok(Some(id))
            }
            Err(err) => {
                warn!("task delete failed: {err}");
                Err(self.record(TaskWorkflowError::Persistence(err)))
            }
        }
    }

    /// Records an error for display and hands it back to the caller.
    fn record(&mut self, failure: TaskWorkflowError) -> TaskWorkflowError {
        self.last_error = Some(failure.clone());
        failure
    }
}
