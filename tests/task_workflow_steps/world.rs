//! Shared world state for task workflow behaviour scenarios.

use std::sync::Arc;

use mockable::DefaultClock;
use rstest::fixture;
use taskboard::task::{
    adapters::memory::{FaultInjectingTaskStore, InMemoryTaskStore},
    domain::{Task, TaskId},
    services::{TaskWorkflowError, TaskWorkflowService},
};

/// Store type used by the behaviour scenarios.
pub type ScenarioStore = FaultInjectingTaskStore<InMemoryTaskStore>;

/// Service type used by the behaviour scenarios.
pub type ScenarioService = TaskWorkflowService<ScenarioStore, DefaultClock>;

/// Scenario world for modal workflow behaviour tests.
pub struct WorkflowWorld {
    pub service: ScenarioService,
    pub store: Arc<ScenarioStore>,
    pub last_save: Option<Result<Task, TaskWorkflowError>>,
    pub last_delete: Option<Result<Option<TaskId>, TaskWorkflowError>>,
}

impl WorkflowWorld {
    /// Creates a world over an empty store.
    #[must_use]
    pub fn new() -> Self {
        let store = Arc::new(FaultInjectingTaskStore::new(InMemoryTaskStore::new()));
        let service = TaskWorkflowService::new(Arc::clone(&store), Arc::new(DefaultClock));
        Self {
            service,
            store,
            last_save: None,
            last_delete: None,
        }
    }

    /// Finds a task identifier on the board by title.
    pub fn id_by_title(&self, title: &str) -> Option<TaskId> {
        self.service
            .tasks()
            .find(|task| task.title().as_str() == title)
            .map(Task::id)
    }
}

impl Default for WorkflowWorld {
    fn default() -> Self {
        Self::new()
    }
}

/// Fixture that creates a new scenario world.
#[fixture]
pub fn world() -> WorkflowWorld {
    WorkflowWorld::default()
}

/// Runs an async operation within sync step definitions.
pub fn run_async<T>(future: impl std::future::Future<Output = T>) -> T {
    tokio::task::block_in_place(|| tokio::runtime::Handle::current().block_on(future))
}
