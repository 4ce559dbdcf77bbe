//! Application services for the task surface.

mod workflow;

pub use workflow::{TaskDraft, TaskWorkflowError, TaskWorkflowResult, TaskWorkflowService};
