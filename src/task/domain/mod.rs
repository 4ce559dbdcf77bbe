//! Domain model for the task management core.
//!
//! The task domain models the task aggregate, its validated scalars, and
//! the exclusive modal workflow selector while keeping all infrastructure
//! concerns outside of the domain boundary.

mod error;
mod ids;
mod task;
mod workflow;

pub use error::TaskDomainError;
pub use ids::{TaskId, TaskTitle};
pub use task::{PersistedTaskData, Task};
pub use workflow::Workflow;
