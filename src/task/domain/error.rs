//! Error types for task domain validation.

use thiserror::Error;

/// Errors returned while constructing or revising domain task values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TaskDomainError {
    /// The task title is empty after trimming surrounding whitespace.
    ///
    /// The display text is the exact message surfaced inline next to the
    /// task form.
    #[error("Title is required")]
    TitleRequired,
}
