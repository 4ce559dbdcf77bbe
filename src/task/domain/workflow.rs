//! Exclusive modal workflow selection for the task surface.

use super::Task;

/// The currently active modal interaction.
///
/// At most one workflow is active at a time; arming one replaces whatever
/// was armed before, so two modals can never be simultaneously open. `Edit`
/// and `Delete` carry a snapshot of the selected task taken when the
/// workflow was armed; form edits never reach the canonical collection
/// until saved.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Workflow {
    /// No modal interaction is active.
    #[default]
    Idle,
    /// The empty add-task form is open.
    Add,
    /// The edit form is open over a snapshot of the selected task.
    Edit(Task),
    /// The delete confirmation is armed for the selected task.
    Delete(Task),
}

impl Workflow {
    /// Returns the snapshot of the task selected by the active workflow.
    ///
    /// `Idle` and `Add` carry no selection.
    #[must_use]
    pub const fn selected_task(&self) -> Option<&Task> {
        match self {
            Self::Idle | Self::Add => None,
            Self::Edit(task) | Self::Delete(task) => Some(task),
        }
    }

    /// Returns whether no modal interaction is active.
    #[must_use]
    pub const fn is_idle(&self) -> bool {
        matches!(self, Self::Idle)
    }

    /// Returns the canonical name of the active workflow.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::Add => "add",
            Self::Edit(_) => "edit",
            Self::Delete(_) => "delete",
        }
    }
}
