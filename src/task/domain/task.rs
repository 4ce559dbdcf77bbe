//! Task aggregate root.

use super::{TaskId, TaskTitle};
use chrono::{DateTime, Utc};
use mockable::Clock;
use serde::{Deserialize, Serialize};

/// Task aggregate root.
///
/// Field mutation goes through [`Task::revise`] and
/// [`Task::toggle_completed`] so that `updated_at` always reflects the
/// latest change.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    id: TaskId,
    title: TaskTitle,
    description: Option<String>,
    completed: bool,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

/// Parameter object for reconstructing a persisted task.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersistedTaskData {
    /// Persisted task identifier.
    pub id: TaskId,
    /// Persisted title.
    pub title: TaskTitle,
    /// Persisted description, if any.
    pub description: Option<String>,
    /// Persisted completion flag.
    pub completed: bool,
    /// Persisted creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Persisted latest-change timestamp.
    pub updated_at: DateTime<Utc>,
}

impl Task {
    /// Creates a new open task with a fresh identifier.
    ///
    /// The completion flag starts `false`; a blank description is dropped.
    #[must_use]
    pub fn new(title: TaskTitle, description: Option<String>, clock: &impl Clock) -> Self {
        let timestamp = clock.utc();
        Self {
            id: TaskId::new(),
            title,
            description: normalize_description(description),
            completed: false,
            created_at: timestamp,
            updated_at: timestamp,
        }
    }

    /// Reconstructs a task from persisted storage.
    #[must_use]
    pub fn from_persisted(data: PersistedTaskData) -> Self {
        Self {
            id: data.id,
            title: data.title,
            description: data.description,
            completed: data.completed,
            created_at: data.created_at,
            updated_at: data.updated_at,
        }
    }

    /// Returns the task identifier.
    #[must_use]
    pub const fn id(&self) -> TaskId {
        self.id
    }

    /// Returns the task title.
    #[must_use]
    pub const fn title(&self) -> &TaskTitle {
        &self.title
    }

    /// Returns the task description, if any.
    #[must_use]
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// Returns the completion flag.
    #[must_use]
    pub const fn completed(&self) -> bool {
        self.completed
    }

    /// Returns the creation timestamp.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Returns the latest-change timestamp.
    #[must_use]
    pub const fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    /// Applies revised fields onto this task.
    ///
    /// `None` fields are omitted and keep their current value; a present
    /// description is normalized, so revising with blank text clears it.
    pub fn revise(
        &mut self,
        title: TaskTitle,
        description: Option<String>,
        completed: Option<bool>,
        clock: &impl Clock,
    ) {
        self.title = title;
        if let Some(text) = description {
            self.description = normalize_description(Some(text));
        }
        if let Some(flag) = completed {
            self.completed = flag;
        }
        self.touch(clock);
    }

    /// Flips the completion flag.
    pub fn toggle_completed(&mut self, clock: &impl Clock) {
        self.completed = !self.completed;
        self.touch(clock);
    }

    /// Updates the `updated_at` timestamp to the current clock time.
    fn touch(&mut self, clock: &impl Clock) {
        self.updated_at = clock.utc();
    }
}

/// Drops descriptions that are empty after trimming.
fn normalize_description(description: Option<String>) -> Option<String> {
    description.and_then(|text| {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(trimmed.to_owned())
        }
    })
}
