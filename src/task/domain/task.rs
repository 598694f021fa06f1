//! Task aggregate root and lifecycle status types.

use super::{ParseTaskStatusError, TaskDomainError, TaskId, TaskTitle};
use chrono::{DateTime, NaiveDate, Utc};
use mockable::Clock;
use serde::{Deserialize, Serialize};

/// Task lifecycle status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskStatus {
    /// Task has been created but work has not started.
    Pending,
    /// Task is being worked on. Declared for consumers and counted in
    /// statistics; no lifecycle operation currently assigns it.
    InProgress,
    /// Task has been completed.
    Completed,
}

impl TaskStatus {
    /// Returns the canonical storage representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::InProgress => "in_progress",
            Self::Completed => "completed",
        }
    }
}

impl TryFrom<&str> for TaskStatus {
    type Error = ParseTaskStatusError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let normalized = value.trim().to_ascii_lowercase();
        match normalized.as_str() {
            "pending" => Ok(Self::Pending),
            "in_progress" => Ok(Self::InProgress),
            "completed" => Ok(Self::Completed),
            _ => Err(ParseTaskStatusError(value.to_owned())),
        }
    }
}

/// Parses a due date in `YYYY-MM-DD` form.
///
/// # Errors
///
/// Returns [`TaskDomainError::InvalidDueDate`] when the text is not a valid
/// calendar date in `YYYY-MM-DD` form.
pub fn parse_due_date(text: &str) -> Result<NaiveDate, TaskDomainError> {
    NaiveDate::parse_from_str(text, "%Y-%m-%d")
        .map_err(|_| TaskDomainError::InvalidDueDate(text.to_owned()))
}

/// Task aggregate root.
///
/// A task carries no identifier until a repository stores it; the repository
/// allocates the identifier exactly once and it is immutable thereafter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    id: Option<TaskId>,
    title: TaskTitle,
    description: Option<String>,
    due_date: NaiveDate,
    status: TaskStatus,
    created_at: DateTime<Utc>,
    completed_at: Option<DateTime<Utc>>,
}

/// Parameter object for reconstructing a persisted task aggregate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersistedTaskData {
    /// Persisted task identifier.
    pub id: TaskId,
    /// Persisted title.
    pub title: TaskTitle,
    /// Persisted description, if any.
    pub description: Option<String>,
    /// Persisted due date.
    pub due_date: NaiveDate,
    /// Persisted lifecycle status.
    pub status: TaskStatus,
    /// Persisted creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Persisted completion timestamp, present only for completed tasks.
    pub completed_at: Option<DateTime<Utc>>,
}

impl Task {
    /// Creates a new pending task without an identifier.
    #[must_use]
    pub fn new(
        title: TaskTitle,
        description: Option<String>,
        due_date: NaiveDate,
        clock: &impl Clock,
    ) -> Self {
        Self {
            id: None,
            title,
            description,
            due_date,
            status: TaskStatus::Pending,
            created_at: clock.utc(),
            completed_at: None,
        }
    }

    /// Reconstructs a task from persisted storage.
    #[must_use]
    pub fn from_persisted(data: PersistedTaskData) -> Self {
        Self {
            id: Some(data.id),
            title: data.title,
            description: data.description,
            due_date: data.due_date,
            status: data.status,
            created_at: data.created_at,
            completed_at: data.completed_at,
        }
    }

    /// Returns the task identifier, absent until first save.
    #[must_use]
    pub const fn id(&self) -> Option<&TaskId> {
        self.id.as_ref()
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

    /// Returns the due date.
    #[must_use]
    pub const fn due_date(&self) -> NaiveDate {
        self.due_date
    }

    /// Returns the lifecycle status.
    #[must_use]
    pub const fn status(&self) -> TaskStatus {
        self.status
    }

    /// Returns the creation timestamp.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Returns the completion timestamp, present only for completed tasks.
    #[must_use]
    pub const fn completed_at(&self) -> Option<DateTime<Utc>> {
        self.completed_at
    }

    /// Replaces the title.
    pub fn rename(&mut self, title: TaskTitle) {
        self.title = title;
    }

    /// Replaces the description.
    pub fn set_description(&mut self, description: impl Into<String>) {
        self.description = Some(description.into());
    }

    /// Replaces the due date.
    pub const fn reschedule(&mut self, due_date: NaiveDate) {
        self.due_date = due_date;
    }

    /// Marks the task completed and records the completion instant.
    ///
    /// Completing an already-completed task keeps the status and refreshes
    /// the completion timestamp to the current clock time.
    pub fn mark_completed(&mut self, clock: &impl Clock) {
        self.status = TaskStatus::Completed;
        self.completed_at = Some(clock.utc());
    }

    /// Reports whether the task is past due.
    ///
    /// A task is overdue when it is not completed and its due date is
    /// strictly before the clock's current date. Derived on every call,
    /// never stored.
    #[must_use]
    pub fn is_overdue(&self, clock: &impl Clock) -> bool {
        self.status != TaskStatus::Completed && self.due_date < clock.utc().date_naive()
    }

    /// Returns the whole calendar days the task is past due, `0` when the
    /// task is not overdue.
    #[must_use]
    pub fn overdue_days(&self, clock: &impl Clock) -> u64 {
        let today = clock.utc().date_naive();
        if self.status == TaskStatus::Completed || self.due_date >= today {
            return 0;
        }
        u64::try_from(today.signed_duration_since(self.due_date).num_days()).unwrap_or(0)
    }
}
