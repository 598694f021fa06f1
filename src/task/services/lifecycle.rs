//! Service layer for task lifecycle, overdue fees, and statistics.

use crate::task::{
    domain::{
        FeeStrategy, Task, TaskDomainError, TaskId, TaskStatus, TaskTitle, fee_for_overdue_days,
        parse_due_date,
    },
    ports::{TaskRepository, TaskRepositoryError},
};
use mockable::Clock;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use thiserror::Error;

/// Request payload for creating a task.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateTaskRequest {
    title: String,
    description: Option<String>,
    due_date: String,
}

impl CreateTaskRequest {
    /// Creates a request with required fields; the due date is `YYYY-MM-DD`
    /// text validated by the service.
    #[must_use]
    pub fn new(title: impl Into<String>, due_date: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: None,
            due_date: due_date.into(),
        }
    }

    /// Sets the task description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

/// Partial-update request payload.
///
/// Every field is independently optional; an omitted field leaves the stored
/// value unchanged, which is distinct from providing an empty value.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct UpdateTaskRequest {
    title: Option<String>,
    description: Option<String>,
    due_date: Option<String>,
}

impl UpdateTaskRequest {
    /// Creates a request that updates nothing.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            title: None,
            description: None,
            due_date: None,
        }
    }

    /// Sets the replacement title.
    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Sets the replacement description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Sets the replacement due date as `YYYY-MM-DD` text.
    #[must_use]
    pub fn with_due_date(mut self, due_date: impl Into<String>) -> Self {
        self.due_date = Some(due_date.into());
        self
    }
}

/// Overdue-fee breakdown for a single task.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OverdueFeeReport {
    /// Identifier of the billed task.
    pub task_id: TaskId,
    /// Title of the billed task.
    pub task_title: TaskTitle,
    /// Whole calendar days the task is past due.
    pub overdue_days: u64,
    /// Charged fee in currency units.
    pub fee: u64,
    /// Tier that produced the fee.
    pub calculation_strategy: FeeStrategy,
}

/// Point-in-time task counts, recomputed on every call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskStats {
    /// Number of stored tasks.
    pub total: usize,
    /// Tasks with pending status.
    pub pending: usize,
    /// Tasks with in-progress status.
    pub in_progress: usize,
    /// Tasks with completed status.
    pub completed: usize,
    /// Non-completed tasks past their due date.
    pub overdue: usize,
}

/// Service-level errors for task lifecycle operations.
#[derive(Debug, Error)]
pub enum TaskLifecycleError {
    /// Caller input failed validation; [`TaskDomainError::field`] names the
    /// offending field.
    #[error(transparent)]
    Validation(#[from] TaskDomainError),

    /// The referenced task does not exist or was deleted.
    #[error("task not found: {0}")]
    NotFound(TaskId),

    /// Repository operation failed; propagated unchanged, never retried.
    #[error(transparent)]
    Repository(#[from] TaskRepositoryError),
}

/// Result type for task lifecycle service operations.
pub type TaskLifecycleResult<T> = Result<T, TaskLifecycleError>;

/// Task lifecycle and fee orchestration service.
#[derive(Clone)]
pub struct TaskLifecycleService<R, C>
where
    R: TaskRepository,
    C: Clock + Send + Sync,
{
    repository: Arc<R>,
    clock: Arc<C>,
}

impl<R, C> TaskLifecycleService<R, C>
where
    R: TaskRepository,
    C: Clock + Send + Sync,
{
    /// Creates a new task lifecycle service.
    #[must_use]
    pub const fn new(repository: Arc<R>, clock: Arc<C>) -> Self {
        Self { repository, clock }
    }

    /// Creates and persists a new pending task.
    ///
    /// # Errors
    ///
    /// Returns [`TaskLifecycleError::Validation`] when the title is blank or
    /// the due date does not parse, and [`TaskLifecycleError::Repository`]
    /// when persistence fails.
    pub async fn create_task(&self, request: CreateTaskRequest) -> TaskLifecycleResult<Task> {
        let title = TaskTitle::new(request.title)?;
        let due_date = parse_due_date(&request.due_date)?;
        let task = Task::new(title, request.description, due_date, &*self.clock);
        Ok(self.repository.save(&task).await?)
    }

    /// Retrieves a task by identifier.
    ///
    /// Returns `Ok(None)` when no task exists for the identifier.
    ///
    /// # Errors
    ///
    /// Returns [`TaskLifecycleError::Repository`] when persistence lookup
    /// fails.
    pub async fn find_by_id(&self, id: &TaskId) -> TaskLifecycleResult<Option<Task>> {
        Ok(self.repository.find_by_id(id).await?)
    }

    /// Retrieves a snapshot of all tasks.
    ///
    /// # Errors
    ///
    /// Returns [`TaskLifecycleError::Repository`] when persistence lookup
    /// fails.
    pub async fn find_all(&self) -> TaskLifecycleResult<Vec<Task>> {
        Ok(self.repository.find_all().await?)
    }

    /// Retrieves a snapshot of the tasks with the given status.
    ///
    /// # Errors
    ///
    /// Returns [`TaskLifecycleError::Repository`] when persistence lookup
    /// fails.
    pub async fn find_by_status(&self, status: TaskStatus) -> TaskLifecycleResult<Vec<Task>> {
        Ok(self.repository.find_by_status(status).await?)
    }

    /// Applies a partial update to an existing task.
    ///
    /// Only provided fields change; status and completion timestamp are
    /// never touched by an update.
    ///
    /// # Errors
    ///
    /// Returns [`TaskLifecycleError::NotFound`] when the task does not
    /// exist, [`TaskLifecycleError::Validation`] when a provided field is
    /// invalid, and [`TaskLifecycleError::Repository`] when persistence
    /// fails.
    pub async fn update_task(
        &self,
        id: &TaskId,
        request: UpdateTaskRequest,
    ) -> TaskLifecycleResult<Task> {
        let mut task = self.require_task(id).await?;

        if let Some(title) = request.title {
            task.rename(TaskTitle::new(title)?);
        }
        if let Some(description) = request.description {
            task.set_description(description);
        }
        if let Some(due_date) = request.due_date {
            task.reschedule(parse_due_date(&due_date)?);
        }

        Ok(self.repository.save(&task).await?)
    }

    /// Deletes an existing task.
    ///
    /// # Errors
    ///
    /// Returns [`TaskLifecycleError::NotFound`] when the task does not exist
    /// and [`TaskLifecycleError::Repository`] when persistence fails.
    pub async fn delete_task(&self, id: &TaskId) -> TaskLifecycleResult<()> {
        self.require_task(id).await?;
        Ok(self.repository.delete(id).await?)
    }

    /// Marks a task completed and records the completion instant.
    ///
    /// Completing an already-completed task succeeds, keeps the status, and
    /// refreshes the completion timestamp; callers must not assume the
    /// timestamp is stable across repeated calls.
    ///
    /// # Errors
    ///
    /// Returns [`TaskLifecycleError::NotFound`] when the task does not exist
    /// and [`TaskLifecycleError::Repository`] when persistence fails.
    pub async fn complete_task(&self, id: &TaskId) -> TaskLifecycleResult<Task> {
        let mut task = self.require_task(id).await?;
        task.mark_completed(&*self.clock);
        Ok(self.repository.save(&task).await?)
    }

    /// Computes the tiered overdue fee for a task, `0` when the task is not
    /// overdue.
    ///
    /// # Errors
    ///
    /// Returns [`TaskLifecycleError::NotFound`] when the task does not exist
    /// and [`TaskLifecycleError::Repository`] when persistence lookup fails.
    pub async fn calculate_overdue_fee(&self, id: &TaskId) -> TaskLifecycleResult<u64> {
        let task = self.require_task(id).await?;
        Ok(fee_for_overdue_days(task.overdue_days(&*self.clock)))
    }

    /// Reports the fee tier that applies to a task at this instant,
    /// consistent with [`Self::calculate_overdue_fee`] for the same task at
    /// the same clock reading.
    ///
    /// # Errors
    ///
    /// Returns [`TaskLifecycleError::NotFound`] when the task does not exist
    /// and [`TaskLifecycleError::Repository`] when persistence lookup fails.
    pub async fn calculation_strategy(&self, id: &TaskId) -> TaskLifecycleResult<FeeStrategy> {
        let task = self.require_task(id).await?;
        Ok(FeeStrategy::for_overdue_days(task.overdue_days(&*self.clock)))
    }

    /// Builds the full fee breakdown for a task from a single clock reading.
    ///
    /// # Errors
    ///
    /// Returns [`TaskLifecycleError::NotFound`] when the task does not exist
    /// and [`TaskLifecycleError::Repository`] when persistence lookup fails.
    pub async fn overdue_fee_report(&self, id: &TaskId) -> TaskLifecycleResult<OverdueFeeReport> {
        let task = self.require_task(id).await?;
        let overdue_days = task.overdue_days(&*self.clock);
        Ok(OverdueFeeReport {
            task_id: id.clone(),
            task_title: task.title().clone(),
            overdue_days,
            fee: fee_for_overdue_days(overdue_days),
            calculation_strategy: FeeStrategy::for_overdue_days(overdue_days),
        })
    }

    /// Aggregates task counts by status plus the overdue count, computed
    /// fresh on every call.
    ///
    /// # Errors
    ///
    /// Returns [`TaskLifecycleError::Repository`] when persistence lookup
    /// fails.
    pub async fn stats(&self) -> TaskLifecycleResult<TaskStats> {
        let tasks = self.repository.find_all().await?;
        let mut stats = TaskStats {
            total: tasks.len(),
            pending: 0,
            in_progress: 0,
            completed: 0,
            overdue: 0,
        };
        for task in &tasks {
            match task.status() {
                TaskStatus::Pending => stats.pending += 1,
                TaskStatus::InProgress => stats.in_progress += 1,
                TaskStatus::Completed => stats.completed += 1,
            }
            if task.is_overdue(&*self.clock) {
                stats.overdue += 1;
            }
        }
        Ok(stats)
    }

    /// Fetches a task, mapping absence to a not-found failure.
    async fn require_task(&self, id: &TaskId) -> TaskLifecycleResult<Task> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| TaskLifecycleError::NotFound(id.clone()))
    }
}
