//! Repository port for task persistence, lookup, and deletion.

use crate::task::domain::{Task, TaskId, TaskStatus};
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for task repository operations.
pub type TaskRepositoryResult<T> = Result<T, TaskRepositoryError>;

/// Task persistence contract.
///
/// Implementations store exactly one task per identifier and serve snapshot
/// reads: a query returns a point-in-time view that later writes do not
/// update. A caller's own completed write is visible to its own subsequent
/// read; visibility across concurrent callers is unordered.
#[async_trait]
pub trait TaskRepository: Send + Sync {
    /// Stores the task, allocating an identifier when it has none.
    ///
    /// Upsert semantics: a task that already carries an identifier
    /// overwrites the entry for that identifier without an existence check.
    /// Identifier allocation is atomic; concurrent saves of identifier-less
    /// tasks never produce the same identifier. Returns the stored task with
    /// its identifier populated.
    ///
    /// # Errors
    ///
    /// Returns [`TaskRepositoryError::Persistence`] when the backing store
    /// fails.
    async fn save(&self, task: &Task) -> TaskRepositoryResult<Task>;

    /// Finds a task by identifier.
    ///
    /// Returns `None` when the task does not exist.
    ///
    /// # Errors
    ///
    /// Returns [`TaskRepositoryError::Persistence`] when the backing store
    /// fails.
    async fn find_by_id(&self, id: &TaskId) -> TaskRepositoryResult<Option<Task>>;

    /// Returns a snapshot of all stored tasks in unspecified order.
    ///
    /// # Errors
    ///
    /// Returns [`TaskRepositoryError::Persistence`] when the backing store
    /// fails.
    async fn find_all(&self) -> TaskRepositoryResult<Vec<Task>>;

    /// Returns a snapshot of the tasks with the given status.
    ///
    /// # Errors
    ///
    /// Returns [`TaskRepositoryError::Persistence`] when the backing store
    /// fails.
    async fn find_by_status(&self, status: TaskStatus) -> TaskRepositoryResult<Vec<Task>>;

    /// Removes the task with the given identifier; absent identifiers are a
    /// no-op, not an error.
    ///
    /// # Errors
    ///
    /// Returns [`TaskRepositoryError::Persistence`] when the backing store
    /// fails.
    async fn delete(&self, id: &TaskId) -> TaskRepositoryResult<()>;

    /// Returns the number of stored tasks at the time of the call.
    ///
    /// # Errors
    ///
    /// Returns [`TaskRepositoryError::Persistence`] when the backing store
    /// fails.
    async fn count(&self) -> TaskRepositoryResult<usize>;
}

/// Errors returned by task repository implementations.
///
/// Missing tasks are not repository errors; lookups return `None` and
/// deletes of absent identifiers succeed. Only infrastructure failures
/// surface here, and callers propagate them unchanged.
#[derive(Debug, Clone, Error)]
pub enum TaskRepositoryError {
    /// Persistence-layer failure.
    #[error("persistence error: {0}")]
    Persistence(Arc<dyn std::error::Error + Send + Sync>),
}

impl TaskRepositoryError {
    /// Wraps a persistence error.
    pub fn persistence(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Persistence(Arc::new(err))
    }
}
