//! Thread-safe in-memory task repository.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, RwLock};

use crate::task::{
    domain::{PersistedTaskData, Task, TaskId, TaskStatus},
    ports::{TaskRepository, TaskRepositoryError, TaskRepositoryResult},
};

/// In-memory task repository with atomic identifier allocation.
///
/// Clones share the same underlying store, so a service and a test can hold
/// handles to one map. Identifiers are strictly increasing decimal strings
/// and are never reused after deletion.
#[derive(Debug, Clone)]
pub struct InMemoryTaskRepository {
    tasks: Arc<RwLock<HashMap<TaskId, Task>>>,
    next_id: Arc<AtomicU64>,
}

impl InMemoryTaskRepository {
    /// Creates an empty repository with identifiers starting at 1.
    #[must_use]
    pub fn new() -> Self {
        Self {
            tasks: Arc::new(RwLock::new(HashMap::new())),
            next_id: Arc::new(AtomicU64::new(1)),
        }
    }

    /// Allocates the next identifier. `fetch_add` keeps allocation atomic
    /// under concurrent saves.
    fn allocate_id(&self) -> TaskId {
        TaskId::new(self.next_id.fetch_add(1, Ordering::Relaxed).to_string())
    }
}

impl Default for InMemoryTaskRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl TaskRepository for InMemoryTaskRepository {
    async fn save(&self, task: &Task) -> TaskRepositoryResult<Task> {
        let id = task
            .id()
            .cloned()
            .unwrap_or_else(|| self.allocate_id());
        let stored = Task::from_persisted(PersistedTaskData {
            id: id.clone(),
            title: task.title().clone(),
            description: task.description().map(ToOwned::to_owned),
            due_date: task.due_date(),
            status: task.status(),
            created_at: task.created_at(),
            completed_at: task.completed_at(),
        });

        let mut tasks = self.tasks.write().map_err(|err| {
            TaskRepositoryError::persistence(std::io::Error::other(err.to_string()))
        })?;
        tasks.insert(id, stored.clone());
        Ok(stored)
    }

    async fn find_by_id(&self, id: &TaskId) -> TaskRepositoryResult<Option<Task>> {
        let tasks = self.tasks.read().map_err(|err| {
            TaskRepositoryError::persistence(std::io::Error::other(err.to_string()))
        })?;
        Ok(tasks.get(id).cloned())
    }

    async fn find_all(&self) -> TaskRepositoryResult<Vec<Task>> {
        let tasks = self.tasks.read().map_err(|err| {
            TaskRepositoryError::persistence(std::io::Error::other(err.to_string()))
        })?;
        Ok(tasks.values().cloned().collect())
    }

    async fn find_by_status(&self, status: TaskStatus) -> TaskRepositoryResult<Vec<Task>> {
        let tasks = self.tasks.read().map_err(|err| {
            TaskRepositoryError::persistence(std::io::Error::other(err.to_string()))
        })?;
        Ok(tasks
            .values()
            .filter(|task| task.status() == status)
            .cloned()
            .collect())
    }

    async fn delete(&self, id: &TaskId) -> TaskRepositoryResult<()> {
        let mut tasks = self.tasks.write().map_err(|err| {
            TaskRepositoryError::persistence(std::io::Error::other(err.to_string()))
        })?;
        tasks.remove(id);
        Ok(())
    }

    async fn count(&self) -> TaskRepositoryResult<usize> {
        let tasks = self.tasks.read().map_err(|err| {
            TaskRepositoryError::persistence(std::io::Error::other(err.to_string()))
        })?;
        Ok(tasks.len())
    }
}
