//! Domain model for task lifecycle and overdue-fee management.
//!
//! The task domain models due-dated tasks, their lifecycle status, the
//! derived overdue state, and the tiered fee schedule, while keeping all
//! infrastructure concerns outside of the domain boundary.

mod error;
mod fee;
mod ids;
mod task;

pub use error::{ParseTaskStatusError, TaskDomainError};
pub use fee::{FeeStrategy, fee_for_overdue_days};
pub use ids::{TaskId, TaskTitle};
pub use task::{PersistedTaskData, Task, TaskStatus, parse_due_date};
