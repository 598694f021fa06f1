//! Shared world state for overdue-fee BDD scenarios.

use campusflow::task::{
    adapters::memory::InMemoryTaskRepository,
    domain::TaskId,
    services::{OverdueFeeReport, TaskLifecycleService},
};
use chrono::{DateTime, Local, NaiveDate, NaiveTime, Utc};
use mockable::Clock;
use rstest::fixture;

/// Clock pinned to midnight UTC of a fixed calendar date.
#[derive(Debug, Clone)]
pub struct FixedClock(DateTime<Utc>);

impl FixedClock {
    /// Creates a clock fixed at midnight UTC on the given date.
    #[must_use]
    pub fn at(date: NaiveDate) -> Self {
        Self(date.and_time(NaiveTime::MIN).and_utc())
    }
}

impl Clock for FixedClock {
    fn local(&self) -> DateTime<Local> {
        self.0.with_timezone(&Local)
    }

    fn utc(&self) -> DateTime<Utc> {
        self.0
    }
}

/// Service type used by the BDD world.
pub type TestFeeService = TaskLifecycleService<InMemoryTaskRepository, FixedClock>;

/// Scenario world for overdue-fee behaviour tests.
pub struct FeeWorld {
    /// Store shared by every service the scenario builds.
    pub repository: InMemoryTaskRepository,
    /// Service, available once the scenario fixes the calendar.
    pub service: Option<TestFeeService>,
    /// Identifier of the task under test.
    pub task_id: Option<TaskId>,
    /// Most recent fee calculation result.
    pub report: Option<OverdueFeeReport>,
}

impl FeeWorld {
    /// Creates a world with an empty store and no fixed calendar.
    #[must_use]
    pub fn new() -> Self {
        Self {
            repository: InMemoryTaskRepository::new(),
            service: None,
            task_id: None,
            report: None,
        }
    }
}

impl Default for FeeWorld {
    fn default() -> Self {
        Self::new()
    }
}

/// Fixture that creates a new scenario world.
#[fixture]
pub fn world() -> FeeWorld {
    FeeWorld::default()
}

/// Runs an async operation within sync step definitions.
pub fn run_async<T>(future: impl std::future::Future<Output = T>) -> T {
    tokio::task::block_in_place(|| tokio::runtime::Handle::current().block_on(future))
}
