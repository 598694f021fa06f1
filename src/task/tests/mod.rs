//! Unit and service tests for the task module.

#![expect(
    clippy::expect_used,
    reason = "Test code uses expect for assertion clarity"
)]


use chrono::{DateTime, Local, NaiveDate, NaiveTime, Utc};
use mockable::Clock;

/// Clock pinned to midnight UTC of a fixed calendar date, so overdue-day
/// arithmetic is reproducible.
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

/// Parses a `YYYY-MM-DD` test date literal.
pub fn date(text: &str) -> NaiveDate {
    text.parse().expect("valid test date")
}
