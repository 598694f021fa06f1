//! Tiered overdue-fee schedule.
//!
//! The daily rate escalates the longer a task stays overdue: a flat rate for
//! the first three days, a higher rate for days four to seven, and a severe
//! rate beyond that. Tier selection and fee arithmetic live together so the
//! reported strategy can never disagree with the charged amount.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Daily rate for days 1..=3 overdue, in currency units.
const STANDARD_RATE: u64 = 10;
/// Daily rate for days 4..=7 overdue.
const ESCALATED_RATE: u64 = 20;
/// Daily rate beyond day 7.
const SEVERE_RATE: u64 = 50;
/// Last day charged at the standard rate.
const STANDARD_TIER_END: u64 = 3;
/// Last day charged at the escalated rate.
const ESCALATED_TIER_END: u64 = 7;

/// Fee tier applied to a task, named after the overdue-day range that
/// selected it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FeeStrategy {
    /// Task is not overdue; no fee is charged.
    #[serde(rename = "NoOverdueStrategy")]
    NoOverdue,
    /// Overdue by 1 to 3 days, flat daily rate.
    #[serde(rename = "StandardFeeStrategy")]
    Standard,
    /// Overdue by 4 to 7 days, escalated daily rate past day 3.
    #[serde(rename = "EscalatingFeeStrategy")]
    Escalating,
    /// Overdue by more than 7 days, severe daily rate past day 7.
    #[serde(rename = "SevereFeeStrategy")]
    Severe,
}

impl FeeStrategy {
    /// Selects the tier for the given number of overdue days.
    #[must_use]
    pub const fn for_overdue_days(days: u64) -> Self {
        match days {
            0 => Self::NoOverdue,
            1..=STANDARD_TIER_END => Self::Standard,
            4..=ESCALATED_TIER_END => Self::Escalating,
            _ => Self::Severe,
        }
    }

    /// Returns the reported strategy name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::NoOverdue => "NoOverdueStrategy",
            Self::Standard => "StandardFeeStrategy",
            Self::Escalating => "EscalatingFeeStrategy",
            Self::Severe => "SevereFeeStrategy",
        }
    }
}

impl fmt::Display for FeeStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Computes the fee for the given number of overdue days, in currency units.
///
/// The schedule is monotonically non-decreasing and continuous at tier
/// boundaries: day 3 charges 30, day 7 charges 110.
#[must_use]
pub const fn fee_for_overdue_days(days: u64) -> u64 {
    const STANDARD_TIER_TOTAL: u64 = STANDARD_TIER_END * STANDARD_RATE;
    const ESCALATED_TIER_TOTAL: u64 =
        STANDARD_TIER_TOTAL + (ESCALATED_TIER_END - STANDARD_TIER_END) * ESCALATED_RATE;

    match days {
        0 => 0,
        1..=STANDARD_TIER_END => days * STANDARD_RATE,
        4..=ESCALATED_TIER_END => STANDARD_TIER_TOTAL + (days - STANDARD_TIER_END) * ESCALATED_RATE,
        _ => ESCALATED_TIER_TOTAL + (days - ESCALATED_TIER_END) * SEVERE_RATE,
    }
}
