//! Error types for calendrical resolution.

use thiserror::Error;

/// Reasons a DU value cannot be mapped to a Tibetan date.
#[derive(Debug, Clone, PartialEq, Error)]
#[non_exhaustive]
pub enum CalendarError {
    /// The reference epoch has no concrete date/DU yet.
    #[error("reference epoch is not calibrated")]
    EpochUncalibrated,
    /// The year needed for a cycle lookup is itself unresolved.
    #[error("year is outside the modeled range")]
    YearOutOfCoverage,
    /// The target lies further from the epoch than the month walk will go.
    #[error("{days} days from the epoch is beyond the month walk bound")]
    OutOfCoverage { days: f64 },
    /// DU was NaN or infinite.
    #[error("DU value is not finite")]
    InvalidDu,
    /// The epoch anchor does not name a civil day of its schedule.
    #[error("invalid epoch: {0}")]
    InvalidEpoch(&'static str),
    /// A month's day grid is inconsistent, or its index is outside the
    /// schedule's range.
    #[error("invalid month: {0}")]
    InvalidMonth(&'static str),
}
