//! Error types for time normalization and JD conversion.

use thiserror::Error;

/// Errors from timezone resolution or calendar validation.
#[derive(Debug, Clone, PartialEq, Error)]
#[non_exhaustive]
pub enum TimeError {
    /// The IANA timezone identifier is not in the timezone database.
    #[error("unknown timezone identifier: {0}")]
    InvalidTimezone(String),
    /// Calendar fields do not name a real date or time of day.
    #[error("invalid date/time: {0}")]
    InvalidDate(String),
    /// The local wall-clock time is skipped by a daylight-saving transition.
    #[error("local time {local} does not exist in {zone}")]
    NonexistentLocalTime { local: String, zone: String },
    /// Julian Date is not finite or cannot be represented as a civil instant.
    #[error("Julian Date {0} is outside the representable range")]
    OutOfRange(f64),
}
