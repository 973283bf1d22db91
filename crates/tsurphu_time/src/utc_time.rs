//! UTC calendar date/time with sub-second precision.
//!
//! Provides `UtcTime`, the canonical UTC instant produced by the time
//! normalizer and consumed by the DU engine. Construction validates every
//! field, so an out-of-range month or second never reaches the JD formulas.

use chrono::{DateTime, Datelike, NaiveDate, Timelike, Utc};
use serde::Serialize;

use crate::du::calcular_du;
use crate::error::TimeError;
use crate::julian::jd_to_calendar;

/// UTC calendar date with sub-second precision.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize)]
pub struct UtcTime {
    year: i32,
    month: u32,
    day: u32,
    hour: u32,
    minute: u32,
    second: f64,
}

impl UtcTime {
    /// Build a UTC instant from calendar fields.
    ///
    /// `second` may reach 60.x to carry a leap second.
    pub fn new(
        year: i32,
        month: u32,
        day: u32,
        hour: u32,
        minute: u32,
        second: f64,
    ) -> Result<Self, TimeError> {
        if NaiveDate::from_ymd_opt(year, month, day).is_none() {
            return Err(TimeError::InvalidDate(format!(
                "{year:04}-{month:02}-{day:02}"
            )));
        }
        if hour > 23 || minute > 59 || !second.is_finite() || !(0.0..61.0).contains(&second) {
            return Err(TimeError::InvalidDate(format!(
                "{hour:02}:{minute:02}:{second}"
            )));
        }
        Ok(Self {
            year,
            month,
            day,
            hour,
            minute,
            second,
        })
    }

    /// Convert a chrono UTC timestamp.
    pub fn from_datetime(dt: &DateTime<Utc>) -> Self {
        Self {
            year: dt.year(),
            month: dt.month(),
            day: dt.day(),
            hour: dt.hour(),
            minute: dt.minute(),
            second: dt.second() as f64 + dt.nanosecond() as f64 / 1e9,
        }
    }

    /// Convert back to a chrono UTC timestamp (nanosecond resolution).
    pub fn to_datetime(&self) -> Option<DateTime<Utc>> {
        let mut whole = self.second.floor() as u32;
        let mut nanos = ((self.second - self.second.floor()) * 1e9).round() as u32;
        if nanos >= 1_000_000_000 {
            whole += 1;
            nanos -= 1_000_000_000;
        }
        // chrono carries a leap second as second 59 with nanos >= 1e9.
        if whole >= 60 {
            whole = 59;
            nanos += 1_000_000_000;
        }
        NaiveDate::from_ymd_opt(self.year, self.month, self.day)?
            .and_hms_nano_opt(self.hour, self.minute, whole, nanos)
            .map(|naive| naive.and_utc())
    }

    /// Julian Date (DU) of this instant.
    pub fn to_jd(&self) -> f64 {
        calcular_du(self)
    }

    /// Instant at a Julian Date.
    pub fn from_jd(jd: f64) -> Result<Self, TimeError> {
        if !jd.is_finite() {
            return Err(TimeError::OutOfRange(jd));
        }
        let (year, month, day_frac) = jd_to_calendar(jd);
        let day = day_frac.floor() as u32;
        let total_seconds = day_frac.fract() * 86_400.0;
        let hour = (total_seconds / 3600.0).floor() as u32;
        let minute = ((total_seconds % 3600.0) / 60.0).floor() as u32;
        let second = total_seconds % 60.0;
        Self::new(year, month, day, hour, minute, second)
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn month(&self) -> u32 {
        self.month
    }

    pub fn day(&self) -> u32 {
        self.day
    }

    pub fn hour(&self) -> u32 {
        self.hour
    }

    pub fn minute(&self) -> u32 {
        self.minute
    }

    pub fn second(&self) -> f64 {
        self.second
    }
}

impl From<DateTime<Utc>> for UtcTime {
    fn from(dt: DateTime<Utc>) -> Self {
        Self::from_datetime(&dt)
    }
}

impl std::fmt::Display for UtcTime {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let whole = self.second as u32;
        let frac = self.second - whole as f64;
        if frac.abs() < 1e-9 {
            write!(
                f,
                "{:04}-{:02}-{:02}T{:02}:{:02}:{:02}Z",
                self.year, self.month, self.day, self.hour, self.minute, whole
            )
        } else {
            write!(
                f,
                "{:04}-{:02}-{:02}T{:02}:{:02}:{:09.6}Z",
                self.year, self.month, self.day, self.hour, self.minute, self.second
            )
        }
    }
}
