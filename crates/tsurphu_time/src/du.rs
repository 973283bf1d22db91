//! The DU engine: instants to continuous day counts and back.
//!
//! Two entry points produce the same Julian Date through different routes:
//! [`calcular_du`] works from calendar fields (Meeus), [`jd_from_instant`]
//! from the Unix clock. They agree to well under 1e-6 day.

use chrono::{DateTime, Utc};

use crate::error::TimeError;
use crate::julian::{SECONDS_PER_DAY, UNIX_EPOCH_JD, calendar_to_jd};
use crate::utc_time::UtcTime;

/// Julian Date (DU) of a UTC instant, from its calendar fields.
pub fn calcular_du(instant: &UtcTime) -> f64 {
    let time_of_day =
        (instant.hour() as f64 + (instant.minute() as f64 + instant.second() / 60.0) / 60.0)
            / 24.0;
    calendar_to_jd(
        instant.year(),
        instant.month(),
        instant.day() as f64 + time_of_day,
    )
}

/// Julian Date of a clock instant, used to drive an external simulated clock.
pub fn jd_from_instant(instant: &DateTime<Utc>) -> f64 {
    let secs = instant.timestamp();
    let days = secs.div_euclid(86_400) as f64;
    let rem = secs.rem_euclid(86_400) as f64 + instant.timestamp_subsec_nanos() as f64 / 1e9;
    (UNIX_EPOCH_JD + days) + rem / SECONDS_PER_DAY
}

/// Clock instant at a Julian Date, rounded to the nearest nanosecond.
pub fn instant_from_jd(jd: f64) -> Result<DateTime<Utc>, TimeError> {
    if !jd.is_finite() {
        return Err(TimeError::OutOfRange(jd));
    }
    let days = (jd - UNIX_EPOCH_JD).floor();
    let rem = (jd - UNIX_EPOCH_JD - days) * SECONDS_PER_DAY;
    let mut whole = rem.floor();
    let mut nanos = ((rem - whole) * 1e9).round();
    if nanos >= 1e9 {
        whole += 1.0;
        nanos -= 1e9;
    }
    let secs = days * SECONDS_PER_DAY + whole;
    if secs.abs() > i64::MAX as f64 / 2.0 {
        return Err(TimeError::OutOfRange(jd));
    }
    DateTime::from_timestamp(secs as i64, nanos as u32).ok_or(TimeError::OutOfRange(jd))
}
