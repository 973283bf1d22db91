//! Local civil time ↔ UTC through the IANA timezone database.
//!
//! Ambiguous wall-clock times (the repeated hour of a fall-back transition)
//! resolve to the earlier of the two offsets. Wall-clock times skipped by a
//! spring-forward transition are rejected.

use chrono::{NaiveDate, NaiveDateTime, NaiveTime, TimeZone, Utc};
use chrono_tz::Tz;

use crate::error::TimeError;
use crate::utc_time::UtcTime;

/// Look up an IANA timezone identifier such as `"America/Bogota"`.
pub fn parse_zone(name: &str) -> Result<Tz, TimeError> {
    name.parse::<Tz>()
        .map_err(|_| TimeError::InvalidTimezone(name.to_string()))
}

/// Convert a local civil date and time in `zone` to a UTC instant.
pub fn to_utc(date: NaiveDate, time: NaiveTime, zone: &str) -> Result<UtcTime, TimeError> {
    let tz = parse_zone(zone)?;
    let local = date.and_time(time);
    let resolved = tz.from_local_datetime(&local).earliest().ok_or_else(|| {
        TimeError::NonexistentLocalTime {
            local: local.to_string(),
            zone: zone.to_string(),
        }
    })?;
    Ok(UtcTime::from_datetime(&resolved.with_timezone(&Utc)))
}

/// Express a UTC instant as local civil time in `zone`.
pub fn from_utc(instant: &UtcTime, zone: &str) -> Result<NaiveDateTime, TimeError> {
    let tz = parse_zone(zone)?;
    let dt = instant
        .to_datetime()
        .ok_or_else(|| TimeError::InvalidDate(instant.to_string()))?;
    Ok(dt.with_timezone(&tz).naive_local())
}
