//! Civil time normalization and Julian Day conversions.
//!
//! This crate provides:
//! - Local civil date/time + IANA zone → UTC ([`to_utc`]) and back ([`from_utc`])
//! - Julian Date ↔ proleptic Gregorian calendar conversions
//! - The DU ("universal day") engine: [`calcular_du`] for calendar-field
//!   instants and [`jd_from_instant`] for clock-style instants
//! - [`UtcTime`], the validated UTC instant shared by the other crates

pub mod du;
pub mod error;
pub mod julian;
pub mod utc_time;
pub mod zone;

pub use du::{calcular_du, instant_from_jd, jd_from_instant};
pub use error::TimeError;
pub use julian::{
    J2000_JD, SECONDS_PER_DAY, UNIX_EPOCH_JD, calendar_to_jd, jd_to_calendar, jd_to_iso_date,
};
pub use utc_time::UtcTime;
pub use zone::{from_utc, parse_zone, to_utc};
