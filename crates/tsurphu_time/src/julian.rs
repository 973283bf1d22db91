//! Julian Date ↔ proleptic Gregorian calendar conversions.
//!
//! Algorithms from Meeus, _Astronomical Algorithms_ (2nd ed.), ch. 7, with
//! the Gregorian century correction applied to every date.

/// Julian Date of the J2000.0 epoch (2000-01-01T12:00:00 TT).
pub const J2000_JD: f64 = 2_451_545.0;

pub const SECONDS_PER_DAY: f64 = 86_400.0;

/// Julian Date of the Unix epoch, 1970-01-01T00:00:00Z.
pub const UNIX_EPOCH_JD: f64 = 2_440_587.5;

/// Convert a proleptic Gregorian date to a Julian Date.
///
/// `day_frac` is the day of month with the time of day as its fractional
/// part (e.g. `10.5` = the 10th at 12:00). January and February count as
/// months 13 and 14 of the previous year so the leap day falls at the end
/// of the computational year.
pub fn calendar_to_jd(year: i32, month: u32, day_frac: f64) -> f64 {
    let (y, m) = if month <= 2 {
        (year as f64 - 1.0, month as f64 + 12.0)
    } else {
        (year as f64, month as f64)
    };

    let century = (y / 100.0).floor();
    let b = 2.0 - century + (century / 4.0).floor();

    let day = day_frac.floor();
    let frac = day_frac - day;

    // Every term here is a half-integer, so the sum is exact and the time of
    // day is only rounded once.
    let whole = (365.25 * (y + 4716.0)).floor() + (30.6001 * (m + 1.0)).floor() + day + b - 1524.5;
    whole + frac
}

/// Convert a Julian Date to a proleptic Gregorian `(year, month, day_frac)`.
pub fn jd_to_calendar(jd: f64) -> (i32, u32, f64) {
    let z = (jd + 0.5).floor();
    let f = jd + 0.5 - z;

    let alpha = ((z - 1_867_216.25) / 36_524.25).floor();
    let a = z + 1.0 + alpha - (alpha / 4.0).floor();

    let b = a + 1524.0;
    let c = ((b - 122.1) / 365.25).floor();
    let d = (365.25 * c).floor();
    let e = ((b - d) / 30.6001).floor();

    let day = b - d - (30.6001 * e).floor() + f;
    let month = if e < 14.0 { e - 1.0 } else { e - 13.0 };
    let year = if month > 2.0 { c - 4716.0 } else { c - 4715.0 };

    (year as i32, month as u32, day)
}

/// ISO 8601 calendar date (`YYYY-MM-DD`) of the civil day containing `jd`.
pub fn jd_to_iso_date(jd: f64) -> String {
    let (y, m, d) = jd_to_calendar(jd);
    format!("{:04}-{:02}-{:02}", y, m, d.floor() as u32)
}
