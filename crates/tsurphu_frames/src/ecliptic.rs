//! Equatorial (RA/Dec of date) ↔ ecliptic (longitude/latitude of date).
//!
//! The rotation is about the equinox direction by the mean obliquity of
//! date. Nutation is not applied, so positions reported as apparent RA/Dec
//! land within ~20" of the true ecliptic of date.

use serde::Serialize;

use crate::angle::normalize_deg;
use crate::error::FrameError;
use crate::obliquity::mean_obliquity_deg;
use crate::spherical::{cartesian_to_spherical, rotate_x, spherical_to_cartesian};

/// Ecliptic longitude/latitude of date.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct EclipticCoords {
    /// Longitude in degrees, range [0, 360).
    pub lon_deg: f64,
    /// Latitude in degrees, range [-90, 90].
    pub lat_deg: f64,
}

fn check_inputs(a: f64, b: f64, jd: f64, lat_name: &'static str) -> Result<(), FrameError> {
    if !a.is_finite() || !b.is_finite() {
        return Err(FrameError::NonFinite("angle"));
    }
    if !jd.is_finite() {
        return Err(FrameError::NonFinite("Julian Date"));
    }
    if !(-90.0..=90.0).contains(&b) {
        return Err(FrameError::LatitudeOutOfRange(lat_name));
    }
    Ok(())
}

/// Convert right ascension / declination (degrees) to ecliptic coordinates
/// using the mean obliquity at `jd`.
pub fn equatorial_to_ecliptic(
    ra_deg: f64,
    dec_deg: f64,
    jd: f64,
) -> Result<EclipticCoords, FrameError> {
    check_inputs(ra_deg, dec_deg, jd, "declination")?;
    let eps = mean_obliquity_deg(jd).to_radians();
    let v = rotate_x(&spherical_to_cartesian(ra_deg, dec_deg), eps);
    let s = cartesian_to_spherical(&v);
    Ok(EclipticCoords {
        lon_deg: normalize_deg(s.lon_deg),
        lat_deg: s.lat_deg,
    })
}

/// Inverse of [`equatorial_to_ecliptic`]: returns `(ra_deg, dec_deg)`.
pub fn ecliptic_to_equatorial(
    lon_deg: f64,
    lat_deg: f64,
    jd: f64,
) -> Result<(f64, f64), FrameError> {
    check_inputs(lon_deg, lat_deg, jd, "latitude")?;
    let eps = mean_obliquity_deg(jd).to_radians();
    let v = rotate_x(&spherical_to_cartesian(lon_deg, lat_deg), -eps);
    let s = cartesian_to_spherical(&v);
    Ok((normalize_deg(s.lon_deg), s.lat_deg))
}
