//! Unit-sphere Cartesian ↔ spherical conversion.

use std::f64::consts::TAU;

/// Direction on the unit sphere: longitude and latitude.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SphericalCoords {
    /// Longitude in degrees, range [0, 360).
    /// Measured in the x-y plane from +x toward +y.
    pub lon_deg: f64,
    /// Latitude in degrees, range [-90, 90].
    /// Elevation above the x-y plane.
    pub lat_deg: f64,
}

/// Convert a Cartesian direction `[x, y, z]` to spherical coordinates.
///
/// The vector need not be normalized. The arcsine argument is clamped to
/// [-1, 1] so round-off at the poles cannot produce NaN.
pub fn cartesian_to_spherical(xyz: &[f64; 3]) -> SphericalCoords {
    let [x, y, z] = *xyz;
    let r = (x * x + y * y + z * z).sqrt();

    if r == 0.0 {
        return SphericalCoords {
            lon_deg: 0.0,
            lat_deg: 0.0,
        };
    }

    let lon = y.atan2(x);
    let lat = (z / r).clamp(-1.0, 1.0).asin();

    let lon = if lon < 0.0 { lon + TAU } else { lon };
    SphericalCoords {
        // Tiny negative angles round up to exactly TAU.
        lon_deg: if lon >= TAU { 0.0 } else { lon.to_degrees() },
        lat_deg: lat.to_degrees(),
    }
}

/// Unit vector pointing at `(lon_deg, lat_deg)`.
pub fn spherical_to_cartesian(lon_deg: f64, lat_deg: f64) -> [f64; 3] {
    let (sin_lon, cos_lon) = lon_deg.to_radians().sin_cos();
    let (sin_lat, cos_lat) = lat_deg.to_radians().sin_cos();
    [cos_lat * cos_lon, cos_lat * sin_lon, sin_lat]
}

/// Rotate a vector about the +x axis by `angle_rad` (frame rotation).
///
/// With `angle_rad` = obliquity this takes equatorial vectors to ecliptic.
pub fn rotate_x(v: &[f64; 3], angle_rad: f64) -> [f64; 3] {
    let (s, c) = angle_rad.sin_cos();
    [v[0], c * v[1] + s * v[2], -s * v[1] + c * v[2]]
}
