//! Frame conversion helpers for sky positions reported by an ephemeris source.
//!
//! Provides the equatorial ↔ ecliptic rotation (mean obliquity of date),
//! unit-sphere Cartesian ↔ spherical conversions, and angle normalization.

pub mod angle;
pub mod ecliptic;
pub mod error;
pub mod obliquity;
pub mod spherical;

pub use angle::{normalize_deg, normalize_to_pm180};
pub use ecliptic::{EclipticCoords, ecliptic_to_equatorial, equatorial_to_ecliptic};
pub use error::FrameError;
pub use obliquity::{
    OBLIQUITY_J2000_ARCSEC, OBLIQUITY_J2000_DEG, julian_centuries, mean_obliquity_arcsec,
    mean_obliquity_deg,
};
pub use spherical::{SphericalCoords, cartesian_to_spherical, rotate_x, spherical_to_cartesian};
