//! Tithi (lunar day) computation.
//!
//! The Moon-minus-Sun elongation is divided into 30 equal segments of 12°.
//! Tithi 1 begins at new moon (elongation 0°) and tithi 16 at full moon
//! (elongation 180°).

use serde::Serialize;
use tsurphu_frames::{FrameError, normalize_deg};

/// Span of one tithi: 360/30 = 12 degrees.
pub const TITHI_SEGMENT_DEG: f64 = 12.0;

/// Half of the lunar month.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Paksha {
    /// Tithis 1..=15, new moon to full moon.
    Waxing,
    /// Tithis 16..=30, full moon to new moon.
    Waning,
}

impl Paksha {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Waxing => "Waxing",
            Self::Waning => "Waning",
        }
    }
}

/// Result of [`compute_tithi`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TithiInfo {
    /// Moon-minus-Sun elongation in [0, 360).
    pub delta_deg: f64,
    /// 1-based tithi index (1..=30).
    pub tithi: u8,
    pub paksha: Paksha,
    /// 1-based tithi within the paksha (1..=15).
    pub tithi_in_paksha: u8,
}

/// Tithi for the given Moon and Sun ecliptic longitudes (degrees).
///
/// Either longitude being NaN or infinite is rejected with
/// [`FrameError::NonFinite`].
pub fn compute_tithi(moon_lon_deg: f64, sun_lon_deg: f64) -> Result<TithiInfo, FrameError> {
    if !moon_lon_deg.is_finite() {
        return Err(FrameError::NonFinite("Moon longitude"));
    }
    if !sun_lon_deg.is_finite() {
        return Err(FrameError::NonFinite("Sun longitude"));
    }
    let delta = normalize_deg(moon_lon_deg - sun_lon_deg);
    let tithi = ((delta / TITHI_SEGMENT_DEG).floor() as u8).min(29) + 1;
    let (paksha, tithi_in_paksha) = if tithi <= 15 {
        (Paksha::Waxing, tithi)
    } else {
        (Paksha::Waning, tithi - 15)
    };
    Ok(TithiInfo {
        delta_deg: delta,
        tithi,
        paksha,
        tithi_in_paksha,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_moon_is_tithi_1() {
        let t = compute_tithi(100.0, 100.0).unwrap();
        assert_eq!(t.tithi, 1);
        assert_eq!(t.delta_deg, 0.0);
        assert_eq!(t.paksha, Paksha::Waxing);
    }

    #[test]
    fn full_moon_is_tithi_16() {
        let t = compute_tithi(280.0, 100.0).unwrap();
        assert_eq!(t.tithi, 16);
        assert_eq!(t.paksha, Paksha::Waning);
        assert_eq!(t.tithi_in_paksha, 1);
    }

    #[test]
    fn wraps_across_zero_aries() {
        // Moon at 5°, Sun at 350°: elongation 15° → tithi 2.
        let t = compute_tithi(5.0, 350.0).unwrap();
        assert!((t.delta_deg - 15.0).abs() < 1e-9);
        assert_eq!(t.tithi, 2);
    }

    #[test]
    fn last_tithi() {
        let t = compute_tithi(359.9, 0.0).unwrap();
        assert_eq!(t.tithi, 30);
        assert_eq!(t.tithi_in_paksha, 15);
    }

    #[test]
    fn segment_boundary_belongs_to_next_tithi() {
        assert_eq!(compute_tithi(12.0, 0.0).unwrap().tithi, 2);
        assert_eq!(compute_tithi(11.999_999, 0.0).unwrap().tithi, 1);
    }

    #[test]
    fn non_finite_longitudes_are_rejected() {
        assert_eq!(
            compute_tithi(f64::NAN, 10.0),
            Err(FrameError::NonFinite("Moon longitude"))
        );
        assert_eq!(
            compute_tithi(f64::INFINITY, 10.0),
            Err(FrameError::NonFinite("Moon longitude"))
        );
        assert_eq!(
            compute_tithi(10.0, f64::NEG_INFINITY),
            Err(FrameError::NonFinite("Sun longitude"))
        );
    }
}
