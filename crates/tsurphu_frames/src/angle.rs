//! Angle normalization.

/// Normalize an angle to [0, 360) degrees.
///
/// Idempotent for every finite input. NaN and infinities map to NaN.
pub fn normalize_deg(deg: f64) -> f64 {
    let r = deg.rem_euclid(360.0);
    // Tiny negative inputs round up to exactly 360.0.
    if r >= 360.0 { 0.0 } else { r }
}

/// Normalize an angle to [-180, 180) degrees.
pub fn normalize_to_pm180(deg: f64) -> f64 {
    let r = normalize_deg(deg);
    if r >= 180.0 { r - 360.0 } else { r }
}
