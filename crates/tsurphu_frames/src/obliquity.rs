//! Mean obliquity of the ecliptic of date.
//!
//! IAU 2006 polynomial (Hilton et al. 2006, _Celestial Mechanics_ 94, 351),
//! also published in IERS Conventions 2010, eq. 5.40. Public domain.

/// Julian Date of J2000.0.
const J2000_JD: f64 = 2_451_545.0;

/// Mean obliquity at J2000.0, in arcseconds.
pub const OBLIQUITY_J2000_ARCSEC: f64 = 84_381.406;

/// Mean obliquity at J2000.0, in degrees.
pub const OBLIQUITY_J2000_DEG: f64 = OBLIQUITY_J2000_ARCSEC / 3600.0;

/// Julian centuries since J2000.0: `(jd - 2451545.0) / 36525.0`.
pub fn julian_centuries(jd: f64) -> f64 {
    (jd - J2000_JD) / 36_525.0
}

/// Mean obliquity of the ecliptic in arcseconds, `t` in Julian centuries.
pub fn mean_obliquity_arcsec(t: f64) -> f64 {
    let t2 = t * t;
    let t3 = t2 * t;
    let t4 = t3 * t;
    let t5 = t4 * t;
    OBLIQUITY_J2000_ARCSEC - 46.836769 * t - 0.0001831 * t2 + 0.00200340 * t3
        - 0.000000576 * t4
        - 0.0000000434 * t5
}

/// Mean obliquity of the ecliptic of date, in degrees.
pub fn mean_obliquity_deg(jd: f64) -> f64 {
    mean_obliquity_arcsec(julian_centuries(jd)) / 3600.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn j2000_value() {
        assert_eq!(mean_obliquity_arcsec(0.0), OBLIQUITY_J2000_ARCSEC);
        assert!((mean_obliquity_deg(J2000_JD) - 23.439_279_4).abs() < 1e-7);
    }

    #[test]
    fn decreasing_this_millennium() {
        let now = mean_obliquity_deg(2_460_000.5);
        assert!(now < OBLIQUITY_J2000_DEG);
        // ~47"/century
        let drop_arcsec = (OBLIQUITY_J2000_DEG - now) * 3600.0;
        assert!((drop_arcsec - 46.84 * 0.232).abs() < 0.5, "drop = {drop_arcsec}");
    }

    #[test]
    fn centuries_conversion() {
        assert_eq!(julian_centuries(J2000_JD + 36_525.0), 1.0);
    }
}
