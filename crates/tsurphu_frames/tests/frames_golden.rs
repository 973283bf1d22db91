//! Known-value and property checks for the equatorial → ecliptic rotation.

use proptest::prelude::*;
use tsurphu_frames::{
    OBLIQUITY_J2000_DEG, ecliptic_to_equatorial, equatorial_to_ecliptic, mean_obliquity_deg,
    normalize_deg,
};

const J2000: f64 = 2_451_545.0;

#[test]
fn ecliptic_north_pole_maps_to_latitude_90() {
    // The ecliptic pole sits at RA 270°, Dec 90° - ε.
    let eps = mean_obliquity_deg(J2000);
    let e = equatorial_to_ecliptic(270.0, 90.0 - eps, J2000).unwrap();
    assert!((e.lat_deg - 90.0).abs() < 1e-7, "lat = {}", e.lat_deg);
}

#[test]
fn obliquity_at_j2000_is_iau_value() {
    assert!((mean_obliquity_deg(J2000) - OBLIQUITY_J2000_DEG).abs() < 1e-12);
    assert!((OBLIQUITY_J2000_DEG - 23.439_279_44).abs() < 1e-8);
}

#[test]
fn autumn_equinox_point() {
    let e = equatorial_to_ecliptic(180.0, 0.0, J2000).unwrap();
    assert!((e.lon_deg - 180.0).abs() < 1e-9);
    assert!(e.lat_deg.abs() < 1e-9);
}

#[test]
fn pollux_lies_near_the_ecliptic() {
    // Pollux (J2000): RA 116.3290°, Dec +28.0262°; ecliptic λ ≈ 113.2°, β ≈ +6.7°.
    let e = equatorial_to_ecliptic(116.329, 28.0262, J2000).unwrap();
    assert!((e.lon_deg - 113.2).abs() < 0.1, "lon = {}", e.lon_deg);
    assert!((e.lat_deg - 6.68).abs() < 0.1, "lat = {}", e.lat_deg);
}

proptest! {
    #[test]
    fn normalize_is_idempotent_and_in_range(x in -1.0e6f64..1.0e6) {
        let n = normalize_deg(x);
        prop_assert!((0.0..360.0).contains(&n));
        prop_assert_eq!(normalize_deg(n), n);
    }

    #[test]
    fn rotation_roundtrips(ra in 0.0f64..360.0, dec in -89.0f64..89.0, jd in 2_400_000.0f64..2_500_000.0) {
        let e = equatorial_to_ecliptic(ra, dec, jd).unwrap();
        prop_assert!((0.0..360.0).contains(&e.lon_deg));
        prop_assert!((-90.0..=90.0).contains(&e.lat_deg));
        let (ra2, dec2) = ecliptic_to_equatorial(e.lon_deg, e.lat_deg, jd).unwrap();
        let dra = (ra2 - ra + 540.0).rem_euclid(360.0) - 180.0;
        prop_assert!(dra.abs() < 1e-7, "ra {} -> {}", ra, ra2);
        prop_assert!((dec2 - dec).abs() < 1e-7);
    }
}
