//! Phugpa conversions checked against published Losar dates and the
//! 2024 almanac.

use tsurphu_calendar::{
    CalendarError, DayKind, HenningBackend, Resolution, TibetanDate, Tradition, UnresolvedReason,
    tibetan_year_from_gregorian,
};

/// (Gregorian year, DU at the start of Losar).
const LOSAR: [(i32, f64); 34] = [
    (1999, 2_451_226.5),
    (2000, 2_451_580.5),
    (2001, 2_451_964.5),
    (2002, 2_452_318.5),
    (2003, 2_452_701.5),
    (2004, 2_453_056.5),
    (2005, 2_453_410.5),
    (2006, 2_453_794.5),
    (2007, 2_454_149.5),
    (2008, 2_454_503.5),
    (2009, 2_454_887.5),
    (2010, 2_455_241.5),
    (2011, 2_455_625.5),
    (2012, 2_455_979.5),
    (2013, 2_456_334.5),
    (2014, 2_456_718.5),
    (2015, 2_457_072.5),
    (2016, 2_457_427.5),
    (2017, 2_457_811.5),
    (2018, 2_458_165.5),
    (2019, 2_458_519.5),
    (2020, 2_458_903.5),
    (2021, 2_459_257.5),
    (2022, 2_459_641.5),
    (2023, 2_459_996.5),
    (2024, 2_460_350.5),
    (2025, 2_460_734.5),
    (2026, 2_461_089.5),
    (2027, 2_461_443.5),
    (2028, 2_461_827.5),
    (2029, 2_462_181.5),
    (2030, 2_462_565.5),
    (2031, 2_462_919.5),
    (2032, 2_463_274.5),
];

fn ymd(d: &TibetanDate) -> (i32, u8, bool, u8, DayKind) {
    (
        d.year.unwrap(),
        d.month.unwrap(),
        d.is_intercalary,
        d.day.unwrap(),
        d.day_kind.unwrap(),
    )
}

#[test]
fn losar_dates_1999_to_2032() {
    let backend = HenningBackend::phugpa();
    for (greg, du) in LOSAR {
        let year = tibetan_year_from_gregorian(greg);
        assert_eq!(backend.losar(year), Ok(du), "Losar {greg}");
        let d = backend.from_du_tibetano(du + 0.3);
        assert_eq!(ymd(&d), (year, 1, false, 1, DayKind::Ordinary), "Losar {greg}");
    }
}

#[test]
fn day_before_losar_belongs_to_previous_year() {
    let backend = HenningBackend::phugpa();
    let d = backend.from_du_tibetano(2_460_349.5);
    assert_eq!(ymd(&d), (2150, 12, false, 30, DayKind::Ordinary));
    // Day 30 of the last month of 2151 is omitted.
    let d = backend.from_du_tibetano(2_460_733.5);
    assert_eq!(ymd(&d), (2151, 12, false, 29, DayKind::Ordinary));
}

#[test]
fn saga_dawa_duchen_2024() {
    let d = HenningBackend::phugpa().from_du_tibetano(2_460_453.5);
    assert_eq!(ymd(&d), (2151, 4, false, 15, DayKind::Ordinary));
    assert_eq!(d.rabjung_cycle, Some(17));
    assert_eq!(d.position_in_cycle, Some(38));
    assert!(d.is_resolved());
}

#[test]
fn repeated_day_in_saga_dawa() {
    let backend = HenningBackend::phugpa();
    let first = backend.from_du_tibetano(2_460_445.5);
    let second = backend.from_du_tibetano(2_460_446.5);
    assert_eq!(ymd(&first), (2151, 4, false, 8, DayKind::Ordinary));
    assert_eq!(ymd(&second), (2151, 4, false, 8, DayKind::Repeated));
}

#[test]
fn intercalary_seventh_month_2024() {
    let backend = HenningBackend::phugpa();
    let leap = backend.from_du_tibetano(2_460_527.5);
    assert_eq!(ymd(&leap), (2151, 7, true, 1, DayKind::Ordinary));
    let regular = backend.from_du_tibetano(2_460_556.5);
    assert_eq!(ymd(&regular), (2151, 7, false, 1, DayKind::Ordinary));
    let repeated = backend.from_du_tibetano(2_460_557.5);
    assert_eq!(ymd(&repeated), (2151, 7, false, 1, DayKind::Repeated));
}

#[test]
fn omitted_days_never_reach_callers() {
    let backend = HenningBackend::phugpa();
    let start = 2_460_350.5;
    let mut previous: Option<(u8, bool, u8)> = None;
    for k in 0..400 {
        let d = backend.from_du_tibetano(start + f64::from(k));
        let (_, month, leap, day, kind) = ymd(&d);
        assert!((1..=30).contains(&day));
        assert!((1..=12).contains(&month));
        if let Some((pm, pl, pd)) = previous {
            if (pm, pl) == (month, leap) {
                match kind {
                    DayKind::Repeated => assert_eq!(day, pd),
                    DayKind::Ordinary => assert!(day > pd && day - pd <= 2),
                }
            }
        }
        previous = Some((month, leap, day));
    }
}

#[test]
fn decades_away_from_epoch_still_resolve() {
    let backend = HenningBackend::phugpa();
    let d = backend.from_du_tibetano(2_433_447.5);
    assert_eq!(d.year, Some(2077));
    let d = backend.from_du_tibetano(2_488_128.5);
    assert_eq!(d.year, Some(2227));
}

#[test]
fn uncalibrated_tsurphu_is_unresolved() {
    let backend = HenningBackend::for_tradition(Tradition::default());
    for du in [0.0, 2_451_545.0, 2_460_350.5, 2_500_000.25] {
        let d = backend.from_du_tibetano(du);
        assert_eq!(d.year, None);
        assert_eq!(d.month, None);
        assert_eq!(d.day, None);
        assert_eq!(d.position_in_cycle, None);
        assert_eq!(
            d.resolution,
            Resolution::Unresolved {
                reason: UnresolvedReason::EpochUncalibrated
            }
        );
    }
    assert_eq!(backend.losar(2151), Err(CalendarError::EpochUncalibrated));
    assert_eq!(
        backend.try_from_du(2_460_350.5),
        Err(CalendarError::EpochUncalibrated)
    );
}

#[test]
fn far_and_invalid_du_are_unresolved() {
    let backend = HenningBackend::phugpa();
    let d = backend.from_du_tibetano(f64::NAN);
    assert_eq!(
        d.resolution,
        Resolution::Unresolved {
            reason: UnresolvedReason::InvalidDu
        }
    );
    let d = backend.from_du_tibetano(1.0e9);
    assert_eq!(
        d.resolution,
        Resolution::Unresolved {
            reason: UnresolvedReason::OutOfCoverage
        }
    );
}
