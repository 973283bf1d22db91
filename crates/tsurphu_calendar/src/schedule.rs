//! Month schedules: lazy generators of the month sequence.
//!
//! A schedule maps a signed month index to a fully built [`TibetanMonth`].
//! Consecutive indices are consecutive months, intercalary ones included;
//! the resolver walks them outward from the epoch and never materializes
//! more than it needs.

use crate::error::CalendarError;
use crate::month::{DayGrid, TibetanMonth};

/// Lazily generated sequence of Tibetan months.
pub trait MonthSchedule {
    /// Index of the named month, or `None` if the schedule has no such
    /// month (e.g. an intercalary month in a year without one).
    fn month_index(&self, year: i32, number: u8, is_intercalary: bool) -> Option<i64>;

    /// The month at `index`.
    fn month(&self, index: i64) -> Result<TibetanMonth, CalendarError>;
}

/// Denominator of the mean date: 1/11312 day.
const MEAN_DATE_DENOM: i64 = 11_312;
/// Mean date advance per month (29;31,50,0,480 days).
const MEAN_DATE_PER_MONTH: i64 = 334_050;
/// Mean date advance per lunar day (0;59,3,4,16 days).
const MEAN_DATE_PER_DAY: i64 = 11_135;

/// Moon anomaly advance per month and per lunar day, in 1/126 steps of a 28-step cycle.
const ANOMALY_PER_MONTH: i64 = 253;
const ANOMALY_PER_DAY: i64 = 126;
const ANOMALY_CYCLE: i64 = 28 * 126;

/// Mean sun advance per month and per lunar day, in 1/402 steps of a 12-step cycle.
const SUN_PER_MONTH: i64 = 390;
const SUN_PER_DAY: i64 = 13;
const SUN_CYCLE: i64 = 12 * 402;

/// Weights that bring the mean date and both equations to one denominator.
const MEAN_WEIGHT: i64 = 9_045;
const MOON_WEIGHT: i64 = 13_534;
const SUN_WEIGHT: i64 = 4_242;
const TRUE_DATE_DENOM: i64 = MEAN_DATE_DENOM * MEAN_WEIGHT;

/// Largest month index magnitude whose weighted mean date fits in `i64`.
pub const MAX_MONTH_INDEX: i64 = 1_000_000_000;

/// Moon equation table, first quadrant (steps 0..=7).
const MOON_TABLE: [i64; 8] = [0, 5, 10, 15, 19, 22, 24, 25];
/// Sun equation table, first quadrant (steps 0..=3).
const SUN_TABLE: [i64; 4] = [0, 6, 10, 11];

fn moon_tab(step: i64) -> i64 {
    let i = step.rem_euclid(28) as usize;
    match i {
        0..=7 => MOON_TABLE[i],
        8..=14 => MOON_TABLE[14 - i],
        15..=21 => -MOON_TABLE[i - 14],
        _ => -MOON_TABLE[28 - i],
    }
}

fn sun_tab(step: i64) -> i64 {
    let i = step.rem_euclid(12) as usize;
    match i {
        0..=3 => SUN_TABLE[i],
        4..=6 => SUN_TABLE[6 - i],
        7..=9 => -SUN_TABLE[i - 6],
        _ => -SUN_TABLE[12 - i],
    }
}

/// Kalachakra true-date arithmetic, kept in exact integer fractions.
///
/// Month indices are true month counts: 0 is the third month of
/// `epoch_year`. A regular month `x` (counted from the same origin) has
/// true month count `(67 x + intercalation_offset) div 65`; when that
/// count jumps by two, the month in between is intercalary and precedes
/// the regular month of the same number.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KalachakraSchedule {
    /// Tibetan year of the month-count origin.
    pub epoch_year: i32,
    pub intercalation_offset: i64,
    /// Mean date at count 0, lunar day 0, in 1/11312 day units (Julian Day).
    pub mean_date_epoch: i64,
    pub anomaly_epoch: i64,
    pub sun_epoch: i64,
}

impl KalachakraSchedule {
    /// Phugpa constants, checked against Losar 1999–2032.
    pub const PHUGPA: Self = Self {
        epoch_year: 933,
        intercalation_offset: 75,
        mean_date_epoch: 2_015_501 * MEAN_DATE_DENOM + 2 * 4_783,
        anomaly_epoch: 475,
        sun_epoch: 3_252,
    };

    fn regular_month_count(&self, year: i32, number: u8) -> i64 {
        12 * (i64::from(year) - i64::from(self.epoch_year)) + i64::from(number) - 3
    }

    fn true_month(&self, x: i64) -> i64 {
        (67 * x + self.intercalation_offset).div_euclid(65)
    }

    /// Regular month count `x` whose month carries index `n`, and whether
    /// `n` is the intercalary month preceding it.
    fn regular_for(&self, n: i64) -> (i64, bool) {
        let mut x = (65 * n).div_euclid(67) - 2;
        while self.true_month(x) < n {
            x += 1;
        }
        while self.true_month(x - 1) >= n {
            x -= 1;
        }
        (x, self.true_month(x) != n)
    }

    /// Year, month number and intercalary flag of index `n`.
    pub(crate) fn month_label(&self, n: i64) -> (i32, u8, bool) {
        let (x, leap) = self.regular_for(n);
        let t = x + 2;
        let year = i64::from(self.epoch_year) + t.div_euclid(12);
        (year as i32, (t.rem_euclid(12) + 1) as u8, leap)
    }

    /// Julian Day Number of the civil day in which lunar day `d` of month
    /// `n` ends.
    pub(crate) fn true_date_jdn(&self, n: i64, d: i64) -> i64 {
        let mean = n * MEAN_DATE_PER_MONTH + d * MEAN_DATE_PER_DAY + self.mean_date_epoch;

        let anomaly = (n * ANOMALY_PER_MONTH + d * ANOMALY_PER_DAY + self.anomaly_epoch)
            .rem_euclid(ANOMALY_CYCLE);
        let (step, frac) = (anomaly / 126, anomaly % 126);
        let moon = moon_tab(step) * 126 + frac * (moon_tab(step + 1) - moon_tab(step));

        let sun_pos =
            (n * SUN_PER_MONTH + d * SUN_PER_DAY + self.sun_epoch).rem_euclid(SUN_CYCLE);
        let (step, frac) = (sun_pos / 402, sun_pos % 402);
        let sun = sun_tab(step) * 402 + frac * (sun_tab(step + 1) - sun_tab(step));

        (mean * MEAN_WEIGHT + moon * MOON_WEIGHT - sun * SUN_WEIGHT).div_euclid(TRUE_DATE_DENOM)
    }

    /// JDN of the first civil day of month `n`.
    #[cfg(test)]
    fn month_start_jdn(&self, n: i64) -> i64 {
        self.true_date_jdn(n - 1, 30) + 1
    }

    /// Civil days closed by each lunar day of month `n`.
    fn civil_counts(&self, n: i64) -> [u8; 30] {
        let mut counts = [0u8; 30];
        let mut prev = self.true_date_jdn(n - 1, 30);
        for (d, slot) in (1i64..).zip(counts.iter_mut()) {
            let end = self.true_date_jdn(n, d);
            *slot = (end - prev).clamp(0, u8::MAX.into()) as u8;
            prev = end;
        }
        counts
    }
}

impl MonthSchedule for KalachakraSchedule {
    fn month_index(&self, year: i32, number: u8, is_intercalary: bool) -> Option<i64> {
        if !(1..=12).contains(&number) {
            return None;
        }
        let x = self.regular_month_count(year, number);
        let n = self.true_month(x);
        match (is_intercalary, n - self.true_month(x - 1)) {
            (false, _) => Some(n),
            (true, 2) => Some(n - 1),
            (true, _) => None,
        }
    }

    fn month(&self, index: i64) -> Result<TibetanMonth, CalendarError> {
        if index.unsigned_abs() > MAX_MONTH_INDEX.unsigned_abs() {
            return Err(CalendarError::InvalidMonth("month index outside the schedule's range"));
        }
        let (year, number, leap) = self.month_label(index);
        let grid = DayGrid::from_civil_counts(self.civil_counts(index))?;
        let notes = if leap {
            "intercalary; precedes the regular month of the same number"
        } else {
            ""
        };
        Ok(TibetanMonth::new(year, number, leap, grid, notes))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::month::DayKind;

    const K: KalachakraSchedule = KalachakraSchedule::PHUGPA;

    #[test]
    fn losar_2151_month_index() {
        assert_eq!(K.month_index(2151, 1, false), Some(15_064));
        assert_eq!(K.month_start_jdn(15_064), 2_460_351);
        assert_eq!(K.month_label(15_064), (2151, 1, false));
    }

    #[test]
    fn leap_seventh_month_of_2151() {
        let leap = K.month_index(2151, 7, true).unwrap();
        assert_eq!(leap, 15_070);
        assert_eq!(K.month_index(2151, 7, false), Some(15_071));
        assert_eq!(K.month_label(leap), (2151, 7, true));
        assert_eq!(K.month_index(2151, 6, true), None);
    }

    #[test]
    fn month_numbers_out_of_range() {
        assert_eq!(K.month_index(2151, 0, false), None);
        assert_eq!(K.month_index(2151, 13, false), None);
    }

    #[test]
    fn saga_dawa_2151_grid() {
        let m = K.month(15_067).unwrap();
        assert_eq!((m.year, m.spec.number, m.spec.is_intercalary), (2151, 4, false));
        assert_eq!(m.spec.length_days, 29);
        assert_eq!(m.grid.omitted_days(), vec![2, 25]);
        assert_eq!(m.grid.repeated_days(), vec![8]);
        assert_eq!(m.grid.civil_day(7), Some((8, DayKind::Repeated)));
        assert_eq!(K.month_start_jdn(15_067), 2_460_440);
    }

    #[test]
    fn consecutive_starts_match_lengths() {
        for n in 15_000..15_100 {
            let m = K.month(n).unwrap();
            assert_eq!(
                K.month_start_jdn(n + 1) - K.month_start_jdn(n),
                i64::from(m.spec.length_days),
                "month {n}"
            );
        }
    }

    #[test]
    fn labels_and_indices_agree() {
        for n in 14_000..14_400 {
            let (year, number, leap) = K.month_label(n);
            assert!((1..=12).contains(&number));
            assert_eq!(K.month_index(year, number, leap), Some(n), "month {n}");
        }
    }

    #[test]
    fn negative_indices_are_well_formed() {
        for n in -50..50 {
            let m = K.month(n).unwrap();
            assert!((29..=30).contains(&m.spec.length_days));
        }
    }

    #[test]
    fn extreme_indices_fail_instead_of_overflowing() {
        for n in [i64::MAX, i64::MIN, MAX_MONTH_INDEX + 1, -MAX_MONTH_INDEX - 1] {
            assert!(matches!(K.month(n), Err(CalendarError::InvalidMonth(_))), "month {n}");
        }
        let m = K.month(MAX_MONTH_INDEX).unwrap();
        assert!((29..=30).contains(&m.spec.length_days));
        let m = K.month(-MAX_MONTH_INDEX).unwrap();
        assert!((29..=30).contains(&m.spec.length_days));
    }

    #[test]
    fn equation_tables_are_antisymmetric() {
        for i in 0..28 {
            assert_eq!(moon_tab(i + 14), -moon_tab(i));
        }
        for i in 0..12 {
            assert_eq!(sun_tab(i + 6), -sun_tab(i));
        }
    }
}
