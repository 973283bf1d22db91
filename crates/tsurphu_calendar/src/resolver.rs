//! Month Sequence Resolver and Day Classifier.

use serde::Serialize;
use tracing::debug;

use crate::epoch::EpochAnchor;
use crate::error::CalendarError;
use crate::month::{DayKind, TibetanMonth};
use crate::schedule::MonthSchedule;

/// Furthest the walk goes from the epoch month (about 3200 years).
pub const MAX_MONTH_STEPS: u32 = 40_000;

/// A civil day located in its month.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ResolvedDay {
    pub year: i32,
    pub month: u8,
    pub is_intercalary: bool,
    pub day: u8,
    pub day_kind: DayKind,
}

/// Position of a month in the walk: schedule index plus the civil offset
/// of the target from the month's first day.
struct Cursor {
    index: i64,
    month: TibetanMonth,
    offset: i64,
}

fn anchor_cursor<S: MonthSchedule + ?Sized>(
    schedule: &S,
    anchor: &EpochAnchor,
) -> Result<Cursor, CalendarError> {
    anchor.validate()?;
    let index = schedule
        .month_index(anchor.year, anchor.month, anchor.is_intercalary)
        .ok_or(CalendarError::InvalidEpoch("anchor month is not in the schedule"))?;
    let month = schedule.month(index)?;
    let slot = month
        .grid
        .civil_index_of(anchor.day)
        .ok_or(CalendarError::InvalidEpoch("anchor day is omitted in its month"))?;
    Ok(Cursor {
        index,
        month,
        offset: slot as i64,
    })
}

/// Walk from the anchor month until `offset` lies inside the current month.
fn walk<S: MonthSchedule + ?Sized>(
    schedule: &S,
    mut cursor: Cursor,
    days: f64,
) -> Result<Cursor, CalendarError> {
    let mut steps = 0u32;
    loop {
        let len = i64::from(cursor.month.spec.length_days);
        if cursor.offset < 0 {
            cursor.index -= 1;
            cursor.month = schedule.month(cursor.index)?;
            cursor.offset += i64::from(cursor.month.spec.length_days);
        } else if cursor.offset >= len {
            cursor.offset -= len;
            cursor.index += 1;
            cursor.month = schedule.month(cursor.index)?;
        } else {
            debug!(steps, index = cursor.index, "month walk settled");
            return Ok(cursor);
        }
        steps += 1;
        if steps > MAX_MONTH_STEPS {
            return Err(CalendarError::OutOfCoverage { days });
        }
    }
}

/// Locate the civil day `days_since_epoch` days after the anchor's day.
///
/// The fractional part of the offset is time of day and is dropped.
pub fn resolve<S: MonthSchedule + ?Sized>(
    schedule: &S,
    anchor: &EpochAnchor,
    days_since_epoch: f64,
) -> Result<ResolvedDay, CalendarError> {
    if !days_since_epoch.is_finite() {
        return Err(CalendarError::InvalidDu);
    }
    // Months never exceed 30 days, so nothing past this span is reachable.
    if days_since_epoch.abs() > 30.0 * f64::from(MAX_MONTH_STEPS + 2) {
        return Err(CalendarError::OutOfCoverage {
            days: days_since_epoch,
        });
    }
    let mut cursor = anchor_cursor(schedule, anchor)?;
    cursor.offset += days_since_epoch.floor() as i64;
    let cursor = walk(schedule, cursor, days_since_epoch)?;

    let (day, day_kind) = cursor
        .month
        .grid
        .civil_day(cursor.offset as usize)
        .ok_or(CalendarError::InvalidMonth("day grid shorter than month length"))?;
    Ok(ResolvedDay {
        year: cursor.month.year,
        month: cursor.month.spec.number,
        is_intercalary: cursor.month.spec.is_intercalary,
        day,
        day_kind,
    })
}

/// Days from the anchor's civil day to the first day of the month at
/// `target_index`.
pub fn days_to_month_start<S: MonthSchedule + ?Sized>(
    schedule: &S,
    anchor: &EpochAnchor,
    target_index: i64,
) -> Result<i64, CalendarError> {
    let cursor = anchor_cursor(schedule, anchor)?;
    let distance = target_index - cursor.index;
    if distance.unsigned_abs() > u64::from(MAX_MONTH_STEPS) {
        return Err(CalendarError::OutOfCoverage {
            days: distance as f64 * 29.5,
        });
    }
    let mut days = -cursor.offset;
    if distance >= 0 {
        for index in cursor.index..target_index {
            let len = if index == cursor.index {
                cursor.month.spec.length_days
            } else {
                schedule.month(index)?.spec.length_days
            };
            days += i64::from(len);
        }
    } else {
        for index in target_index..cursor.index {
            days -= i64::from(schedule.month(index)?.spec.length_days);
        }
    }
    Ok(days)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::month::DayGrid;

    /// Alternating 30/29-day months with an intercalary month before every
    /// fifth month 6; index 0 is month 1 of year 100.
    struct Alternating;

    impl Alternating {
        fn label(index: i64) -> (i32, u8, bool) {
            // 13-month years: the 6th slot is intercalary 6.
            let year = 100 + index.div_euclid(13) as i32;
            let slot = index.rem_euclid(13) as u8;
            match slot {
                0..=4 => (year, slot + 1, false),
                5 => (year, 6, true),
                _ => (year, slot, false),
            }
        }
    }

    impl MonthSchedule for Alternating {
        fn month_index(&self, year: i32, number: u8, is_intercalary: bool) -> Option<i64> {
            let base = i64::from(year - 100) * 13;
            match (number, is_intercalary) {
                (1..=5, false) => Some(base + i64::from(number) - 1),
                (6, true) => Some(base + 5),
                (6..=12, false) => Some(base + i64::from(number)),
                _ => None,
            }
        }

        fn month(&self, index: i64) -> Result<TibetanMonth, CalendarError> {
            let (year, number, leap) = Self::label(index);
            let len = if index.rem_euclid(2) == 0 { 30 } else { 29 };
            Ok(TibetanMonth::new(year, number, leap, DayGrid::uniform(len)?, ""))
        }
    }

    const ANCHOR: EpochAnchor = EpochAnchor {
        du_reference: 1000.5,
        year: 100,
        month: 1,
        is_intercalary: false,
        day: 1,
    };

    fn at(days: f64) -> ResolvedDay {
        resolve(&Alternating, &ANCHOR, days).unwrap()
    }

    #[test]
    fn zero_offset_is_anchor_day() {
        let r = at(0.0);
        assert_eq!((r.year, r.month, r.day), (100, 1, 1));
        assert_eq!(r.day_kind, DayKind::Ordinary);
    }

    #[test]
    fn one_full_month_advances_exactly_one_month() {
        let r = at(30.0);
        assert_eq!((r.year, r.month, r.is_intercalary, r.day), (100, 2, false, 1));
        let r = at(29.999);
        assert_eq!((r.month, r.day), (1, 30));
    }

    #[test]
    fn intercalary_month_keeps_its_number() {
        // Months 1..=5 hold 30+29+30+29+30 = 148 days.
        let r = at(148.0);
        assert_eq!((r.month, r.is_intercalary, r.day), (6, true, 1));
        let r = at(148.0 + 29.0);
        assert_eq!((r.month, r.is_intercalary, r.day), (6, false, 1));
    }

    #[test]
    fn negative_offsets_walk_backward() {
        // The month before index 0 is index -1: year 99 month 12, 29 days.
        let r = at(-1.0);
        assert_eq!((r.year, r.month, r.day), (99, 12, 29));
        let r = at(-29.0);
        assert_eq!((r.year, r.month, r.day), (99, 12, 1));
        let r = at(-0.25);
        assert_eq!((r.year, r.month, r.day), (99, 12, 29));
    }

    #[test]
    fn anchor_mid_month() {
        let anchor = EpochAnchor {
            day: 10,
            ..ANCHOR
        };
        let r = resolve(&Alternating, &anchor, 21.0).unwrap();
        assert_eq!((r.month, r.day), (2, 1));
    }

    #[test]
    fn far_offsets_are_out_of_coverage() {
        assert!(matches!(
            resolve(&Alternating, &ANCHOR, 2.0e6),
            Err(CalendarError::OutOfCoverage { .. })
        ));
        assert!(matches!(
            resolve(&Alternating, &ANCHOR, -1.0e300),
            Err(CalendarError::OutOfCoverage { .. })
        ));
    }

    /// Schedule that must never be consulted.
    struct Untouchable;

    impl MonthSchedule for Untouchable {
        fn month_index(&self, _: i32, _: u8, _: bool) -> Option<i64> {
            panic!("month_index called")
        }

        fn month(&self, _: i64) -> Result<TibetanMonth, CalendarError> {
            panic!("month called")
        }
    }

    #[test]
    fn far_offsets_fail_before_walking() {
        for days in [1.0e9, -1.0e9, 30.0 * 40_002.5] {
            assert_eq!(
                resolve(&Untouchable, &ANCHOR, days),
                Err(CalendarError::OutOfCoverage { days })
            );
        }
    }

    #[test]
    fn missing_anchor_month_is_invalid_epoch() {
        let anchor = EpochAnchor {
            month: 7,
            is_intercalary: true,
            ..ANCHOR
        };
        assert!(matches!(
            resolve(&Alternating, &anchor, 0.0),
            Err(CalendarError::InvalidEpoch(_))
        ));
    }

    #[test]
    fn month_start_distance() {
        assert_eq!(days_to_month_start(&Alternating, &ANCHOR, 0), Ok(0));
        assert_eq!(days_to_month_start(&Alternating, &ANCHOR, 2), Ok(59));
        assert_eq!(days_to_month_start(&Alternating, &ANCHOR, -1), Ok(-29));
        let anchor = EpochAnchor { day: 10, ..ANCHOR };
        assert_eq!(days_to_month_start(&Alternating, &anchor, 1), Ok(21));
    }
}
