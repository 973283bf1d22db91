//! Month records and the per-month civil day grid.
//!
//! A lunar month has 30 lunar day numbers but only 29 or 30 civil days.
//! Each civil day carries the number of the lunar day that ends in it. A
//! number whose lunar day ends on the same civil day as its predecessor is
//! omitted; a civil day in which no lunar day ends takes the following
//! number, which then occurs twice, the second occurrence being repeated.

use serde::Serialize;

use crate::error::CalendarError;

/// Kind of a civil day as seen by callers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DayKind {
    Ordinary,
    /// Second civil day carrying the same day number.
    Repeated,
}

/// Grid-internal slot state. `Omitted` never leaves this module.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SlotKind {
    Ordinary,
    Repeated,
    Omitted,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Slot {
    number: u8,
    kind: SlotKind,
}

/// Civil days of one month, in order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DayGrid {
    slots: Vec<Slot>,
}

impl DayGrid {
    /// Build a grid from the number of civil days each lunar day closes.
    ///
    /// `counts[i]` belongs to lunar day `i + 1` and must be 0 (omitted),
    /// 1 (ordinary) or 2 (ordinary then repeated). The total must be 29 or 30.
    pub fn from_civil_counts(counts: [u8; 30]) -> Result<Self, CalendarError> {
        let mut slots = Vec::with_capacity(32);
        for (number, &count) in (1u8..).zip(counts.iter()) {
            match count {
                0 => slots.push(Slot {
                    number,
                    kind: SlotKind::Omitted,
                }),
                1 => slots.push(Slot {
                    number,
                    kind: SlotKind::Ordinary,
                }),
                2 => {
                    slots.push(Slot {
                        number,
                        kind: SlotKind::Ordinary,
                    });
                    slots.push(Slot {
                        number,
                        kind: SlotKind::Repeated,
                    });
                }
                _ => {
                    return Err(CalendarError::InvalidMonth(
                        "a lunar day closes at most two civil days",
                    ));
                }
            }
        }
        let grid = Self { slots };
        match grid.length_days() {
            29 | 30 => Ok(grid),
            _ => Err(CalendarError::InvalidMonth("month length must be 29 or 30 days")),
        }
    }

    /// Regular grid of `length` days with no repeated numbers. A 29-day
    /// month omits day 30.
    pub fn uniform(length: u8) -> Result<Self, CalendarError> {
        let mut counts = [1u8; 30];
        match length {
            30 => {}
            29 => counts[29] = 0,
            _ => {
                return Err(CalendarError::InvalidMonth(
                    "month length must be 29 or 30 days",
                ));
            }
        }
        Self::from_civil_counts(counts)
    }

    fn civil_slots(&self) -> impl Iterator<Item = &Slot> {
        self.slots.iter().filter(|s| s.kind != SlotKind::Omitted)
    }

    /// Number of civil days.
    pub fn length_days(&self) -> u8 {
        self.civil_slots().count() as u8
    }

    /// Day number and kind of the zero-based civil day `index`.
    pub fn civil_day(&self, index: usize) -> Option<(u8, DayKind)> {
        self.civil_slots().nth(index).map(|s| {
            let kind = match s.kind {
                SlotKind::Repeated => DayKind::Repeated,
                _ => DayKind::Ordinary,
            };
            (s.number, kind)
        })
    }

    /// Zero-based civil index of the first civil day numbered `day`.
    pub fn civil_index_of(&self, day: u8) -> Option<usize> {
        self.civil_slots().position(|s| s.number == day)
    }

    /// Day numbers that have no civil day of their own.
    pub fn omitted_days(&self) -> Vec<u8> {
        self.slots
            .iter()
            .filter(|s| s.kind == SlotKind::Omitted)
            .map(|s| s.number)
            .collect()
    }

    /// Day numbers that occupy two civil days.
    pub fn repeated_days(&self) -> Vec<u8> {
        self.slots
            .iter()
            .filter(|s| s.kind == SlotKind::Repeated)
            .map(|s| s.number)
            .collect()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TibetanMonthSpec {
    /// 1..=12; an intercalary month shares the number of the month it precedes.
    pub number: u8,
    pub is_intercalary: bool,
    /// 29 or 30.
    pub length_days: u8,
    pub notes: &'static str,
}

/// One generated month of a schedule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TibetanMonth {
    pub spec: TibetanMonthSpec,
    pub year: i32,
    pub grid: DayGrid,
}

impl TibetanMonth {
    pub fn new(
        year: i32,
        number: u8,
        is_intercalary: bool,
        grid: DayGrid,
        notes: &'static str,
    ) -> Self {
        let spec = TibetanMonthSpec {
            number,
            is_intercalary,
            length_days: grid.length_days(),
            notes,
        };
        Self { spec, year, grid }
    }
}
