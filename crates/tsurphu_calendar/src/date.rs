//! Output record of a DU → Tibetan date conversion.

use std::fmt::{Display, Formatter};

use serde::Serialize;

use crate::error::CalendarError;
use crate::month::DayKind;
use crate::rabjung::{Animal, Element, Gender, RabjungYear};
use crate::resolver::ResolvedDay;

/// Why a conversion produced no date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum UnresolvedReason {
    EpochUncalibrated,
    OutOfCoverage,
    InvalidDu,
    InvalidEpoch,
}

impl From<&CalendarError> for UnresolvedReason {
    fn from(e: &CalendarError) -> Self {
        match e {
            CalendarError::EpochUncalibrated => Self::EpochUncalibrated,
            CalendarError::InvalidDu => Self::InvalidDu,
            CalendarError::OutOfCoverage { .. } | CalendarError::YearOutOfCoverage => {
                Self::OutOfCoverage
            }
            CalendarError::InvalidEpoch(_) | CalendarError::InvalidMonth(_) => Self::InvalidEpoch,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum Resolution {
    Resolved,
    Unresolved { reason: UnresolvedReason },
}

/// A Tibetan calendar date. Every field that depends on the epoch is
/// `None` when the conversion is unresolved.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TibetanDate {
    pub du: f64,
    pub year: Option<i32>,
    pub month: Option<u8>,
    pub is_intercalary: bool,
    pub day: Option<u8>,
    pub day_kind: Option<DayKind>,
    pub rabjung_cycle: Option<i32>,
    pub position_in_cycle: Option<u8>,
    pub animal: Option<Animal>,
    pub element: Option<Element>,
    pub gender: Option<Gender>,
    pub resolution: Resolution,
}

impl TibetanDate {
    pub fn resolved(du: f64, day: ResolvedDay, cycle: RabjungYear) -> Self {
        Self {
            du,
            year: Some(day.year),
            month: Some(day.month),
            is_intercalary: day.is_intercalary,
            day: Some(day.day),
            day_kind: Some(day.day_kind),
            rabjung_cycle: Some(cycle.rabjung),
            position_in_cycle: Some(cycle.position_in_cycle),
            animal: Some(cycle.animal),
            element: Some(cycle.element),
            gender: Some(cycle.gender),
            resolution: Resolution::Resolved,
        }
    }

    pub fn unresolved(du: f64, reason: UnresolvedReason) -> Self {
        Self {
            du,
            year: None,
            month: None,
            is_intercalary: false,
            day: None,
            day_kind: None,
            rabjung_cycle: None,
            position_in_cycle: None,
            animal: None,
            element: None,
            gender: None,
            resolution: Resolution::Unresolved { reason },
        }
    }

    pub fn is_resolved(&self) -> bool {
        self.resolution == Resolution::Resolved
    }
}

impl Display for TibetanDate {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let (Some(year), Some(month), Some(day)) = (self.year, self.month, self.day) else {
            return match self.resolution {
                Resolution::Unresolved { reason } => write!(f, "unresolved ({reason:?})"),
                Resolution::Resolved => write!(f, "unresolved"),
            };
        };
        write!(f, "{year}-")?;
        if self.is_intercalary {
            write!(f, "L")?;
        }
        write!(f, "{month:02}-{day:02}")?;
        if self.day_kind == Some(DayKind::Repeated) {
            write!(f, " (repeated)")?;
        }
        if let (Some(e), Some(g), Some(a)) = (self.element, self.gender, self.animal) {
            write!(f, " {} {} {}", e.name(), g.name(), a.name())?;
        }
        Ok(())
    }
}
