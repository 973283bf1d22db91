//! Reference epochs anchoring all relative day counts.

use serde::Serialize;

use crate::error::CalendarError;

/// A known Tibetan date and the DU at which its civil day begins.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct EpochAnchor {
    pub du_reference: f64,
    pub year: i32,
    /// 1..=12
    pub month: u8,
    pub is_intercalary: bool,
    /// 1..=30
    pub day: u8,
}

/// Whether an epoch has been tied to a concrete date.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Calibration {
    Calibrated(EpochAnchor),
    /// Known by name only; every conversion against it is unresolved.
    Uncalibrated,
}

/// A named, versionable reference record.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TibetanEpoch {
    pub name: &'static str,
    pub calibration: Calibration,
    pub notes: &'static str,
}

/// Tsurphu (Karma Kagyu) tradition. Its anchor date and intercalation rule
/// have not been sourced yet.
pub const EPOCH_TSURPHU: TibetanEpoch = TibetanEpoch {
    name: "tsurphu",
    calibration: Calibration::Uncalibrated,
    notes: "Tsurphu epoch and intercalation rule not yet sourced from the Henning tables",
};

/// Phugpa tradition, anchored at Losar of Tibetan year 2151 (2024-02-10).
pub const EPOCH_PHUGPA: TibetanEpoch = TibetanEpoch {
    name: "phugpa",
    calibration: Calibration::Calibrated(EpochAnchor {
        du_reference: 2_460_350.5,
        year: 2151,
        month: 1,
        is_intercalary: false,
        day: 1,
    }),
    notes: "Losar 2151 (Wood Dragon), 2024-02-10; civil days counted from 0h UT",
};

impl TibetanEpoch {
    pub fn anchor(&self) -> Result<&EpochAnchor, CalendarError> {
        match &self.calibration {
            Calibration::Calibrated(anchor) => Ok(anchor),
            Calibration::Uncalibrated => Err(CalendarError::EpochUncalibrated),
        }
    }

    pub fn is_calibrated(&self) -> bool {
        matches!(self.calibration, Calibration::Calibrated(_))
    }

    /// Elapsed days from the epoch's reference DU.
    ///
    /// An uncalibrated epoch yields `EpochUncalibrated`, never `0.0`.
    pub fn days_since_epoch(&self, du: f64) -> Result<f64, CalendarError> {
        if !du.is_finite() {
            return Err(CalendarError::InvalidDu);
        }
        Ok(du - self.anchor()?.du_reference)
    }
}

impl EpochAnchor {
    pub(crate) fn validate(&self) -> Result<(), CalendarError> {
        if !self.du_reference.is_finite() {
            return Err(CalendarError::InvalidEpoch("reference DU is not finite"));
        }
        if !(1..=12).contains(&self.month) {
            return Err(CalendarError::InvalidEpoch("month outside 1..=12"));
        }
        if !(1..=30).contains(&self.day) {
            return Err(CalendarError::InvalidEpoch("day outside 1..=30"));
        }
        Ok(())
    }
}
