//! Calendar backend facade: DU in, [`TibetanDate`] out.

use serde::Serialize;
use tracing::{debug, warn};
use tsurphu_time::jd_to_iso_date;

use crate::date::{TibetanDate, UnresolvedReason};
use crate::epoch::{EPOCH_PHUGPA, EPOCH_TSURPHU, TibetanEpoch};
use crate::error::CalendarError;
use crate::rabjung::resolve_cycle;
use crate::resolver::{days_to_month_start, resolve};
use crate::schedule::{KalachakraSchedule, MonthSchedule};

/// Calendar tradition selecting epoch and schedule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Tradition {
    Phugpa,
    #[default]
    Tsurphu,
}

impl Tradition {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Phugpa => "phugpa",
            Self::Tsurphu => "tsurphu",
        }
    }
}

/// Composes epoch, month schedule, resolver and cycle lookup.
///
/// The schedule is never consulted while the epoch is uncalibrated.
#[derive(Debug, Clone)]
pub struct HenningBackend<S = KalachakraSchedule> {
    epoch: TibetanEpoch,
    schedule: S,
}

impl HenningBackend<KalachakraSchedule> {
    /// Tsurphu tradition; uncalibrated, so every conversion is unresolved.
    pub fn tsurphu() -> Self {
        Self::new(EPOCH_TSURPHU, KalachakraSchedule::PHUGPA)
    }

    pub fn phugpa() -> Self {
        Self::new(EPOCH_PHUGPA, KalachakraSchedule::PHUGPA)
    }

    pub fn for_tradition(tradition: Tradition) -> Self {
        match tradition {
            Tradition::Phugpa => Self::phugpa(),
            Tradition::Tsurphu => Self::tsurphu(),
        }
    }
}

impl<S: MonthSchedule> HenningBackend<S> {
    pub fn new(epoch: TibetanEpoch, schedule: S) -> Self {
        Self { epoch, schedule }
    }

    pub fn epoch(&self) -> &TibetanEpoch {
        &self.epoch
    }

    /// Convert a DU to a Tibetan date, or an explicitly unresolved record.
    pub fn from_du_tibetano(&self, du: f64) -> TibetanDate {
        match self.try_from_du(du) {
            Ok(date) => date,
            Err(e) => {
                warn!(du, epoch = self.epoch.name, error = %e, "Tibetan date unresolved");
                TibetanDate::unresolved(du, UnresolvedReason::from(&e))
            }
        }
    }

    /// Like [`from_du_tibetano`](Self::from_du_tibetano) but reports the failure.
    pub fn try_from_du(&self, du: f64) -> Result<TibetanDate, CalendarError> {
        let days = self.epoch.days_since_epoch(du)?;
        let anchor = self.epoch.anchor()?;
        let day = resolve(&self.schedule, anchor, days)?;
        let cycle = resolve_cycle(Some(day.year))?;
        debug!(
            du,
            gregorian = %jd_to_iso_date(du),
            year = day.year,
            month = day.month,
            day = day.day,
            "resolved Tibetan date"
        );
        Ok(TibetanDate::resolved(du, day, cycle))
    }

    /// DU at the start of Losar, the first day of the regular first month of
    /// `tibetan_year`. An intercalary first month, when present, precedes it.
    pub fn losar(&self, tibetan_year: i32) -> Result<f64, CalendarError> {
        let anchor = self.epoch.anchor()?;
        let index = self
            .schedule
            .month_index(tibetan_year, 1, false)
            .ok_or(CalendarError::YearOutOfCoverage)?;
        let days = days_to_month_start(&self.schedule, anchor, index)?;
        Ok(anchor.du_reference + days as f64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_tradition_is_uncalibrated_tsurphu() {
        let t = Tradition::default();
        assert_eq!(t.name(), "tsurphu");
        assert!(!HenningBackend::for_tradition(t).epoch().is_calibrated());
        assert!(HenningBackend::for_tradition(Tradition::Phugpa).epoch().is_calibrated());
    }

    #[test]
    fn epoch_day_is_losar_2151() {
        let d = HenningBackend::phugpa().from_du_tibetano(2_460_350.5);
        assert_eq!(d.to_string(), "2151-01-01 Wood Male Dragon");
    }

    #[test]
    fn losar_before_the_epoch() {
        assert_eq!(HenningBackend::phugpa().losar(2150), Ok(2_459_996.5));
    }
}
