//! Tibetan calendar conversion engine.
//!
//! Maps a DU (Julian-Day-like day count) to a Tibetan date: year, month
//! (regular or intercalary), day (ordinary or repeated) and the Rabjung
//! 60-year cycle attributes. Conversions are counted from a reference
//! epoch by walking a lazily generated month sequence; an uncalibrated
//! epoch yields an explicitly unresolved result.
//!
//! ```
//! use tsurphu_calendar::HenningBackend;
//!
//! let date = HenningBackend::phugpa().from_du_tibetano(2_460_453.5);
//! assert_eq!((date.year, date.month, date.day), (Some(2151), Some(4), Some(15)));
//! ```

pub mod backend;
pub mod date;
pub mod epoch;
pub mod error;
pub mod month;
pub mod rabjung;
pub mod resolver;
pub mod schedule;

pub use backend::{HenningBackend, Tradition};
pub use date::{Resolution, TibetanDate, UnresolvedReason};
pub use epoch::{Calibration, EPOCH_PHUGPA, EPOCH_TSURPHU, EpochAnchor, TibetanEpoch};
pub use error::CalendarError;
pub use month::{DayGrid, DayKind, TibetanMonth, TibetanMonthSpec};
pub use rabjung::{
    Animal, CycleYear, Element, Gender, RABJUNG_EPOCH_YEAR, RABJUNG_YEARS, ROYAL_YEAR_OFFSET,
    RabjungYear, cycle_for_year, resolve_cycle, tibetan_year_from_gregorian,
};
pub use resolver::{MAX_MONTH_STEPS, ResolvedDay, days_to_month_start, resolve};
pub use schedule::{KalachakraSchedule, MonthSchedule};
