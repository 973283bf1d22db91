//! Lunar-phase indicators derived from ecliptic longitudes.

pub mod tithi;

pub use tithi::{Paksha, TITHI_SEGMENT_DEG, TithiInfo, compute_tithi};
