//! One-shot client for the Stellarium RemoteControl plugin.
//!
//! Stellarium is used as an external ephemeris source: the client sets the
//! simulated clock and observer location, focuses objects and reads their
//! RA/Dec. All calls are blocking, single-attempt and bounded by the
//! configured timeout.

pub mod client;
pub mod config;
pub mod error;
pub mod snapshot;
pub mod types;

pub use client::StellariumClient;
pub use config::StellariumConfig;
pub use error::StellariumError;
pub use snapshot::{BodySnapshot, EphemerisSnapshot, SnapshotLocation, SnapshotMeta, take_snapshot};
pub use types::{LocationRequest, LocationStatus, ObjectInfo, Status, TimeStatus};
