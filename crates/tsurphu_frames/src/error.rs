//! Error types for frame transforms.

use thiserror::Error;

/// Malformed input to a frame transform.
#[derive(Debug, Clone, PartialEq, Error)]
#[non_exhaustive]
pub enum FrameError {
    /// An angle or Julian Date was NaN or infinite.
    #[error("non-finite input: {0}")]
    NonFinite(&'static str),
    /// Declination or latitude outside [-90, 90] degrees.
    #[error("{0} outside [-90, 90] degrees")]
    LatitudeOutOfRange(&'static str),
}
