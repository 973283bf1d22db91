//! Errors talking to the planetarium collaborator.

use thiserror::Error;
use tsurphu_frames::FrameError;

/// Longest raw-response excerpt kept in [`StellariumError::BadResponse`].
pub const EXCERPT_CHARS: usize = 200;

#[derive(Debug, Error)]
#[non_exhaustive]
pub enum StellariumError {
    /// Connection, timeout or transport failure.
    #[error("cannot reach Stellarium RemoteControl at {address} (is the plugin enabled?): {source}")]
    Unreachable {
        address: String,
        #[source]
        source: reqwest::Error,
    },

    /// Non-success status, non-JSON body or missing fields.
    #[error("bad response from {url}: {reason}; body: {excerpt:?}")]
    BadResponse {
        url: String,
        excerpt: String,
        reason: String,
    },

    #[error("invalid Stellarium configuration: {0}")]
    InvalidConfig(&'static str),

    /// Coordinates reported by Stellarium could not be transformed.
    #[error("coordinate transform failed: {0}")]
    Frame(#[from] FrameError),
}

impl StellariumError {
    pub(crate) fn bad_response(url: &str, body: &str, reason: impl Into<String>) -> Self {
        Self::BadResponse {
            url: url.to_string(),
            excerpt: excerpt(body),
            reason: reason.into(),
        }
    }
}

/// First [`EXCERPT_CHARS`] characters of `body`, cut on a char boundary.
pub fn excerpt(body: &str) -> String {
    body.chars().take(EXCERPT_CHARS).collect()
}
