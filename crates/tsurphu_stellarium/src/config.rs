//! Connection settings for the RemoteControl server.

use std::time::Duration;

use crate::error::StellariumError;

pub const DEFAULT_HOST: &str = "127.0.0.1";
pub const DEFAULT_PORT: u16 = 8090;
pub const DEFAULT_TIMEOUT: Duration = Duration::from_millis(2500);

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StellariumConfig {
    pub host: String,
    pub port: u16,
    /// Applies to each request as a whole.
    pub timeout: Duration,
}

impl Default for StellariumConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            timeout: DEFAULT_TIMEOUT,
        }
    }
}

impl StellariumConfig {
    pub fn new(host: impl Into<String>, port: u16, timeout: Duration) -> Self {
        Self {
            host: host.into(),
            port,
            timeout,
        }
    }

    pub fn validate(&self) -> Result<(), StellariumError> {
        if self.host.is_empty() {
            return Err(StellariumError::InvalidConfig("host is empty"));
        }
        if self
            .host
            .chars()
            .any(|c| c.is_whitespace() || c == '/' || c == '?' || c == '#')
        {
            return Err(StellariumError::InvalidConfig(
                "host must be a bare hostname or IP address",
            ));
        }
        if self.port == 0 {
            return Err(StellariumError::InvalidConfig("port must be non-zero"));
        }
        if self.timeout.is_zero() {
            return Err(StellariumError::InvalidConfig("timeout must be positive"));
        }
        Ok(())
    }

    pub fn base_url(&self) -> String {
        format!("http://{}:{}", self.host, self.port)
    }
}
