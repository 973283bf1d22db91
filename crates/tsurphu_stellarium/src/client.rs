//! Blocking HTTP client for the RemoteControl plugin.

use reqwest::blocking::{Client, Response};
use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::config::StellariumConfig;
use crate::error::StellariumError;
use crate::types::{LocationRequest, ObjectInfo, Status};

#[derive(Debug, Clone)]
pub struct StellariumClient {
    config: StellariumConfig,
    base_url: String,
    http: Client,
}

#[derive(Serialize)]
struct TimeForm {
    time: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    timerate: Option<f64>,
}

#[derive(Serialize)]
struct FocusForm<'a> {
    target: &'a str,
    mode: &'a str,
}

impl StellariumClient {
    pub fn new(config: StellariumConfig) -> Result<Self, StellariumError> {
        config.validate()?;
        let base_url = config.base_url();
        let http = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|source| StellariumError::Unreachable {
                address: base_url.clone(),
                source,
            })?;
        Ok(Self {
            config,
            base_url,
            http,
        })
    }

    pub fn config(&self) -> &StellariumConfig {
        &self.config
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    fn unreachable(&self, source: reqwest::Error) -> StellariumError {
        StellariumError::Unreachable {
            address: self.base_url.clone(),
            source,
        }
    }

    /// Read the body, turning a non-success status into `BadResponse`.
    fn read_body(&self, url: &str, resp: Response) -> Result<String, StellariumError> {
        let status = resp.status();
        let body = resp.text().map_err(|e| self.unreachable(e))?;
        if !status.is_success() {
            return Err(StellariumError::bad_response(url, &body, format!("HTTP {status}")));
        }
        Ok(body)
    }

    fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, &str)],
    ) -> Result<T, StellariumError> {
        let url = self.url(path);
        debug!(%url, ?query, "GET");
        let resp = self
            .http
            .get(&url)
            .query(query)
            .send()
            .map_err(|e| self.unreachable(e))?;
        let body = self.read_body(&url, resp)?;
        serde_json::from_str(&body)
            .map_err(|e| StellariumError::bad_response(&url, &body, e.to_string()))
    }

    fn post_form<F: Serialize + ?Sized>(
        &self,
        path: &str,
        form: &F,
    ) -> Result<(), StellariumError> {
        let url = self.url(path);
        debug!(%url, "POST");
        let resp = self
            .http
            .post(&url)
            .form(form)
            .send()
            .map_err(|e| self.unreachable(e))?;
        self.read_body(&url, resp).map(|_| ())
    }

    /// True if `/api/main/status` answers with JSON.
    pub fn ping(&self) -> bool {
        self.status().is_ok()
    }

    /// Simulated time, observer location and current selection.
    pub fn status(&self) -> Result<Status, StellariumError> {
        self.get_json("/api/main/status", &[])
    }

    /// Set the simulated clock to `jd`. `timerate` is in days per real
    /// second; `Some(0.0)` freezes the clock, `None` keeps the current rate.
    pub fn set_time_jd(&self, jd: f64, timerate: Option<f64>) -> Result<(), StellariumError> {
        self.post_form("/api/main/time", &TimeForm { time: jd, timerate })
    }

    pub fn set_location(&self, location: &LocationRequest) -> Result<(), StellariumError> {
        self.post_form("/api/location/setlocationfields", location)
    }

    /// Select and center an object by name (`"Moon"`, `"Sun"`, ...).
    pub fn focus(&self, target: &str) -> Result<(), StellariumError> {
        self.post_form(
            "/api/main/focus",
            &FocusForm {
                target,
                mode: "center",
            },
        )
    }

    pub fn object_info(&self, name: &str) -> Result<ObjectInfo, StellariumError> {
        self.get_json("/api/objects/info", &[("format", "json"), ("name", name)])
    }

    /// Catalog names containing `query`.
    pub fn object_find(&self, query: &str) -> Result<Vec<String>, StellariumError> {
        self.get_json("/api/objects/find", &[("format", "json"), ("str", query)])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn url_joins_paths() {
        let c = StellariumClient::new(StellariumConfig::default()).unwrap();
        assert_eq!(c.url("/api/main/status"), "http://127.0.0.1:8090/api/main/status");
        assert_eq!(c.url("api/main/time"), "http://127.0.0.1:8090/api/main/time");
    }

    #[test]
    fn invalid_config_is_rejected_before_any_request() {
        let config = StellariumConfig {
            port: 0,
            ..StellariumConfig::default()
        };
        assert!(matches!(
            StellariumClient::new(config),
            Err(StellariumError::InvalidConfig(_))
        ));
    }
}
