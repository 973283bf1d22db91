//! Wire types of the RemoteControl API.
//!
//! Stellarium returns many more fields than these; unknown fields are
//! ignored and everything not needed downstream is optional.

use serde::{Deserialize, Serialize};

/// `time` block of `/api/main/status`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TimeStatus {
    pub jday: Option<f64>,
    #[serde(rename = "deltaT")]
    pub delta_t: Option<f64>,
    /// Simulated days per real second.
    pub timerate: Option<f64>,
    pub utc: Option<String>,
    pub local: Option<String>,
    #[serde(rename = "timeZone")]
    pub time_zone: Option<String>,
}

/// `location` block of `/api/main/status`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LocationStatus {
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub altitude: Option<f64>,
    pub name: Option<String>,
    pub planet: Option<String>,
}

/// `GET /api/main/status`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Status {
    pub time: Option<TimeStatus>,
    pub location: Option<LocationStatus>,
    #[serde(rename = "selectioninfo")]
    pub selection_info: Option<String>,
}

/// `GET /api/objects/info?format=json`. Angles in degrees.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ObjectInfo {
    pub ra: f64,
    pub dec: f64,
    pub distance: Option<f64>,
    pub phase: Option<f64>,
    #[serde(alias = "vmag")]
    pub mag: Option<f64>,
    pub azimuth: Option<f64>,
    pub altitude: Option<f64>,
}

/// Form body of `POST /api/location/setlocationfields`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LocationRequest {
    pub latitude: f64,
    pub longitude: f64,
    /// Metres above sea level.
    pub altitude: f64,
    pub name: String,
    pub country: String,
    pub planet: String,
}

impl LocationRequest {
    /// Observer on Earth at sea level.
    pub fn on_earth(
        latitude: f64,
        longitude: f64,
        name: impl Into<String>,
        country: impl Into<String>,
    ) -> Self {
        Self {
            latitude,
            longitude,
            altitude: 0.0,
            name: name.into(),
            country: country.into(),
            planet: "Earth".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_ignores_unknown_fields() {
        let raw = r#"{
            "location": {"latitude": 4.711, "longitude": -74.0721, "name": "Bogota", "role": "X"},
            "time": {"jday": 2439571.9055, "timerate": 0, "deltaT": 0.00043, "isTimeNow": false},
            "view": {"fov": 60}
        }"#;
        let s: Status = serde_json::from_str(raw).unwrap();
        assert_eq!(s.time.as_ref().unwrap().jday, Some(2439571.9055));
        assert_eq!(s.time.as_ref().unwrap().timerate, Some(0.0));
        assert_eq!(s.location.unwrap().name.as_deref(), Some("Bogota"));
        assert_eq!(s.selection_info, None);
    }

    #[test]
    fn object_info_accepts_vmag() {
        let raw = r#"{"ra": 10.5, "dec": -3.25, "vmag": -12.6, "name": "Moon"}"#;
        let o: ObjectInfo = serde_json::from_str(raw).unwrap();
        assert_eq!(o.mag, Some(-12.6));
        assert_eq!(o.phase, None);
    }

    #[test]
    fn object_info_requires_coordinates() {
        assert!(serde_json::from_str::<ObjectInfo>(r#"{"name": "Moon"}"#).is_err());
    }
}
