//! Ephemeris snapshot: freeze Stellarium at an instant, read the Sun and
//! Moon, convert both to ecliptic coordinates and derive the tithi.

use chrono::{DateTime, FixedOffset, Utc};
use serde::Serialize;
use tracing::info;
use tsurphu_frames::{equatorial_to_ecliptic, mean_obliquity_deg};
use tsurphu_lunar::{TithiInfo, compute_tithi};
use tsurphu_time::jd_from_instant;

use crate::client::StellariumClient;
use crate::error::StellariumError;
use crate::types::{LocationRequest, ObjectInfo, TimeStatus};

/// Equatorial and ecliptic position of one body.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BodySnapshot {
    pub ra_deg: f64,
    pub dec_deg: f64,
    pub ecl_lon_deg: f64,
    pub ecl_lat_deg: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub distance: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phase: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mag: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub azimuth: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub altitude: Option<f64>,
}

impl BodySnapshot {
    fn from_info(info: ObjectInfo, jd: f64) -> Result<Self, StellariumError> {
        let ecl = equatorial_to_ecliptic(info.ra, info.dec, jd)?;
        Ok(Self {
            ra_deg: info.ra,
            dec_deg: info.dec,
            ecl_lon_deg: ecl.lon_deg,
            ecl_lat_deg: ecl.lat_deg,
            distance: info.distance,
            phase: info.phase,
            mag: info.mag,
            azimuth: info.azimuth,
            altitude: info.altitude,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SnapshotLocation {
    pub name: String,
    pub lat: f64,
    pub lon: f64,
    pub country: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SnapshotMeta {
    pub location: SnapshotLocation,
    pub datetime_local: String,
    pub jd: f64,
    pub mean_obliquity_deg: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EphemerisSnapshot {
    pub meta: SnapshotMeta,
    pub stellarium_time: Option<TimeStatus>,
    pub sun: BodySnapshot,
    pub moon: BodySnapshot,
    pub tithi: TithiInfo,
}

fn fetch_body(
    client: &StellariumClient,
    name: &str,
    jd: f64,
) -> Result<BodySnapshot, StellariumError> {
    client.focus(name)?;
    BodySnapshot::from_info(client.object_info(name)?, jd)
}

/// Take one snapshot at `instant` as seen from `location`.
///
/// The simulated clock is left frozen at the snapshot instant.
pub fn take_snapshot(
    client: &StellariumClient,
    instant: DateTime<FixedOffset>,
    location: &LocationRequest,
) -> Result<EphemerisSnapshot, StellariumError> {
    let jd = jd_from_instant(&instant.with_timezone(&Utc));
    client.set_location(location)?;
    client.set_time_jd(jd, Some(0.0))?;
    let status = client.status()?;

    let sun = fetch_body(client, "Sun", jd)?;
    let moon = fetch_body(client, "Moon", jd)?;
    let tithi = compute_tithi(moon.ecl_lon_deg, sun.ecl_lon_deg)?;
    info!(jd, tithi = tithi.tithi, "ephemeris snapshot taken");

    Ok(EphemerisSnapshot {
        meta: SnapshotMeta {
            location: SnapshotLocation {
                name: location.name.clone(),
                lat: location.latitude,
                lon: location.longitude,
                country: location.country.clone(),
            },
            datetime_local: instant.to_rfc3339(),
            jd,
            mean_obliquity_deg: mean_obliquity_deg(jd),
        },
        stellarium_time: status.time,
        sun,
        moon,
        tithi,
    })
}
