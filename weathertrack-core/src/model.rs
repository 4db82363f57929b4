use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::Error;

/// Opaque identifier assigned by the storage layer on creation.
///
/// Path parameters that do not parse as UUIDs are rejected before any
/// storage call is made.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RecordId(Uuid);

impl RecordId {
    #[allow(clippy::new_without_default)]
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Parse a path-supplied identifier string.
    pub fn parse(raw: &str) -> Result<Self, Error> {
        Uuid::parse_str(raw).map(Self).map_err(|_| Error::InvalidIdentifier)
    }
}

impl std::fmt::Display for RecordId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub lat: f64,
    pub lon: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Location {
    pub name: String,
    pub coordinates: Coordinates,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DateRange {
    pub start_date: DateTime<Utc>,
    pub end_date: DateTime<Utc>,
}

/// One per-day observation inside a record. `description` is never blank
/// once normalized; absent or empty input becomes "No description".
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TemperatureReading {
    pub date: DateTime<Utc>,
    pub temperature: f64,
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub humidity: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub wind_speed: Option<f64>,
}

/// A validated record body, ready to be persisted. Produced only by the
/// schema validator; the repository trusts it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewWeatherRecord {
    pub location: Location,
    pub date_range: DateRange,
    pub temperatures: Vec<TemperatureReading>,
}

/// The persisted entity. `id` and `created_at` are assigned once by the
/// storage layer and never change across updates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WeatherRecord {
    pub id: RecordId,
    pub location: Location,
    pub date_range: DateRange,
    pub temperatures: Vec<TemperatureReading>,
    pub created_at: DateTime<Utc>,
}

impl WeatherRecord {
    /// Replace everything except identity fields.
    pub fn replaced_with(&self, body: NewWeatherRecord) -> Self {
        Self {
            id: self.id,
            location: body.location,
            date_range: body.date_range,
            temperatures: body.temperatures,
            created_at: self.created_at,
        }
    }
}

/// Raw request body as the client sent it. Every field is optional so that
/// "required" violations surface as ordered validation failures instead of
/// deserialization errors.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RecordPayload {
    pub location: Option<LocationPayload>,
    pub date_range: Option<DateRangePayload>,
    pub temperatures: Option<Vec<TemperaturePayload>>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct LocationPayload {
    pub name: Option<String>,
    pub coordinates: Option<CoordinatesPayload>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct CoordinatesPayload {
    pub lat: Option<f64>,
    pub lon: Option<f64>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DateRangePayload {
    pub start_date: Option<String>,
    pub end_date: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TemperaturePayload {
    pub date: Option<String>,
    pub temperature: Option<f64>,
    pub description: Option<String>,
    pub humidity: Option<f64>,
    pub wind_speed: Option<f64>,
}
