/// Core data types for the AirNow observation client.
///
/// This module defines the shared domain model imported by all other modules:
/// the public `Observation` returned to callers, the wire-level
/// `RawObservation` that absorbs the upstream JSON, and the error types.

use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

// ---------------------------------------------------------------------------
// Location and color
// ---------------------------------------------------------------------------

/// A pair of latitude and longitude, in degrees.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub latitude: f64,
    pub longitude: f64,
}

/// Display color of an AQI category. Alpha is carried but always zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }
}

impl fmt::Display for Rgba {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "rgba({}, {}, {}, {})", self.r, self.g, self.b, self.a)
    }
}

// ---------------------------------------------------------------------------
// Observation types
// ---------------------------------------------------------------------------

/// AQI category as reported upstream, enriched with its display color.
///
/// Only `Number` and `Name` come off the wire; `color` is attached from
/// `category::CATEGORY_COLORS` during normalization.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Category {
    #[serde(rename = "Number")]
    pub number: i32,
    #[serde(rename = "Name")]
    pub name: String,
    #[serde(skip_deserializing)]
    pub color: Rgba,
}

/// A single normalized current observation.
///
/// Built once per fetch and handed to the caller; nothing in this crate
/// keeps a reference to it afterwards.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Observation {
    /// Observation hour, resolved through the record's own zone abbreviation.
    pub time: DateTime<FixedOffset>,
    /// Zone abbreviation as reported, e.g. "PST".
    pub time_zone: String,
    pub area: String,
    pub state: String,
    pub lat_lng: Point,
    /// Pollutant the AQI was computed for, e.g. "O3" or "PM2.5".
    pub parameter: String,
    pub aqi: i32,
    pub category: Category,
}

/// Wire-level record from the current-observation endpoint.
///
/// Missing fields decode to their zero value, same as the upstream's own
/// sample clients tolerate.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub(crate) struct RawObservation {
    pub date_observed: String, // "2023-01-01 " (note trailing space)
    pub hour_observed: i32,
    pub local_time_zone: String,
    pub reporting_area: String,
    pub state_code: String,
    pub latitude: f64,
    pub longitude: f64,
    pub parameter_name: String,
    #[serde(rename = "AQI")]
    pub aqi: i32,
    pub category: Category,
}

// ---------------------------------------------------------------------------
// Error types
// ---------------------------------------------------------------------------

/// Reasons a (date, hour, zone) triple cannot become a timestamp.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TimestampError {
    #[error("invalid observation date {0:?}")]
    InvalidDate(String),
    #[error("invalid observation hour {0}")]
    InvalidHour(i32),
    #[error("unknown time zone abbreviation {0:?}")]
    UnknownTimeZone(String),
}

/// Errors that can arise when fetching or normalizing AirNow observations.
#[derive(Debug, Error)]
pub enum AirNowError {
    /// The request never produced a readable response (DNS, connect, I/O).
    #[error("HTTP error: {0}")]
    Transport(#[from] reqwest::Error),
    /// The body was not the expected JSON array.
    #[error("Parse error: {0}")]
    Decode(#[from] serde_json::Error),
    /// An HTML page came back instead of JSON. AirNow does this for a
    /// missing or invalid key, and also when rate limiting.
    #[error("received unexpected response from AirNow source")]
    BadServerResponse,
    /// The response was a well-formed but empty array.
    #[error("No observation found for zip code {zip_code}")]
    NotFound { zip_code: String },
    #[error("Timestamp error: {0}")]
    Timestamp(#[from] TimestampError),
    #[error("Configuration error: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, AirNowError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn raw_observation_decodes_upstream_field_names() {
        let body = r#"{
            "DateObserved": "2023-01-01 ",
            "HourObserved": 14,
            "LocalTimeZone": "PST",
            "ReportingArea": "Seattle",
            "StateCode": "WA",
            "Latitude": 47.0,
            "Longitude": -122.9,
            "ParameterName": "PM2.5",
            "AQI": 42,
            "Category": {"Number": 1, "Name": "Moderate"}
        }"#;

        let raw: RawObservation = serde_json::from_str(body).unwrap();
        assert_eq!(raw.date_observed, "2023-01-01 ");
        assert_eq!(raw.hour_observed, 14);
        assert_eq!(raw.local_time_zone, "PST");
        assert_eq!(raw.parameter_name, "PM2.5");
        assert_eq!(raw.aqi, 42);
        assert_eq!(raw.category.number, 1);
        assert_eq!(raw.category.name, "Moderate");
        assert_eq!(raw.category.color, Rgba::default());
    }

    #[test]
    fn raw_observation_tolerates_missing_fields() {
        let raw: RawObservation = serde_json::from_str(r#"{"AQI": 7}"#).unwrap();
        assert_eq!(raw.aqi, 7);
        assert!(raw.reporting_area.is_empty());
        assert_eq!(raw.category, Category::default());
    }

    #[test]
    fn error_messages_are_human_readable() {
        let err = AirNowError::NotFound { zip_code: "98501".to_string() };
        assert_eq!(err.to_string(), "No observation found for zip code 98501");

        let err: AirNowError = TimestampError::UnknownTimeZone("???".to_string()).into();
        assert_eq!(err.to_string(), "Timestamp error: unknown time zone abbreviation \"???\"");

        assert_eq!(
            AirNowError::BadServerResponse.to_string(),
            "received unexpected response from AirNow source"
        );
    }

    #[test]
    fn rgba_display() {
        assert_eq!(Rgba::new(255, 126, 0, 0).to_string(), "rgba(255, 126, 0, 0)");
    }
}
