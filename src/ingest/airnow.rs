/// AirNow Data API Client
///
/// Retrieves the current AQI observation for a US zip code from the EPA
/// AirNow API and normalizes it into an `Observation`.
///
/// API Documentation: https://docs.airnowapi.org/
/// Current by zip:    https://docs.airnowapi.org/CurrentObservationsByZip/query

use reqwest::header::{ACCEPT, CONTENT_TYPE};
use std::fmt;

use crate::category::category_color;
use crate::config::AirNowConfig;
use crate::model::{AirNowError, Observation, Point, RawObservation, Result};
use crate::timestamp::parse_observed;

pub const AIRNOW_BASE_URL: &str = "http://www.airnowapi.org";

// ============================================================================
// URL Construction
// ============================================================================

/// Build the "current observation by zip code" URL.
///
/// Neither `zip_code` nor `distance_miles` is validated here; the API
/// reports bad input itself.
pub fn build_current_by_zip_url(
    base_url: &str,
    api_key: &str,
    zip_code: &str,
    distance_miles: i32,
) -> String {
    format!(
        "{}/aq/observation/zipCode/current/?format=application/json&API_KEY={}&zipCode={}&distance={}",
        base_url.trim_end_matches('/'),
        api_key,
        zip_code,
        distance_miles
    )
}

/// Replace the key in a request URL so it can be logged.
fn redact_key(url: &str, api_key: &str) -> String {
    if api_key.is_empty() {
        url.to_string()
    } else {
        url.replace(api_key, "<redacted>")
    }
}

// ============================================================================
// Response Parsing
// ============================================================================

/// True when the first non-whitespace byte of `body` opens a markup tag.
///
/// AirNow answers a missing or invalid key (and rate limiting) with an HTML
/// error page, so this is a best-effort signal rather than a guarantee.
pub fn looks_like_html(body: &[u8]) -> bool {
    body.iter()
        .find(|b| !b.is_ascii_whitespace())
        .is_some_and(|&b| b == b'<')
}

fn is_html_content_type(content_type: Option<&str>) -> bool {
    content_type.is_some_and(|ct| ct.to_ascii_lowercase().starts_with("text/html"))
}

/// Decode a current-observation response body into normalized observations,
/// in the order the API returned them.
///
/// Any record whose timestamp cannot be composed fails the whole response.
pub fn parse_current_response(
    content_type: Option<&str>,
    body: &[u8],
) -> Result<Vec<Observation>> {
    if looks_like_html(body) {
        return Err(AirNowError::BadServerResponse);
    }

    let raw: Vec<RawObservation> = match serde_json::from_slice(body) {
        Ok(raw) => raw,
        Err(_) if is_html_content_type(content_type) => {
            return Err(AirNowError::BadServerResponse);
        }
        Err(e) => return Err(e.into()),
    };

    raw.into_iter().map(normalize).collect()
}

/// Turn one wire record into a public observation.
fn normalize(raw: RawObservation) -> Result<Observation> {
    let time = parse_observed(&raw.date_observed, raw.hour_observed, &raw.local_time_zone)?;

    let mut category = raw.category;
    category.color = category_color(category.number);

    Ok(Observation {
        time,
        time_zone: raw.local_time_zone,
        area: raw.reporting_area,
        state: raw.state_code,
        lat_lng: Point {
            latitude: raw.latitude,
            longitude: raw.longitude,
        },
        parameter: raw.parameter_name,
        aqi: raw.aqi,
        category,
    })
}

// ============================================================================
// API Client
// ============================================================================

/// Handle to the AirNow API. Holds the API key for its whole lifetime.
///
/// No timeout is configured by default; pass a client built with one to
/// `with_client` to bound request latency.
#[derive(Clone)]
pub struct AirNow {
    api_key: String,
    base_url: String,
    client: reqwest::blocking::Client,
}

impl fmt::Debug for AirNow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AirNow")
            .field("api_key", &"<redacted>")
            .field("base_url", &self.base_url)
            .finish()
    }
}

impl AirNow {
    /// Create a client for the public AirNow endpoint.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self::with_client(api_key, reqwest::blocking::Client::new())
    }

    /// Create a client that sends requests through `client`.
    pub fn with_client(api_key: impl Into<String>, client: reqwest::blocking::Client) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: AIRNOW_BASE_URL.to_string(),
            client,
        }
    }

    /// Point the client at a different host, e.g. a mirror or a test server.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Build a client from loaded configuration.
    ///
    /// Fails if the configuration carries no API key.
    pub fn from_config(config: &AirNowConfig) -> Result<Self> {
        let api_key = config
            .api_key
            .as_deref()
            .filter(|k| !k.trim().is_empty())
            .ok_or_else(|| AirNowError::Config("no AirNow API key configured".to_string()))?;

        Ok(Self::new(api_key).with_base_url(config.base_url.clone()))
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Fetch the current observation closest to `zip_code` within
    /// `distance_miles`.
    ///
    /// Returns the first record of the response, which AirNow orders
    /// nearest-first. An empty response is `AirNowError::NotFound`.
    pub fn now_by_zip(&self, zip_code: &str, distance_miles: i32) -> Result<Observation> {
        self.all_by_zip(zip_code, distance_miles)?
            .into_iter()
            .next()
            .ok_or_else(|| AirNowError::NotFound {
                zip_code: zip_code.to_string(),
            })
    }

    /// Fetch every current observation for `zip_code`, typically one per
    /// pollutant parameter, in API order. May be empty.
    pub fn all_by_zip(&self, zip_code: &str, distance_miles: i32) -> Result<Vec<Observation>> {
        let url = build_current_by_zip_url(&self.base_url, &self.api_key, zip_code, distance_miles);
        tracing::debug!(url = %redact_key(&url, &self.api_key), "requesting current observation");

        let response = self
            .client
            .get(&url)
            .header(ACCEPT, "application/json")
            .send()?;

        let status = response.status();
        let content_type = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(str::to_owned);

        // Reading the whole body consumes the response, which releases the
        // connection before any parsing happens.
        let body = response.bytes()?;
        tracing::debug!(
            status = status.as_u16(),
            content_type = content_type.as_deref().unwrap_or(""),
            bytes = body.len(),
            "received AirNow response"
        );

        let observations = parse_current_response(content_type.as_deref(), &body)?;
        tracing::debug!(zip_code, count = observations.len(), "decoded observations");

        Ok(observations)
    }
}

// ============================================================================
// Tests
// ============================================================================
