//! Client configuration.
//!
//! Settings come from an optional TOML file; the API key can be overridden
//! from the environment so it never has to live on disk.
//!
//! ```toml
//! base_url = "http://www.airnowapi.org"
//! api_key = "..."
//! zip_code = "98501"
//! distance_miles = 25
//! ```

use serde::Deserialize;
use std::fs;
use std::path::Path;

use crate::ingest::airnow::AIRNOW_BASE_URL;
use crate::model::{AirNowError, Result};

/// Environment variable holding the API key.
pub const API_KEY_ENV: &str = "AIRNOW_API_KEY";

/// Default config file name, looked up in the working directory.
pub const DEFAULT_CONFIG_FILE: &str = "airnow.toml";

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct AirNowConfig {
    pub base_url: String,
    pub api_key: Option<String>,
    /// Zip code queried when the caller gives none.
    pub zip_code: String,
    /// Search radius, in miles.
    pub distance_miles: i32,
}

impl Default for AirNowConfig {
    fn default() -> Self {
        Self {
            base_url: AIRNOW_BASE_URL.to_string(),
            api_key: None,
            zip_code: "98501".to_string(),
            distance_miles: 25,
        }
    }
}

impl AirNowConfig {
    /// Parse configuration from TOML text. Absent keys take their defaults.
    pub fn from_toml_str(contents: &str) -> Result<Self> {
        toml::from_str(contents).map_err(|e| AirNowError::Config(e.to_string()))
    }

    /// Load configuration from a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path)
            .map_err(|e| AirNowError::Config(format!("{}: {}", path.display(), e)))?;
        Self::from_toml_str(&contents)
    }

    /// Load `path` if it exists, otherwise start from defaults.
    pub fn load_or_default(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if path.exists() {
            Self::load(path)
        } else {
            Ok(Self::default())
        }
    }

    /// Override the API key with `value` when it is set and non-empty.
    pub fn apply_api_key(&mut self, value: Option<String>) {
        if let Some(key) = value.filter(|k| !k.trim().is_empty()) {
            self.api_key = Some(key);
        }
    }

    /// Override the API key from `AIRNOW_API_KEY`.
    pub fn apply_env(&mut self) {
        self.apply_api_key(std::env::var(API_KEY_ENV).ok());
    }
}
