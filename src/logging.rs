/// Logging setup and failure classification for AirNow consumers
///
/// The library itself only emits `debug` events from the fetcher; this
/// module lets a binary install a subscriber and report fetch failures at a
/// severity that matches how surprising they are.

use std::fmt;
use tracing::Level;
use tracing_subscriber::EnvFilter;

use crate::model::AirNowError;

// ---------------------------------------------------------------------------
// Subscriber
// ---------------------------------------------------------------------------

/// Install a global fmt subscriber writing to stderr.
///
/// `RUST_LOG` takes precedence over `default_level` when set. Calling this
/// twice is harmless; the second call leaves the first subscriber in place.
pub fn init_tracing(default_level: Level) {
    let level = default_level.as_str().to_lowercase();
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("airnow_client={level},nowbyzip={level}")));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

// ---------------------------------------------------------------------------
// Failure Classification
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FailureType {
    /// Expected failure - no monitor near the zip code, or bad caller input
    Expected,
    /// Unexpected failure - network trouble or an upstream format change
    Unexpected,
    /// Unknown - key problem or rate limiting, the API does not say which
    Unknown,
}

impl fmt::Display for FailureType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FailureType::Expected => write!(f, "EXPECTED"),
            FailureType::Unexpected => write!(f, "UNEXPECTED"),
            FailureType::Unknown => write!(f, "UNKNOWN"),
        }
    }
}

/// Classify a fetch failure.
pub fn classify_failure(err: &AirNowError) -> FailureType {
    match err {
        AirNowError::NotFound { .. } | AirNowError::Config(_) => FailureType::Expected,
        AirNowError::Transport(_) | AirNowError::Decode(_) | AirNowError::Timestamp(_) => {
            FailureType::Unexpected
        }
        AirNowError::BadServerResponse => FailureType::Unknown,
    }
}

/// Log a fetch failure for `zip_code` at a level chosen by its classification.
pub fn log_fetch_failure(zip_code: &str, err: &AirNowError) {
    let failure_type = classify_failure(err);
    match failure_type {
        FailureType::Expected => {
            tracing::info!(zip_code, kind = %failure_type, "fetch failed: {}", err)
        }
        FailureType::Unexpected => {
            tracing::error!(zip_code, kind = %failure_type, "fetch failed: {}", err)
        }
        FailureType::Unknown => {
            tracing::warn!(zip_code, kind = %failure_type, "fetch failed: {}", err)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::TimestampError;

    #[test]
    fn test_failure_classification() {
        let not_found = AirNowError::NotFound { zip_code: "00000".to_string() };
        assert_eq!(classify_failure(&not_found), FailureType::Expected);

        let html = AirNowError::BadServerResponse;
        assert_eq!(classify_failure(&html), FailureType::Unknown);

        let ts = AirNowError::Timestamp(TimestampError::InvalidHour(25));
        assert_eq!(classify_failure(&ts), FailureType::Unexpected);

        let decode = serde_json::from_str::<Vec<i32>>("{").unwrap_err();
        assert_eq!(classify_failure(&AirNowError::from(decode)), FailureType::Unexpected);
    }

    #[test]
    fn test_init_tracing_twice_does_not_panic() {
        init_tracing(Level::DEBUG);
        init_tracing(Level::INFO);
        log_fetch_failure("98501", &AirNowError::BadServerResponse);
    }
}
