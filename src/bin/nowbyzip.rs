//! Print the current AirNow observation for a zip code.
//!
//! Usage: nowbyzip [ZIP] [DISTANCE_MILES]
//!
//! The API key is read from `AIRNOW_API_KEY` (or the older `AIRNOW`), a
//! `.env` file, or `api_key` in `airnow.toml`.

use airnow_client::config::{AirNowConfig, DEFAULT_CONFIG_FILE};
use airnow_client::logging::{init_tracing, log_fetch_failure};
use airnow_client::{AirNow, AirNowError, Observation};
use std::process::ExitCode;
use tracing::Level;

fn load_config() -> Result<AirNowConfig, AirNowError> {
    let mut config = AirNowConfig::load_or_default(DEFAULT_CONFIG_FILE)?;
    config.apply_api_key(std::env::var("AIRNOW").ok());
    config.apply_env();

    let mut args = std::env::args().skip(1);
    if let Some(zip) = args.next() {
        config.zip_code = zip;
    }
    if let Some(distance) = args.next() {
        config.distance_miles = distance
            .parse()
            .map_err(|_| AirNowError::Config(format!("invalid distance {:?}", distance)))?;
    }
    Ok(config)
}

fn render(obs: &Observation) -> String {
    format!(
        "Time:     {}\n\
         Area:     {}\n\
         State:    {}\n\
         LatLng:   {},{}\n\
         AQI:      {}\n\
         Category: {}: {} [{}]",
        obs.time.format("%Y-%m-%d %H:%M %z"),
        obs.area,
        obs.state,
        obs.lat_lng.latitude,
        obs.lat_lng.longitude,
        obs.aqi,
        obs.category.number,
        obs.category.name,
        obs.category.color,
    )
}

fn main() -> ExitCode {
    dotenv::dotenv().ok();
    init_tracing(Level::WARN);

    let config = match load_config() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{}", e);
            return ExitCode::FAILURE;
        }
    };

    let result = AirNow::from_config(&config)
        .and_then(|airnow| airnow.now_by_zip(&config.zip_code, config.distance_miles));

    match result {
        Ok(obs) => {
            println!("{}", render(&obs));
            ExitCode::SUCCESS
        }
        Err(e) => {
            log_fetch_failure(&config.zip_code, &e);
            eprintln!("{}", e);
            ExitCode::FAILURE
        }
    }
}
