//! Client for the EPA AirNow current air-quality observation API.
//!
//! ```no_run
//! use airnow_client::AirNow;
//!
//! let airnow = AirNow::new("YOUR-API-KEY");
//! let obs = airnow.now_by_zip("98501", 25)?;
//! println!("{} {}: AQI {} ({})", obs.area, obs.state, obs.aqi, obs.category.name);
//! # Ok::<(), airnow_client::AirNowError>(())
//! ```

pub mod category;
pub mod config;
pub mod ingest;
pub mod logging;
pub mod model;
pub mod timestamp;

pub use category::{category_color, CATEGORY_COLORS};
pub use config::AirNowConfig;
pub use ingest::airnow::AirNow;
pub use model::{AirNowError, Category, Observation, Point, Result, Rgba, TimestampError};
