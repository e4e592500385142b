//! Weather lookups for SkyCast
//!
//! Fetches current conditions and the 3-hourly forecast from the
//! OpenWeatherMap API and samples the forecast down to one reading per day.

pub mod client;
pub mod error;
pub mod sampler;
pub mod types;

pub use client::{ClientConfig, OpenWeatherClient, WeatherSource};
pub use error::{ErrorKind, QueryError, UpstreamError, WeatherError};
pub use sampler::{sample, sample_with_limit, MAX_FORECAST_DAYS};
pub use types::*;
