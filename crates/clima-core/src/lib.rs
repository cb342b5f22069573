//! clima-core - Core library for Clima
//!
//! This crate contains the configuration, weather API client, forecast
//! models, and location services shared by all Clima interfaces.

pub mod api;
pub mod config;
pub mod error;
pub mod location;
pub mod models;
pub mod util;

pub use api::WeatherClient;
pub use config::ApiConfig;
pub use error::{Error, Result};
pub use location::{acquire_position, LocationProvider, PositionOptions, SystemLocation};
pub use models::{Coordinates, ForecastDay};
