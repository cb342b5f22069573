//! Data models for Clima

mod forecast;

pub use forecast::{format_date, weekday_name, Coordinates, ForecastDay};
