//! Forecast display models and date formatting

use chrono::{Datelike, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};

/// A latitude/longitude pair identifying the device's location
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

/// One day's weather summary, ready for display
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForecastDay {
    /// Weekday name in the app locale (Spanish)
    pub day: String,
    /// Calendar date formatted as `DD/MM/YYYY`
    pub date: String,
    /// Maximum temperature in Celsius
    pub max_temp: f64,
    /// Minimum temperature in Celsius
    pub min_temp: f64,
    /// Chance of rain as a percentage (0-100)
    pub rain_probability: u8,
    /// Free-text condition description from the API
    pub weather_state: String,
}

/// Format a calendar date as zero-padded `DD/MM/YYYY`.
#[must_use]
pub fn format_date(date: NaiveDate) -> String {
    format!("{:02}/{:02}/{}", date.day(), date.month(), date.year())
}

/// Spanish weekday name for a date.
#[must_use]
pub fn weekday_name(date: NaiveDate) -> &'static str {
    match date.weekday() {
        Weekday::Mon => "lunes",
        Weekday::Tue => "martes",
        Weekday::Wed => "miércoles",
        Weekday::Thu => "jueves",
        Weekday::Fri => "viernes",
        Weekday::Sat => "sábado",
        Weekday::Sun => "domingo",
    }
}
