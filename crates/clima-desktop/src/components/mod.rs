//! UI Components
//!
//! Reusable UI components for the desktop application.

mod weather_card;

pub use weather_card::WeatherCard;
