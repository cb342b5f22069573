//! Weather API client and forecast mapping.
//!
//! Talks to a WeatherAPI-compatible forecast endpoint:
//! `GET <api_url>?key=<API_KEY>&q=<lat>,<lon>&days=5`.

use std::time::Duration;

use chrono::NaiveDate;
use reqwest::Client;
use serde::Deserialize;

use crate::config::ApiConfig;
use crate::error::{Error, Result};
use crate::models::{format_date, weekday_name, Coordinates, ForecastDay};

/// Fixed forecast window requested from the API.
const FORECAST_DAYS: u8 = 5;

/// Request timeout for the forecast call.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Top-level forecast response body.
#[derive(Debug, Deserialize)]
pub struct ForecastResponse {
    pub forecast: ForecastBlock,
}

#[derive(Debug, Deserialize)]
pub struct ForecastBlock {
    pub forecastday: Vec<RawForecastDay>,
}

/// One raw forecast entry as returned by the API.
#[derive(Debug, Deserialize)]
pub struct RawForecastDay {
    /// ISO calendar date, e.g. `2024-03-05`
    pub date: NaiveDate,
    pub day: RawDaySummary,
}

#[derive(Debug, Deserialize)]
pub struct RawDaySummary {
    pub maxtemp_c: f64,
    pub mintemp_c: f64,
    pub daily_chance_of_rain: u8,
    pub condition: RawCondition,
}

#[derive(Debug, Deserialize)]
pub struct RawCondition {
    pub text: String,
}

/// Map a raw forecast response into display records.
///
/// Pure transformation: input order and length are preserved.
#[must_use]
pub fn map_forecast(response: ForecastResponse) -> Vec<ForecastDay> {
    response
        .forecast
        .forecastday
        .into_iter()
        .map(|entry| ForecastDay {
            day: weekday_name(entry.date).to_string(),
            date: format_date(entry.date),
            max_temp: entry.day.maxtemp_c,
            min_temp: entry.day.mintemp_c,
            rain_probability: entry.day.daily_chance_of_rain,
            weather_state: entry.day.condition.text,
        })
        .collect()
}

/// HTTP client for the forecast endpoint.
#[derive(Debug, Clone)]
pub struct WeatherClient {
    client: Client,
    config: ApiConfig,
}

impl WeatherClient {
    /// Build a client for the given API configuration.
    pub fn new(config: ApiConfig) -> Result<Self> {
        let client = Client::builder().timeout(REQUEST_TIMEOUT).build()?;
        Ok(Self { client, config })
    }

    /// Fetch and map the 5-day forecast for the given coordinates.
    ///
    /// No retry is attempted; a non-success status or a body that does not
    /// match the forecast schema is returned as a typed error.
    pub async fn fetch_forecast(&self, coordinates: Coordinates) -> Result<Vec<ForecastDay>> {
        let query = format!("{},{}", coordinates.latitude, coordinates.longitude);
        let days = FORECAST_DAYS.to_string();

        tracing::debug!("Fetching {FORECAST_DAYS}-day forecast for {query}");

        let response = self
            .client
            .get(&self.config.api_url)
            .query(&[
                ("key", self.config.api_key.as_str()),
                ("q", query.as_str()),
                ("days", days.as_str()),
            ])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(Error::Status(status));
        }

        let body = response.text().await?;
        let parsed: ForecastResponse = serde_json::from_str(&body)
            .map_err(|error| Error::MalformedPayload(error.to_string()))?;

        Ok(map_forecast(parsed))
    }
}
