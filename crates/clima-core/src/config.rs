//! Weather API configuration.
//!
//! Two externally supplied values - the API key and the forecast endpoint
//! URL - provisioned at build time and validated here before any request
//! is made. There is no runtime override mechanism.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::util::{is_http_url, normalize_text_option};

/// Validated weather API configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ApiConfig {
    /// API key sent as the `key` query parameter.
    pub api_key: String,
    /// Forecast endpoint URL, e.g. `https://api.weatherapi.com/v1/forecast.json`.
    pub api_url: String,
}

impl ApiConfig {
    /// Builds a validated config from raw optional values.
    ///
    /// Both values are trimmed; empty or missing values and non-http(s)
    /// endpoint URLs are rejected.
    pub fn from_parts(api_key: Option<String>, api_url: Option<String>) -> Result<Self> {
        let api_key = normalize_text_option(api_key)
            .ok_or_else(|| Error::InvalidConfig("missing weather API key".to_string()))?;
        let api_url = normalize_text_option(api_url)
            .ok_or_else(|| Error::InvalidConfig("missing weather API URL".to_string()))?;

        if !is_http_url(&api_url) {
            return Err(Error::InvalidConfig(format!(
                "weather API URL must be http(s): {api_url}"
            )));
        }

        Ok(Self { api_key, api_url })
    }
}
