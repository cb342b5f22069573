//! Desktop bootstrap configuration loaded from build-time generated JSON.

use serde::{Deserialize, Serialize};

use clima_core::ApiConfig;

/// Build-provisioned client configuration embedded into desktop binaries.
///
/// These values bootstrap the weather API connection. There is no runtime
/// override mechanism.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct DesktopBootstrapConfig {
    #[serde(default)]
    pub weather_api_key: Option<String>,
    #[serde(default)]
    pub weather_api_url: Option<String>,
}

/// Loads the generated desktop bootstrap JSON from `OUT_DIR`.
///
/// If parsing fails, this logs a warning and returns a default empty config
/// so the app can still render without forecast data.
pub fn load_bootstrap_config() -> DesktopBootstrapConfig {
    let raw = include_str!(concat!(env!("OUT_DIR"), "/weather-bootstrap.json"));
    serde_json::from_str(raw).unwrap_or_else(|error| {
        tracing::warn!("Failed to parse desktop bootstrap config: {}", error);
        DesktopBootstrapConfig::default()
    })
}

impl DesktopBootstrapConfig {
    /// Validated weather API configuration from the embedded values.
    pub fn api_config(&self) -> clima_core::Result<ApiConfig> {
        ApiConfig::from_parts(self.weather_api_key.clone(), self.weather_api_url.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn api_config_requires_both_values() {
        let config = DesktopBootstrapConfig {
            weather_api_key: Some("abc123".to_string()),
            weather_api_url: None,
        };
        assert!(config.api_config().is_err());
    }

    #[test]
    fn api_config_builds_from_complete_bootstrap() {
        let config = DesktopBootstrapConfig {
            weather_api_key: Some("abc123".to_string()),
            weather_api_url: Some("https://api.weatherapi.com/v1/forecast.json".to_string()),
        };
        let api = config.api_config().unwrap();
        assert_eq!(api.api_key, "abc123");
        assert_eq!(api.api_url, "https://api.weatherapi.com/v1/forecast.json");
    }

    #[test]
    fn unknown_fields_are_ignored_when_deserializing() {
        let parsed: DesktopBootstrapConfig = serde_json::from_str(
            r#"{ "weather_api_key": "abc123", "weather_api_url": null, "extra": 1 }"#,
        )
        .unwrap();
        assert_eq!(parsed.weather_api_key.as_deref(), Some("abc123"));
        assert_eq!(parsed.weather_api_url, None);
    }
}
