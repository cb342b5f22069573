//! Application state management
//!
//! Shared services accessible via Dioxus context providers. Forecast data
//! and coordinates are screen-local and live in the weather view, not here.

use std::sync::Arc;

use dioxus::prelude::*;

use clima_core::{LocationProvider, WeatherClient};

/// Services shared across screens
#[derive(Clone, Copy)]
pub struct AppState {
    /// Weather API client, `None` when the app is not provisioned with a key
    pub weather_client: Signal<Option<Arc<WeatherClient>>>,
    /// Device location provider
    pub location_provider: Signal<Arc<dyn LocationProvider>>,
}
