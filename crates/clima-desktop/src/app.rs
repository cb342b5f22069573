//! Main application component and navigation shell

use std::sync::Arc;

use dioxus::prelude::*;

use clima_core::{LocationProvider, SystemLocation, WeatherClient};

use crate::bootstrap_config::load_bootstrap_config;
use crate::state::AppState;
use crate::theme::PALETTE;
use crate::views::{Login, Weather};

/// Application routes
#[derive(Debug, Clone, Routable, PartialEq)]
pub enum Route {
    #[route("/")]
    Weather {},
    #[route("/login")]
    Login {},
}

/// Build the weather client from the embedded bootstrap configuration.
///
/// Returns `None` when the app is not provisioned; the screen then skips
/// the fetch and keeps rendering an empty list.
fn build_weather_client() -> Option<Arc<WeatherClient>> {
    let bootstrap = load_bootstrap_config();
    let api_config = match bootstrap.api_config() {
        Ok(config) => config,
        Err(error) => {
            tracing::warn!("Weather API not configured: {}", error);
            return None;
        }
    };
    match WeatherClient::new(api_config) {
        Ok(client) => Some(Arc::new(client)),
        Err(error) => {
            tracing::error!("Failed to build weather client: {}", error);
            None
        }
    }
}

/// Root application component
#[component]
pub fn App() -> Element {
    let weather_client = use_signal(build_weather_client);
    let location_provider =
        use_signal(|| Arc::new(SystemLocation::new()) as Arc<dyn LocationProvider>);

    use_context_provider(|| AppState {
        weather_client,
        location_provider,
    });

    rsx! {
        div {
            class: "app-container",
            style: "
                min-height: 100vh;
                font-family: system-ui, -apple-system, sans-serif;
                background: {PALETTE.bg_primary};
                color: {PALETTE.text_primary};
            ",
            Router::<Route> {}
        }
    }
}
