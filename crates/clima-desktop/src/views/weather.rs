//! Weather screen - acquires a position fix and renders the 5-day forecast

use dioxus::prelude::*;

use clima_core::{acquire_position, Coordinates, ForecastDay, PositionOptions};

use crate::components::WeatherCard;
use crate::state::AppState;
use crate::theme::PALETTE;

/// Weather screen component.
///
/// Owns the forecast and coordinates as screen-local state. One effect
/// acquires a position fix on mount; a second re-runs the forecast fetch
/// whenever the coordinates change. Tasks spawned here are dropped when
/// the screen unmounts, so an in-flight result cannot update a torn-down
/// view.
#[component]
pub fn Weather() -> Element {
    let state = use_context::<AppState>();
    let mut weather_data = use_signal(Vec::<ForecastDay>::new);
    let mut location = use_signal(|| None::<Coordinates>);

    // Acquire one position fix on mount.
    use_effect(move || {
        let provider = (state.location_provider)();
        spawn(async move {
            match acquire_position(provider.as_ref(), &PositionOptions::default()).await {
                Ok(coordinates) => {
                    tracing::info!(
                        "Position fix: {},{}",
                        coordinates.latitude,
                        coordinates.longitude
                    );
                    location.set(Some(coordinates));
                }
                Err(error) => {
                    tracing::error!("Failed to acquire location: {}", error);
                }
            }
        });
    });

    // Fetch the forecast whenever the coordinates change.
    use_effect(move || {
        let Some(coordinates) = location() else {
            return;
        };
        let Some(client) = (state.weather_client)() else {
            tracing::warn!("Weather API not configured; skipping forecast fetch");
            return;
        };
        spawn(async move {
            match client.fetch_forecast(coordinates).await {
                Ok(days) => {
                    tracing::info!("Loaded {}-day forecast", days.len());
                    weather_data.set(days);
                }
                Err(error) => {
                    tracing::error!("Error fetching weather data: {}", error);
                }
            }
        });
    });

    rsx! {
        div {
            class: "weather-screen",
            style: "
                display: flex;
                justify-content: center;
                align-items: center;
                min-height: 100vh;
                padding: 20px;
            ",

            if weather_data().is_empty() {
                div {
                    style: "color: {PALETTE.text_secondary}; text-align: center;",
                    "Sin pronóstico disponible"
                }
            } else {
                div {
                    class: "forecast-strip",
                    style: "
                        display: flex;
                        flex-direction: row;
                        overflow-x: auto;
                        padding: 0 10px;
                    ",

                    for (index, day) in weather_data().into_iter().enumerate() {
                        WeatherCard { key: "{index}", forecast: day }
                    }
                }
            }
        }
    }
}
