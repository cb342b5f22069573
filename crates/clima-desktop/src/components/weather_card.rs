//! Weather card component

use dioxus::prelude::*;

use clima_core::ForecastDay;

/// Background color for a card, picked from the day's maximum temperature.
///
/// Bands: below 20 °C cool blue, 21-30 °C inclusive warm yellow, everything
/// else hot orange. Values in the 20.0-21.0 gap fall through both explicit
/// bands to the hot color.
#[must_use]
pub fn background_for_temp(max_temp: f64) -> &'static str {
    if max_temp < 20.0 {
        "#87CEEB"
    } else if (21.0..=30.0).contains(&max_temp) {
        "#FFD700"
    } else {
        "#FFA500"
    }
}

/// One day of the forecast rendered as a styled card.
#[component]
pub fn WeatherCard(forecast: ForecastDay) -> Element {
    let background = background_for_temp(forecast.max_temp);

    rsx! {
        div {
            class: "weather-card",
            style: "
                display: flex;
                flex-direction: column;
                align-items: center;
                width: 150px;
                flex-shrink: 0;
                padding: 20px;
                margin: 10px;
                border-radius: 10px;
                background: {background};
            ",

            div {
                style: "font-size: 18px; font-weight: bold;",
                "{forecast.day}"
            }
            div {
                style: "font-size: 14px;",
                "{forecast.date}"
            }
            div {
                style: "font-size: 16px;",
                "Max: {forecast.max_temp}°C"
            }
            div {
                style: "font-size: 16px;",
                "Min: {forecast.min_temp}°C"
            }
            div {
                style: "font-size: 14px;",
                "Lluvia: {forecast.rain_probability}%"
            }
            div {
                style: "font-size: 14px; font-style: italic;",
                "{forecast.weather_state}"
            }
        }
    }
}
