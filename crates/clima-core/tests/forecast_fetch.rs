//! Integration tests for WeatherClient using wiremock.
//!
//! These tests verify the forecast fetch behavior against a mock HTTP server.

use clima_core::{ApiConfig, Coordinates, Error, WeatherClient};
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

const MADRID: Coordinates = Coordinates {
    latitude: 40.4,
    longitude: -3.7,
};

/// One raw forecast entry in the shape the API returns.
fn forecast_entry(date: &str, max: f64, min: f64, rain: u8, text: &str) -> serde_json::Value {
    serde_json::json!({
        "date": date,
        "day": {
            "maxtemp_c": max,
            "mintemp_c": min,
            "daily_chance_of_rain": rain,
            "condition": { "text": text }
        }
    })
}

fn five_day_body() -> serde_json::Value {
    serde_json::json!({
        "location": { "name": "Madrid" },
        "forecast": {
            "forecastday": [
                forecast_entry("2024-03-05", 18.4, 7.1, 20, "Parcialmente nublado"),
                forecast_entry("2024-03-06", 21.0, 9.3, 0, "Soleado"),
                forecast_entry("2024-03-07", 25.2, 11.8, 10, "Soleado"),
                forecast_entry("2024-03-08", 31.5, 14.0, 5, "Despejado"),
                forecast_entry("2024-03-09", 16.9, 6.2, 85, "Lluvia moderada"),
            ]
        }
    })
}

fn client_for(server: &MockServer) -> WeatherClient {
    let config = ApiConfig::from_parts(
        Some("test-key".to_string()),
        Some(format!("{}/v1/forecast.json", server.uri())),
    )
    .unwrap();
    WeatherClient::new(config).unwrap()
}

#[tokio::test]
async fn fetch_forecast_maps_five_days_in_order() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/forecast.json"))
        .and(query_param("key", "test-key"))
        .and(query_param("q", "40.4,-3.7"))
        .and(query_param("days", "5"))
        .respond_with(ResponseTemplate::new(200).set_body_json(five_day_body()))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let days = client.fetch_forecast(MADRID).await.unwrap();

    assert_eq!(days.len(), 5);
    assert_eq!(days[0].day, "martes");
    assert_eq!(days[0].date, "05/03/2024");
    assert_eq!(days[0].max_temp, 18.4);
    assert_eq!(days[0].min_temp, 7.1);
    assert_eq!(days[0].rain_probability, 20);
    assert_eq!(days[0].weather_state, "Parcialmente nublado");
    assert_eq!(days[4].date, "09/03/2024");
    assert_eq!(days[4].weather_state, "Lluvia moderada");
}

#[tokio::test]
async fn fetch_forecast_reports_non_success_status() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/forecast.json"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let result = client.fetch_forecast(MADRID).await;

    match result {
        Err(Error::Status(status)) => assert_eq!(status.as_u16(), 500),
        other => panic!("expected status error, got {other:?}"),
    }
}

#[tokio::test]
async fn fetch_forecast_reports_malformed_body() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/forecast.json"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json at all"))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let result = client.fetch_forecast(MADRID).await;

    assert!(matches!(result, Err(Error::MalformedPayload(_))));
}
