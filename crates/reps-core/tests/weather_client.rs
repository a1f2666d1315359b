//! Forecast client tests against a mocked Open-Meteo endpoint.

use chrono::{DateTime, Duration, Utc};
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use reps_core::weather::{Coordinates, FixedLocation, WeatherClient, WeatherCondition};
use reps_core::Journal;

const HERE: Coordinates = Coordinates {
    latitude: 45.5,
    longitude: -122.25,
};

fn client(server: &MockServer) -> WeatherClient {
    WeatherClient::with_base_url(server.uri()).expect("client should build")
}

#[tokio::test]
async fn test_current_sends_expected_query() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v1/forecast"))
        .and(query_param("latitude", "45.5"))
        .and(query_param("longitude", "-122.25"))
        .and(query_param("current", "temperature_2m,weather_code"))
        .and(query_param("temperature_unit", "fahrenheit"))
        .and(query_param("timezone", "auto"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "latitude": 45.5,
            "longitude": -122.25,
            "current": {"time": "2026-01-15T08:00", "temperature_2m": 38.4, "weather_code": 61}
        })))
        .expect(1)
        .mount(&server)
        .await;

    let weather = client(&server).current(HERE).await.expect("fetch should succeed");
    assert_eq!(weather.temperature, 38.4);
    assert_eq!(weather.condition, WeatherCondition::Rain);
}

#[tokio::test]
async fn test_unknown_code_reads_clear() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v1/forecast"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "current": {"temperature_2m": 70.0, "weather_code": 42}
        })))
        .mount(&server)
        .await;

    let weather = client(&server).current(HERE).await.expect("fetch should succeed");
    assert_eq!(weather.condition, WeatherCondition::Clear);
}

#[tokio::test]
async fn test_error_status_is_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v1/forecast"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;

    assert!(client(&server).current(HERE).await.is_err());
}

#[tokio::test]
async fn test_malformed_bodies_are_errors() {
    for body in [
        serde_json::json!({"latitude": 1.0}),
        serde_json::json!({"current": {"temperature_2m": 50.0}}),
        serde_json::json!({"current": {"weather_code": 3}}),
    ] {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/v1/forecast"))
            .respond_with(ResponseTemplate::new(200).set_body_json(body))
            .mount(&server)
            .await;

        assert!(client(&server).current(HERE).await.is_err());
    }
}

#[tokio::test]
async fn test_service_caches_between_calls() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v1/forecast"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "current": {"temperature_2m": 81.2, "weather_code": 1}
        })))
        .expect(2)
        .mount(&server)
        .await;

    let journal = Journal::in_memory();
    let service = journal.weather(client(&server), FixedLocation(Some(HERE)));
    let t0: DateTime<Utc> = Utc::now();

    let first = service.current_weather_at(t0).await.expect("weather");
    assert_eq!(first.condition, WeatherCondition::PartlyCloudy);
    assert!(service
        .current_weather_at(t0 + Duration::minutes(59))
        .await
        .is_some());
    assert!(service
        .current_weather_at(t0 + Duration::minutes(61))
        .await
        .is_some());
}

#[tokio::test]
async fn test_service_degrades_when_server_down() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v1/forecast"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let journal = Journal::in_memory();
    let service = journal.weather(client(&server), FixedLocation(Some(HERE)));
    assert!(service.current_weather().await.is_none());
}
