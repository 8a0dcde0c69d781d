//! Integration tests for the data.gov.sg client using wiremock
//!
//! These tests verify the weather client's behavior against a mock HTTP server,
//! ensuring proper handling of various response scenarios.

use integration_weather::{DataGovClient, WeatherClient, WeatherConfig, WeatherError};
use wiremock::{
    Mock, MockServer, ResponseTemplate,
    matchers::{method, path},
};

/// Sample 4-day forecast response
fn sample_forecast_response() -> serde_json::Value {
    serde_json::json!({
        "items": [{
            "update_timestamp": "2024-06-03T05:36:00+08:00",
            "timestamp": "2024-06-03T05:30:00+08:00",
            "forecasts": [
                {
                    "temperature": {"low": 25, "high": 33},
                    "date": "2024-06-03",
                    "forecast": "Thundery Showers",
                    "relative_humidity": {"low": 60, "high": 95},
                    "wind": {"speed": {"low": 10, "high": 20}, "direction": "S"},
                    "timestamp": "2024-06-03T00:00:00+08:00"
                },
                {
                    "temperature": {"low": 26, "high": 34},
                    "date": "2024-06-04",
                    "forecast": "Partly Cloudy",
                    "relative_humidity": {"low": 55, "high": 90},
                    "wind": {"speed": {"low": 10, "high": 25}, "direction": "SSE"},
                    "timestamp": "2024-06-04T00:00:00+08:00"
                },
                {
                    "temperature": {"low": 25, "high": 32},
                    "date": "2024-06-05",
                    "forecast": "Afternoon showers",
                    "relative_humidity": {"low": 60, "high": 95},
                    "wind": {"speed": {"low": 15, "high": 25}, "direction": "S"},
                    "timestamp": "2024-06-05T00:00:00+08:00"
                },
                {
                    "temperature": {"low": 26, "high": 33},
                    "date": "2024-06-06",
                    "forecast": "Fair",
                    "relative_humidity": {"low": 55, "high": 90},
                    "wind": {"speed": {"low": 10, "high": 20}, "direction": "SW"},
                    "timestamp": "2024-06-06T00:00:00+08:00"
                }
            ]
        }],
        "api_info": {"status": "healthy"}
    })
}

/// Sample readings response
fn sample_readings_response() -> serde_json::Value {
    serde_json::json!({
        "metadata": {
            "stations": [
                {"id": "S109", "device_id": "S109", "name": "Ang Mo Kio Avenue 5",
                 "location": {"latitude": 1.3764, "longitude": 103.8492}},
                {"id": "S107", "device_id": "S107", "name": "East Coast Parkway",
                 "location": {"latitude": 1.3135, "longitude": 103.9625}}
            ],
            "reading_type": "DBT 1M F",
            "reading_unit": "deg C"
        },
        "items": [{
            "timestamp": "2024-06-03T10:00:00+08:00",
            "readings": [
                {"station_id": "S109", "value": 29.8},
                {"station_id": "S107", "value": 30.4}
            ]
        }],
        "api_info": {"status": "healthy"}
    })
}

/// Create a test client configured to use the mock server
fn create_test_client(mock_server: &MockServer) -> DataGovClient {
    let config = WeatherConfig {
        base_url: mock_server.uri(),
        timeout_secs: 5,
    };
    #[allow(clippy::expect_used)]
    DataGovClient::new(config).expect("Failed to create client")
}

/// Setup a mock for an endpoint with the given response
async fn setup_mock(mock_server: &MockServer, endpoint: &str, response: ResponseTemplate) {
    Mock::given(method("GET"))
        .and(path(format!("/{endpoint}")))
        .respond_with(response)
        .mount(mock_server)
        .await;
}

// ============================================================================
// Success scenarios
// ============================================================================

#[tokio::test]
async fn test_get_four_day_forecast_success() {
    let mock_server = MockServer::start().await;

    setup_mock(
        &mock_server,
        "4-day-weather-forecast",
        ResponseTemplate::new(200).set_body_json(sample_forecast_response()),
    )
    .await;

    let client = create_test_client(&mock_server);
    let result = client.get_four_day_forecast().await;

    assert!(result.is_ok(), "Expected success, got: {result:?}");

    let bundles = result.unwrap();
    assert_eq!(bundles.len(), 1);
    assert_eq!(bundles[0].forecasts.len(), 4);
    assert_eq!(bundles[0].forecasts[0].forecast, "Thundery Showers");
    assert!((bundles[0].forecasts[1].temperature.high - 34.0).abs() < 0.1);
    assert!(bundles[0].update_timestamp.is_some());
}

#[tokio::test]
async fn test_get_four_day_forecast_empty_items() {
    let mock_server = MockServer::start().await;

    setup_mock(
        &mock_server,
        "4-day-weather-forecast",
        ResponseTemplate::new(200).set_body_json(serde_json::json!({"items": []})),
    )
    .await;

    let client = create_test_client(&mock_server);
    let bundles = client.get_four_day_forecast().await.unwrap();

    assert!(bundles.is_empty());
}

#[tokio::test]
async fn test_get_readings_success() {
    let mock_server = MockServer::start().await;

    setup_mock(
        &mock_server,
        "air-temperature",
        ResponseTemplate::new(200).set_body_json(sample_readings_response()),
    )
    .await;

    let client = create_test_client(&mock_server);
    let result = client.get_readings("air-temperature").await;

    assert!(result.is_ok(), "Expected success, got: {result:?}");

    let snapshot = result.unwrap();
    assert_eq!(snapshot.stations.len(), 2);
    assert_eq!(snapshot.reading_unit.as_deref(), Some("deg C"));
    let latest = snapshot.latest().unwrap();
    assert_eq!(latest.readings.len(), 2);
    assert_eq!(latest.readings[1].station_id, "S107");
}

#[tokio::test]
async fn test_get_readings_without_items() {
    let mock_server = MockServer::start().await;

    setup_mock(
        &mock_server,
        "rainfall",
        ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "metadata": {"stations": []},
            "items": []
        })),
    )
    .await;

    let client = create_test_client(&mock_server);
    let snapshot = client.get_readings("rainfall").await.unwrap();

    assert!(snapshot.latest().is_none());
}

#[tokio::test]
async fn test_health_check_success() {
    let mock_server = MockServer::start().await;

    setup_mock(
        &mock_server,
        "4-day-weather-forecast",
        ResponseTemplate::new(200).set_body_json(sample_forecast_response()),
    )
    .await;

    let client = create_test_client(&mock_server);
    assert!(client.is_healthy().await, "Expected health check to succeed");
}

// ============================================================================
// Error handling scenarios
// ============================================================================

#[tokio::test]
async fn test_server_error_returns_service_unavailable() {
    let mock_server = MockServer::start().await;

    setup_mock(
        &mock_server,
        "4-day-weather-forecast",
        ResponseTemplate::new(500).set_body_string("Internal Server Error"),
    )
    .await;

    let client = create_test_client(&mock_server);
    let result = client.get_four_day_forecast().await;

    assert!(
        matches!(result, Err(WeatherError::ServiceUnavailable(_))),
        "Expected ServiceUnavailable, got: {result:?}"
    );
}

#[tokio::test]
async fn test_rate_limit_error() {
    let mock_server = MockServer::start().await;

    setup_mock(
        &mock_server,
        "wind-speed",
        ResponseTemplate::new(429).set_body_string("Rate limit exceeded"),
    )
    .await;

    let client = create_test_client(&mock_server);
    let result = client.get_readings("wind-speed").await;

    assert!(
        matches!(result, Err(WeatherError::RateLimitExceeded)),
        "Expected RateLimitExceeded, got: {result:?}"
    );
}

#[tokio::test]
async fn test_unknown_endpoint_returns_not_found() {
    let mock_server = MockServer::start().await;

    let client = create_test_client(&mock_server);
    let result = client.get_readings("uv-index").await;

    assert!(
        matches!(result, Err(WeatherError::NotFound(_))),
        "Expected NotFound, got: {result:?}"
    );
}

#[tokio::test]
async fn test_invalid_json_response() {
    let mock_server = MockServer::start().await;

    setup_mock(
        &mock_server,
        "4-day-weather-forecast",
        ResponseTemplate::new(200).set_body_string("not valid json"),
    )
    .await;

    let client = create_test_client(&mock_server);
    let result = client.get_four_day_forecast().await;

    assert!(
        matches!(result, Err(WeatherError::ParseError(_))),
        "Expected ParseError, got: {result:?}"
    );
}

#[tokio::test]
async fn test_client_error_returns_request_failed() {
    let mock_server = MockServer::start().await;

    setup_mock(
        &mock_server,
        "relative-humidity",
        ResponseTemplate::new(400).set_body_string("Bad Request"),
    )
    .await;

    let client = create_test_client(&mock_server);
    let result = client.get_readings("relative-humidity").await;

    assert!(
        matches!(result, Err(WeatherError::RequestFailed(_))),
        "Expected RequestFailed, got: {result:?}"
    );
}

#[tokio::test]
async fn test_health_check_fails_on_server_error() {
    let mock_server = MockServer::start().await;

    setup_mock(
        &mock_server,
        "4-day-weather-forecast",
        ResponseTemplate::new(503).set_body_string("Service Unavailable"),
    )
    .await;

    let client = create_test_client(&mock_server);
    assert!(!client.is_healthy().await, "Expected health check to fail");
}

#[tokio::test]
async fn test_connection_refused() {
    // Nothing listens on port 9 of localhost in the test environment
    let config = WeatherConfig {
        base_url: "http://127.0.0.1:9".to_string(),
        timeout_secs: 2,
    };
    let client = DataGovClient::new(config).unwrap();
    let result = client.get_four_day_forecast().await;

    assert!(
        matches!(
            result,
            Err(WeatherError::ConnectionFailed(_) | WeatherError::RequestFailed(_))
        ),
        "Expected connection error, got: {result:?}"
    );
}
