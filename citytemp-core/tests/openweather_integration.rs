//! Integration tests for the OpenWeather provider and the screen using wiremock.

use std::{sync::Arc, time::Duration};

use citytemp_core::{
    FetchError, OpenWeatherProvider, WeatherProvider, WeatherScreen,
    error::TRANSPORT_MESSAGE,
};
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn provider_for(server: &MockServer) -> OpenWeatherProvider {
    OpenWeatherProvider::new(format!("{}/data/2.5/weather", server.uri()), "TEST_KEY".into(), None)
        .unwrap()
}

#[tokio::test]
async fn sends_city_key_and_metric_units() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/data/2.5/weather"))
        .and(query_param("q", "London"))
        .and(query_param("appid", "TEST_KEY"))
        .and(query_param("units", "metric"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "cod": 200,
            "name": "London",
            "main": { "temp": 18.5, "feels_like": 17.9, "humidity": 72 }
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let payload = provider_for(&mock_server).current_weather("London").await.unwrap();

    assert!(payload.is_success());
    assert_eq!(payload.into_temperature().unwrap(), 18.5);
}

#[tokio::test]
async fn error_status_body_is_still_parsed() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/data/2.5/weather"))
        .respond_with(ResponseTemplate::new(404).set_body_json(serde_json::json!({
            "cod": "404",
            "message": "city not found"
        })))
        .mount(&mock_server)
        .await;

    let payload = provider_for(&mock_server).current_weather("Zzzzz").await.unwrap();
    let err = payload.into_temperature().unwrap_err();

    assert!(matches!(err, FetchError::Api(ref m) if m == "city not found"), "got {err:?}");
}

#[tokio::test]
async fn non_json_body_is_an_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(502).set_body_string("<html>Bad Gateway</html>"))
        .mount(&mock_server)
        .await;

    let err = provider_for(&mock_server).current_weather("London").await.unwrap_err();

    let msg = format!("{err:#}");
    assert!(msg.contains("Failed to parse OpenWeather current JSON"), "{msg}");
    assert!(msg.contains("502"), "{msg}");
}

#[tokio::test]
async fn unreachable_endpoint_is_an_error() {
    let provider =
        OpenWeatherProvider::new("http://127.0.0.1:1/weather", "TEST_KEY".into(), None).unwrap();
    let err = provider.current_weather("London").await.unwrap_err();

    assert!(err.to_string().contains("Failed to send request"));
}

#[tokio::test]
async fn send_failure_does_not_expose_api_key() {
    let provider =
        OpenWeatherProvider::new("http://127.0.0.1:1/weather", "SECRET_KEY".into(), None).unwrap();
    let err = provider.current_weather("London").await.unwrap_err();

    let dbg = format!("{err:?}");
    assert!(!dbg.contains("SECRET_KEY"), "{dbg}");
    assert!(!format!("{err:#}").contains("SECRET_KEY"));
}

#[tokio::test]
async fn timeout_does_not_expose_api_key() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_delay(Duration::from_secs(2)))
        .mount(&mock_server)
        .await;

    let provider = OpenWeatherProvider::new(
        mock_server.uri(),
        "SECRET_KEY".into(),
        Some(Duration::from_millis(100)),
    )
    .unwrap();
    let err = provider.current_weather("London").await.unwrap_err();

    assert!(!format!("{err:?}").contains("SECRET_KEY"), "{err:?}");
}

#[tokio::test]
async fn configured_timeout_turns_slow_reply_into_transport_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(serde_json::json!({ "cod": 200, "main": { "temp": 1.0 } }))
                .set_delay(Duration::from_secs(2)),
        )
        .mount(&mock_server)
        .await;

    let provider = OpenWeatherProvider::new(
        mock_server.uri(),
        "TEST_KEY".into(),
        Some(Duration::from_millis(100)),
    )
    .unwrap();

    let mut screen = WeatherScreen::new(Arc::new(provider));
    screen.set_city_query("London");
    screen.submit().await;

    assert_eq!(screen.state().error_message, TRANSPORT_MESSAGE);
    assert_eq!(screen.state().temperature, None);
    assert!(!screen.state().is_loading);
}

#[tokio::test]
async fn screen_against_http_shows_result() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(query_param("q", "London"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "cod": 200,
            "main": { "temp": 18.5 }
        })))
        .mount(&mock_server)
        .await;

    let mut screen = WeatherScreen::new(Arc::new(provider_for(&mock_server)));
    screen.set_city_query("London");
    screen.submit().await;

    let view = screen.view();
    assert_eq!(view.error, None);
    let result = view.result.expect("temperature should be shown");
    assert_eq!(result.city, "London");
    assert_eq!(result.temperature, "18.5°C");
}

#[tokio::test]
async fn blank_city_sends_no_request() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&mock_server)
        .await;

    let mut screen = WeatherScreen::new(Arc::new(provider_for(&mock_server)));
    screen.set_city_query("   ");
    screen.submit().await;

    assert_eq!(screen.state().error_message, "Please enter a city name");
    mock_server.verify().await;
}
