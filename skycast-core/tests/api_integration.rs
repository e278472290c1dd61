//! HTTP-level tests against a mock OpenWeather server.

use serde_json::json;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use skycast_core::{Error, ForecastClient, GeoClient, HttpIconFetcher, IconFetcher, transform};

#[tokio::test]
async fn resolve_returns_deduplicated_candidates() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/geo/1.0/direct"))
        .and(query_param("q", "Paris"))
        .and(query_param("limit", "10"))
        .and(query_param("appid", "KEY"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {"name": "Paris", "country": "FR", "lat": 48.8566, "lon": 2.3522},
            {"name": "Paris", "country": "FR", "lat": 48.8566, "lon": 2.3522},
            {"name": "Paris", "country": "US", "lat": 33.6609, "lon": -95.5555, "state": "Texas"}
        ])))
        .expect(1)
        .mount(&server)
        .await;

    let client = GeoClient::with_base_url("KEY".to_string(), server.uri());
    let candidates = client.resolve("Paris").await.expect("resolve should succeed");

    assert_eq!(candidates.len(), 2);
    assert_eq!(candidates[0].display_label(), "1. Paris (FR)");
    // Ordinal keeps the response position of the surviving record.
    assert_eq!(candidates[1].display_label(), "3. Paris (US-Texas)");
    assert_eq!(candidates[1].latitude, 33.6609);
}

#[tokio::test]
async fn empty_geocoding_result_is_city_not_found() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/geo/1.0/direct"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .mount(&server)
        .await;

    // The forecast endpoint must never be touched for an unknown city.
    Mock::given(method("GET"))
        .and(path("/data/2.5/forecast"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let client = GeoClient::with_base_url("KEY".to_string(), server.uri());
    let err = client.resolve("Nowhereville").await.unwrap_err();

    assert!(matches!(err, Error::CityNotFound));
}

#[tokio::test]
async fn geocoding_non_success_status_is_surfaced() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/geo/1.0/direct"))
        .respond_with(ResponseTemplate::new(401))
        .mount(&server)
        .await;

    let client = GeoClient::with_base_url("BADKEY".to_string(), server.uri());
    let err = client.resolve("Paris").await.unwrap_err();

    assert!(matches!(err, Error::GeolocationFailure { status: 401 }));
}

#[tokio::test]
async fn forecast_fetch_parses_payload() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/data/2.5/forecast"))
        .and(query_param("lat", "48.8566"))
        .and(query_param("lon", "2.3522"))
        .and(query_param("appid", "KEY"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "list": [
                {
                    "dt": 1714564800,
                    "main": {
                        "temp_min": 283.15,
                        "temp_max": 288.15,
                        "feels_like": 285.15,
                        "humidity": 71
                    },
                    "weather": [{"main": "Clouds", "icon": "03d"}]
                }
            ],
            "city": {
                "sunrise": 1714537440,
                "sunset": 1714589160,
                "timezone": -18000,
                "country": "US"
            }
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = ForecastClient::with_base_url("KEY".to_string(), server.uri());
    let payload = client.fetch(48.8566, 2.3522).await.expect("fetch should succeed");

    assert_eq!(payload.list.len(), 1);
    assert_eq!(payload.city.timezone, -18000);
}

#[tokio::test]
async fn forecast_non_success_status_is_surfaced() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/data/2.5/forecast"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;

    let client = ForecastClient::with_base_url("KEY".to_string(), server.uri());
    let err = client.fetch(0.0, 0.0).await.unwrap_err();

    assert!(matches!(err, Error::ForecastFetchFailure { status: 503 }));
}

#[tokio::test]
async fn fetched_forecast_transforms_end_to_end() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/data/2.5/forecast"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "list": [
                {
                    "dt": 1714564800,
                    "main": {
                        "temp_min": 283.15,
                        "temp_max": 288.15,
                        "feels_like": 285.15,
                        "humidity": 71
                    },
                    "weather": [{"main": "Clouds", "icon": "03d"}]
                },
                {
                    "dt": 1714575600,
                    "main": {
                        "temp_min": 284.15,
                        "temp_max": 289.15,
                        "feels_like": 286.15,
                        "humidity": 64
                    },
                    "weather": [{"main": "Clouds", "icon": "03d"}]
                }
            ],
            "city": {
                "sunrise": 1714537440,
                "sunset": 1714589160,
                "timezone": 7200,
                "country": "FR"
            }
        })))
        .mount(&server)
        .await;

    // One icon request despite two slots sharing the code.
    Mock::given(method("GET"))
        .and(path("/img/wn/03d@2x.png"))
        .respond_with(ResponseTemplate::new(200).set_body_bytes(vec![0x89, 0x50, 0x4e, 0x47]))
        .expect(1)
        .mount(&server)
        .await;

    let client = ForecastClient::with_base_url("KEY".to_string(), server.uri());
    let payload = client.fetch(48.8566, 2.3522).await.expect("fetch should succeed");

    let icons = HttpIconFetcher::with_base_url(server.uri());
    let (slots, meta) = transform(&payload, &icons).await;

    assert_eq!(slots.len(), 2);
    assert_eq!(slots[0].temp_min_c, 10.0);
    assert!(slots.iter().all(|s| s.icon.is_some()));
    assert_eq!(meta.utc_offset_label, "UTC+2");
}

#[tokio::test]
async fn icon_non_success_status_is_surfaced() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/img/wn/99x@2x.png"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let icons = HttpIconFetcher::with_base_url(server.uri());
    let err = icons.fetch("99x").await.unwrap_err();

    assert!(matches!(err, Error::IconFetchFailure { status: 404 }));
}
