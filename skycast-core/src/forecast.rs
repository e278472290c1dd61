use reqwest::Client;
use serde::Deserialize;

use crate::error::{Error, Result};

const DEFAULT_BASE_URL: &str = "https://api.openweathermap.org";

/// Client for the OpenWeather 5-day/3-hour forecast endpoint.
#[derive(Debug, Clone)]
pub struct ForecastClient {
    api_key: String,
    http: Client,
    base_url: String,
}

impl ForecastClient {
    pub fn new(api_key: String) -> Self {
        Self::with_base_url(api_key, DEFAULT_BASE_URL)
    }

    /// Same client against a different host. Used by tests with a mock server.
    pub fn with_base_url(api_key: String, base_url: impl Into<String>) -> Self {
        Self {
            api_key,
            http: Client::new(),
            base_url: base_url.into(),
        }
    }

    /// Fetch the raw forecast payload for a coordinate pair.
    ///
    /// A non-success status yields `Error::ForecastFetchFailure`; the caller
    /// decides how to surface it.
    pub async fn fetch(&self, latitude: f64, longitude: f64) -> Result<ForecastPayload> {
        let url = format!("{}/data/2.5/forecast", self.base_url);

        tracing::debug!(latitude, longitude, "fetching 5-day forecast");

        let res = self
            .http
            .get(&url)
            .query(&[
                ("lat", latitude.to_string()),
                ("lon", longitude.to_string()),
                ("appid", self.api_key.clone()),
            ])
            .send()
            .await?;

        let status = res.status();
        if !status.is_success() {
            return Err(Error::ForecastFetchFailure {
                status: status.as_u16(),
            });
        }

        let body = res.text().await?;
        let payload: ForecastPayload = serde_json::from_str(&body)?;

        Ok(payload)
    }
}

/// Raw forecast response, fields limited to what the transformer consumes.
#[derive(Debug, Clone, Deserialize)]
pub struct ForecastPayload {
    pub list: Vec<ForecastEntry>,
    pub city: CityBlock,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ForecastEntry {
    /// Unix timestamp of the slot, UTC seconds.
    pub dt: i64,
    pub main: MainBlock,
    pub weather: Vec<WeatherBlock>,
}

/// Temperatures arrive in Kelvin.
#[derive(Debug, Clone, Deserialize)]
pub struct MainBlock {
    pub temp_min: f64,
    pub temp_max: f64,
    pub feels_like: f64,
    pub humidity: u8,
}

#[derive(Debug, Clone, Deserialize)]
pub struct WeatherBlock {
    pub main: String,
    pub icon: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CityBlock {
    /// Unix timestamps, UTC seconds.
    pub sunrise: i64,
    pub sunset: i64,
    /// Offset from UTC in seconds; negative west of Greenwich.
    pub timezone: i64,
    pub country: String,
}
