use reqwest::Client;
use serde::Deserialize;

use crate::error::{Error, Result};
use crate::model::GeoCandidate;

const DEFAULT_BASE_URL: &str = "http://api.openweathermap.org";

/// Maximum number of records requested from the geocoding endpoint.
const RESULT_LIMIT: &str = "10";

/// Client for the OpenWeather geocoding endpoint.
#[derive(Debug, Clone)]
pub struct GeoClient {
    api_key: String,
    http: Client,
    base_url: String,
}

impl GeoClient {
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

    /// Resolve a free-text city name into deduplicated coordinate candidates.
    ///
    /// Returns `Error::CityNotFound` when the endpoint answers with an empty
    /// list, and `Error::GeolocationFailure` on a non-success status.
    pub async fn resolve(&self, city: &str) -> Result<Vec<GeoCandidate>> {
        let url = format!("{}/geo/1.0/direct", self.base_url);

        tracing::debug!(city, "resolving city via geocoding endpoint");

        let res = self
            .http
            .get(&url)
            .query(&[
                ("q", city),
                ("limit", RESULT_LIMIT),
                ("appid", self.api_key.as_str()),
            ])
            .send()
            .await?;

        let status = res.status();
        if !status.is_success() {
            return Err(Error::GeolocationFailure {
                status: status.as_u16(),
            });
        }

        let body = res.text().await?;
        let records: Vec<GeoRecord> = serde_json::from_str(&body)?;

        if records.is_empty() {
            return Err(Error::CityNotFound);
        }

        Ok(dedup_candidates(records))
    }
}

/// Drop records whose exact (lat, lon) pair already appeared, keeping first
/// occurrences in response order. Candidate indices stay at the original
/// response positions.
fn dedup_candidates(records: Vec<GeoRecord>) -> Vec<GeoCandidate> {
    let mut kept: Vec<GeoCandidate> = Vec::with_capacity(records.len());

    for (index, rec) in records.into_iter().enumerate() {
        let seen = kept
            .iter()
            .any(|c| c.latitude == rec.lat && c.longitude == rec.lon);
        if seen {
            continue;
        }

        kept.push(GeoCandidate {
            index,
            name: rec.name,
            country: rec.country,
            state: rec.state,
            latitude: rec.lat,
            longitude: rec.lon,
        });
    }

    kept
}

#[derive(Debug, Deserialize)]
struct GeoRecord {
    name: String,
    country: String,
    lat: f64,
    lon: f64,
    state: Option<String>,
}
