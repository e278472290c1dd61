use thiserror::Error;

/// Errors produced by the skycast core operations.
///
/// Every network operation returns a `Result` with one of these variants;
/// nothing is signaled through logs alone.
#[derive(Debug, Error)]
pub enum Error {
    /// The geocoding endpoint returned an empty result list.
    #[error("No location found for the given city")]
    CityNotFound,

    /// The geocoding endpoint answered with a non-success status.
    #[error("Geocoding request failed with status {status}")]
    GeolocationFailure { status: u16 },

    /// The forecast endpoint answered with a non-success status.
    #[error("Forecast request failed with status {status}")]
    ForecastFetchFailure { status: u16 },

    /// The icon asset endpoint answered with a non-success status.
    #[error("Icon request failed with status {status}")]
    IconFetchFailure { status: u16 },

    /// Transport-level failure (connect, timeout, body read).
    #[error("Network error: {0}")]
    Http(#[from] reqwest::Error),

    /// The endpoint answered 200 but the body did not match the expected shape.
    #[error("Failed to parse response: {0}")]
    Parse(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
