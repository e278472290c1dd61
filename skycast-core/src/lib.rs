//! Core library for the `skycast` forecast tool.
//!
//! This crate defines:
//! - Configuration & credentials handling
//! - Geocoding resolution with coordinate deduplication
//! - Forecast fetching and transformation into renderable tables
//!
//! It is used by `skycast-cli`, but can also be reused by other binaries or services.

pub mod config;
pub mod error;
pub mod forecast;
pub mod geocode;
pub mod icons;
pub mod model;
pub mod transform;

pub use config::Config;
pub use error::{Error, Result};
pub use forecast::{ForecastClient, ForecastPayload};
pub use geocode::GeoClient;
pub use icons::{HttpIconFetcher, IconFetcher};
pub use model::{ForecastMeta, ForecastSlot, GeoCandidate, IconImage};
pub use transform::transform;
