use async_trait::async_trait;
use reqwest::Client;

use crate::error::{Error, Result};
use crate::model::IconImage;

const DEFAULT_BASE_URL: &str = "https://openweathermap.org";

/// Source of weather icon images.
///
/// The transformer goes through this trait so its per-call icon cache can be
/// exercised with a counting fake in tests.
#[async_trait]
pub trait IconFetcher: Send + Sync {
    async fn fetch(&self, icon_code: &str) -> Result<IconImage>;
}

/// Fetches icon PNGs from the OpenWeather static asset host.
#[derive(Debug, Clone)]
pub struct HttpIconFetcher {
    http: Client,
    base_url: String,
}

impl HttpIconFetcher {
    pub fn new() -> Self {
        Self::with_base_url(DEFAULT_BASE_URL)
    }

    /// Same fetcher against a different host. Used by tests with a mock server.
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            http: Client::new(),
            base_url: base_url.into(),
        }
    }
}

impl Default for HttpIconFetcher {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl IconFetcher for HttpIconFetcher {
    async fn fetch(&self, icon_code: &str) -> Result<IconImage> {
        let url = format!("{}/img/wn/{}@2x.png", self.base_url, icon_code);

        let res = self.http.get(&url).send().await?;

        let status = res.status();
        if !status.is_success() {
            return Err(Error::IconFetchFailure {
                status: status.as_u16(),
            });
        }

        let bytes = res.bytes().await?;

        Ok(IconImage {
            code: icon_code.to_string(),
            bytes: bytes.to_vec(),
        })
    }
}
