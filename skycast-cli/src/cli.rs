use anyhow::Context;
use clap::{Parser, Subcommand};
use inquire::{Password, Select, Text};

use skycast_core::{Config, ForecastClient, GeoClient, HttpIconFetcher, transform};

use crate::render;

/// Top-level CLI struct.
#[derive(Debug, Parser)]
#[command(name = "skycast", version, about = "5-day forecast dashboard for the terminal")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Store the OpenWeather API key.
    Configure,

    /// Resolve a city, pick a coordinate and show its 5-day forecast.
    Forecast {
        /// City name; prompted for interactively when absent.
        city: Option<String>,

        /// API key override; falls back to the stored configuration.
        #[arg(long)]
        api_key: Option<String>,
    },
}

impl Cli {
    pub async fn run(self) -> anyhow::Result<()> {
        match self.command {
            Command::Configure => configure(),
            Command::Forecast { city, api_key } => forecast(city, api_key).await,
        }
    }
}

fn configure() -> anyhow::Result<()> {
    let mut config = Config::load()?;

    let api_key = Password::new("OpenWeather API key:")
        .without_confirmation()
        .prompt()
        .context("Failed to read API key")?;

    config.set_api_key(api_key);
    config.save()?;

    println!("API key saved to {}", Config::config_file_path()?.display());
    Ok(())
}

async fn forecast(city: Option<String>, api_key: Option<String>) -> anyhow::Result<()> {
    let config = Config::load()?;

    let api_key = match api_key.or_else(|| config.api_key().map(str::to_owned)) {
        Some(key) => key,
        None => Password::new("OpenWeather API key:")
            .without_confirmation()
            .prompt()
            .context("Failed to read API key")?,
    };

    let city = match city {
        Some(city) => city,
        None => Text::new("City:").prompt().context("Failed to read city")?,
    };

    let geo = GeoClient::new(api_key.clone());
    let candidates = geo
        .resolve(&city)
        .await
        .with_context(|| format!("Could not resolve '{city}'"))?;

    tracing::debug!(count = candidates.len(), "resolved coordinate candidates");

    let items: Vec<String> = candidates.iter().map(|c| c.selector_item()).collect();
    let selection = Select::new("Available Coordinates:", items)
        .raw_prompt()
        .context("Coordinate selection aborted")?;
    let candidate = &candidates[selection.index];

    let payload = ForecastClient::new(api_key)
        .fetch(candidate.latitude, candidate.longitude)
        .await
        .context("Could not fetch the forecast")?;

    let (slots, meta) = transform(&payload, &HttpIconFetcher::new()).await;

    render::forecast(&city, candidate, &slots, &meta);
    Ok(())
}
