use std::time::Duration;

use anyhow::{Context, anyhow};
use clap::{Parser, Subcommand, ValueEnum};
use tracing::debug;
use weather_core::{Config, DisplayUnit, WeatherClient, WeatherError};

use crate::output;

/// Top-level CLI struct.
#[derive(Debug, Parser)]
#[command(name = "weather", version, about = "Current weather from WeatherAPI.com")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum UnitArg {
    Celsius,
    Fahrenheit,
}

impl From<UnitArg> for DisplayUnit {
    fn from(value: UnitArg) -> Self {
        match value {
            UnitArg::Celsius => DisplayUnit::Celsius,
            UnitArg::Fahrenheit => DisplayUnit::Fahrenheit,
        }
    }
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Store the WeatherAPI.com API key.
    Configure,

    /// Show current weather for a place or a coordinate pair.
    Show {
        /// Place name, postcode, IP, or "lat,lon".
        #[arg(required_unless_present = "lat", conflicts_with = "lat")]
        query: Option<String>,

        /// Latitude in degrees; requires --lon.
        #[arg(long, requires = "lon", allow_negative_numbers = true)]
        lat: Option<f64>,

        /// Longitude in degrees; requires --lat.
        #[arg(long, requires = "lat", allow_negative_numbers = true)]
        lon: Option<f64>,

        /// Temperature unit to display.
        #[arg(long, value_enum, default_value_t = UnitArg::Celsius)]
        unit: UnitArg,

        /// Print the result as JSON.
        #[arg(long)]
        json: bool,

        /// API key; overrides the configured one.
        #[arg(long, env = "WEATHERAPI_KEY", hide_env_values = true)]
        api_key: Option<String>,

        /// Give up after this many seconds.
        #[arg(long, default_value_t = 10)]
        timeout_secs: u64,
    },
}

impl Cli {
    pub async fn run(self) -> anyhow::Result<()> {
        match self.command {
            Command::Configure => configure(),
            Command::Show { query, lat, lon, unit, json, api_key, timeout_secs } => {
                let config = Config::load()?;
                let api_key = match api_key {
                    Some(key) => key,
                    None => config.api_key()?.to_owned(),
                };
                let client = WeatherClient::new(api_key).with_base_url(config.endpoint()?);
                debug!(?client, "client ready");

                let fetch = async {
                    match (query, lat.zip(lon)) {
                        (_, Some((lat, lon))) => {
                            client.fetch_weather_for_coordinates(lat, lon).await
                        }
                        (Some(query), None) => client.fetch_weather(&query).await,
                        (None, None) => Err(WeatherError::InvalidQuery(
                            "pass a place name or both --lat and --lon".into(),
                        )),
                    }
                };

                let result = tokio::time::timeout(Duration::from_secs(timeout_secs), fetch)
                    .await
                    .map_err(|_| anyhow!("No answer from WeatherAPI within {timeout_secs}s"))?
                    .context("Failed to fetch current weather")?;

                let unit = DisplayUnit::from(unit);
                if json {
                    println!("{}", output::render_json(&result, unit)?);
                } else {
                    println!("{}", output::render_human(&result, unit, chrono::Local::now()));
                }

                Ok(())
            }
        }
    }
}

fn configure() -> anyhow::Result<()> {
    let mut config = Config::load()?;

    let api_key = inquire::Password::new("WeatherAPI.com API key:")
        .without_confirmation()
        .with_display_mode(inquire::PasswordDisplayMode::Masked)
        .prompt()
        .context("Failed to read API key")?;

    if api_key.trim().is_empty() {
        return Err(anyhow!("API key must not be empty"));
    }

    config.set_api_key(api_key.trim().to_owned());
    config.save()?;

    println!("Saved configuration to {}", Config::config_file_path()?.display());
    Ok(())
}
