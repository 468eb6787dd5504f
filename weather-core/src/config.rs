use anyhow::{Context, Result, anyhow};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
};
use url::Url;

use crate::url_builder::DEFAULT_ENDPOINT;

/// Configuration stored on disk.
///
/// Example TOML:
/// ```toml
/// api_key = "..."
/// base_url = "https://api.weatherapi.com/v1/current.json"
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct Config {
    /// WeatherAPI.com API key.
    pub api_key: Option<String>,

    /// Optional endpoint override; the public endpoint is used when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base_url: Option<String>,
}

impl Config {
    /// Read the stored API key and endpoint override from the user's config
    /// directory. A missing file means nothing has been configured yet.
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_file_path()?)
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read weather config {}", path.display()))?;

        toml::from_str(&contents)
            .with_context(|| format!("Config {} is not valid weather TOML", path.display()))
    }

    /// Persist the API key (and endpoint override, if any) for later runs.
    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_file_path()?)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(dir) = path.parent() {
            fs::create_dir_all(dir)
                .with_context(|| format!("Failed to create config directory {}", dir.display()))?;
        }

        let text = toml::to_string_pretty(self).context("Failed to encode weather config")?;
        fs::write(path, text)
            .with_context(|| format!("Failed to write weather config {}", path.display()))
    }

    /// `<platform config dir>/config.toml`, shared with earlier releases of the CLI.
    pub fn config_file_path() -> Result<PathBuf> {
        let dirs = ProjectDirs::from("dev", "weather-task", "weather-cli")
            .ok_or_else(|| anyhow!("Could not determine platform config directory"))?;

        Ok(dirs.config_dir().join("config.toml"))
    }

    pub fn set_api_key(&mut self, api_key: String) {
        self.api_key = Some(api_key);
    }

    /// Returns the configured API key, or an error telling the user how to set one.
    pub fn api_key(&self) -> Result<&str> {
        self.api_key.as_deref().filter(|key| !key.trim().is_empty()).ok_or_else(|| {
            anyhow!(
                "No WeatherAPI key configured.\n\
                 Hint: run `weather configure` or pass --api-key / set WEATHERAPI_KEY."
            )
        })
    }

    /// Endpoint to query: `base_url` if set, the public endpoint otherwise.
    pub fn endpoint(&self) -> Result<Url> {
        let raw = self.base_url.as_deref().unwrap_or(DEFAULT_ENDPOINT);
        Url::parse(raw).with_context(|| format!("Invalid base_url in config: {raw}"))
    }
}
