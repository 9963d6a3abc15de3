use anyhow::{Context, Result, anyhow};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
};

use crate::{error::WeatherError, provider::weatherapi::DEFAULT_BASE_URL};

/// Environment variable that overrides the key stored in the secrets file.
pub const API_KEY_ENV: &str = "WEATHER_API_KEY";

/// Secrets file stored on disk.
///
/// Example TOML:
/// WEATHER_API_KEY = "..."
/// base_url = "http://api.weatherapi.com/v1"
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(rename = "WEATHER_API_KEY", default, skip_serializing_if = "Option::is_none")]
    pub weather_api_key: Option<String>,

    /// Override for the WeatherAPI.com endpoint root.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base_url: Option<String>,
}

impl Config {
    /// Load the secrets file (explicit path or the platform default), then
    /// let `WEATHER_API_KEY` from the environment take precedence.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let path = match path {
            Some(p) => p.to_path_buf(),
            None => Self::secrets_file_path()?,
        };

        let mut cfg = Self::load_from(&path)?;
        cfg.apply_api_key_override(std::env::var(API_KEY_ENV).ok());
        Ok(cfg)
    }

    /// Load config from `path`, or return an empty default if it doesn't exist yet.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "no secrets file, starting empty");
            return Ok(Self::default());
        }

        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read secrets file: {}", path.display()))?;

        let cfg: Config = toml::from_str(&contents)
            .with_context(|| format!("Failed to parse secrets file: {}", path.display()))?;

        Ok(cfg)
    }

    /// Save config to `path`, creating parent directories as needed.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create config directory: {}", parent.display())
            })?;
        }

        let toml =
            toml::to_string_pretty(self).context("Failed to serialize configuration to TOML")?;

        fs::write(path, toml)
            .with_context(|| format!("Failed to write secrets file: {}", path.display()))?;

        Ok(())
    }

    /// Path to the default secrets file.
    pub fn secrets_file_path() -> Result<PathBuf> {
        let dirs = ProjectDirs::from("dev", "weather-guide", "weather-guide")
            .ok_or_else(|| anyhow!("Could not determine platform config directory"))?;

        Ok(dirs.config_dir().join("secrets.toml"))
    }

    /// Non-blank override values replace whatever the file held.
    pub fn apply_api_key_override(&mut self, value: Option<String>) {
        if let Some(key) = value.filter(|k| !k.trim().is_empty()) {
            self.weather_api_key = Some(key);
        }
    }

    pub fn set_api_key(&mut self, api_key: String) {
        self.weather_api_key = Some(api_key);
    }

    /// The API key, or [`WeatherError::MissingApiKey`] when absent or blank.
    pub fn api_key(&self) -> Result<&str, WeatherError> {
        self.weather_api_key
            .as_deref()
            .map(str::trim)
            .filter(|k| !k.is_empty())
            .ok_or(WeatherError::MissingApiKey)
    }

    pub fn base_url(&self) -> &str {
        self.base_url.as_deref().unwrap_or(DEFAULT_BASE_URL)
    }
}
