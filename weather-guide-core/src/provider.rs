use crate::{Config, error::WeatherError, model::ForecastPayload};
use async_trait::async_trait;
use std::fmt::Debug;

pub mod weatherapi;

pub use weatherapi::WeatherApiProvider;

/// Source of forecast payloads. One call per user submission.
#[async_trait]
pub trait WeatherProvider: Send + Sync + Debug {
    /// Fetch current conditions, air quality and a two-day hourly forecast
    /// for an already-resolved location token.
    async fn forecast(&self, query: &str) -> Result<ForecastPayload, WeatherError>;
}

/// Construct the WeatherAPI.com provider from config.
///
/// Fails before any request is made when no usable API key is configured.
pub fn provider_from_config(config: &Config) -> Result<Box<dyn WeatherProvider>, WeatherError> {
    let api_key = config.api_key()?;

    Ok(Box::new(WeatherApiProvider::with_base_url(
        api_key.to_owned(),
        config.base_url().to_owned(),
    )))
}
