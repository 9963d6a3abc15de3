use async_trait::async_trait;
use reqwest::Client;

use crate::{error::WeatherError, model::ForecastPayload};

use super::WeatherProvider;

pub const DEFAULT_BASE_URL: &str = "http://api.weatherapi.com/v1";

/// Days of hourly forecast requested; the offset selector needs today and tomorrow.
const FORECAST_DAYS: &str = "2";
const RESPONSE_LANG: &str = "ko";

#[derive(Debug, Clone)]
pub struct WeatherApiProvider {
    api_key: String,
    base_url: String,
    http: Client,
}

impl WeatherApiProvider {
    pub fn new(api_key: String) -> Self {
        Self::with_base_url(api_key, DEFAULT_BASE_URL.to_string())
    }

    pub fn with_base_url(api_key: String, base_url: String) -> Self {
        let base_url = base_url.trim_end_matches('/').to_string();
        Self { api_key, base_url, http: Client::new() }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

#[async_trait]
impl WeatherProvider for WeatherApiProvider {
    async fn forecast(&self, query: &str) -> Result<ForecastPayload, WeatherError> {
        let url = format!("{}/forecast.json", self.base_url);

        tracing::info!(query, "requesting WeatherAPI forecast");

        let res = self
            .http
            .get(&url)
            .query(&[
                ("key", self.api_key.as_str()),
                ("q", query),
                ("aqi", "yes"),
                ("days", FORECAST_DAYS),
                ("lang", RESPONSE_LANG),
            ])
            .send()
            .await
            .inspect_err(|e| tracing::warn!(error = %e, "WeatherAPI request failed"))?;

        let status = res.status();
        let body = res.text().await?;

        if !status.is_success() {
            tracing::warn!(status = status.as_u16(), "WeatherAPI returned an error status");
            return Err(WeatherError::Status {
                status: status.as_u16(),
                body: truncate_body(&body),
            });
        }

        let parsed: ForecastPayload = serde_json::from_str(&body)
            .inspect_err(|e| tracing::warn!(error = %e, "WeatherAPI payload did not match"))?;

        tracing::debug!(
            location = %parsed.location.name,
            days = parsed.forecast.forecastday.len(),
            "forecast received"
        );

        Ok(parsed)
    }
}

fn truncate_body(body: &str) -> String {
    const MAX: usize = 200;
    if body.len() <= MAX {
        return body.to_string();
    }

    let mut end = MAX;
    while !body.is_char_boundary(end) {
        end -= 1;
    }
    format!("{}...", &body[..end])
}
