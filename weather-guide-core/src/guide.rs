//! Per-submission pipeline: input text in, finished [`Report`] out.

use chrono::NaiveDateTime;

use crate::{alias::resolve, error::WeatherError, provider::WeatherProvider, report::Report};

#[derive(Debug)]
pub struct WeatherGuide {
    provider: Box<dyn WeatherProvider>,
}

impl WeatherGuide {
    pub fn new(provider: Box<dyn WeatherProvider>) -> Self {
        Self { provider }
    }

    /// Run one lookup for `input` as of `reference`.
    ///
    /// Blank input is a no-op and returns `Ok(None)` without touching the
    /// provider. Non-blank input is resolved verbatim (no trimming) and
    /// fetched exactly once.
    pub async fn lookup(
        &self,
        input: &str,
        reference: NaiveDateTime,
    ) -> Result<Option<Report>, WeatherError> {
        if input.trim().is_empty() {
            return Ok(None);
        }

        let query = resolve(input);
        tracing::debug!(input, query, "resolved city name");

        let payload = self.provider.forecast(query).await?;
        let report = Report::build(&payload, reference)?;

        Ok(Some(report))
    }
}
