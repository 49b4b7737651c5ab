use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::Client;
use std::{fmt, time::Duration};

use crate::model::WeatherPayload;

use super::WeatherProvider;

#[derive(Clone)]
pub struct OpenWeatherProvider {
    endpoint: String,
    api_key: String,
    http: Client,
}

impl fmt::Debug for OpenWeatherProvider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OpenWeatherProvider")
            .field("endpoint", &self.endpoint)
            .finish_non_exhaustive()
    }
}

impl OpenWeatherProvider {
    pub fn new(
        endpoint: impl Into<String>,
        api_key: String,
        timeout: Option<Duration>,
    ) -> Result<Self> {
        let mut builder = Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let http = builder.build().context("Failed to build HTTP client")?;

        Ok(Self { endpoint: endpoint.into(), api_key, http })
    }
}

#[async_trait]
impl WeatherProvider for OpenWeatherProvider {
    async fn current_weather(&self, city: &str) -> Result<WeatherPayload> {
        tracing::debug!(endpoint = %self.endpoint, city, "requesting current weather");

        let res = self
            .http
            .get(&self.endpoint)
            .query(&[("q", city), ("appid", self.api_key.as_str()), ("units", "metric")])
            .send()
            .await
            // the URL carries the API key
            .map_err(reqwest::Error::without_url)
            .context("Failed to send request to OpenWeather (current weather)")?;

        // Error responses carry their own JSON body with `cod`/`message`, so the
        // status line is only logged.
        let status = res.status();
        let body = res
            .text()
            .await
            .map_err(reqwest::Error::without_url)
            .context("Failed to read OpenWeather current response body")?;

        tracing::debug!(%status, bytes = body.len(), "OpenWeather responded");

        let parsed: WeatherPayload = serde_json::from_str(&body).with_context(|| {
            format!(
                "Failed to parse OpenWeather current JSON (status {}): {}",
                status,
                truncate_body(&body)
            )
        })?;

        Ok(parsed)
    }
}

fn truncate_body(body: &str) -> String {
    const MAX: usize = 200;
    match body.char_indices().nth(MAX) {
        Some((idx, _)) => format!("{}...", &body[..idx]),
        None => body.to_string(),
    }
}
