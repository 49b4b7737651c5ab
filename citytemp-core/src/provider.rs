use crate::{Config, model::WeatherPayload, provider::openweather::OpenWeatherProvider};
use async_trait::async_trait;
use std::fmt::Debug;

pub mod openweather;

/// Source of current-weather payloads for a city.
///
/// An `Err` means the request never produced a readable body (network failure,
/// timeout, malformed JSON). Service-level failures come back as an `Ok`
/// payload with a non-success `cod`.
#[async_trait]
pub trait WeatherProvider: Send + Sync + Debug {
    async fn current_weather(&self, city: &str) -> anyhow::Result<WeatherPayload>;
}

/// Construct the OpenWeather provider from config.
pub fn provider_from_config(config: &Config) -> anyhow::Result<OpenWeatherProvider> {
    provider_from_config_with(config, std::env::var(crate::config::API_KEY_ENV).ok())
}

/// Like [`provider_from_config`], with the environment override passed in.
pub fn provider_from_config_with(
    config: &Config,
    env_key: Option<String>,
) -> anyhow::Result<OpenWeatherProvider> {
    let api_key = config.resolve_api_key_with(env_key).ok_or_else(|| {
        anyhow::anyhow!(
            "No API key configured.\n\
             Hint: run `citytemp configure` or set {}.",
            crate::config::API_KEY_ENV
        )
    })?;

    OpenWeatherProvider::new(config.endpoint(), api_key, config.timeout())
}
