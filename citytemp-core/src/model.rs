use serde::Deserialize;
use serde_json::Value;

use crate::error::FetchError;

/// `cod` value the service uses for a successful lookup.
pub const SUCCESS_CODE: i64 = 200;

/// Body of a current-weather response.
///
/// Only `cod`, `message` and `main.temp` are read. The service sends `cod` as a
/// number on success but as a string (e.g. `"404"`) on failure, so both are
/// kept loosely typed.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct WeatherPayload {
    #[serde(default)]
    pub cod: Option<Value>,
    #[serde(default)]
    pub message: Option<Value>,
    #[serde(default)]
    pub main: Option<MainReading>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct MainReading {
    #[serde(default)]
    pub temp: Option<f64>,
}

impl WeatherPayload {
    /// Success only for the JSON number 200; `"200"` does not count.
    pub fn is_success(&self) -> bool {
        self.cod
            .as_ref()
            .and_then(Value::as_f64)
            .is_some_and(|code| code == SUCCESS_CODE as f64)
    }

    /// Server-provided failure text. Empty strings, zero, `false` and
    /// `null` count as absent; other numbers and `true` are shown as text.
    /// Objects and arrays are ignored.
    pub fn server_message(&self) -> Option<String> {
        match self.message.as_ref()? {
            Value::String(text) if !text.is_empty() => Some(text.clone()),
            Value::Number(n) if n.as_f64().is_some_and(|v| v != 0.0) => Some(n.to_string()),
            Value::Bool(true) => Some("true".to_string()),
            _ => None,
        }
    }

    /// Interpret the payload as the outcome of one fetch.
    pub fn into_temperature(self) -> Result<f64, FetchError> {
        if !self.is_success() {
            return Err(FetchError::api(self.server_message()));
        }

        self.main.and_then(|main| main.temp).ok_or_else(|| {
            FetchError::Transport(anyhow::anyhow!("successful response is missing main.temp"))
        })
    }
}
