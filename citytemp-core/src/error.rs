/// Shown when the trigger fires with an empty or whitespace-only city.
pub const EMPTY_CITY_MESSAGE: &str = "Please enter a city name";

/// Shown when the service reports a failure without any text of its own.
pub const API_FALLBACK_MESSAGE: &str = "Could not fetch weather";

/// Shown for every network, timeout or body parsing failure.
pub const TRANSPORT_MESSAGE: &str = "Failed to fetch weather";

/// Every way a single fetch can end without a temperature.
///
/// `Display` yields exactly the line the screen shows to the user.
#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    #[error("{}", EMPTY_CITY_MESSAGE)]
    EmptyCity,

    /// Non-success `cod`; holds the server text or the generic fallback.
    #[error("{0}")]
    Api(String),

    #[error("{}", TRANSPORT_MESSAGE)]
    Transport(#[source] anyhow::Error),
}

impl FetchError {
    /// Build an API error, falling back to the generic text when the server
    /// gave none (or an empty one).
    pub fn api(message: Option<String>) -> Self {
        match message {
            Some(text) if !text.is_empty() => FetchError::Api(text),
            _ => FetchError::Api(API_FALLBACK_MESSAGE.to_string()),
        }
    }

    pub fn user_message(&self) -> String {
        self.to_string()
    }
}
