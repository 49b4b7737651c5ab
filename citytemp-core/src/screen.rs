//! The weather screen controller.
//!
//! [`WeatherScreen`] owns the screen's transient state and is the only thing
//! that mutates it. A trigger runs in three steps so a host loop can stay
//! responsive while the call is outstanding:
//!
//! 1. [`WeatherScreen::begin_fetch`] validates the query and enters loading,
//! 2. [`FetchTicket::execute`] talks to the provider without touching the screen,
//! 3. [`WeatherScreen::apply`] writes the outcome back, unless a newer trigger
//!    has been issued since.
//!
//! [`WeatherScreen::submit`] runs all three in sequence.

use std::sync::Arc;

use crate::{error::FetchError, provider::WeatherProvider};

/// Label of the action control while idle.
pub const ACTION_LABEL: &str = "GET WEATHER";

/// Text shown in place of the action label while a request is in flight.
pub const LOADING_LABEL: &str = "Loading...";

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ScreenState {
    /// Raw text as typed.
    pub city_query: String,
    /// Last successfully fetched temperature in Celsius.
    pub temperature: Option<f64>,
    pub is_loading: bool,
    /// Empty when there is no error.
    pub error_message: String,
}

/// A started request. Produced by [`WeatherScreen::begin_fetch`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchTicket {
    seq: u64,
    city: String,
}

/// A finished request, waiting to be applied to the screen.
#[derive(Debug)]
pub struct FetchCompletion {
    seq: u64,
    outcome: Result<f64, FetchError>,
}

impl FetchTicket {
    pub fn seq(&self) -> u64 {
        self.seq
    }

    pub fn city(&self) -> &str {
        &self.city
    }

    pub async fn execute(self, provider: &dyn WeatherProvider) -> FetchCompletion {
        let outcome = match provider.current_weather(&self.city).await {
            Ok(payload) => payload.into_temperature(),
            Err(err) => Err(FetchError::Transport(err)),
        };

        FetchCompletion { seq: self.seq, outcome }
    }
}

impl FetchCompletion {
    pub fn seq(&self) -> u64 {
        self.seq
    }

    pub fn outcome(&self) -> &Result<f64, FetchError> {
        &self.outcome
    }
}

#[derive(Debug)]
pub struct WeatherScreen {
    state: ScreenState,
    provider: Arc<dyn WeatherProvider>,
    latest_seq: u64,
}

impl WeatherScreen {
    pub fn new(provider: Arc<dyn WeatherProvider>) -> Self {
        Self { state: ScreenState::default(), provider, latest_seq: 0 }
    }

    pub fn state(&self) -> &ScreenState {
        &self.state
    }

    /// Shared handle to the provider, for hosts that run tickets elsewhere.
    pub fn provider(&self) -> Arc<dyn WeatherProvider> {
        Arc::clone(&self.provider)
    }

    /// Input change. Leaves any shown result or error in place.
    pub fn set_city_query(&mut self, text: impl Into<String>) {
        self.state.city_query = text.into();
    }

    /// Validate the query and enter loading.
    ///
    /// Returns `None` when the query is blank; only the error message changes
    /// in that case.
    pub fn begin_fetch(&mut self) -> Option<FetchTicket> {
        if self.state.city_query.trim().is_empty() {
            tracing::debug!("rejected empty city query");
            self.state.error_message = FetchError::EmptyCity.user_message();
            return None;
        }

        self.latest_seq += 1;
        self.state.is_loading = true;
        self.state.error_message.clear();
        self.state.temperature = None;

        tracing::info!(seq = self.latest_seq, city = %self.state.city_query, "fetch started");

        Some(FetchTicket { seq: self.latest_seq, city: self.state.city_query.clone() })
    }

    /// Apply a finished request. Completions from anything but the most
    /// recent ticket are dropped and `false` is returned.
    pub fn apply(&mut self, completion: FetchCompletion) -> bool {
        if completion.seq != self.latest_seq {
            tracing::debug!(
                seq = completion.seq,
                latest = self.latest_seq,
                "discarding stale weather response"
            );
            return false;
        }

        match completion.outcome {
            Ok(temperature) => {
                tracing::info!(seq = completion.seq, temperature, "fetch succeeded");
                self.state.temperature = Some(temperature);
                self.state.error_message.clear();
            }
            Err(err) => {
                match &err {
                    FetchError::Transport(source) => {
                        tracing::warn!(seq = completion.seq, error = ?source, "weather request failed");
                    }
                    other => {
                        tracing::info!(seq = completion.seq, error = %other, "weather service refused request");
                    }
                }
                self.state.temperature = None;
                self.state.error_message = err.user_message();
            }
        }
        self.state.is_loading = false;

        true
    }

    /// Full trigger: validate, fetch, apply.
    pub async fn submit(&mut self) {
        let Some(ticket) = self.begin_fetch() else {
            return;
        };

        let provider = self.provider();
        let completion = ticket.execute(provider.as_ref()).await;
        self.apply(completion);
    }

    pub fn view(&self) -> ScreenView {
        let state = &self.state;

        ScreenView {
            action_label: if state.is_loading { LOADING_LABEL } else { ACTION_LABEL },
            is_loading: state.is_loading,
            error: (!state.error_message.is_empty()).then(|| state.error_message.clone()),
            result: state.temperature.map(|temperature| ResultView {
                city: state.city_query.trim().to_string(),
                temperature: format_temperature(temperature),
            }),
        }
    }
}

/// What the screen shows, derived from [`ScreenState`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScreenView {
    pub action_label: &'static str,
    pub is_loading: bool,
    pub error: Option<String>,
    pub result: Option<ResultView>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResultView {
    pub city: String,
    pub temperature: String,
}

/// `18.5` -> `18.5°C`, `18.0` -> `18°C`, `-0.0` -> `0°C`.
pub fn format_temperature(celsius: f64) -> String {
    // adding positive zero turns -0.0 into 0.0
    format!("{}°C", celsius + 0.0)
}
