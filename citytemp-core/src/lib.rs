//! Core library for the `citytemp` weather screen.
//!
//! This crate defines:
//! - Configuration & credential lookup
//! - The weather provider abstraction and its OpenWeather implementation
//! - The response model and the fetch error taxonomy
//! - [`WeatherScreen`], the controller that owns the screen state
//!
//! It is used by `citytemp-cli`, but can also back any other front end.

pub mod config;
pub mod error;
pub mod model;
pub mod provider;
pub mod screen;

pub use config::Config;
pub use error::FetchError;
pub use model::WeatherPayload;
pub use provider::{WeatherProvider, openweather::OpenWeatherProvider, provider_from_config};
pub use screen::{FetchCompletion, FetchTicket, ResultView, ScreenState, ScreenView, WeatherScreen};
