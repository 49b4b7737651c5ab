use std::{path::PathBuf, sync::Arc};

use anyhow::Context;
use citytemp_core::{
    Config, WeatherScreen, config::DEFAULT_ENDPOINT, provider_from_config,
};
use clap::{Parser, Subcommand};
use inquire::{InquireError, Password, PasswordDisplayMode, Text};

use crate::render::render_view;

/// Top-level CLI struct.
#[derive(Debug, Parser)]
#[command(name = "citytemp", version, about = "Current temperature for a city")]
pub struct Cli {
    /// Use this config file instead of the platform default.
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Store the OpenWeather API key (and optionally a custom endpoint).
    Configure,

    /// Fetch and show the temperature for one city.
    Show {
        /// City name, sent as typed.
        city: String,
    },

    /// Prompt for cities until Esc or Ctrl-C.
    Interactive,
}

impl Cli {
    pub async fn run(self) -> anyhow::Result<()> {
        match self.command {
            Command::Configure => configure(self.config),
            Command::Show { city } => {
                let mut screen = open_screen(self.config.as_ref())?;
                screen.set_city_query(city);
                screen.submit().await;
                print!("{}", render_view(&screen.view()));
                Ok(())
            }
            Command::Interactive => {
                let screen = open_screen(self.config.as_ref())?;
                interactive(screen).await
            }
        }
    }
}

fn load_config(path: Option<&PathBuf>) -> anyhow::Result<Config> {
    match path {
        Some(path) => Config::load_from(path),
        None => Config::load(),
    }
}

fn open_screen(config_path: Option<&PathBuf>) -> anyhow::Result<WeatherScreen> {
    let config = load_config(config_path)?;
    tracing::debug!(?config, "loaded configuration");

    let provider = provider_from_config(&config)?;
    Ok(WeatherScreen::new(Arc::new(provider)))
}

fn configure(config_path: Option<PathBuf>) -> anyhow::Result<()> {
    let mut config = load_config(config_path.as_ref())?;

    let api_key = Password::new("OpenWeather API key:")
        .with_display_mode(PasswordDisplayMode::Masked)
        .without_confirmation()
        .prompt()
        .context("Failed to read API key")?;

    let endpoint = Text::new("Endpoint:")
        .with_default(config.endpoint())
        .prompt()
        .context("Failed to read endpoint")?;

    config.set_api_key(api_key);
    config.set_endpoint((endpoint != DEFAULT_ENDPOINT).then_some(endpoint));

    let path = match config_path {
        Some(path) => {
            config.save_to(&path)?;
            path
        }
        None => config.save()?,
    };

    println!("Saved configuration to {}", path.display());
    Ok(())
}

async fn interactive(mut screen: WeatherScreen) -> anyhow::Result<()> {
    let provider = screen.provider();

    loop {
        let input = match Text::new("City:").with_placeholder("Enter city name").prompt() {
            Ok(input) => input,
            Err(InquireError::OperationCanceled | InquireError::OperationInterrupted) => break,
            Err(err) => return Err(err).context("Failed to read city name"),
        };

        screen.set_city_query(input);

        let Some(ticket) = screen.begin_fetch() else {
            print!("{}", render_view(&screen.view()));
            continue;
        };

        print!("{}", render_view(&screen.view()));
        let completion = ticket.execute(provider.as_ref()).await;
        screen.apply(completion);
        print!("{}", render_view(&screen.view()));
    }

    Ok(())
}
