use std::path::{Path, PathBuf};

use anyhow::Context;
use chrono::{Local, NaiveDateTime};
use clap::{Parser, Subcommand};
use inquire::{InquireError, Password, PasswordDisplayMode, Text};
use weather_guide_core::{Config, WeatherGuide, provider_from_config};

use crate::render;

const CITY_PROMPT: &str = "도시 이름을 입력하세요 (예: 서울, 아산, London)";
const CITY_PLACEHOLDER: &str = "한글 도시명 가능";

/// Top-level CLI struct.
#[derive(Debug, Parser)]
#[command(name = "weather-guide", version, about = "전 세계 날씨 & 라이프 가이드")]
pub struct Cli {
    /// Secrets file to use instead of the platform config directory.
    #[arg(long, global = true)]
    pub secrets: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Store the WeatherAPI.com API key.
    Configure,

    /// Prompt for city names until Esc or Ctrl-C (the default).
    Ask,

    /// Show the guide for a single city and exit.
    Show {
        /// City name, Korean (e.g. "서울") or as WeatherAPI.com knows it.
        city: String,
    },
}

impl Cli {
    pub async fn run(self) -> anyhow::Result<()> {
        match self.command.unwrap_or(Command::Ask) {
            Command::Configure => configure(self.secrets.as_deref()),
            Command::Ask => {
                let guide = load_guide(self.secrets.as_deref())?;
                ask_loop(&guide).await
            }
            Command::Show { city } => {
                let guide = load_guide(self.secrets.as_deref())?;
                show_once(&guide, &city).await
            }
        }
    }
}

/// Fails before any prompt when the key is missing.
fn load_guide(secrets: Option<&Path>) -> anyhow::Result<WeatherGuide> {
    let config = Config::load(secrets)?;
    let provider = provider_from_config(&config)?;
    Ok(WeatherGuide::new(provider))
}

fn configure(secrets: Option<&Path>) -> anyhow::Result<()> {
    let path = match secrets {
        Some(p) => p.to_path_buf(),
        None => Config::secrets_file_path()?,
    };
    let mut config = Config::load_from(&path)?;

    let api_key = Password::new("WeatherAPI.com API key:")
        .with_display_mode(PasswordDisplayMode::Masked)
        .without_confirmation()
        .prompt()
        .context("API key prompt aborted")?;

    config.set_api_key(api_key.trim().to_string());
    config.api_key()?;
    config.save_to(&path)?;

    println!("Saved API key to {}", path.display());
    Ok(())
}

async fn ask_loop(guide: &WeatherGuide) -> anyhow::Result<()> {
    println!("🌍 전 세계 날씨 & 라이프 가이드\n");

    loop {
        let input = match Text::new(CITY_PROMPT).with_placeholder(CITY_PLACEHOLDER).prompt() {
            Ok(input) => input,
            Err(InquireError::OperationCanceled | InquireError::OperationInterrupted) => break,
            Err(e) => return Err(e.into()),
        };

        match guide.lookup(&input, now()).await {
            Ok(Some(report)) => println!("{}", render::render(&report)),
            Ok(None) => {}
            Err(e) => {
                tracing::warn!(error = %e, input, "lookup failed");
                eprintln!("{}", render::render_error(&e));
            }
        }
    }

    Ok(())
}

async fn show_once(guide: &WeatherGuide, city: &str) -> anyhow::Result<()> {
    match guide.lookup(city, now()).await {
        Ok(Some(report)) => {
            println!("{}", render::render(&report));
            Ok(())
        }
        Ok(None) => Ok(()),
        Err(e) => {
            eprintln!("{}", render::render_error(&e));
            Err(e.into())
        }
    }
}

/// Wall-clock time on this machine; the hourly buckets are read against it.
fn now() -> NaiveDateTime {
    Local::now().naive_local()
}
