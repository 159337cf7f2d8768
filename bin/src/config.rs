//! Environment configuration and logging setup.

use anyhow::{Context, Result};
use std::env;
use tracing::Level;
use tracing_subscriber::EnvFilter;

/// Settings read from the environment (and `.env`, if present).
#[derive(Debug, Clone)]
pub(crate) struct Settings {
    /// Default log level, overridden by `RUST_LOG` and `-v`/`-q`.
    pub(crate) log_level: Level,
    /// Emit logs as JSON lines instead of text.
    pub(crate) json_logs: bool,
    /// Deployment environment name.
    pub(crate) environment: String,
}

impl Settings {
    /// Loads settings from `LOG_LEVEL`, `RUST_LOG_FORMAT` and
    /// `RAILBOOK_ENVIRONMENT`.
    pub(crate) fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();

        let log_level = env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string());
        let log_level = log_level
            .parse::<Level>()
            .with_context(|| format!("Invalid LOG_LEVEL: {log_level}"))?;

        let json_logs = env::var("RUST_LOG_FORMAT")
            .map(|v| v.eq_ignore_ascii_case("json"))
            .unwrap_or(false);

        let environment =
            env::var("RAILBOOK_ENVIRONMENT").unwrap_or_else(|_| "development".to_string());

        Ok(Self {
            log_level,
            json_logs,
            environment,
        })
    }

    /// Applies the `-v`/`-q` flags on top of the configured level.
    pub(crate) fn effective_level(&self, verbose: u8, quiet: bool) -> Level {
        if quiet {
            return Level::ERROR;
        }
        match verbose {
            0 => self.log_level,
            1 => Level::DEBUG,
            _ => Level::TRACE,
        }
    }
}

/// Installs the global tracing subscriber. Logs go to stderr.
pub(crate) fn init_tracing(settings: &Settings, verbose: u8, quiet: bool) {
    let level = settings.effective_level(verbose, quiet);
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(level.as_str().to_ascii_lowercase()));

    if settings.json_logs {
        tracing_subscriber::fmt()
            .json()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .init();
    }
}
