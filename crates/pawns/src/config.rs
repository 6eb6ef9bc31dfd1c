//! Game configuration from a TOML file and command-line overrides.

use crate::cli::Cli;
use derive_getters::Getters;
use derive_more::{Display, Error};
use pawns_engine::DEFAULT_MAX_ROUNDS;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info, instrument};

/// Settings for one game session.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GameConfig {
    /// Rounds played before the game is declared a draw.
    #[serde(default = "default_max_rounds")]
    max_rounds: u32,

    /// Whether messages are coloured.
    #[serde(default = "default_color")]
    color: bool,

    /// Log filter used when `RUST_LOG` is not set.
    #[serde(default = "default_log_level")]
    log_level: String,
}

fn default_max_rounds() -> u32 {
    DEFAULT_MAX_ROUNDS
}

fn default_color() -> bool {
    true
}

fn default_log_level() -> String {
    "warn".to_string()
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            max_rounds: default_max_rounds(),
            color: default_color(),
            log_level: default_log_level(),
        }
    }
}

impl GameConfig {
    /// Loads configuration from TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;

        config.validate()?;
        info!(max_rounds = config.max_rounds, "Config loaded successfully");
        Ok(config)
    }

    /// Builds the effective configuration: file values, then flags.
    #[instrument(skip(cli))]
    pub fn resolve(cli: &Cli) -> Result<Self, ConfigError> {
        let mut config = match &cli.config {
            Some(path) => Self::from_file(path)?,
            None => Self::default(),
        };
        if let Some(max_rounds) = cli.max_rounds {
            config.max_rounds = max_rounds;
        }
        if cli.no_color {
            config.color = false;
        }
        config.validate()?;
        Ok(config)
    }

    /// Checks the round cap fits on the board.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(1..=DEFAULT_MAX_ROUNDS).contains(&self.max_rounds) {
            return Err(ConfigError::new(format!(
                "max_rounds must be between 1 and {}, got {}",
                DEFAULT_MAX_ROUNDS, self.max_rounds
            )));
        }
        Ok(())
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    #[instrument(skip(message))]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}
