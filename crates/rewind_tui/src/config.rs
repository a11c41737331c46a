//! Configuration for the terminal front-end.

use derive_getters::Getters;
use derive_more::{Display, Error};
use rewind_tictactoe::Roster;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, info, instrument};

/// Configuration loaded from TOML, then overridden from the command line.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
#[serde(default)]
pub struct TuiConfig {
    /// File the tracing subscriber writes to.
    log_file: PathBuf,

    /// Display names of the two seats.
    players: PlayersConfig,
}

/// Display names of the two seats.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
#[serde(default)]
pub struct PlayersConfig {
    /// Name of the seat playing X.
    one: String,
    /// Name of the seat playing O.
    two: String,
}

impl Default for PlayersConfig {
    fn default() -> Self {
        let roster = Roster::default();
        Self {
            one: roster.one().clone(),
            two: roster.two().clone(),
        }
    }
}

fn default_log_file() -> PathBuf {
    PathBuf::from("rewind_tui.log")
}

impl Default for TuiConfig {
    fn default() -> Self {
        Self {
            log_file: default_log_file(),
            players: PlayersConfig::default(),
        }
    }
}

impl TuiConfig {
    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;

        info!(one = %config.players.one, two = %config.players.two, "Config loaded successfully");
        Ok(config)
    }

    /// Loads the file if it exists, otherwise falls back to defaults.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        if path.as_ref().exists() {
            Self::from_file(path)
        } else {
            debug!("No config file, using defaults");
            Ok(Self::default())
        }
    }

    /// Applies command-line overrides and validates the result.
    #[instrument(skip(self))]
    pub fn with_overrides(
        mut self,
        player_one: Option<String>,
        player_two: Option<String>,
        log_file: Option<PathBuf>,
    ) -> Result<Self, ConfigError> {
        if let Some(name) = player_one {
            self.players.one = name;
        }
        if let Some(name) = player_two {
            self.players.two = name;
        }
        if let Some(path) = log_file {
            self.log_file = path;
        }

        if self.players.one.trim().is_empty() || self.players.two.trim().is_empty() {
            return Err(ConfigError::new("Player names must not be empty".to_string()));
        }
        Ok(self)
    }

    /// Roster for the game.
    pub fn roster(&self) -> Roster {
        Roster::new(self.players.one.clone(), self.players.two.clone())
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
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}
