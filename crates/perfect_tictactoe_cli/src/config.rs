//! Game configuration loaded from TOML.

use derive_getters::Getters;
use derive_more::{Display, Error};
use perfect_tictactoe::Mark;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info, instrument};

/// Config file read when no path is given. Missing is fine.
pub const DEFAULT_CONFIG_PATH: &str = "perfect_tictactoe.toml";

/// Settings for an interactive game.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GameConfig {
    /// Mark the human plays; the agent takes the other.
    #[serde(default = "default_human_mark")]
    human_mark: Mark,

    /// Mark that moves first.
    #[serde(default = "default_first_mark")]
    first_mark: Mark,

    /// Name shown for the human.
    #[serde(default = "default_human_name")]
    human_name: String,

    /// Name shown for the agent.
    #[serde(default = "default_agent_name")]
    agent_name: String,

    /// Tracing filter used when `RUST_LOG` is unset.
    #[serde(default = "default_log_filter")]
    log_filter: String,
}

fn default_human_mark() -> Mark {
    Mark::X
}

fn default_first_mark() -> Mark {
    Mark::X
}

fn default_human_name() -> String {
    "Player".to_string()
}

fn default_agent_name() -> String {
    "Bot".to_string()
}

fn default_log_filter() -> String {
    "warn".to_string()
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            human_mark: default_human_mark(),
            first_mark: default_first_mark(),
            human_name: default_human_name(),
            agent_name: default_agent_name(),
            log_filter: default_log_filter(),
        }
    }
}

impl GameConfig {
    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;

        info!(human_mark = %config.human_mark, first_mark = %config.first_mark, "Config loaded successfully");
        Ok(config)
    }

    /// Loads `path` if given, else [`DEFAULT_CONFIG_PATH`] if it exists,
    /// else defaults.
    #[instrument(skip(path))]
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => Self::from_file(path),
            None if Path::new(DEFAULT_CONFIG_PATH).is_file() => Self::from_file(DEFAULT_CONFIG_PATH),
            None => {
                debug!("No config file, using defaults");
                Ok(Self::default())
            }
        }
    }

    /// Applies command-line overrides.
    pub fn with_overrides(mut self, human_mark: Option<Mark>, first_mark: Option<Mark>) -> Self {
        if let Some(mark) = human_mark {
            self.human_mark = mark;
        }
        if let Some(mark) = first_mark {
            self.first_mark = mark;
        }
        self
    }

    /// The agent plays whichever mark the human does not.
    pub fn agent_mark(&self) -> Mark {
        self.human_mark.opponent()
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
