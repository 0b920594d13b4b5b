//! Settings for the command-line front end.

use crate::games::tictactoe::DisplayOrder;
use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info, instrument};

/// Front-end configuration, usually read from a TOML file.
///
/// ```toml
/// descending = true
/// log_filter = "tictactoe_timeline=debug"
/// json = false
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct Config {
    /// Show the newest move first when a game starts.
    #[serde(default)]
    descending: bool,

    /// Tracing filter used when `RUST_LOG` is unset.
    #[serde(default = "default_log_filter")]
    log_filter: String,

    /// Print views as JSON instead of text.
    #[serde(default)]
    json: bool,
}

fn default_log_filter() -> String {
    "info".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            descending: false,
            log_filter: default_log_filter(),
            json: false,
        }
    }
}

impl Config {
    /// Loads configuration from TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config = Self::from_toml(&content)?;
        info!(descending = config.descending, json = config.json, "Config loaded successfully");
        Ok(config)
    }

    /// Parses configuration from TOML text.
    #[instrument(skip(content))]
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))
    }

    /// Move list order a new game starts with.
    pub fn display_order(&self) -> DisplayOrder {
        if self.descending {
            DisplayOrder::Descending
        } else {
            DisplayOrder::Ascending
        }
    }

    /// Returns a copy with `descending` forced on.
    pub fn with_descending(mut self, descending: bool) -> Self {
        self.descending = self.descending || descending;
        self
    }

    /// Returns a copy with `json` forced on.
    pub fn with_json(mut self, json: bool) -> Self {
        self.json = self.json || json;
        self
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
