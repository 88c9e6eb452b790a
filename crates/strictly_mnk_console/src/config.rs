//! Board and display configuration for the console player.

use derive_getters::Getters;
use derive_more::{Display, Error};
use derive_setters::Setters;
use serde::{Deserialize, Serialize};
use std::path::Path;
use strictly_mnk::{BoardGeometry, MnkResult};
use tracing::{debug, info, instrument};

/// Settings for a console game, loadable from TOML.
///
/// Missing keys fall back to a classic 3x3 board with three in a row needed.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Setters, Serialize, Deserialize)]
#[setters(prefix = "with_")]
pub struct ConsoleConfig {
    /// Board rows.
    #[serde(default = "default_size")]
    rows: usize,

    /// Board columns.
    #[serde(default = "default_size")]
    cols: usize,

    /// Marks needed in a row to win.
    #[serde(default = "default_size")]
    win_length: usize,

    /// Symbol printed for empty squares.
    #[serde(default = "default_empty_symbol")]
    empty_symbol: char,

    /// Symbol printed between squares of a row.
    #[serde(default = "default_delimiter")]
    delimiter: char,
}

#[instrument]
fn default_size() -> usize {
    3
}

#[instrument]
fn default_empty_symbol() -> char {
    '.'
}

#[instrument]
fn default_delimiter() -> char {
    '|'
}

impl Default for ConsoleConfig {
    fn default() -> Self {
        Self {
            rows: default_size(),
            cols: default_size(),
            win_length: default_size(),
            empty_symbol: default_empty_symbol(),
            delimiter: default_delimiter(),
        }
    }
}

impl ConsoleConfig {
    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;

        info!(
            rows = config.rows,
            cols = config.cols,
            win_length = config.win_length,
            "Config loaded successfully"
        );
        Ok(config)
    }

    /// Validated board geometry for these settings.
    pub fn geometry(&self) -> MnkResult<BoardGeometry> {
        BoardGeometry::new(self.rows, self.cols)
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
