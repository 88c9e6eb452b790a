//! Command-line interface for strictly_mnk.

use super::config::{ConfigError, ConsoleConfig};
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use strictly_mnk::Mark;
use tracing::instrument;

/// Strictly MNK - tic-tac-toe on any board against a perfect opponent
#[derive(Parser, Debug)]
#[command(name = "strictly_mnk")]
#[command(about = "Generalized tic-tac-toe against an unbeatable minimax AI", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run (defaults to `play`)
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Play against the AI
    Play {
        /// Board options
        #[command(flatten)]
        board: BoardArgs,

        /// Mark to play as (X or O); asked interactively if omitted
        #[arg(short, long)]
        mark: Option<Mark>,
    },

    /// Watch the AI play both sides
    Watch {
        /// Board options
        #[command(flatten)]
        board: BoardArgs,
    },
}

impl Default for Command {
    fn default() -> Self {
        Command::Play {
            board: BoardArgs::default(),
            mark: None,
        }
    }
}

/// Board size, win length and output options shared by all commands.
#[derive(Args, Debug, Clone, Default, PartialEq, Eq)]
pub struct BoardArgs {
    /// Path to a TOML config file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Number of rows (overrides config)
    #[arg(long)]
    pub rows: Option<usize>,

    /// Number of columns (overrides config)
    #[arg(long)]
    pub cols: Option<usize>,

    /// Marks needed in a row to win (overrides config)
    #[arg(short = 'n', long)]
    pub win_length: Option<usize>,

    /// Print a JSON transcript when the game ends
    #[arg(long)]
    pub json: bool,
}

impl BoardArgs {
    /// Loads the config file, if any, and applies command-line overrides.
    #[instrument(skip(self), fields(config = ?self.config))]
    pub fn resolve(&self) -> Result<ConsoleConfig, ConfigError> {
        let mut config = match &self.config {
            Some(path) => ConsoleConfig::from_file(path)?,
            None => ConsoleConfig::default(),
        };

        if let Some(rows) = self.rows {
            config = config.with_rows(rows);
        }
        if let Some(cols) = self.cols {
            config = config.with_cols(cols);
        }
        if let Some(win_length) = self.win_length {
            config = config.with_win_length(win_length);
        }

        Ok(config)
    }
}
