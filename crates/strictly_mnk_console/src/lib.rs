//! Console player for strictly_mnk.
//!
//! # Architecture
//!
//! - **CLI**: clap commands for playing and watching
//! - **Config**: TOML board settings with command-line overrides
//! - **Session**: the prompt/move/render loop over any reader and writer
//! - **Render** and **Input**: board text and `row,col` parsing

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod cli;
mod config;
mod input;
mod render;
mod session;

pub use cli::{BoardArgs, Cli, Command};
pub use config::{ConfigError, ConsoleConfig};
pub use input::{InputError, parse_mark, parse_position};
pub use render::render_board;
pub use session::{PlayedMove, Session, Transcript};
