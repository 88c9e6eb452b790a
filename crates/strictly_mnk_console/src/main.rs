//! Strictly MNK - console entry point.

#![warn(missing_docs)]

use anyhow::{Context, Result};
use clap::Parser;
use std::io::Write;
use strictly_mnk_console::{BoardArgs, Cli, Command, Session, Transcript};
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    initialize_tracing();

    let cli = Cli::parse();

    match cli.command.unwrap_or_default() {
        Command::Play { board, mark } => run(&board, |session| session.play(mark)),
        Command::Watch { board } => run(&board, |session| session.watch()),
    }
}

/// Logs go to stderr so the board on stdout stays readable.
fn initialize_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();
}

/// Runs one game on stdin/stdout and prints the transcript if requested.
#[instrument(skip_all, fields(json = board.json))]
fn run<F>(board: &BoardArgs, game: F) -> Result<()>
where
    F: FnOnce(&mut Session<std::io::StdinLock<'static>, std::io::Stdout>) -> Result<Transcript>,
{
    let config = board.resolve().context("Failed to load configuration")?;
    info!(?config, "Starting game");

    let mut session = Session::new(std::io::stdin().lock(), std::io::stdout(), config);
    let transcript = game(&mut session)?;

    if board.json {
        let mut out = session.into_output();
        writeln!(out, "{}", serde_json::to_string_pretty(&transcript)?)?;
    }

    Ok(())
}
