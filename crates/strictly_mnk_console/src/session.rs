//! Interactive play loop.
//!
//! The session reads player input line by line and writes prompts and boards
//! to any writer, so it runs the same against a terminal or an in-memory
//! buffer.

use super::config::ConsoleConfig;
use super::input::{parse_mark, parse_position};
use super::render::render_board;
use anyhow::{Context, Result, bail};
use serde::{Deserialize, Serialize};
use std::io::{BufRead, Write};
use strictly_mnk::{Game, GameStatus, Mark, Move, find_best_move};
use tracing::{debug, info, instrument, warn};

/// Summary of a finished game.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transcript {
    /// Board rows.
    pub rows: usize,
    /// Board columns.
    pub cols: usize,
    /// Marks needed in a row to win.
    pub win_length: usize,
    /// Mark played by the human, if any.
    pub human: Option<Mark>,
    /// Moves in the order they were played.
    pub moves: Vec<PlayedMove>,
    /// Final result.
    pub outcome: GameStatus,
}

/// One move in a transcript.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayedMove {
    /// Mark placed.
    pub mark: Mark,
    /// Row of the square.
    pub row: usize,
    /// Column of the square.
    pub col: usize,
}

impl Transcript {
    fn from_game(game: &Game, human: Option<Mark>) -> Self {
        let geometry = game.geometry();
        Self {
            rows: geometry.rows(),
            cols: geometry.cols(),
            win_length: game.num_in_row_needed(),
            human,
            moves: game
                .history()
                .iter()
                .map(|turn| PlayedMove {
                    mark: turn.played().mark,
                    row: turn.played().position.row(),
                    col: turn.played().position.col(),
                })
                .collect(),
            outcome: game.status(),
        }
    }
}

/// A console game wired to an input and an output stream.
pub struct Session<R, W> {
    input: R,
    output: W,
    config: ConsoleConfig,
}

impl<R: BufRead, W: Write> Session<R, W> {
    /// Creates a session.
    pub fn new(input: R, output: W, config: ConsoleConfig) -> Self {
        Self {
            input,
            output,
            config,
        }
    }

    /// Plays a human against the AI until the game is decided.
    ///
    /// If `human` is `None` the player is asked to choose a mark.
    #[instrument(skip(self), fields(rows = self.config.rows(), cols = self.config.cols()))]
    pub fn play(&mut self, human: Option<Mark>) -> Result<Transcript> {
        let mut game = self.new_game()?;
        writeln!(self.output, "Welcome to Tic-Tac-Toe!")?;
        self.describe(&game)?;

        let human = match human {
            Some(mark) => mark,
            None => self.ask_mark()?,
        };
        let ai = human.opponent();
        info!(%human, %ai, "Game started");

        if human == Mark::FIRST {
            writeln!(self.output)?;
            self.print_board(&game)?;
        }

        loop {
            if game.whose_turn() == human {
                let answer = self.ask("Enter your move as row,col (e.g. 0,2): ")?;

                let accepted = parse_position(&answer, game.geometry())
                    .map_err(|e| e.to_string())
                    .and_then(|position| {
                        game.make_move(Move::new(position, human))
                            .map_err(|e| e.to_string())
                    });

                if let Err(reason) = accepted {
                    debug!(%reason, "Human move rejected");
                    writeln!(self.output, "Invalid move: {}", reason)?;
                    continue;
                }

                self.print_board(&game)?;
            } else {
                let position = find_best_move(game.current_state(), game.num_in_row_needed(), ai)?
                    .context("AI found no empty square on an undecided board")?;
                game.make_move(Move::new(position, ai))?;

                writeln!(self.output, "AI plays:")?;
                self.print_board(&game)?;
            }

            let status = game.status();
            if status.is_terminal() {
                let message = match status.winner() {
                    Some(mark) if mark == human => "You win!",
                    Some(_) => "AI wins!",
                    None => "Draw!",
                };
                writeln!(self.output, "{}", message)?;
                info!(%status, moves = game.history().len(), "Game over");
                return Ok(Transcript::from_game(&game, Some(human)));
            }
        }
    }

    /// Lets the AI play both marks until the game is decided.
    #[instrument(skip(self), fields(rows = self.config.rows(), cols = self.config.cols()))]
    pub fn watch(&mut self) -> Result<Transcript> {
        let mut game = self.new_game()?;
        self.describe(&game)?;
        writeln!(self.output)?;
        self.print_board(&game)?;

        while !game.status().is_terminal() {
            let mark = game.whose_turn();
            let position = find_best_move(game.current_state(), game.num_in_row_needed(), mark)?
                .context("AI found no empty square on an undecided board")?;
            game.make_move(Move::new(position, mark))?;

            writeln!(self.output, "{} plays {}:", mark, position)?;
            self.print_board(&game)?;
        }

        let status = game.status();
        match status.winner() {
            Some(mark) => writeln!(self.output, "{} wins!", mark)?,
            None => writeln!(self.output, "Draw!")?,
        }
        info!(%status, moves = game.history().len(), "Self-play finished");
        Ok(Transcript::from_game(&game, None))
    }

    /// Consumes the session, returning its output stream.
    pub fn into_output(self) -> W {
        self.output
    }

    fn new_game(&self) -> Result<Game> {
        let geometry = self.config.geometry().context("Invalid board size")?;
        Game::new(geometry, *self.config.win_length()).context("Invalid win length")
    }

    fn describe(&mut self, game: &Game) -> Result<()> {
        let geometry = game.geometry();
        if game.num_in_row_needed() > geometry.rows().max(geometry.cols()) {
            warn!(
                win_length = game.num_in_row_needed(),
                %geometry,
                "Win length exceeds board size, only draws are possible"
            );
        }
        writeln!(
            self.output,
            "Board {}, {} in a row wins.",
            geometry,
            game.num_in_row_needed()
        )?;
        Ok(())
    }

    fn ask_mark(&mut self) -> Result<Mark> {
        loop {
            let answer = self.ask("\nWould you like to be 'X' or 'O': ")?;
            if let Some(mark) = parse_mark(&answer) {
                return Ok(mark);
            }
        }
    }

    fn ask(&mut self, question: &str) -> Result<String> {
        write!(self.output, "{}", question)?;
        self.output.flush()?;

        let mut answer = String::new();
        let read = self
            .input
            .read_line(&mut answer)
            .context("Failed to read input")?;
        if read == 0 {
            bail!("Input closed before the game finished");
        }
        Ok(answer)
    }

    fn print_board(&mut self, game: &Game) -> Result<()> {
        write!(
            self.output,
            "{}",
            render_board(game.current_state(), &self.config)
        )?;
        Ok(())
    }
}
