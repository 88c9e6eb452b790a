//! Turn-sequenced game with full history.

use super::action::{Move, apply_move};
use super::board::BoardState;
use super::contracts::{Contract, MoveContract};
use super::error::MnkResult;
use super::geometry::BoardGeometry;
use super::rules::WinEvaluator;
use super::types::{GameStatus, Mark};
use derive_getters::Getters;
use derive_new::new;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// One history entry: the board before a move, and the move itself.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize, new)]
pub struct Turn {
    /// Board before the move was played.
    before: BoardState,
    /// The accepted move.
    played: Move,
}

/// An m,n,k game in progress.
///
/// The game owns turn sequencing and history. It does not track a terminal
/// phase: callers consult [`Game::status`] (or
/// [`evaluate_winner`](crate::evaluate_winner)) after each move and stop
/// submitting moves once the game is decided. Moves made after a win are
/// still accepted.
#[derive(Debug, Clone)]
pub struct Game {
    pub(crate) evaluator: WinEvaluator,
    pub(crate) state: BoardState,
    pub(crate) to_move: Mark,
    pub(crate) history: Vec<Turn>,
}

impl Game {
    /// Creates a game on an empty board with X to move.
    ///
    /// # Errors
    ///
    /// Returns `MnkError::InvalidWinLength` if `num_in_row_needed <= 1`.
    #[instrument]
    pub fn new(geometry: BoardGeometry, num_in_row_needed: usize) -> MnkResult<Self> {
        let evaluator = WinEvaluator::new(geometry, num_in_row_needed)?;
        debug!(%geometry, num_in_row_needed, "New game");
        Ok(Self {
            evaluator,
            state: BoardState::new(geometry),
            to_move: Mark::FIRST,
            history: Vec::new(),
        })
    }

    /// Replays moves from an empty board.
    ///
    /// # Errors
    ///
    /// Returns the first error raised by [`Game::new`] or [`Game::make_move`].
    #[instrument(skip(moves), fields(moves = moves.len()))]
    pub fn replay(
        geometry: BoardGeometry,
        num_in_row_needed: usize,
        moves: &[Move],
    ) -> MnkResult<Self> {
        let mut game = Self::new(geometry, num_in_row_needed)?;
        for action in moves {
            game.make_move(*action)?;
        }
        Ok(game)
    }

    /// Board dimensions.
    pub fn geometry(&self) -> BoardGeometry {
        self.evaluator.geometry()
    }

    /// Marks needed in a row to win.
    pub fn num_in_row_needed(&self) -> usize {
        self.evaluator.num_in_row_needed()
    }

    /// The current board.
    pub fn current_state(&self) -> &BoardState {
        &self.state
    }

    /// Every accepted move, oldest first, with the board it was played on.
    pub fn history(&self) -> &[Turn] {
        &self.history
    }

    /// Mark whose turn it is.
    pub fn whose_turn(&self) -> Mark {
        self.to_move
    }

    /// Evaluates the current board.
    pub fn status(&self) -> GameStatus {
        self.evaluator.evaluate(&self.state)
    }

    /// Plays a move for the mark whose turn it is.
    ///
    /// On failure the board, turn and history are left unchanged.
    ///
    /// # Errors
    ///
    /// - `MnkError::WrongTurn` if `action.mark` is not the mark to move.
    /// - `MnkError::SquareOccupied` or `MnkError::GeometryMismatch` from
    ///   [`apply_move`].
    #[instrument(skip(self), fields(action = %action, to_move = %self.to_move))]
    pub fn make_move(&mut self, action: Move) -> MnkResult<()> {
        MoveContract::pre(self, &action)?;

        let next = apply_move(&self.state, action)?;

        #[cfg(debug_assertions)]
        let before = self.clone();

        let previous = std::mem::replace(&mut self.state, next);
        self.history.push(Turn::new(previous, action));
        self.to_move = self.to_move.opponent();

        debug!(
            taken = self.state.num_squares_taken(),
            next = %self.to_move,
            "Move accepted"
        );

        #[cfg(debug_assertions)]
        {
            let checked = MoveContract::post(&before, self);
            if let Err(violation) = &checked {
                tracing::warn!(%violation, "Move postcondition failed");
            }
            debug_assert!(checked.is_ok(), "move postcondition failed");
        }

        Ok(())
    }
}
