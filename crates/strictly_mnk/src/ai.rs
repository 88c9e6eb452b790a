//! Exhaustive minimax opponent.
//!
//! The search visits every continuation of the position, so its cost grows
//! factorially with the number of empty squares. It is only practical on
//! small boards.

use super::board::BoardState;
use super::error::MnkResult;
use super::geometry::Position;
use super::rules::WinEvaluator;
use super::types::{GameStatus, Mark};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument, trace};

/// Value of a position from the AI mark's point of view.
///
/// Variants are ordered `Loss < Draw < Win`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Score {
    /// The opponent wins with best play.
    Loss,
    /// Best play ends in a draw.
    Draw,
    /// The AI wins with best play.
    Win,
}

impl Score {
    /// Numeric value: -1, 0 or 1.
    pub fn value(self) -> i8 {
        match self {
            Score::Loss => -1,
            Score::Draw => 0,
            Score::Win => 1,
        }
    }
}

/// Scores `state` assuming both sides play perfectly.
///
/// `is_maximizing` selects whose ply it is: `ai_mark` moves when true, its
/// opponent when false.
///
/// # Errors
///
/// Returns `MnkError::InvalidWinLength` if `n <= 1`.
#[instrument(skip(state), fields(empty = state.num_squares_left()))]
pub fn minimax(
    state: &BoardState,
    n: usize,
    is_maximizing: bool,
    ai_mark: Mark,
) -> MnkResult<Score> {
    let evaluator = WinEvaluator::new(state.geometry(), n)?;
    Ok(search(&evaluator, state, is_maximizing, ai_mark))
}

/// Picks the square that maximizes the minimax score for `ai_mark`.
///
/// Empty squares are tried in row-major order and only a strictly better
/// score replaces the current choice, so ties go to the first square found.
/// Returns `None` only when the board is full.
///
/// # Errors
///
/// Returns `MnkError::InvalidWinLength` if `n <= 1`.
#[instrument(skip(state), fields(geometry = %state.geometry(), empty = state.num_squares_left()))]
pub fn find_best_move(state: &BoardState, n: usize, ai_mark: Mark) -> MnkResult<Option<Position>> {
    let evaluator = WinEvaluator::new(state.geometry(), n)?;
    let mut best: Option<(Position, Score)> = None;

    for position in state.empty_positions() {
        let next = state.with_mark(position, ai_mark);
        let score = search(&evaluator, &next, false, ai_mark);
        trace!(%position, ?score, "Candidate scored");

        if best.is_none_or(|(_, best_score)| score > best_score) {
            best = Some((position, score));
        }
    }

    match best {
        Some((position, score)) => debug!(%position, ?score, "Best move chosen"),
        None => debug!("Board full, no move available"),
    }

    Ok(best.map(|(position, _)| position))
}

fn search(
    evaluator: &WinEvaluator,
    state: &BoardState,
    is_maximizing: bool,
    ai_mark: Mark,
) -> Score {
    match evaluator.evaluate(state) {
        GameStatus::Won(winner) if winner == ai_mark => return Score::Win,
        GameStatus::Won(_) => return Score::Loss,
        GameStatus::Draw => return Score::Draw,
        GameStatus::InProgress => {}
    }

    let to_move = if is_maximizing {
        ai_mark
    } else {
        ai_mark.opponent()
    };

    let scores = state.empty_positions().map(|position| {
        let next = state.with_mark(position, to_move);
        search(evaluator, &next, !is_maximizing, ai_mark)
    });

    let best = if is_maximizing {
        scores.max()
    } else {
        scores.min()
    };

    // InProgress always has an empty square
    best.unwrap_or(Score::Draw)
}
