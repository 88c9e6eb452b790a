//! First-class move type and the pure state transition.
//!
//! Moves are domain values, not side effects. Applying one produces a new
//! [`BoardState`] and leaves the old one intact.

use super::board::BoardState;
use super::error::{MnkError, MnkResult};
use super::geometry::Position;
use super::types::Mark;
use derive_new::new;
use serde::{Deserialize, Serialize};
use tracing::{instrument, trace};

/// A mark placed at a position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, new)]
pub struct Move {
    /// Where the mark goes.
    pub position: Position,
    /// The mark being placed.
    pub mark: Mark,
}

impl Move {
    /// Returns the position of this move.
    pub fn position(&self) -> Position {
        self.position
    }

    /// Returns the mark placed by this move.
    pub fn mark(&self) -> Mark {
        self.mark
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {}", self.mark, self.position)
    }
}

/// Returns the state after `action` is played on `state`.
///
/// A position from a board of another size is rejected here even though
/// [`BoardState::get_square`] reads it as empty.
///
/// # Errors
///
/// - `MnkError::GeometryMismatch` if the position was built for another board size.
/// - `MnkError::SquareOccupied` if the target square already holds a mark.
#[instrument(level = "trace", skip(state), fields(action = %action))]
pub fn apply_move(state: &BoardState, action: Move) -> MnkResult<BoardState> {
    let geometry = state.geometry();
    let target = action.position;

    if target.geometry() != geometry {
        return Err(MnkError::GeometryMismatch {
            rows: geometry.rows(),
            cols: geometry.cols(),
            found_rows: target.geometry().rows(),
            found_cols: target.geometry().cols(),
        });
    }

    if !state.get_square(target).is_empty() {
        return Err(MnkError::SquareOccupied {
            row: target.row(),
            col: target.col(),
        });
    }

    let next = state.with_mark(target, action.mark);
    trace!(taken = next.num_squares_taken(), "Move applied");
    Ok(next)
}
