//! Error type for m,n,k game rules.

use super::types::Mark;
use serde::{Deserialize, Serialize};

/// Error raised when a board, position, move or rule parameter is invalid.
///
/// Every variant comes from a synchronous validation check. None of them is
/// retried or corrected internally; callers decide whether to re-prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display)]
pub enum MnkError {
    /// Board dimensions must both be positive.
    #[display("Invalid board geometry {rows}x{cols}: rows and columns must be positive")]
    InvalidGeometry {
        /// Requested row count.
        rows: usize,
        /// Requested column count.
        cols: usize,
    },

    /// Coordinates fall outside the board.
    #[display("Position ({row}, {col}) is outside a {rows}x{cols} board")]
    PositionOutOfBounds {
        /// Requested row.
        row: usize,
        /// Requested column.
        col: usize,
        /// Board rows.
        rows: usize,
        /// Board columns.
        cols: usize,
    },

    /// Win length must be greater than one.
    #[display("Win length must be an integer greater than 1, got {}", _0)]
    InvalidWinLength(usize),

    /// The target square already holds a mark.
    #[display("Square ({row}, {col}) is already taken")]
    SquareOccupied {
        /// Row of the occupied square.
        row: usize,
        /// Column of the occupied square.
        col: usize,
    },

    /// A mark tried to move during the opponent's turn.
    #[display("Attempt to make a move for {attempted} during {expected}'s turn")]
    WrongTurn {
        /// Mark carried by the rejected move.
        attempted: Mark,
        /// Mark whose turn it is.
        expected: Mark,
    },

    /// A move's position was built for a board of another size.
    #[display("Position belongs to a {found_rows}x{found_cols} board, expected {rows}x{cols}")]
    GeometryMismatch {
        /// Rows of the state's board.
        rows: usize,
        /// Columns of the state's board.
        cols: usize,
        /// Rows of the position's board.
        found_rows: usize,
        /// Columns of the position's board.
        found_cols: usize,
    },

    /// A board snapshot's squares disagree with its geometry or count.
    #[display("Snapshot {rows}x{cols} has {squares} squares, {taken} taken, {occupied} occupied")]
    InvalidSnapshot {
        /// Rows of the snapshot's board.
        rows: usize,
        /// Columns of the snapshot's board.
        cols: usize,
        /// Squares stored in the snapshot.
        squares: usize,
        /// Occupied count recorded in the snapshot.
        taken: usize,
        /// Squares actually holding a mark.
        occupied: usize,
    },
}

impl std::error::Error for MnkError {}

/// Result alias for rule operations.
pub type MnkResult<T> = Result<T, MnkError>;
