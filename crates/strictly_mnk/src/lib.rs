//! Strictly MNK - generalized tic-tac-toe with a perfect opponent.
//!
//! An m,n,k game is played on an `m` x `n` board and won by the first mark
//! to get `k` in a row horizontally, vertically or diagonally.
//!
//! # Architecture
//!
//! - **Geometry**: board dimensions and validated positions
//! - **Board**: immutable snapshots, produced by the pure [`apply_move`]
//! - **Rules**: line enumeration and N-in-a-row evaluation
//! - **Game**: turn sequencing and history, checked by contracts in debug builds
//! - **AI**: exhaustive minimax
//!
//! # Example
//!
//! ```
//! use strictly_mnk::{BoardGeometry, Game, GameStatus, Mark, Move, find_best_move};
//!
//! # fn example() -> Result<(), strictly_mnk::MnkError> {
//! let geometry = BoardGeometry::new(3, 3)?;
//! let mut game = Game::new(geometry, 3)?;
//!
//! game.make_move(Move::new(geometry.position(1, 1)?, Mark::X))?;
//!
//! let reply = find_best_move(game.current_state(), game.num_in_row_needed(), Mark::O)?;
//! if let Some(position) = reply {
//!     game.make_move(Move::new(position, Mark::O))?;
//! }
//! assert_eq!(game.status(), GameStatus::InProgress);
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod ai;
mod board;
mod contracts;
mod error;
mod game;
mod geometry;
mod invariants;
mod lines;
mod rules;
mod types;

pub use action::{Move, apply_move};
pub use ai::{Score, find_best_move, minimax};
pub use board::BoardState;
pub use contracts::{Contract, MoveContract, PlayersTurn};
pub use error::{MnkError, MnkResult};
pub use game::{Game, Turn};
pub use geometry::{BoardGeometry, Position, PositionKey};
pub use invariants::{
    AlternatingTurnInvariant, GameInvariants, HistoryConsistentInvariant, Invariant,
    InvariantSet, InvariantViolation, MonotonicBoardInvariant,
};
pub use lines::{Line, lines_on_board};
pub use rules::{WinEvaluator, check_for_n_in_row, evaluate_winner, is_full};
pub use types::{GameStatus, Mark, Square};
