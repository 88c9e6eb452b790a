//! Game rules for m,n,k games.
//!
//! Pure functions for evaluating board states. Rules are separated from board
//! storage so the game wrapper and the search can share them.

pub mod draw;
pub mod win;

pub use draw::is_full;
pub use win::{WinEvaluator, check_for_n_in_row, evaluate_winner};
