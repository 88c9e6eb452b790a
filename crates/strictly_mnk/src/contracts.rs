//! Contract-based validation for moves.
//!
//! Contracts define correctness through preconditions and postconditions:
//! {P} action {Q}.

use super::error::{MnkError, MnkResult};
use super::invariants::{GameInvariants, InvariantSet, InvariantViolation};
use super::{Game, Move};
use tracing::{instrument, warn};

/// A contract defines preconditions and postconditions for state transitions.
pub trait Contract<S, A> {
    /// Checks preconditions before applying the action.
    fn pre(state: &S, action: &A) -> MnkResult<()>;

    /// Checks postconditions after applying the action.
    fn post(before: &S, after: &S) -> Result<(), InvariantViolation>;
}

/// Precondition: it must be the mark's turn.
pub struct PlayersTurn;

impl PlayersTurn {
    /// Rejects a move made out of turn.
    #[instrument(level = "trace", skip(game))]
    pub fn check(action: &Move, game: &Game) -> MnkResult<()> {
        if action.mark != game.whose_turn() {
            return Err(MnkError::WrongTurn {
                attempted: action.mark,
                expected: game.whose_turn(),
            });
        }
        Ok(())
    }
}

/// Contract for move actions.
///
/// Preconditions:
/// - Must be the mark's turn (square availability is checked by the transition)
///
/// Postconditions:
/// - Exactly one history entry was appended
/// - Board remains monotonic
/// - Marks still alternate
/// - History replays to the current board
pub struct MoveContract;

impl Contract<Game, Move> for MoveContract {
    fn pre(game: &Game, action: &Move) -> MnkResult<()> {
        PlayersTurn::check(action, game)
    }

    fn post(before: &Game, after: &Game) -> Result<(), InvariantViolation> {
        if after.history().len() != before.history().len() + 1 {
            warn!(
                before = before.history().len(),
                after = after.history().len(),
                "History did not grow by one"
            );
            return Err(InvariantViolation::new("History grows by one entry per move"));
        }

        GameInvariants::check_all(after).map_err(|violations| {
            let descriptions = violations
                .iter()
                .map(|v| v.description.as_str())
                .collect::<Vec<_>>()
                .join("; ");
            warn!(%descriptions, "Invariant violation");
            InvariantViolation::new(format!("Postcondition failed: {}", descriptions))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{BoardGeometry, Mark, Turn};

    fn game() -> Game {
        Game::new(BoardGeometry::new(3, 3).unwrap(), 3).unwrap()
    }

    #[test]
    fn test_precondition_right_turn() {
        let game = game();
        let action = Move::new(game.geometry().position(1, 1).unwrap(), Mark::X);
        assert!(MoveContract::pre(&game, &action).is_ok());
    }

    #[test]
    fn test_precondition_wrong_turn() {
        let game = game();
        let action = Move::new(game.geometry().position(1, 1).unwrap(), Mark::O);
        assert_eq!(
            MoveContract::pre(&game, &action),
            Err(MnkError::WrongTurn {
                attempted: Mark::O,
                expected: Mark::X
            })
        );
    }

    #[test]
    fn test_postcondition_holds_after_move() {
        let before = game();
        let mut after = before.clone();
        after
            .make_move(Move::new(before.geometry().position(0, 0).unwrap(), Mark::X))
            .unwrap();
        assert!(MoveContract::post(&before, &after).is_ok());
    }

    #[test]
    fn test_postcondition_detects_missing_history() {
        let before = game();
        assert!(MoveContract::post(&before, &before).is_err());
    }

    #[test]
    fn test_postcondition_detects_corruption() {
        let before = game();
        let mut after = before.clone();
        let action = Move::new(before.geometry().position(0, 0).unwrap(), Mark::O);
        after.history.push(Turn::new(before.current_state().clone(), action));

        let violation = MoveContract::post(&before, &after).unwrap_err();
        assert!(violation.description.starts_with("Postcondition failed"));
    }
}
