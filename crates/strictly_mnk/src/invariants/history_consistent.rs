//! History consistency invariant: replaying history reproduces the board.

use super::super::{Game, apply_move};
use super::Invariant;

/// Invariant: each history entry leads to the next.
///
/// Entry `i` holds the board before move `i`, which has exactly `i` squares
/// taken. Applying the entry's move to it yields the next entry's board, and
/// the last entry leads to the current state.
pub struct HistoryConsistentInvariant;

impl Invariant<Game> for HistoryConsistentInvariant {
    fn holds(game: &Game) -> bool {
        let history = game.history();

        history.iter().enumerate().all(|(index, turn)| {
            let expected_next = history
                .get(index + 1)
                .map(|next| next.before())
                .unwrap_or_else(|| game.current_state());

            turn.before().num_squares_taken() == index
                && apply_move(turn.before(), *turn.played()).as_ref() == Ok(expected_next)
        })
    }

    fn description() -> &'static str {
        "History replays to the current board"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{BoardGeometry, BoardState, Mark, Move};

    #[test]
    fn test_played_game_holds() {
        let geometry = BoardGeometry::new(3, 4).unwrap();
        let mut game = Game::new(geometry, 3).unwrap();
        for (row, col) in [(0, 0), (2, 3), (1, 1)] {
            let mark = game.whose_turn();
            game.make_move(Move::new(geometry.position(row, col).unwrap(), mark)).unwrap();
        }
        assert!(HistoryConsistentInvariant::holds(&game));
    }

    #[test]
    fn test_replaced_state_violates() {
        let geometry = BoardGeometry::new(3, 3).unwrap();
        let mut game = Game::new(geometry, 3).unwrap();
        game.make_move(Move::new(geometry.position(0, 0).unwrap(), Mark::X)).unwrap();

        game.state = BoardState::new(geometry);
        assert!(!HistoryConsistentInvariant::holds(&game));
    }
}
