//! Alternating turn invariant: marks alternate X, O, X, O, ...

use super::super::{Game, Mark};
use super::Invariant;

/// Invariant: marks alternate turns, starting with X.
///
/// The mark to move next must match the parity of the history length.
pub struct AlternatingTurnInvariant;

fn expected_mark(turn_index: usize) -> Mark {
    if turn_index % 2 == 0 {
        Mark::FIRST
    } else {
        Mark::FIRST.opponent()
    }
}

impl Invariant<Game> for AlternatingTurnInvariant {
    fn holds(game: &Game) -> bool {
        let history = game.history();

        let alternates = history
            .iter()
            .enumerate()
            .all(|(index, turn)| turn.played().mark == expected_mark(index));

        alternates && game.whose_turn() == expected_mark(history.len())
    }

    fn description() -> &'static str {
        "Marks alternate turns (X, O, X, O, ...)"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{BoardGeometry, Move};

    #[test]
    fn test_empty_game_holds() {
        let game = Game::new(BoardGeometry::new(3, 3).unwrap(), 3).unwrap();
        assert!(AlternatingTurnInvariant::holds(&game));
    }

    #[test]
    fn test_alternating_sequence_holds() {
        let geometry = BoardGeometry::new(3, 3).unwrap();
        let moves: Vec<_> = [(0, 0), (1, 1), (0, 2), (2, 0), (2, 2)]
            .iter()
            .enumerate()
            .map(|(i, &(row, col))| {
                Move::new(geometry.position(row, col).unwrap(), expected_mark(i))
            })
            .collect();

        let game = Game::replay(geometry, 3, &moves).unwrap();
        assert!(AlternatingTurnInvariant::holds(&game));
        assert_eq!(game.whose_turn(), Mark::O);
    }

    #[test]
    fn test_stale_turn_marker_violates() {
        let mut game = Game::new(BoardGeometry::new(3, 3).unwrap(), 3).unwrap();
        game.to_move = Mark::O;
        assert!(!AlternatingTurnInvariant::holds(&game));
    }
}
