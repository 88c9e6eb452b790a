//! Monotonic board invariant: marks are never removed or changed.

use super::super::{BoardState, Game};
use super::Invariant;

/// Invariant: every mark in an earlier snapshot survives in later ones.
pub struct MonotonicBoardInvariant;

fn keeps_marks(earlier: &BoardState, later: &BoardState) -> bool {
    earlier
        .occupied()
        .all(|(position, mark)| later.get_square(position).mark() == Some(mark))
}

impl Invariant<Game> for MonotonicBoardInvariant {
    fn holds(game: &Game) -> bool {
        let snapshots: Vec<&BoardState> = game
            .history()
            .iter()
            .map(|turn| turn.before())
            .chain(std::iter::once(game.current_state()))
            .collect();

        snapshots
            .windows(2)
            .all(|pair| keeps_marks(pair[0], pair[1]))
    }

    fn description() -> &'static str {
        "Board marks are never removed or overwritten"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{BoardGeometry, Mark, Move};

    #[test]
    fn test_fresh_game_holds() {
        let game = Game::new(BoardGeometry::new(3, 3).unwrap(), 3).unwrap();
        assert!(MonotonicBoardInvariant::holds(&game));
    }

    #[test]
    fn test_erased_mark_violates() {
        let geometry = BoardGeometry::new(3, 3).unwrap();
        let mut game = Game::new(geometry, 3).unwrap();
        game.make_move(Move::new(geometry.position(2, 1).unwrap(), Mark::X)).unwrap();
        game.make_move(Move::new(geometry.position(0, 1).unwrap(), Mark::O)).unwrap();

        game.state = BoardState::new(geometry);
        assert!(!MonotonicBoardInvariant::holds(&game));
    }
}
