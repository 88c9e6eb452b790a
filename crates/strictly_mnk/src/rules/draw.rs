//! Draw detection.

use super::super::BoardState;
use tracing::instrument;

/// Checks if the board is full (all squares occupied).
///
/// A full board with no winner is a draw.
#[instrument(level = "trace", skip(state))]
pub fn is_full(state: &BoardState) -> bool {
    state.num_squares_left() == 0
}

#[cfg(test)]
mod tests {
    use super::super::super::{BoardGeometry, GameStatus, Mark, Move, apply_move};
    use super::super::win::evaluate_winner;
    use super::*;

    fn play(rows: usize, cols: usize, cells: &[(usize, usize, Mark)]) -> BoardState {
        let geometry = BoardGeometry::new(rows, cols).unwrap();
        cells.iter().fold(BoardState::new(geometry), |state, &(row, col, mark)| {
            apply_move(&state, Move::new(geometry.position(row, col).unwrap(), mark)).unwrap()
        })
    }

    #[test]
    fn test_empty_board_not_full() {
        assert!(!is_full(&play(3, 3, &[])));
    }

    #[test]
    fn test_partial_board_not_full() {
        assert!(!is_full(&play(3, 3, &[(1, 1, Mark::X)])));
    }

    #[test]
    fn test_draw_detection() {
        // O X O / X X O / X O X
        let state = play(
            3,
            3,
            &[
                (0, 1, Mark::X),
                (0, 0, Mark::O),
                (1, 0, Mark::X),
                (0, 2, Mark::O),
                (1, 1, Mark::X),
                (1, 2, Mark::O),
                (2, 0, Mark::X),
                (2, 1, Mark::O),
                (2, 2, Mark::X),
            ],
        );
        assert!(is_full(&state));
        assert_eq!(evaluate_winner(&state, 3), Ok(GameStatus::Draw));
    }

    #[test]
    fn test_full_board_with_winner_is_not_draw() {
        // X X X / O O X / X O O
        let state = play(
            3,
            3,
            &[
                (0, 0, Mark::X),
                (1, 0, Mark::O),
                (0, 1, Mark::X),
                (1, 1, Mark::O),
                (1, 2, Mark::X),
                (2, 1, Mark::O),
                (2, 0, Mark::X),
                (2, 2, Mark::O),
                (0, 2, Mark::X),
            ],
        );
        assert!(is_full(&state));
        assert_eq!(evaluate_winner(&state, 3), Ok(GameStatus::Won(Mark::X)));
    }
}
