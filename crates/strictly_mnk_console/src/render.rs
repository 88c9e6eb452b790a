//! Text rendering of boards.

use super::config::ConsoleConfig;
use strictly_mnk::{BoardState, Square};

/// Renders the board as text.
///
/// Each row lists its squares separated by the configured delimiter, with
/// empty squares shown as the placeholder symbol. Rows are separated by a
/// line of dashes as wide as a row, and the board ends with a blank line.
pub fn render_board(state: &BoardState, config: &ConsoleConfig) -> String {
    let geometry = state.geometry();
    let delimiter = config.delimiter().to_string();
    let mut out = String::new();

    for row in 0..geometry.rows() {
        let line = (0..geometry.cols())
            .map(|col| match state.square_at(row, col) {
                Square::Empty => config.empty_symbol().to_string(),
                Square::Occupied(mark) => mark.to_string(),
            })
            .collect::<Vec<_>>()
            .join(&delimiter);

        out.push_str(&line);
        out.push('\n');

        if row + 1 < geometry.rows() {
            out.push_str(&"-".repeat(line.chars().count()));
            out.push('\n');
        }
    }

    out.push('\n');
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use strictly_mnk::{BoardGeometry, Mark, Move, apply_move};

    #[test]
    fn test_empty_board() {
        let state = BoardState::new(BoardGeometry::new(3, 3).unwrap());
        assert_eq!(
            render_board(&state, &ConsoleConfig::default()),
            ".|.|.\n-----\n.|.|.\n-----\n.|.|.\n\n"
        );
    }

    #[test]
    fn test_marks_and_custom_symbols() {
        let geometry = BoardGeometry::new(2, 3).unwrap();
        let state = apply_move(
            &BoardState::new(geometry),
            Move::new(geometry.position(0, 2).unwrap(), Mark::X),
        )
        .unwrap();
        let state =
            apply_move(&state, Move::new(geometry.position(1, 0).unwrap(), Mark::O)).unwrap();

        let config = ConsoleConfig::default()
            .with_empty_symbol(' ')
            .with_delimiter(':');
        assert_eq!(render_board(&state, &config), " : :X\n-----\nO: : \n\n");
    }

    #[test]
    fn test_single_row_has_no_separator() {
        let state = BoardState::new(BoardGeometry::new(1, 4).unwrap());
        assert_eq!(render_board(&state, &ConsoleConfig::default()), ".|.|.|.\n\n");
    }
}
