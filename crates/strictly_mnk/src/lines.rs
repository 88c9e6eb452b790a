//! Enumeration of every straight line on a rectangular board.

use tracing::instrument;

/// Ordered `(row, col)` cells of one row, column or diagonal.
pub type Line = Vec<(usize, usize)>;

/// Lists every maximal line on a `rows` x `cols` board.
///
/// Order: rows top to bottom, columns left to right, forward diagonals
/// (row and column increasing), then backward diagonals (row increasing,
/// column decreasing). Cells within a line are in traversal order, which the
/// run scan in [`check_for_n_in_row`](crate::check_for_n_in_row) relies on.
/// Lines have differing lengths; diagonals of a single cell are included.
///
/// Diagonals are swept over a square of side `max(rows, cols)` and clipped
/// to the board, dropping any that end up empty.
#[instrument(level = "trace")]
pub fn lines_on_board(rows: usize, cols: usize) -> Vec<Line> {
    let mut lines: Vec<Line> = Vec::new();

    for row in 0..rows {
        lines.push((0..cols).map(|col| (row, col)).collect());
    }

    for col in 0..cols {
        lines.push((0..rows).map(|row| (row, col)).collect());
    }

    let side = rows.max(cols) as isize;
    let on_board = |row: isize, col: isize| {
        row >= 0 && col >= 0 && (row as usize) < rows && (col as usize) < cols
    };

    for offset in (1 - side)..side {
        let line: Line = (0..side)
            .map(|row| (row, offset + row))
            .filter(|&(row, col)| on_board(row, col))
            .map(|(row, col)| (row as usize, col as usize))
            .collect();
        if !line.is_empty() {
            lines.push(line);
        }
    }

    for offset in 0..(2 * side - 1) {
        let line: Line = (0..side)
            .map(|row| (row, offset - row))
            .filter(|&(row, col)| on_board(row, col))
            .map(|(row, col)| (row as usize, col as usize))
            .collect();
        if !line.is_empty() {
            lines.push(line);
        }
    }

    lines
}
