//! N-in-a-row detection.

use super::super::error::{MnkError, MnkResult};
use super::super::lines::{Line, lines_on_board};
use super::super::{BoardGeometry, BoardState, GameStatus, Square};
use super::draw::is_full;
use tracing::{debug, instrument};

/// Finds every run of at least `n` equal marks.
///
/// Lines are scanned in [`lines_on_board`] order. Each maximal run of length
/// `n` or more contributes one match holding all of its cells; a run longer
/// than `n` is reported once, not once per window.
///
/// # Errors
///
/// Returns `MnkError::InvalidWinLength` if `n <= 1`.
#[instrument(level = "trace", skip(state))]
pub fn check_for_n_in_row(state: &BoardState, n: usize) -> MnkResult<Vec<Line>> {
    validate_win_length(n)?;
    let geometry = state.geometry();
    let lines = lines_on_board(geometry.rows(), geometry.cols());
    Ok(scan(state, &lines, n))
}

/// Decides whether a mark has won, the board is drawn, or play continues.
///
/// When several marks have N in a row at once (unreachable through legal
/// alternating play) the mark of the first match in line order is returned.
///
/// # Errors
///
/// Returns `MnkError::InvalidWinLength` if `n <= 1`.
#[instrument(level = "trace", skip(state))]
pub fn evaluate_winner(state: &BoardState, n: usize) -> MnkResult<GameStatus> {
    let matches = check_for_n_in_row(state, n)?;
    Ok(status_from(state, &matches))
}

/// Win evaluator with the line list cached for one geometry.
///
/// Gives the same answers as [`check_for_n_in_row`] and [`evaluate_winner`]
/// without re-enumerating lines on every call.
#[derive(Debug, Clone)]
pub struct WinEvaluator {
    geometry: BoardGeometry,
    num_in_row_needed: usize,
    lines: Vec<Line>,
}

impl WinEvaluator {
    /// Creates an evaluator for boards of `geometry` won with `n` in a row.
    ///
    /// # Errors
    ///
    /// Returns `MnkError::InvalidWinLength` if `n <= 1`.
    #[instrument]
    pub fn new(geometry: BoardGeometry, n: usize) -> MnkResult<Self> {
        validate_win_length(n)?;
        let lines = lines_on_board(geometry.rows(), geometry.cols());
        debug!(lines = lines.len(), "Win evaluator ready");
        Ok(Self {
            geometry,
            num_in_row_needed: n,
            lines,
        })
    }

    /// Geometry the cached lines were built for.
    pub fn geometry(&self) -> BoardGeometry {
        self.geometry
    }

    /// Marks needed in a row to win.
    pub fn num_in_row_needed(&self) -> usize {
        self.num_in_row_needed
    }

    /// Every run of at least N equal marks on `state`.
    pub fn matches(&self, state: &BoardState) -> Vec<Line> {
        if state.geometry() != self.geometry {
            let geometry = state.geometry();
            return scan(
                state,
                &lines_on_board(geometry.rows(), geometry.cols()),
                self.num_in_row_needed,
            );
        }
        scan(state, &self.lines, self.num_in_row_needed)
    }

    /// Status of `state`.
    pub fn evaluate(&self, state: &BoardState) -> GameStatus {
        status_from(state, &self.matches(state))
    }
}

fn validate_win_length(n: usize) -> MnkResult<()> {
    if n <= 1 {
        return Err(MnkError::InvalidWinLength(n));
    }
    Ok(())
}

fn scan(state: &BoardState, lines: &[Line], n: usize) -> Vec<Line> {
    let mut matches: Vec<Line> = Vec::new();

    for line in lines {
        let mut current = Square::Empty;
        let mut run: Line = Vec::new();

        for &(row, col) in line {
            let square = state.square_at(row, col);

            if square == current && !run.is_empty() {
                run.push((row, col));
            } else {
                current = square;
                run.clear();
                run.push((row, col));
            }

            if !current.is_empty() && run.len() >= n {
                // A longer run replaces the match recorded for its shorter prefix.
                if run.len() > n {
                    matches.pop();
                }
                matches.push(run.clone());
            }
        }
    }

    matches
}

fn status_from(state: &BoardState, matches: &[Line]) -> GameStatus {
    if let Some(&(row, col)) = matches.first().and_then(|m| m.first())
        && let Some(mark) = state.square_at(row, col).mark()
    {
        return GameStatus::Won(mark);
    }

    if is_full(state) {
        GameStatus::Draw
    } else {
        GameStatus::InProgress
    }
}
