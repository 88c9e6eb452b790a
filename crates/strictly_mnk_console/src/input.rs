//! Parsing of typed player input.

use std::str::FromStr;
use strictly_mnk::{BoardGeometry, Mark, MnkError, Position};
use tracing::instrument;

/// Why a line of input could not be turned into a move.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::From)]
pub enum InputError {
    /// Text is not of the form `row,col`.
    #[display("Expected row,col but got {:?}", _0)]
    Malformed(String),

    /// Coordinates parsed but break a board rule.
    #[display("{}", _0)]
    #[from]
    Rules(MnkError),
}

impl std::error::Error for InputError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            InputError::Malformed(_) => None,
            InputError::Rules(err) => Some(err),
        }
    }
}

/// Parses `row,col` into a position on `geometry`.
#[instrument]
pub fn parse_position(text: &str, geometry: BoardGeometry) -> Result<Position, InputError> {
    let malformed = || InputError::Malformed(text.trim().to_string());

    let (row, col) = text.trim().split_once(',').ok_or_else(malformed)?;
    let row = row.trim().parse::<usize>().map_err(|_| malformed())?;
    let col = col.trim().parse::<usize>().map_err(|_| malformed())?;

    Ok(geometry.position(row, col)?)
}

/// Parses a mark choice, ignoring case and surrounding whitespace.
#[instrument]
pub fn parse_mark(text: &str) -> Option<Mark> {
    Mark::from_str(text.trim()).ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn geometry() -> BoardGeometry {
        BoardGeometry::new(3, 3).unwrap()
    }

    #[test]
    fn test_parses_with_spaces() {
        let pos = parse_position(" 0, 2\n", geometry()).unwrap();
        assert_eq!((pos.row(), pos.col()), (0, 2));
    }

    #[test]
    fn test_malformed_input() {
        for text in ["", "1", "a,b", "1,2,3", "-1,0", "1;2"] {
            assert!(
                matches!(parse_position(text, geometry()), Err(InputError::Malformed(_))),
                "{text:?}"
            );
        }
    }

    #[test]
    fn test_out_of_bounds_is_rule_error() {
        assert!(matches!(
            parse_position("3,0", geometry()),
            Err(InputError::Rules(MnkError::PositionOutOfBounds { .. }))
        ));
    }

    #[test]
    fn test_mark_choice() {
        assert_eq!(parse_mark("x"), Some(Mark::X));
        assert_eq!(parse_mark(" O \n"), Some(Mark::O));
        assert_eq!(parse_mark("maybe"), None);
    }
}
