//! Immutable board snapshots.

use super::error::{MnkError, MnkResult};
use super::geometry::{BoardGeometry, Position};
use super::types::{Mark, Square};
use serde::{Deserialize, Serialize};

/// Snapshot of every square on a board.
///
/// A `BoardState` is a value: it is never modified after construction, and two
/// states with the same geometry and marks compare equal. New states come from
/// [`apply_move`](crate::apply_move), which leaves its input untouched so game
/// history can keep every earlier snapshot.
///
/// A deserialized snapshot must hold exactly one square per cell and a
/// `taken` count equal to its occupied squares.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawBoardState")]
pub struct BoardState {
    geometry: BoardGeometry,
    /// Squares in row-major order.
    squares: Vec<Square>,
    taken: usize,
}

impl BoardState {
    /// Creates an empty board.
    pub fn new(geometry: BoardGeometry) -> Self {
        Self {
            geometry,
            squares: vec![Square::Empty; geometry.area()],
            taken: 0,
        }
    }

    /// Returns the board geometry.
    pub fn geometry(&self) -> BoardGeometry {
        self.geometry
    }

    /// Gets the square at the given position.
    ///
    /// Lookup is by content: a position built from an equal geometry resolves
    /// normally, while a position from a board of a different size never
    /// matches and reads as empty. [`apply_move`](crate::apply_move) rejects
    /// such a position with `MnkError::GeometryMismatch` instead of writing it.
    pub fn get_square(&self, position: Position) -> Square {
        if position.geometry() != self.geometry {
            return Square::Empty;
        }
        self.square_at(position.row(), position.col())
    }

    /// Gets the square at raw coordinates, empty if off the board.
    pub fn square_at(&self, row: usize, col: usize) -> Square {
        if !self.geometry.contains(row, col) {
            return Square::Empty;
        }
        self.squares[self.geometry.index_of(row, col)]
    }

    /// Number of occupied squares.
    pub fn num_squares_taken(&self) -> usize {
        self.taken
    }

    /// Number of empty squares.
    pub fn num_squares_left(&self) -> usize {
        self.geometry.area() - self.taken
    }

    /// Checks if every square is occupied.
    pub fn is_full(&self) -> bool {
        self.num_squares_left() == 0
    }

    /// Empty positions in row-major order.
    pub fn empty_positions(&self) -> impl Iterator<Item = Position> + '_ {
        self.geometry
            .positions()
            .filter(|pos| self.square_at(pos.row(), pos.col()).is_empty())
    }

    /// Occupied positions and their marks in row-major order.
    pub fn occupied(&self) -> impl Iterator<Item = (Position, Mark)> + '_ {
        self.geometry
            .positions()
            .filter_map(|pos| self.square_at(pos.row(), pos.col()).mark().map(|mark| (pos, mark)))
    }

    /// Returns a copy with `mark` written at `position`.
    ///
    /// The caller has already checked the square is empty and on this board.
    pub(crate) fn with_mark(&self, position: Position, mark: Mark) -> Self {
        let mut squares = self.squares.clone();
        squares[self.geometry.index_of(position.row(), position.col())] = Square::Occupied(mark);
        Self {
            geometry: self.geometry,
            squares,
            taken: self.taken + 1,
        }
    }
}

#[derive(Deserialize)]
struct RawBoardState {
    geometry: BoardGeometry,
    squares: Vec<Square>,
    taken: usize,
}

impl TryFrom<RawBoardState> for BoardState {
    type Error = MnkError;

    fn try_from(raw: RawBoardState) -> MnkResult<Self> {
        let occupied = raw.squares.iter().filter(|square| !square.is_empty()).count();
        if raw.squares.len() != raw.geometry.area() || raw.taken != occupied {
            return Err(MnkError::InvalidSnapshot {
                rows: raw.geometry.rows(),
                cols: raw.geometry.cols(),
                squares: raw.squares.len(),
                taken: raw.taken,
                occupied,
            });
        }
        Ok(Self {
            geometry: raw.geometry,
            squares: raw.squares,
            taken: raw.taken,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn geometry() -> BoardGeometry {
        BoardGeometry::new(3, 3).unwrap()
    }

    #[test]
    fn test_new_board_is_empty() {
        let state = BoardState::new(geometry());
        assert_eq!(state.num_squares_taken(), 0);
        assert_eq!(state.num_squares_left(), 9);
        assert!(geometry().positions().all(|p| state.get_square(p) == Square::Empty));
        assert_eq!(state.empty_positions().count(), 9);
        assert_eq!(state.occupied().count(), 0);
    }

    #[test]
    fn test_with_mark_counts() {
        let pos = geometry().position(2, 0).unwrap();
        let state = BoardState::new(geometry()).with_mark(pos, Mark::X);
        assert_eq!(state.num_squares_taken(), 1);
        assert_eq!(state.num_squares_left(), 8);
        assert_eq!(state.occupied().collect::<Vec<_>>(), vec![(pos, Mark::X)]);
    }

    #[test]
    fn test_lookup_with_separately_built_geometry() {
        let pos = geometry().position(1, 1).unwrap();
        let state = BoardState::new(geometry()).with_mark(pos, Mark::O);
        let twin = BoardGeometry::new(3, 3).unwrap().position(1, 1).unwrap();
        assert_eq!(state.get_square(twin), Square::Occupied(Mark::O));
    }

    #[test]
    fn test_foreign_position_reads_empty() {
        let pos = geometry().position(0, 0).unwrap();
        let state = BoardState::new(geometry()).with_mark(pos, Mark::X);
        let foreign = BoardGeometry::new(4, 4).unwrap().position(0, 0).unwrap();
        assert_eq!(state.get_square(foreign), Square::Empty);
    }

    #[test]
    fn test_single_square_board_fills() {
        let tiny = BoardGeometry::new(1, 1).unwrap();
        let state = BoardState::new(tiny).with_mark(tiny.position(0, 0).unwrap(), Mark::X);
        assert!(state.is_full());
    }

    #[test]
    fn test_deserialize_round_trip() {
        let pos = geometry().position(0, 2).unwrap();
        let state = BoardState::new(geometry()).with_mark(pos, Mark::X);
        let json = serde_json::to_string(&state).unwrap();
        assert_eq!(serde_json::from_str::<BoardState>(&json).unwrap(), state);
    }

    #[test]
    fn test_deserialize_rejects_wrong_square_count() {
        let json = r#"{"geometry":{"rows":2,"cols":2},"squares":["Empty","Empty"],"taken":0}"#;
        let err = serde_json::from_str::<BoardState>(json).unwrap_err();
        assert!(err.to_string().contains("has 2 squares"));
    }

    #[test]
    fn test_deserialize_rejects_wrong_taken_count() {
        let snapshot = |taken: usize| {
            serde_json::json!({
                "geometry": { "rows": 1, "cols": 2 },
                "squares": [{ "Occupied": "X" }, "Empty"],
                "taken": taken,
            })
        };

        let err = serde_json::from_value::<BoardState>(snapshot(0)).unwrap_err();
        assert!(err.to_string().contains("0 taken, 1 occupied"));

        let state: BoardState = serde_json::from_value(snapshot(1)).unwrap();
        assert_eq!(state.num_squares_left(), 1);
    }
}
