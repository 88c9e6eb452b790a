//! Board dimensions and validated coordinates.

use super::error::{MnkError, MnkResult};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Dimensions of a rectangular board.
///
/// Immutable once constructed. Two geometries are equal iff their row and
/// column counts match. Deserialization goes through [`BoardGeometry::new`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawGeometry")]
pub struct BoardGeometry {
    rows: usize,
    cols: usize,
}

impl BoardGeometry {
    /// Creates a geometry, rejecting empty dimensions.
    ///
    /// # Errors
    ///
    /// Returns `MnkError::InvalidGeometry` if `rows` or `cols` is zero.
    #[instrument]
    pub fn new(rows: usize, cols: usize) -> MnkResult<Self> {
        if rows == 0 || cols == 0 {
            return Err(MnkError::InvalidGeometry { rows, cols });
        }
        Ok(Self { rows, cols })
    }

    /// Number of rows.
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns.
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Total number of squares.
    pub fn area(&self) -> usize {
        self.rows * self.cols
    }

    /// Checks whether `(row, col)` lies on the board.
    pub fn contains(&self, row: usize, col: usize) -> bool {
        row < self.rows && col < self.cols
    }

    /// Builds a position on this board.
    pub fn position(&self, row: usize, col: usize) -> MnkResult<Position> {
        Position::new(*self, row, col)
    }

    /// All positions in row-major order.
    pub fn positions(&self) -> impl Iterator<Item = Position> + '_ {
        let geometry = *self;
        (0..self.rows).flat_map(move |row| {
            (0..geometry.cols).map(move |col| Position {
                geometry,
                row,
                col,
            })
        })
    }

    pub(crate) fn index_of(&self, row: usize, col: usize) -> usize {
        row * self.cols + col
    }
}

#[derive(Deserialize)]
struct RawGeometry {
    rows: usize,
    cols: usize,
}

impl TryFrom<RawGeometry> for BoardGeometry {
    type Error = MnkError;

    fn try_from(raw: RawGeometry) -> MnkResult<Self> {
        Self::new(raw.rows, raw.cols)
    }
}

impl std::fmt::Display for BoardGeometry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}x{}", self.rows, self.cols)
    }
}

/// A square on a specific board.
///
/// Coordinates are validated against the geometry at construction, so a
/// `Position` always lies on its own board, including when deserialized.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawPosition")]
pub struct Position {
    geometry: BoardGeometry,
    row: usize,
    col: usize,
}

impl Position {
    /// Creates a position on the given board.
    ///
    /// # Errors
    ///
    /// Returns `MnkError::PositionOutOfBounds` unless `row < rows` and
    /// `col < cols`.
    #[instrument]
    pub fn new(geometry: BoardGeometry, row: usize, col: usize) -> MnkResult<Self> {
        if !geometry.contains(row, col) {
            return Err(MnkError::PositionOutOfBounds {
                row,
                col,
                rows: geometry.rows,
                cols: geometry.cols,
            });
        }
        Ok(Self { geometry, row, col })
    }

    /// Board this position belongs to.
    pub fn geometry(&self) -> BoardGeometry {
        self.geometry
    }

    /// Zero-based row.
    pub fn row(&self) -> usize {
        self.row
    }

    /// Zero-based column.
    pub fn col(&self) -> usize {
        self.col
    }

    /// Canonical key built from the coordinates and board dimensions.
    pub fn key(&self) -> PositionKey {
        PositionKey {
            row: self.row,
            col: self.col,
            rows: self.geometry.rows,
            cols: self.geometry.cols,
        }
    }
}

#[derive(Deserialize)]
struct RawPosition {
    geometry: BoardGeometry,
    row: usize,
    col: usize,
}

impl TryFrom<RawPosition> for Position {
    type Error = MnkError;

    fn try_from(raw: RawPosition) -> MnkResult<Self> {
        Self::new(raw.geometry, raw.row, raw.col)
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{},{}", self.row, self.col)
    }
}

/// Map key for a position. Renders as `row,col:rows,cols`.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
    derive_more::Display,
)]
#[display("{row},{col}:{rows},{cols}")]
pub struct PositionKey {
    row: usize,
    col: usize,
    rows: usize,
    cols: usize,
}
