use thiserror::Error;

use crate::geom::Point;

/// Errors raised while building or querying a tile grid.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GridError {
    #[error("tile grid has {len} tiles, expected {cols}x{rows} = {expected}")]
    SizeMismatch {
        cols: usize,
        rows: usize,
        len: usize,
        expected: usize,
    },

    #[error("tile grid dimensions {cols}x{rows} are too large")]
    Overflow { cols: usize, rows: usize },

    #[error("cell index out of bounds (index={index}, len={len})")]
    IndexOutOfBounds { index: usize, len: usize },

    #[error("coordinate {point} outside {cols}x{rows} grid")]
    PointOutOfBounds { point: Point, cols: usize, rows: usize },

    #[error("line {line} has width {width}, expected {expected}")]
    InconsistentWidth {
        line: usize,
        width: usize,
        expected: usize,
    },

    #[error("invalid tile character {ch:?} at {pos}")]
    InvalidTile { ch: char, pos: Point },
}
