use thiserror::Error;

use crate::maze::Coord;

/// Errors raised by the grid and the generators.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MazeError {
    /// A grid needs at least one row and one column.
    #[error("invalid maze dimensions {rows}x{columns}: rows and columns must be at least 1")]
    InvalidDimensions { rows: usize, columns: usize },

    /// A cell query fell outside the grid extent.
    #[error("cell ({row}, {column}) is out of bounds for a {rows}x{columns} maze")]
    OutOfBounds {
        row: usize,
        column: usize,
        rows: usize,
        columns: usize,
    },

    /// Two cells that do not share an edge were asked to share a passage or a wall.
    #[error("cells {from:?} and {to:?} do not share an edge")]
    NotAdjacent { from: Coord, to: Coord },

    /// `generate` was called on a generator that already produced its maze.
    #[error("maze has already been generated; create a new generator to generate again")]
    AlreadyGenerated,
}

/// Errors raised while reading a [`MazeConfig`](crate::config::MazeConfig) from arguments.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("missing value for {0}")]
    MissingValue(String),

    #[error("invalid number for {flag}: {value:?}")]
    InvalidNumber { flag: String, value: String },

    #[error("unknown algorithm {0:?}")]
    UnknownAlgorithm(String),

    #[error("unknown argument {0:?}")]
    UnknownFlag(String),
}
