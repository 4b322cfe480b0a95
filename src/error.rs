//! Errors raised while turning caller input into boards and settings.
//!
//! The search itself never fails; these only come out of the adapters that
//! validate flat arrays, strings and numeric settings.

use thiserror::Error;

/// Invalid board or settings handed to one of the input adapters.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum PuzzleError {
    /// A board did not have exactly nine cells.
    #[error("board must have 9 tiles, got {actual}")]
    WrongLength { actual: usize },

    /// A tile value fell outside 0..=8.
    #[error("tile {value} is out of range, expected 0..=8")]
    TileOutOfRange { value: i64 },

    /// A tile value appeared more than once.
    #[error("tile {value} appears more than once")]
    DuplicateTile { value: u8 },

    /// A token in a board string was not a number.
    #[error("cannot parse {token:?} as a tile")]
    InvalidToken { token: String },

    /// The algorithm code was not one of 0 (A*), 1 (BFS) or 2 (DLS).
    #[error("unknown algorithm code {0}, expected 0 (A*), 1 (BFS) or 2 (DLS)")]
    UnknownAlgorithm(i32),

    /// A depth-limited search was requested with a negative limit.
    #[error("depth limit must be non-negative, got {0}")]
    NegativeDepth(i32),
}

/// A move list that cannot be played out on its starting board.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ReplayError {
    /// The listed tile was not next to the blank when its turn came.
    #[error("move {step}: tile {tile} is not next to the blank")]
    NotAdjacent { step: usize, tile: u8 },
}
