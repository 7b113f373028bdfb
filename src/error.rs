//! Error types for board and move operations.

use thiserror::Error;

/// Errors raised by the rule engine.
///
/// `OutOfBounds` is a caller bug. `Occupied` and `Forbidden` are ordinary
/// rejected moves: the board, turn and history are left untouched.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum GoError {
    /// Coordinate outside the 9x9 grid
    #[error("point ({row}, {col}) is off the board")]
    OutOfBounds { row: usize, col: usize },

    /// Target point already holds a stone
    #[error("point ({row}, {col}) is not empty")]
    Occupied { row: usize, col: usize },

    /// Move leaves its own group without liberties, captures nothing,
    /// and touches an opponent stone
    #[error("forbidden move at ({row}, {col})")]
    Forbidden { row: usize, col: usize },
}

/// Result type alias for engine operations
pub type Result<T> = std::result::Result<T, GoError>;
