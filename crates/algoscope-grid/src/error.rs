//! Error types for algoscope-grid.

use thiserror::Error;

/// Result type for grid operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur when configuring a search.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// The algorithm identifier is not one of the five known searches.
    #[error("unknown search algorithm: {0}")]
    InvalidAlgorithm(String),

    /// The coordinate lies outside the grid.
    #[error("cell ({row}, {col}) is outside the grid")]
    OutOfBounds { row: usize, col: usize },

    /// Start and finish cells can never become walls.
    #[error("cell ({row}, {col}) is a fixed start/finish cell")]
    FixedCell { row: usize, col: usize },
}
