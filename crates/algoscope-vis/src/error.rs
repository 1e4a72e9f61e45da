//! Error types for algoscope-vis.

use thiserror::Error;

/// Result type for visualization operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while driving a visualization.
#[derive(Debug, Error)]
pub enum Error {
    /// Sort engine error
    #[error("Sort error: {0}")]
    Sort(#[from] algoscope_sort::Error),

    /// Grid or search error
    #[error("Grid error: {0}")]
    Grid(#[from] algoscope_grid::Error),

    /// Structure lab error
    #[error("Structure error: {0}")]
    Structures(#[from] algoscope_structures::Error),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
