//! Error types for algoscope-sort.

use thiserror::Error;

/// Result type for sort engine operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur before a sort run starts.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// The algorithm identifier is not one of the six known sorts.
    #[error("unknown sort algorithm: {0}")]
    InvalidAlgorithm(String),

    /// The value range is inverted.
    #[error("invalid value range: min {min} exceeds max {max}")]
    InvalidRange { min: u32, max: u32 },

    /// Speed slider value outside 1..=100.
    #[error("speed must be within 1..=100, got {0}")]
    InvalidSpeed(u32),

    /// Arrays must hold at least one element.
    #[error("array size must be at least 1")]
    InvalidSize,
}
