//! Error types for algoscope-structures.
//!
//! Both variants are user-visible no-ops: the structure is left untouched and
//! the host shows a message. Neither is ever fatal.

use thiserror::Error;

/// Result type for structure operations.
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// Pop/dequeue/peek/delete on a structure with no elements.
    #[error("{0} is empty")]
    EmptyStructure(&'static str),

    /// Insert with a blank value.
    #[error("value must not be empty")]
    EmptyInput,
}
