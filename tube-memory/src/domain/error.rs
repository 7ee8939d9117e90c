//! Domain error types.
//!
//! These errors represent invalid geodata. They are distinct from I/O and
//! map errors.

use super::InvalidLineId;

/// Domain-level errors for validating geodata.
#[derive(Debug, Clone, thiserror::Error)]
pub enum DomainError {
    /// A station feature has an empty name
    #[error("station {index} on line {line} has no name")]
    UnnamedStation { line: String, index: usize },

    /// A dataset's line id is malformed
    #[error(transparent)]
    LineId(#[from] InvalidLineId),

    /// The same line appears twice in a gazetteer
    #[error("line {0} appears more than once")]
    DuplicateLine(String),
}
