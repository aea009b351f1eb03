//! Error types for trichroma.

use thiserror::Error;

/// Unified error type for all trichroma operations.
///
/// Two tiers of failure exist in this system: errors in this enum cover
/// misuse and broken invariants (bad vertex ids, unreadable files, a degree
/// with no bucket). Failing to find a 3-coloring is not an error — solvers
/// report that outcome as an ordinary boolean.
#[derive(Error, Debug)]
pub enum TrichromaError {
    /// A vertex id outside `[0, n)` was passed to edge construction.
    #[error("vertex id {id} out of range for graph with {len} vertices")]
    VertexOutOfRange { id: usize, len: usize },

    /// Input validation errors (malformed edge-list content, bad parameters)
    #[error("validation error: {0}")]
    Validation(String),

    /// I/O errors (file reading, DOT export)
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// An internal invariant was violated; indicates a programming error,
    /// not a runtime condition.
    #[error("internal invariant violated: {0}")]
    Invariant(String),
}

impl TrichromaError {
    /// Creates a validation error.
    pub fn validation(message: impl Into<String>) -> Self {
        TrichromaError::Validation(message.into())
    }

    /// Creates an internal-invariant error.
    pub fn invariant(message: impl Into<String>) -> Self {
        TrichromaError::Invariant(message.into())
    }
}

/// Result type alias for trichroma operations.
pub type Result<T> = std::result::Result<T, TrichromaError>;
