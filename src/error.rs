//! Error types for tree construction.
//!
//! Every error is a precondition violation surfaced immediately to the
//! caller; there are no retries and no degraded mode.

use thiserror::Error;

/// Construction error taxonomy
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TreeError {
    /// Construction received zero or both of {paths, tree}.
    #[error("invalid construction arguments: {0}")]
    InvalidConstruction(String),

    /// An element of a path/identifier collection is malformed.
    ///
    /// Raised during pre-validation, before any part of the tree is built.
    #[error("invalid path entry at index {index}: {reason}")]
    InvalidEntry { index: usize, reason: String },

    /// A supplied children collection contains a value that is not a valid
    /// node record.
    #[error("child of {label:?} is not a valid node record: {reason}")]
    ChildTypeMismatch { label: String, reason: String },
}
