//! Error types for path operations

use std::collections::TryReserveError;
use thiserror::Error;

/// The error type for path operations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PathError {
    /// The output buffer for a `try_*` operation could not be reserved
    #[error("Allocation failed: could not reserve {requested} bytes for path output")]
    AllocationFailed { requested: usize },

    /// Path contains a NUL byte, which paths are never allowed to carry
    #[error("Embedded NUL byte at offset {position} in path: {path:?}")]
    EmbeddedNul { path: String, position: usize },
}

impl PathError {
    pub(crate) fn allocation(requested: usize) -> impl FnOnce(TryReserveError) -> PathError {
        move |_| PathError::AllocationFailed { requested }
    }
}

/// Result type for path operations
pub type Result<T> = std::result::Result<T, PathError>;
