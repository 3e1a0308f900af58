//! Error taxonomy for checked access and container operations.

use thiserror::Error;

use crate::value::Kind;

/// Error returned by typed accessors, subscripts, and container operations.
///
/// Every variant is a recoverable caller-side condition. The crate never
/// retries and never suppresses: a failed operation leaves the value
/// untouched and hands the error straight to the caller.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DynamicError {
    /// The value does not currently hold the variant the operation needs.
    #[error("invalid access: expected {expected}, value holds {actual}")]
    InvalidAccess { expected: Kind, actual: Kind },

    /// Bounds-checked array access past the end.
    #[error("index {index} out of range for array of length {len}")]
    IndexOutOfRange { index: usize, len: usize },

    /// Lookup of a key that addresses no entry: a missing Object key, or
    /// a string key that does not parse as an Array index.
    #[error("key `{0}` not found")]
    KeyNotFound(String),
}

impl DynamicError {
    pub(crate) fn invalid_access(expected: Kind, actual: Kind) -> Self {
        Self::InvalidAccess { expected, actual }
    }
}
