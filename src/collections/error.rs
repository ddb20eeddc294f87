//! Error types for collection operations.
//!
//! Reads never fail: a missing key degrades to `None` or a caller default.
//! Only JSON encoding and paired-sequence construction can error.

use thiserror::Error;

/// Result type alias for collection operations
pub type Result<T> = std::result::Result<T, CollectionError>;

/// Main error type for all collection operations
#[derive(Error, Debug)]
pub enum CollectionError {
    /// A value could not be encoded as JSON
    #[error("JSON serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// The encoded document nests deeper than the configured limit
    #[error("Maximum JSON depth exceeded: document has depth {depth}, limit is {limit}")]
    DepthExceeded {
        /// Nesting depth of the document
        depth: usize,
        /// Configured maximum depth
        limit: usize,
    },

    /// Key and value sequences passed to `combine` differ in length
    #[error("Cannot combine {keys} keys with {values} values")]
    LengthMismatch {
        /// Number of keys supplied
        keys: usize,
        /// Number of values supplied
        values: usize,
    },
}

impl CollectionError {
    /// Whether this error came from the JSON encoder or its depth guard.
    pub fn is_serialization(&self) -> bool {
        matches!(
            self,
            CollectionError::Serialization(_) | CollectionError::DepthExceeded { .. }
        )
    }
}
