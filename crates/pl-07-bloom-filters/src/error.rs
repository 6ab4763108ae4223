//! Error types for the Bloom filter subsystem

use thiserror::Error;

/// Errors that can occur in the Bloom filter subsystem
#[derive(Debug, Error)]
pub enum FilterError {
    /// No block at this height.
    #[error("Block not found: {index}")]
    BlockNotFound {
        /// Requested height.
        index: u64,
    },

    /// m or k out of range.
    #[error("Invalid filter parameters: {0}")]
    InvalidParameters(String),

    /// Filter bytes could not be encoded or decoded.
    #[error("Serialization error: {0}")]
    SerializationError(String),
}
