//! # Error Types
//!
//! Failures while encoding or decoding ledger structures.

use thiserror::Error;

/// Errors raised by the lean block codec and identifier parsing.
#[derive(Debug, Error)]
pub enum CodecError {
    /// JSON encoding or decoding failed.
    #[error("JSON codec error: {0}")]
    Json(#[from] serde_json::Error),

    /// A hex string could not be decoded into the expected width.
    #[error("Invalid hex: {0}")]
    InvalidHex(String),

    /// A witness refers to a transaction the block does not contain.
    #[error("Witness for unknown transaction {tx_id}")]
    UnknownWitness {
        /// Hex transaction id named by the orphan witness.
        tx_id: String,
    },
}
