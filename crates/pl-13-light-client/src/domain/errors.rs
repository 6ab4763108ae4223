//! # Domain Errors

use shared_types::TxId;
use thiserror::Error;

/// Light client error types.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LightClientError {
    /// The full node has no block at this height.
    #[error("block {index} not found")]
    BlockNotFound {
        /// Requested height
        index: u64,
    },

    /// A proof was demanded but could not be verified.
    #[error("no valid inclusion proof for {tx_id} in block {index}")]
    InvalidProof {
        /// Requested height
        index: u64,
        /// Transaction checked
        tx_id: TxId,
    },
}
