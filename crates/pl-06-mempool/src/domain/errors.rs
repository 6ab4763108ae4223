//! Mempool error types.

use shared_types::TxId;
use thiserror::Error;

/// Reasons a transaction is refused admission.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MempoolError {
    /// Transaction already exists in the pool.
    #[error("duplicate transaction {0}")]
    DuplicateTransaction(TxId),

    /// Sender cannot cover amount plus fees.
    #[error("insufficient balance for {tx_id}: required {required}, available {available}")]
    InsufficientBalance {
        /// Rejected transaction.
        tx_id: TxId,
        /// `amount + base_fee + tip`.
        required: u64,
        /// Sender balance at admission.
        available: u64,
    },

    /// `amount + base_fee + tip` does not fit in `u64`.
    #[error("total cost of {0} overflows")]
    CostOverflow(TxId),

    /// Pool has reached maximum capacity.
    #[error("mempool full (capacity {capacity})")]
    PoolFull {
        /// Configured capacity.
        capacity: usize,
    },
}
