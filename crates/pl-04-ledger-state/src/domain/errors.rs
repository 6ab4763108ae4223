//! Ledger error types.

use shared_types::TxId;
use thiserror::Error;

/// A block is not shaped or sequenced correctly.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StructuralError {
    #[error("index mismatch: expected {expected}, got {actual}")]
    IndexMismatch { expected: u64, actual: u64 },

    #[error("previous hash does not match the chain tip at index {tip_index}")]
    PrevHashMismatch { tip_index: u64 },

    #[error("too many transactions: {count} > cap {cap}")]
    TooManyTransactions { count: usize, cap: usize },

    #[error("block must carry exactly {cap} transactions (or none), got {count}")]
    WrongTransactionCount { count: usize, cap: usize },

    #[error("merkle root does not commit to the block's transactions")]
    MerkleRootMismatch,

    #[error("malformed header: {0}")]
    MalformedHeader(String),

    #[error("seal has {actual} leading zero digits, difficulty is {required}")]
    InsufficientWork { required: u32, actual: u32 },
}

/// Why a block could not be added.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LedgerError {
    #[error("structural validation failed: {0}")]
    Structural(#[from] StructuralError),

    #[error("invalid signature on transaction {tx_id}")]
    InvalidSignature { tx_id: TxId },

    #[error("insufficient funds for {tx_id}: required {required}, available {available}")]
    InsufficientFunds {
        tx_id: TxId,
        required: u64,
        available: u64,
    },

    #[error("balance arithmetic overflow")]
    BalanceOverflow,

    #[error("genesis block already exists")]
    GenesisExists,

    #[error("chain is empty")]
    ChainEmpty,

    #[error("supply conservation violated: expected {expected}, found {actual}")]
    ConservationViolated { expected: u128, actual: u128 },
}
