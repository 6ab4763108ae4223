//! # Node Errors

use pl_04_ledger_state::LedgerError;
use pl_06_mempool::MempoolError;
use pl_07_bloom_filters::FilterError;
use pl_17_block_production::BlockProductionError;
use thiserror::Error;

/// Failures surfaced by [`FullNode`](crate::FullNode) operations.
#[derive(Debug, Error)]
pub enum NodeError {
    /// Transaction refused at admission.
    #[error("mempool: {0}")]
    Mempool(#[from] MempoolError),

    /// Block refused by the ledger. The drawn batch is not re-queued.
    #[error("ledger: {0}")]
    Ledger(#[from] LedgerError),

    /// Sealing failed or the sealer is misconfigured.
    #[error("block production: {0}")]
    Production(#[from] BlockProductionError),

    /// Bloom filter parameters rejected.
    #[error("bloom filter: {0}")]
    Filter(#[from] FilterError),

    /// Strict block size is in force and the mempool holds a partial batch.
    /// The queued transactions are left in place.
    #[error("waiting for a full batch: {pending} of {cap} transactions queued")]
    AwaitingFullBatch {
        /// Transactions currently queued.
        pending: usize,
        /// Transactions a block must carry.
        cap: usize,
    },

    /// No genesis block yet.
    #[error("chain has no genesis block")]
    ChainEmpty,
}
