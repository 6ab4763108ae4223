//! Candidate block assembly.

use pl_03_merkle_commitment::merkle_root;
use shared_types::{Block, BlockHeader, Transaction};

/// Unsealed successor of `prev` carrying `batch` in draw order.
///
/// The header commits to the batch through its Merkle root; nonce starts at 0
/// and the accounting fields stay empty until the ledger applies the block.
pub fn build_candidate(
    prev: &Block,
    producer: &str,
    batch: Vec<Transaction>,
    timestamp: u64,
) -> Block {
    let header = BlockHeader {
        index: prev.index() + 1,
        prev_hash: prev.block_hash(),
        merkle_root: merkle_root(&batch),
        timestamp,
        nonce: 0,
        producer: producer.to_string(),
        block_reward: None,
        burned_fees: None,
    };
    Block::new(header, batch)
}

/// [`build_candidate`] stamped with the current time.
pub fn build_candidate_now(prev: &Block, producer: &str, batch: Vec<Transaction>) -> Block {
    let now = u64::try_from(chrono::Utc::now().timestamp()).unwrap_or(0);
    build_candidate(prev, producer, batch, now)
}
