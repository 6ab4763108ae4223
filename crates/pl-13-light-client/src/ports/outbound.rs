//! # Outbound Ports
//!
//! What the light client needs from a full node.

use std::sync::Arc;

use pl_03_merkle_commitment::MerkleProof;
use shared_types::{BlockHeader, TxId};

/// Full node connection - outbound port.
///
/// Every method answers `None` when the node has no block at `index`.
pub trait FullNodeConnection: Send + Sync {
    /// Header of the block at `index`.
    fn block_header(&self, index: u64) -> Option<BlockHeader>;

    /// Bloom filter answer for `tx_id` in block `index`.
    fn might_contain_tx(&self, index: u64, tx_id: &TxId) -> Option<bool>;

    /// Merkle proof for `tx_id` in block `index`. `None` also when the
    /// transaction is not in the block.
    fn merkle_proof(&self, index: u64, tx_id: &TxId) -> Option<MerkleProof>;
}

impl<T: FullNodeConnection + ?Sized> FullNodeConnection for Arc<T> {
    fn block_header(&self, index: u64) -> Option<BlockHeader> {
        (**self).block_header(index)
    }

    fn might_contain_tx(&self, index: u64, tx_id: &TxId) -> Option<bool> {
        (**self).might_contain_tx(index, tx_id)
    }

    fn merkle_proof(&self, index: u64, tx_id: &TxId) -> Option<MerkleProof> {
        (**self).merkle_proof(index, tx_id)
    }
}
