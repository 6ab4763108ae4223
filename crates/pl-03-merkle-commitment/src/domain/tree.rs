//! # Merkle Tree
//!
//! Every level is materialized so any leaf's proof can be read off without
//! rehashing.

use shared_crypto::{sha256, Hash, Sha256Hasher};
use shared_types::TxId;

use super::proof::{MerkleProof, ProofStep};

const LEAF_PREFIX: u8 = 0x00;
const NODE_PREFIX: u8 = 0x01;

/// Root of a tree with no leaves: SHA-256 of empty input.
pub fn empty_root() -> Hash {
    sha256(b"")
}

/// Domain-separated leaf hash of a transaction id.
pub fn leaf_hash(tx_id: &TxId) -> Hash {
    let mut hasher = Sha256Hasher::new();
    hasher.update(&[LEAF_PREFIX]).update(tx_id.as_bytes());
    hasher.finalize()
}

/// Domain-separated inner node hash.
pub fn node_hash(left: &Hash, right: &Hash) -> Hash {
    let mut hasher = Sha256Hasher::new();
    hasher.update(&[NODE_PREFIX]).update(left).update(right);
    hasher.finalize()
}

/// Fully built tree. `levels[0]` are the leaves, the last level is the root.
#[derive(Debug, Clone)]
pub struct MerkleTree {
    leaves: Vec<TxId>,
    levels: Vec<Vec<Hash>>,
}

impl MerkleTree {
    /// Build the tree over `tx_ids` in order.
    pub fn build(tx_ids: &[TxId]) -> Self {
        let mut levels = Vec::new();
        if !tx_ids.is_empty() {
            let mut level: Vec<Hash> = tx_ids.iter().map(leaf_hash).collect();
            while level.len() > 1 {
                let next = level
                    .chunks(2)
                    .map(|pair| {
                        let left = &pair[0];
                        let right = pair.get(1).unwrap_or(left); // duplicate last if odd
                        node_hash(left, right)
                    })
                    .collect();
                levels.push(level);
                level = next;
            }
            levels.push(level);
        }
        Self {
            leaves: tx_ids.to_vec(),
            levels,
        }
    }

    /// Root hash.
    pub fn root(&self) -> Hash {
        self.levels
            .last()
            .and_then(|top| top.first().copied())
            .unwrap_or_else(empty_root)
    }

    /// Number of leaves.
    pub fn leaf_count(&self) -> usize {
        self.leaves.len()
    }

    /// Position of the first leaf equal to `tx_id`.
    pub fn position(&self, tx_id: &TxId) -> Option<usize> {
        self.leaves.iter().position(|id| id == tx_id)
    }

    /// Proof for the leaf at `index`, `None` if out of range.
    pub fn proof_at(&self, index: usize) -> Option<MerkleProof> {
        if index >= self.leaves.len() {
            return None;
        }
        let mut steps = Vec::new();
        let mut position = index;
        // The root level contributes no sibling.
        for level in &self.levels[..self.levels.len() - 1] {
            let step = if position % 2 == 0 {
                let sibling = level.get(position + 1).unwrap_or(&level[position]);
                ProofStep::right(*sibling)
            } else {
                ProofStep::left(level[position - 1])
            };
            steps.push(step);
            position /= 2;
        }
        Some(MerkleProof::new(steps))
    }

    /// Proof for `tx_id`; empty when the id is not a leaf.
    pub fn proof_for(&self, tx_id: &TxId) -> MerkleProof {
        self.position(tx_id)
            .and_then(|index| self.proof_at(index))
            .unwrap_or_default()
    }
}
