//! Merkle tree and proof types.

pub mod proof;
pub mod tree;

pub use proof::{MerkleProof, ProofStep, Side};
pub use tree::{empty_root, leaf_hash, node_hash, MerkleTree};
