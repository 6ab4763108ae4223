//! # Merkle Commitment Subsystem (pl-03)
//!
//! Binary SHA-256 hash tree over transaction identities. Produces the root a
//! block header commits to, inclusion proofs for single transactions, and the
//! verifier light clients run against a header.
//!
//! ## Tree Shape
//!
//! ```text
//!                 root
//!              /        \
//!          n(ab)        n(cc)        <- odd level: c paired with itself
//!          /   \         /  \
//!       l(a)  l(b)    l(c)  l(c)
//! ```
//!
//! ## Hashing Convention
//!
//! | Node | Preimage |
//! |------|----------|
//! | leaf | `0x00 ‖ tx_id` |
//! | inner | `0x01 ‖ left ‖ right` |
//! | empty tree | `""` (SHA-256 of empty input, never all-zero) |
//!
//! The prefixes keep a leaf from ever being confused with an inner node.
//!
//! ## Edge Cases
//!
//! - One leaf: root is that leaf hash, proof is empty.
//! - Target absent: proof is empty, and it fails verification.

#![warn(missing_docs)]

pub mod commitment;
pub mod domain;

pub use commitment::{merkle_proof, merkle_root, verify_proof};
pub use domain::{empty_root, leaf_hash, node_hash, MerkleProof, MerkleTree, ProofStep, Side};
