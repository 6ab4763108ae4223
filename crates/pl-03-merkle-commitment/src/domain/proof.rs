//! Inclusion proof value objects.

use serde::{Deserialize, Serialize};
use serde_with::{hex::Hex, serde_as};
use shared_crypto::Hash;

use super::tree::{leaf_hash, node_hash};
use shared_types::TxId;

/// Which side of the running hash the sibling sits on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    /// `hash(sibling ‖ current)`
    Left,
    /// `hash(current ‖ sibling)`
    Right,
}

/// One level of an inclusion proof.
#[serde_as]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProofStep {
    /// Sibling position.
    pub side: Side,
    /// Sibling hash.
    #[serde_as(as = "Hex")]
    pub sibling: Hash,
}

impl ProofStep {
    /// Sibling concatenated before the running hash.
    pub fn left(sibling: Hash) -> Self {
        Self {
            side: Side::Left,
            sibling,
        }
    }

    /// Sibling concatenated after the running hash.
    pub fn right(sibling: Hash) -> Self {
        Self {
            side: Side::Right,
            sibling,
        }
    }

    /// Fold this step into `current`.
    pub fn apply(&self, current: &Hash) -> Hash {
        match self.side {
            Side::Left => node_hash(&self.sibling, current),
            Side::Right => node_hash(current, &self.sibling),
        }
    }
}

/// Ordered leaf-to-root sibling path.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MerkleProof {
    steps: Vec<ProofStep>,
}

impl MerkleProof {
    /// Wrap a step list.
    pub fn new(steps: Vec<ProofStep>) -> Self {
        Self { steps }
    }

    /// Proof with no steps (absent target or single-leaf tree).
    pub fn empty() -> Self {
        Self::default()
    }

    /// Steps from leaf to root.
    pub fn steps(&self) -> &[ProofStep] {
        &self.steps
    }

    /// Number of steps.
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    /// True for the empty proof.
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Root implied by this proof for `tx_id`.
    pub fn compute_root(&self, tx_id: &TxId) -> Hash {
        self.steps
            .iter()
            .fold(leaf_hash(tx_id), |current, step| step.apply(&current))
    }

    /// True if the proof links `tx_id` to `root`. An empty proof holds only
    /// when the leaf hash itself is the root.
    pub fn verify(&self, root: &Hash, tx_id: &TxId) -> bool {
        self.compute_root(tx_id) == *root
    }
}
