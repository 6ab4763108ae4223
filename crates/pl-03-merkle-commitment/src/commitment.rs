//! Commitment operations over transaction sequences.

use shared_crypto::Hash;
use shared_types::{Transaction, TxId};

use crate::domain::{MerkleProof, MerkleTree};

fn tree_of(transactions: &[Transaction]) -> MerkleTree {
    let ids: Vec<TxId> = transactions.iter().map(Transaction::tx_id).collect();
    MerkleTree::build(&ids)
}

/// Merkle root over the ids of `transactions`.
pub fn merkle_root(transactions: &[Transaction]) -> Hash {
    tree_of(transactions).root()
}

/// Inclusion proof for `target`. Empty if `target` is absent or the set has a
/// single member.
pub fn merkle_proof(transactions: &[Transaction], target: &TxId) -> MerkleProof {
    tree_of(transactions).proof_for(target)
}

/// True if `proof` links `target` to `root`.
pub fn verify_proof(root: &Hash, target: &TxId, proof: &MerkleProof) -> bool {
    proof.verify(root, target)
}
