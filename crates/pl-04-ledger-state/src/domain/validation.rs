//! Structural validation of a block against the current chain tip.

use pl_03_merkle_commitment::merkle_root;
use shared_crypto::leading_zero_nibbles;
use shared_types::Block;

use super::errors::StructuralError;
use crate::config::BlockSizePolicy;

/// Checks shape and sequencing only; balances and signatures are checked
/// during application.
///
/// `seal_difficulty` is `Some(d)` when the header must carry `d` leading zero
/// hex digits.
pub fn validate_structure(
    block: &Block,
    tip: Option<&Block>,
    policy: BlockSizePolicy,
    seal_difficulty: Option<u32>,
) -> Result<(), StructuralError> {
    let header = &block.header;

    if header.producer.is_empty() {
        return Err(StructuralError::MalformedHeader(
            "producer address is empty".into(),
        ));
    }

    if let Some(tip) = tip {
        let expected = tip.index() + 1;
        if header.index != expected {
            return Err(StructuralError::IndexMismatch {
                expected,
                actual: header.index,
            });
        }
        if header.prev_hash != tip.block_hash() {
            return Err(StructuralError::PrevHashMismatch {
                tip_index: tip.index(),
            });
        }
    }

    let count = block.transactions.len();
    let cap = policy.cap();
    if count > cap {
        return Err(StructuralError::TooManyTransactions { count, cap });
    }
    if let BlockSizePolicy::Exactly(cap) = policy {
        if header.index > 0 && count != 0 && count != cap {
            return Err(StructuralError::WrongTransactionCount { count, cap });
        }
    }

    if header.merkle_root != merkle_root(&block.transactions) {
        return Err(StructuralError::MerkleRootMismatch);
    }

    if let Some(required) = seal_difficulty {
        let actual = leading_zero_nibbles(&header.seal_hash());
        if header.index > 0 && actual < required {
            return Err(StructuralError::InsufficientWork { required, actual });
        }
    }

    Ok(())
}
