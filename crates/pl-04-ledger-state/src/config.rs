//! Ledger configuration.

use serde::{Deserialize, Serialize};
use shared_types::BLOCK_REWARD;

/// Transactions a block may carry under the default policy.
pub const BLOCK_TX_CAP: usize = 4;

/// Per-block transaction count rule, passed explicitly into validation.
///
/// Both variants carry the cap so tests and benches can shrink it; nodes run
/// with [`BLOCK_TX_CAP`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "mode", content = "cap", rename_all = "snake_case")]
pub enum BlockSizePolicy {
    /// Up to `cap` transactions.
    AtMost(usize),
    /// Non-genesis blocks must be full (`cap`) or empty.
    Exactly(usize),
}

impl BlockSizePolicy {
    /// `Exactly(BLOCK_TX_CAP)`: non-genesis blocks carry a full batch or none.
    pub fn strict() -> Self {
        Self::Exactly(BLOCK_TX_CAP)
    }

    /// The transaction cap.
    pub fn cap(&self) -> usize {
        match self {
            Self::AtMost(cap) | Self::Exactly(cap) => *cap,
        }
    }
}

impl Default for BlockSizePolicy {
    fn default() -> Self {
        Self::AtMost(BLOCK_TX_CAP)
    }
}

/// Ledger configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LedgerConfig {
    /// Required leading zero hex digits of a sealed header.
    pub difficulty: u32,
    /// Reward minted to the producer of each applied block.
    pub block_reward: u64,
    /// Transaction count rule.
    pub block_size: BlockSizePolicy,
    /// Reject blocks whose seal does not meet `difficulty`.
    pub enforce_seal: bool,
}

impl Default for LedgerConfig {
    fn default() -> Self {
        Self {
            difficulty: 4,
            block_reward: BLOCK_REWARD,
            block_size: BlockSizePolicy::default(),
            enforce_seal: false,
        }
    }
}

impl LedgerConfig {
    /// Low difficulty so tests can seal quickly.
    pub fn for_testing() -> Self {
        Self {
            difficulty: 1,
            ..Self::default()
        }
    }
}
