//! # Blocks
//!
//! A [`Block`] is a [`BlockHeader`] plus an ordered transaction list. The
//! block hash is the header hash only; transactions enter it through
//! `merkle_root`.
//!
//! Header preimage (sorted keys, accounting fields only once stamped):
//!
//! ```text
//! {"block_reward":50,"burned_fees":2,"index":1,"merkle_root":"..",
//!  "nonce":4711,"prev_hash":"..","producer":"miner","timestamp":1700000000}
//! ```

use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use serde_with::{hex::Hex, serde_as};
use shared_crypto::{to_hex, Hash};

use crate::canonical::canonical_hash;
use crate::{Address, Transaction, TxId};

/// Sealed header of a block.
#[serde_as]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlockHeader {
    /// Height; genesis is 0.
    pub index: u64,
    /// Hash of the previous block's header.
    #[serde_as(as = "Hex")]
    pub prev_hash: Hash,
    /// Merkle commitment over the block's transaction ids.
    #[serde_as(as = "Hex")]
    pub merkle_root: Hash,
    /// Unix seconds at assembly.
    pub timestamp: u64,
    /// Proof-of-work nonce. Only the sealer changes it.
    pub nonce: u64,
    /// Account credited with reward and tips.
    pub producer: Address,
    /// Minted reward, set when the block is applied.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub block_reward: Option<u64>,
    /// Burned base fees, set when the block is applied.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub burned_fees: Option<u64>,
}

impl BlockHeader {
    /// Canonical JSON the header hash is taken over.
    pub fn canonical_value(&self) -> Value {
        let mut value = json!({
            "index": self.index,
            "prev_hash": to_hex(&self.prev_hash),
            "merkle_root": to_hex(&self.merkle_root),
            "timestamp": self.timestamp,
            "nonce": self.nonce,
            "producer": self.producer,
        });
        if let Value::Object(map) = &mut value {
            if let Some(reward) = self.block_reward {
                map.insert("block_reward".into(), json!(reward));
            }
            if let Some(burned) = self.burned_fees {
                map.insert("burned_fees".into(), json!(burned));
            }
        }
        value
    }

    /// Header hash.
    pub fn hash(&self) -> Hash {
        canonical_hash(&self.canonical_value())
    }

    /// Hash of the header as the sealer saw it, i.e. without the
    /// accounting fields. Equals [`hash`](Self::hash) before application.
    pub fn seal_hash(&self) -> Hash {
        let mut unstamped = self.clone();
        unstamped.block_reward = None;
        unstamped.burned_fees = None;
        unstamped.hash()
    }

    /// True once the ledger has stamped the accounting fields.
    pub fn is_applied(&self) -> bool {
        self.block_reward.is_some() && self.burned_fees.is_some()
    }
}

/// Header plus ordered transactions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Block {
    /// Block header.
    pub header: BlockHeader,
    /// Transactions in application order.
    pub transactions: Vec<Transaction>,
}

impl Block {
    /// Assemble a block.
    pub fn new(header: BlockHeader, transactions: Vec<Transaction>) -> Self {
        Self {
            header,
            transactions,
        }
    }

    /// Header hash.
    pub fn block_hash(&self) -> Hash {
        self.header.hash()
    }

    /// Height.
    pub fn index(&self) -> u64 {
        self.header.index
    }

    /// Transaction ids in order.
    pub fn tx_ids(&self) -> Vec<TxId> {
        self.transactions.iter().map(Transaction::tx_id).collect()
    }

    /// True if the block contains `tx_id`.
    pub fn contains_tx(&self, tx_id: &TxId) -> bool {
        self.transactions.iter().any(|tx| tx.tx_id() == *tx_id)
    }
}
