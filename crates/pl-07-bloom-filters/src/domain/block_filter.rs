//! Block-level Bloom filter

use serde::{Deserialize, Serialize};
use shared_types::{Block, Hash, TxId};

use super::bloom_filter::BloomFilter;
use super::config::BloomConfig;
use crate::error::FilterError;

/// Bloom filter over the transaction ids of one block
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlockFilter {
    /// Hash of the block the filter was built from
    pub block_hash: Hash,
    /// Height of the block
    pub block_index: u64,
    /// Filter over raw `tx_id` bytes
    pub filter: BloomFilter,
    /// Number of transactions in the block
    pub transaction_count: usize,
}

impl BlockFilter {
    /// Insert every transaction id of `block` into a fresh filter
    pub fn build(block: &Block, config: &BloomConfig) -> Result<Self, FilterError> {
        config.validate()?;
        Ok(Self::build_validated(block, config))
    }

    pub(crate) fn build_validated(block: &Block, config: &BloomConfig) -> Self {
        let mut filter = BloomFilter::empty(config);
        for tx in &block.transactions {
            filter.insert(tx.tx_id().as_bytes());
        }
        Self {
            block_hash: block.block_hash(),
            block_index: block.index(),
            filter,
            transaction_count: block.transactions.len(),
        }
    }

    /// True if `tx_id` might be in the block
    pub fn might_contain(&self, tx_id: &TxId) -> bool {
        self.filter.contains(tx_id.as_bytes())
    }
}
