//! # Bloom Index
//!
//! Block height → [`BlockFilter`]. Filters are added eagerly when a block is
//! finalized, or built on first query for blocks that arrived another way.
//! A filter is never mutated once stored.

use std::collections::HashMap;

use parking_lot::RwLock;
use shared_types::{Block, TxId};
use tracing::debug;

use crate::domain::{BlockFilter, BloomConfig};
use crate::error::FilterError;

/// Per-block filter store. Readers share, builders take the write lock.
#[derive(Debug, Default)]
pub struct BloomIndex {
    config: BloomConfig,
    filters: RwLock<HashMap<u64, BlockFilter>>,
}

impl BloomIndex {
    /// Empty index.
    ///
    /// # Errors
    ///
    /// `InvalidParameters` if `config` fails validation.
    pub fn new(config: BloomConfig) -> Result<Self, FilterError> {
        config.validate()?;
        Ok(Self {
            config,
            filters: RwLock::new(HashMap::new()),
        })
    }

    /// Filter parameters in use.
    pub fn config(&self) -> &BloomConfig {
        &self.config
    }

    /// Build and store the filter for a newly finalized block.
    pub fn insert_block(&self, block: &Block) {
        let filter = BlockFilter::build_validated(block, &self.config);
        debug!(
            index = block.index(),
            txs = filter.transaction_count,
            "bloom filter built"
        );
        self.filters.write().insert(block.index(), filter);
    }

    /// Filter for `block`, built now if missing or built from a different block.
    pub fn filter_for(&self, block: &Block) -> BlockFilter {
        let hash = block.block_hash();
        if let Some(existing) = self.filters.read().get(&block.index()) {
            if existing.block_hash == hash {
                return existing.clone();
            }
        }
        let filter = BlockFilter::build_validated(block, &self.config);
        self.filters.write().insert(block.index(), filter.clone());
        filter
    }

    /// Bloom answer for `tx_id` in `block`, building the filter lazily.
    pub fn might_contain(&self, block: &Block, tx_id: &TxId) -> bool {
        let hash = block.block_hash();
        if let Some(existing) = self.filters.read().get(&block.index()) {
            if existing.block_hash == hash {
                return existing.might_contain(tx_id);
            }
        }
        let filter = BlockFilter::build_validated(block, &self.config);
        let answer = filter.might_contain(tx_id);
        debug!(index = block.index(), "bloom filter built lazily");
        self.filters.write().insert(block.index(), filter);
        answer
    }

    /// Stored filter for `index`, if any.
    pub fn get(&self, index: u64) -> Option<BlockFilter> {
        self.filters.read().get(&index).cloned()
    }

    /// True if a filter is stored for `index`.
    pub fn contains_block(&self, index: u64) -> bool {
        self.filters.read().contains_key(&index)
    }

    /// Number of stored filters.
    pub fn len(&self) -> usize {
        self.filters.read().len()
    }

    /// True if no filter has been built.
    pub fn is_empty(&self) -> bool {
        self.filters.read().is_empty()
    }
}
