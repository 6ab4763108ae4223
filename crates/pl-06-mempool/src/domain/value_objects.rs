//! Mempool configuration and status snapshots.

use serde::{Deserialize, Serialize};

/// Mempool configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MempoolConfig {
    /// Maximum number of queued transactions.
    pub max_transactions: usize,
    /// Batch size used when the caller does not pass one.
    pub default_batch_size: usize,
}

impl Default for MempoolConfig {
    fn default() -> Self {
        Self {
            max_transactions: 5000,
            default_batch_size: 4,
        }
    }
}

impl MempoolConfig {
    /// Small pool for tests.
    pub fn for_testing() -> Self {
        Self {
            max_transactions: 16,
            default_batch_size: 4,
        }
    }
}

/// Point-in-time view of the pool.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MempoolStatus {
    /// Queued transactions.
    pub pending: usize,
    /// Configured capacity.
    pub capacity: usize,
}
