//! # Light Client Configuration

use serde::{Deserialize, Serialize};

/// Light client configuration.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct LightClientConfig {
    /// Verdicts remembered per (block, transaction). Blocks never change once
    /// appended, so cached verdicts stay valid. 0 disables the cache.
    pub verdict_cache_size: usize,
}

impl Default for LightClientConfig {
    fn default() -> Self {
        Self {
            verdict_cache_size: 1024,
        }
    }
}

impl LightClientConfig {
    /// Tiny cache so eviction is exercised.
    pub fn for_testing() -> Self {
        Self {
            verdict_cache_size: 4,
        }
    }
}
