//! Bloom filter configuration and validation

use crate::error::FilterError;
use serde::{Deserialize, Serialize};

/// Largest filter accepted, in bits.
pub const MAX_SIZE_BITS: usize = 1 << 20;

/// Bloom filter configuration
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BloomConfig {
    /// Filter size in bits (m)
    pub size_bits: usize,
    /// Number of hash functions (k)
    pub hash_count: usize,
}

impl Default for BloomConfig {
    fn default() -> Self {
        Self {
            size_bits: 2048,
            hash_count: 3,
        }
    }
}

impl BloomConfig {
    /// Create a validated configuration
    pub fn new(size_bits: usize, hash_count: usize) -> Result<Self, FilterError> {
        let config = Self {
            size_bits,
            hash_count,
        };
        config.validate()?;
        Ok(config)
    }

    /// Tiny filter so tests can provoke false positives.
    pub fn for_testing() -> Self {
        Self {
            size_bits: 64,
            hash_count: 2,
        }
    }

    /// Check ranges.
    pub fn validate(&self) -> Result<(), FilterError> {
        if self.size_bits == 0 || self.size_bits > MAX_SIZE_BITS {
            return Err(FilterError::InvalidParameters(format!(
                "size_bits must be in 1..={MAX_SIZE_BITS}, got {}",
                self.size_bits
            )));
        }
        if self.hash_count == 0 || self.hash_count > 32 {
            return Err(FilterError::InvalidParameters(format!(
                "hash_count must be in 1..=32, got {}",
                self.hash_count
            )));
        }
        Ok(())
    }
}
