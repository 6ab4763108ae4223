//! Configuration types for block production

use serde::Deserialize;

use crate::error::{BlockProductionError, Result};

/// Runtime configuration for the proof-of-work sealer
#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct SealerConfig {
    /// Upper bound on hashes tried per seal
    pub max_attempts: u64,

    /// Worker threads; 1 selects the sequential scan
    pub threads: usize,
}

impl Default for SealerConfig {
    fn default() -> Self {
        Self {
            max_attempts: 10_000_000,
            threads: 1,
        }
    }
}

impl SealerConfig {
    /// One worker per logical CPU.
    pub fn parallel() -> Self {
        Self {
            threads: num_cpus::get().max(1),
            ..Self::default()
        }
    }

    /// Small bound so exhaustion tests finish quickly.
    pub fn for_testing() -> Self {
        Self {
            max_attempts: 100_000,
            threads: 1,
        }
    }

    /// Reject configurations the sealer cannot run.
    pub fn validate(&self) -> Result<()> {
        if self.max_attempts == 0 {
            return Err(BlockProductionError::InvalidConfig(
                "max_attempts must be at least 1".into(),
            ));
        }
        if self.threads == 0 {
            return Err(BlockProductionError::InvalidConfig(
                "threads must be at least 1".into(),
            ));
        }
        Ok(())
    }
}
