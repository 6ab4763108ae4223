//! # Node Configuration
//!
//! Unified configuration for all subsystems plus the simulation knobs.
//!
//! ## Environment Overrides
//!
//! | Variable | Field |
//! |----------|-------|
//! | `PL_DIFFICULTY` | `ledger.difficulty` |
//! | `PL_BLOCKS` | `simulation.blocks` |
//! | `PL_PRODUCER` | `simulation.producer` |
//! | `PL_SEED` | `simulation.seed` |
//! | `PL_SEAL_THREADS` | `sealer.threads` (`0` = one per CPU) |
//! | `PL_MAX_ATTEMPTS` | `sealer.max_attempts` |

use std::str::FromStr;

use pl_04_ledger_state::LedgerConfig;
use pl_06_mempool::MempoolConfig;
use pl_07_bloom_filters::BloomConfig;
use pl_13_light_client::LightClientConfig;
use pl_17_block_production::SealerConfig;
use serde::Deserialize;
use tracing::{info, warn};

use crate::error::NodeError;

/// Complete node configuration.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct NodeConfig {
    /// Ledger rules.
    pub ledger: LedgerConfig,
    /// Mempool limits.
    pub mempool: MempoolConfig,
    /// Proof-of-work search bounds.
    pub sealer: SealerConfig,
    /// Per-block Bloom filter parameters.
    pub bloom: BloomConfig,
    /// Light-client cache.
    pub light_client: LightClientConfig,
    /// Simulation knobs used by the binary.
    pub simulation: SimulationConfig,
}

impl NodeConfig {
    /// Fast settings for tests: difficulty 1, small pools.
    pub fn for_testing() -> Self {
        Self {
            ledger: LedgerConfig::for_testing(),
            mempool: MempoolConfig::for_testing(),
            sealer: SealerConfig::for_testing(),
            bloom: BloomConfig::default(),
            light_client: LightClientConfig::for_testing(),
            simulation: SimulationConfig {
                blocks: 3,
                ..SimulationConfig::default()
            },
        }
    }

    /// Reject settings the subsystems cannot run with.
    pub fn validate(&self) -> Result<(), NodeError> {
        self.sealer.validate()?;
        self.bloom.validate()?;
        Ok(())
    }
}

/// What the simulation binary runs.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    /// Blocks to mine after genesis.
    pub blocks: u64,
    /// Account credited with rewards and tips.
    pub producer: String,
    /// Seed for transfer amounts.
    pub seed: u64,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            blocks: 5,
            producer: "miner".into(),
            seed: 7,
        }
    }
}

/// Defaults with `PL_*` overrides from the process environment.
pub fn load_config() -> NodeConfig {
    load_config_from(|key| std::env::var(key).ok())
}

/// Defaults with `PL_*` overrides read through `lookup`.
pub fn load_config_from(lookup: impl Fn(&str) -> Option<String>) -> NodeConfig {
    let mut config = NodeConfig::default();

    if let Some(difficulty) = parse_var(&lookup, "PL_DIFFICULTY") {
        config.ledger.difficulty = difficulty;
    }
    if let Some(blocks) = parse_var(&lookup, "PL_BLOCKS") {
        config.simulation.blocks = blocks;
    }
    if let Some(seed) = parse_var(&lookup, "PL_SEED") {
        config.simulation.seed = seed;
    }
    if let Some(producer) = lookup("PL_PRODUCER").filter(|p| !p.is_empty()) {
        config.simulation.producer = producer;
    }
    if let Some(threads) = parse_var::<usize>(&lookup, "PL_SEAL_THREADS") {
        config.sealer.threads = if threads == 0 {
            SealerConfig::parallel().threads
        } else {
            threads
        };
        info!(threads = config.sealer.threads, "sealer threads overridden");
    }
    if let Some(max_attempts) = parse_var(&lookup, "PL_MAX_ATTEMPTS") {
        config.sealer.max_attempts = max_attempts;
    }

    config
}

fn parse_var<T: FromStr>(lookup: &impl Fn(&str) -> Option<String>, key: &str) -> Option<T> {
    let raw = lookup(key)?;
    match raw.trim().parse() {
        Ok(value) => Some(value),
        Err(_) => {
            warn!(key, value = %raw, "ignoring unparsable override");
            None
        }
    }
}
