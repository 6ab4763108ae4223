//! # Proof-of-Ledger Node
//!
//! Runs a local mining simulation:
//!
//! 1. Load configuration (defaults + `PL_*` environment overrides)
//! 2. Create genesis (`alice 1000, bob 500, charlie 200, miner 0`)
//! 3. For each block: sign and submit a rotation of transfers, seal, apply
//! 4. Check one mined transaction through a light client

use anyhow::{Context, Result};
use tracing::info;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use node_runtime::{load_config, run_simulation};

fn main() -> Result<()> {
    // Initialize logging
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(true)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let config = load_config();
    info!(
        blocks = config.simulation.blocks,
        difficulty = config.ledger.difficulty,
        producer = %config.simulation.producer,
        "starting simulation"
    );

    let report = run_simulation(config).context("simulation failed to start")?;

    info!(
        mined = report.blocks_mined,
        failed = report.blocks_failed,
        skipped = report.blocks_skipped,
        minted = report.total_minted,
        burned = report.total_burned,
        "simulation finished"
    );
    for (address, balance) in &report.balances {
        info!(%address, balance, "final balance");
    }
    if let Some(verdict) = report.included_check {
        info!(?verdict, "light client verified first mined transaction");
    }

    Ok(())
}
