//! # Mining Simulation
//!
//! Drives a [`FullNode`] through a fixed rotation of signed transfers, one
//! block at a time, then checks one mined transaction through a light client.

use std::collections::BTreeMap;
use std::sync::Arc;

use pl_04_ledger_state::BalanceMap;
use pl_13_light_client::{InclusionVerdict, LightClient};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use shared_crypto::{to_hex, Ed25519KeyPair, Ed25519Verifier};
use shared_types::{Transaction, TxId};
use tracing::{info, warn};

use crate::config::NodeConfig;
use crate::error::NodeError;
use crate::node::FullNode;

/// Transfers submitted before every block: (sender, recipient).
const ROTATION: [(&str, &str); 4] = [
    ("alice", "bob"),
    ("bob", "charlie"),
    ("charlie", "alice"),
    ("alice", "charlie"),
];

/// Summary of a simulation run.
#[derive(Debug, Clone)]
pub struct SimulationReport {
    /// Blocks appended after genesis.
    pub blocks_mined: u64,
    /// Blocks lost to sealing exhaustion or ledger rejection.
    pub blocks_failed: u64,
    /// Rounds skipped because strict block size was waiting for a full batch.
    pub blocks_skipped: u64,
    /// Final committed balances.
    pub balances: BalanceMap,
    /// Cumulative minted rewards.
    pub total_minted: u64,
    /// Cumulative burned base fees.
    pub total_burned: u64,
    /// Light-client verdict for the first mined transaction, if any.
    pub included_check: Option<InclusionVerdict>,
    /// Light-client verdict for a transaction never submitted.
    pub stranger_check: Option<InclusionVerdict>,
}

/// Genesis allocation used by the binary.
pub fn genesis_balances() -> BalanceMap {
    BalanceMap::from([
        ("alice".into(), 1000),
        ("bob".into(), 500),
        ("charlie".into(), 200),
        ("miner".into(), 0),
    ])
}

/// Mine `config.simulation.blocks` blocks and verify one transaction.
pub fn run_simulation(config: NodeConfig) -> Result<SimulationReport, NodeError> {
    let producer = config.simulation.producer.clone();
    let blocks = config.simulation.blocks;
    let mut rng = StdRng::seed_from_u64(config.simulation.seed);
    let light_client_config = config.light_client.clone();

    let wallets: BTreeMap<&str, Ed25519KeyPair> = ["alice", "bob", "charlie"]
        .into_iter()
        .map(|name| (name, Ed25519KeyPair::generate()))
        .collect();
    let mut nonces: BTreeMap<&str, u64> = BTreeMap::new();

    let mut node = FullNode::new(config, genesis_balances(), Arc::new(Ed25519Verifier))?;
    let mut first_mined: Option<(u64, TxId)> = None;
    let mut blocks_failed = 0;
    let mut blocks_skipped = 0;

    for round in 0..blocks {
        for (i, &(from, to)) in ROTATION.iter().enumerate() {
            let Some(wallet) = wallets.get(from) else {
                continue;
            };
            let nonce = nonces.entry(from).or_insert(0);
            *nonce += 1;
            let mut tx = Transaction::new(from, to, rng.gen_range(1..=25), *nonce);
            // Alternate signing modes so both resolution paths run.
            if i % 2 == 0 {
                tx.sign(wallet);
            } else {
                tx.sign_detached(wallet, node.signature_store().as_ref());
            }
            if let Err(err) = node.submit_transaction(tx) {
                warn!(round, %err, "transfer not admitted");
            }
        }

        match node.mine_block(&producer) {
            Ok(receipt) => {
                info!(
                    index = receipt.index,
                    hash = %to_hex(&receipt.block_hash),
                    txs = receipt.transactions,
                    reward = receipt.reward,
                    burned = receipt.burned,
                    "mined block"
                );
                if first_mined.is_none() {
                    first_mined = node
                        .ledger()
                        .latest_block()
                        .and_then(|b| b.tx_ids().first().map(|id| (b.index(), *id)));
                }
            }
            Err(NodeError::AwaitingFullBatch { pending, cap }) => {
                blocks_skipped += 1;
                info!(round, pending, cap, "round skipped, batch not full");
            }
            Err(err) => {
                blocks_failed += 1;
                warn!(round, %err, "block discarded");
            }
        }
    }

    if let Err(err) = node.ledger().audit_supply() {
        warn!(%err, "supply audit failed");
    }

    let blocks_mined = node.height().unwrap_or(0);
    let balances = node.balances();
    let total_minted = node.ledger().total_minted();
    let total_burned = node.ledger().total_burned();

    let node = Arc::new(node);
    let mut client = LightClient::new(light_client_config, Arc::clone(&node));

    let included_check = match first_mined {
        Some((index, tx_id)) => {
            let verdict = client.check_tx_in_block(index, &tx_id).ok();
            info!(index, tx = %tx_id, ?verdict, "light client check");
            verdict
        }
        None => None,
    };
    let stranger_check = if blocks_mined > 0 {
        let stranger = Transaction::new("nobody", "alice", 1, 1).tx_id();
        client.check_tx_in_block(blocks_mined, &stranger).ok()
    } else {
        None
    };

    Ok(SimulationReport {
        blocks_mined,
        blocks_failed,
        blocks_skipped,
        balances,
        total_minted,
        total_burned,
        included_check,
        stranger_check,
    })
}
