//! Shared fixtures for the integration suite.

use std::sync::Arc;

use node_runtime::{FullNode, NodeConfig};
use pl_04_ledger_state::{BalanceMap, Ledger, LedgerConfig};
use shared_crypto::{Ed25519KeyPair, Ed25519Verifier};
use shared_types::{InMemorySignatureStore, SignatureStore, Transaction};

/// Genesis allocation used throughout the suite.
pub fn genesis_balances() -> BalanceMap {
    BalanceMap::from([
        ("alice".into(), 1000),
        ("bob".into(), 500),
        ("charlie".into(), 200),
        ("miner".into(), 0),
    ])
}

/// Deterministic wallet per account name.
pub fn wallet(name: &str) -> Ed25519KeyPair {
    let mut seed = [0x5a; 32];
    for (slot, byte) in seed.iter_mut().zip(name.bytes()) {
        *slot = byte;
    }
    Ed25519KeyPair::from_seed(seed)
}

/// Transfer with default fees, signature attached.
pub fn signed(from: &str, to: &str, amount: u64, nonce: u64) -> Transaction {
    let mut tx = Transaction::new(from, to, amount, nonce);
    tx.sign(&wallet(from));
    tx
}

/// Transfer with default fees, signature written to `store`.
pub fn signed_detached(
    from: &str,
    to: &str,
    amount: u64,
    nonce: u64,
    store: &dyn SignatureStore,
) -> Transaction {
    let mut tx = Transaction::new(from, to, amount, nonce);
    tx.sign_detached(&wallet(from), store);
    tx
}

/// Ledger at genesis with its own signature store.
pub fn ledger_at_genesis(config: LedgerConfig) -> (Ledger, Arc<InMemorySignatureStore>) {
    let store = Arc::new(InMemorySignatureStore::new());
    let mut ledger = Ledger::new(config, store.clone(), Arc::new(Ed25519Verifier));
    ledger
        .add_genesis_at(genesis_balances(), "genesis", 1_700_000_000)
        .expect("fresh ledger accepts genesis");
    (ledger, store)
}

/// Full node at genesis with fast test settings.
pub fn test_node() -> FullNode {
    FullNode::new(
        NodeConfig::for_testing(),
        genesis_balances(),
        Arc::new(Ed25519Verifier),
    )
    .expect("test configuration is valid")
}
