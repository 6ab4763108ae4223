//! # Ledger Flows
//!
//! Mempool admission, candidate assembly, sealing and application wired by
//! hand, without the node runtime in between.

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use std::thread;

    use node_runtime::LedgerBalanceAdapter;
    use pl_04_ledger_state::{BlockSizePolicy, Ledger, LedgerConfig, LedgerError, LedgerPhase};
    use pl_06_mempool::{MempoolApi, MempoolConfig, SharedMempool};
    use pl_17_block_production::{build_candidate, ProofOfWorkSealer, SealerConfig};
    use shared_crypto::{meets_difficulty, Secp256k1KeyPair, Secp256k1Verifier};
    use shared_types::{InMemorySignatureStore, Transaction};

    use crate::fixtures::{genesis_balances, ledger_at_genesis, signed, signed_detached};

    fn seal(block: &mut shared_types::Block, difficulty: u32, threads: usize) {
        let sealer = ProofOfWorkSealer::new(SealerConfig {
            max_attempts: 1_000_000,
            threads,
        })
        .unwrap();
        assert!(sealer.seal(block, difficulty), "difficulty {difficulty} is reachable");
    }

    #[test]
    fn test_mempool_batch_to_applied_block() {
        let (mut ledger, _store) = ledger_at_genesis(LedgerConfig::for_testing());
        let pool = SharedMempool::new(
            MempoolConfig::for_testing(),
            LedgerBalanceAdapter::new(ledger.shared_balances()),
        );

        assert!(pool.accept(signed("alice", "bob", 10, 1)));
        assert!(pool.accept(signed("bob", "charlie", 20, 1)));
        assert!(!pool.accept(signed("bob", "charlie", 20, 1)), "duplicate refused");

        let batch = pool.get_batch(4);
        let mut block = build_candidate(ledger.latest_block().unwrap(), "miner", batch, 2);
        seal(&mut block, 2, 1);

        let receipt = ledger.try_add_block(&block, "miner").unwrap();
        assert_eq!(receipt.transactions, 2);
        assert_eq!(receipt.tips, 6);
        assert_eq!(ledger.phase(), LedgerPhase::Growing);
        assert_eq!(ledger.balance_of("miner"), 56);
    }

    #[test]
    fn test_admission_sees_committed_balances() {
        let (mut ledger, _store) = ledger_at_genesis(LedgerConfig::for_testing());
        let pool = SharedMempool::new(
            MempoolConfig::for_testing(),
            LedgerBalanceAdapter::new(ledger.shared_balances()),
        );

        // miner has nothing until a block is applied.
        assert!(!pool.accept(signed("miner", "alice", 1, 1)));

        let block = build_candidate(ledger.latest_block().unwrap(), "miner", vec![], 2);
        ledger.try_add_block(&block, "miner").unwrap();

        assert!(pool.accept(signed("miner", "alice", 1, 1)));
    }

    #[test]
    fn test_parallel_sealed_block_passes_enforced_seal() {
        let config = LedgerConfig {
            difficulty: 2,
            enforce_seal: true,
            ..LedgerConfig::default()
        };
        let (mut ledger, _store) = ledger_at_genesis(config);
        let mut block = build_candidate(
            ledger.latest_block().unwrap(),
            "miner",
            vec![signed("alice", "bob", 5, 1)],
            2,
        );
        seal(&mut block, 2, 4);

        assert!(meets_difficulty(&block.block_hash(), 2));
        assert!(ledger.add_block(&block, "miner"));
        // The stamped header hashes differently but its seal still holds.
        let tip = ledger.latest_block().unwrap();
        assert_ne!(tip.block_hash(), block.block_hash());
        assert!(meets_difficulty(&tip.header.seal_hash(), 2));
    }

    #[test]
    fn test_unsealed_block_rejected_when_seal_enforced() {
        let config = LedgerConfig {
            difficulty: 8,
            enforce_seal: true,
            ..LedgerConfig::default()
        };
        let (mut ledger, _store) = ledger_at_genesis(config);
        let block = build_candidate(ledger.latest_block().unwrap(), "miner", vec![], 2);

        assert!(matches!(
            ledger.try_add_block(&block, "miner"),
            Err(LedgerError::Structural(_))
        ));
    }

    #[test]
    fn test_exact_block_size_policy() {
        let (ledger, _store) = ledger_at_genesis(LedgerConfig::for_testing());
        let tip = ledger.latest_block().unwrap();
        let policy = BlockSizePolicy::Exactly(4);

        let full: Vec<Transaction> = (1..=4).map(|n| signed("alice", "bob", 1, n)).collect();
        let partial: Vec<Transaction> = full[..3].to_vec();

        assert!(ledger.validate_structure(&build_candidate(tip, "m", full, 2), policy));
        assert!(ledger.validate_structure(&build_candidate(tip, "m", vec![], 2), policy));
        assert!(!ledger.validate_structure(&build_candidate(tip, "m", partial, 2), policy));
    }

    #[test]
    fn test_detached_and_attached_mix() {
        let (mut ledger, store) = ledger_at_genesis(LedgerConfig::for_testing());
        let batch = vec![
            signed_detached("alice", "bob", 10, 1, store.as_ref()),
            signed("bob", "alice", 10, 1),
        ];
        let block = build_candidate(ledger.latest_block().unwrap(), "miner", batch, 2);

        assert!(ledger.add_block(&block, "miner"));
        assert_eq!(store.len(), 2, "attached signature persisted on commit");
    }

    #[test]
    fn test_detached_signature_missing_from_store() {
        let (mut ledger, _store) = ledger_at_genesis(LedgerConfig::for_testing());
        let elsewhere = InMemorySignatureStore::new();
        let tx = signed_detached("alice", "bob", 10, 1, &elsewhere);
        let block = build_candidate(ledger.latest_block().unwrap(), "miner", vec![tx], 2);

        assert!(matches!(
            ledger.try_add_block(&block, "miner"),
            Err(LedgerError::InvalidSignature { .. })
        ));
        assert_eq!(ledger.balance_of("alice"), 1000);
    }

    #[test]
    fn test_secp256k1_ledger() {
        let store = Arc::new(InMemorySignatureStore::new());
        let mut ledger = Ledger::new(
            LedgerConfig::for_testing(),
            store,
            Arc::new(Secp256k1Verifier),
        );
        ledger.add_genesis_at(genesis_balances(), "genesis", 0).unwrap();

        let key = Secp256k1KeyPair::generate();
        let mut tx = Transaction::new("alice", "bob", 25, 1);
        tx.sign(&key);
        let block = build_candidate(ledger.latest_block().unwrap(), "miner", vec![tx], 1);

        assert!(ledger.add_block(&block, "miner"));
        assert_eq!(ledger.balance_of("bob"), 525);

        // An Ed25519 signature does not verify under the secp256k1 verifier.
        let foreign = signed("bob", "alice", 1, 1);
        let block = build_candidate(ledger.latest_block().unwrap(), "miner", vec![foreign], 2);
        assert!(!ledger.add_block(&block, "miner"));
    }

    #[test]
    fn test_concurrent_submitters_share_one_pool() {
        let (ledger, _store) = ledger_at_genesis(LedgerConfig::for_testing());
        let pool = SharedMempool::new(
            MempoolConfig {
                max_transactions: 100,
                default_batch_size: 4,
            },
            LedgerBalanceAdapter::new(ledger.shared_balances()),
        );

        let handles: Vec<_> = ["alice", "bob", "charlie"]
            .into_iter()
            .map(|sender| {
                let pool = pool.clone();
                thread::spawn(move || {
                    (1..=10)
                        .filter(|n| pool.accept(signed(sender, "miner", 1, *n)))
                        .count()
                })
            })
            .collect();
        let admitted: usize = handles.into_iter().map(|h| h.join().unwrap()).sum();

        assert_eq!(admitted, 30);
        assert_eq!(pool.size(), 30);
        let mut drawn = 0;
        while !pool.get_batch(4).is_empty() {
            drawn += 1;
        }
        assert_eq!(drawn, 8);
    }
}
