//! # Cross-Subsystem Properties
//!
//! - Conservation: `Σ balances == initial + minted - burned` after any run
//! - Atomicity: a rejected block leaves balances bit-for-bit unchanged
//! - Bloom soundness: included ids always pass the filter; a filter "maybe"
//!   for an absent id never turns into a verified proof

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use pl_04_ledger_state::LedgerConfig;
    use pl_07_bloom_filters::{BlockFilter, BloomConfig};
    use pl_13_light_client::{InclusionVerdict, LightClient, LightClientConfig};
    use pl_17_block_production::build_candidate;
    use proptest::prelude::*;
    use shared_types::Transaction;

    use crate::fixtures::{ledger_at_genesis, signed, test_node};

    const ACCOUNTS: [&str; 4] = ["alice", "bob", "charlie", "miner"];

    fn transfer() -> impl Strategy<Value = (usize, usize, u64)> {
        (0..ACCOUNTS.len(), 0..ACCOUNTS.len(), 0u64..600)
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(24))]

        #[test]
        fn prop_node_conserves_supply(rounds in prop::collection::vec(
            prop::collection::vec(transfer(), 0..5), 1..5
        )) {
            let mut node = test_node();
            let mut nonce = 0u64;
            for round in rounds {
                for (from, to, amount) in round {
                    nonce += 1;
                    let _ = node.submit_transaction(signed(ACCOUNTS[from], ACCOUNTS[to], amount, nonce));
                }
                let before = node.balances();
                let height = node.height();
                if node.mine_block("miner").is_err() {
                    prop_assert_eq!(node.balances(), before);
                    prop_assert_eq!(node.height(), height);
                }
                prop_assert!(node.ledger().audit_supply().is_ok());
            }
        }

        #[test]
        fn prop_rejected_block_is_atomic(
            good in prop::collection::vec((0usize..3, 1u64..50), 0..3),
            overdraft in 10u64..1000,
        ) {
            let (mut ledger, _store) = ledger_at_genesis(LedgerConfig::for_testing());
            let mut batch: Vec<Transaction> = good
                .iter()
                .enumerate()
                .map(|(n, (from, amount))| signed(ACCOUNTS[*from], "miner", *amount, n as u64))
                .collect();
            // Earlier transfers mutate the working copy before this one fails.
            batch.push(signed("nobody", "alice", overdraft, 99));
            let block = build_candidate(ledger.latest_block().unwrap(), "miner", batch, 2);

            let before = ledger.balances();
            prop_assert!(!ledger.add_block(&block, "miner"));
            prop_assert_eq!(ledger.balances(), before);
            prop_assert_eq!(ledger.total_minted(), 0);
            prop_assert_eq!(ledger.total_burned(), 0);
        }

        #[test]
        fn prop_bloom_soundness(
            amounts in prop::collection::vec(1u64..100, 1..4),
            lookups in prop::collection::vec((any::<u64>(), any::<u64>()), 1..40),
        ) {
            let mut node = test_node();
            let mut included = Vec::new();
            for (n, amount) in amounts.iter().enumerate() {
                included.push(node.submit_transaction(signed("alice", "bob", *amount, n as u64)).unwrap());
            }
            node.mine_block("miner").unwrap();

            let filter = BlockFilter::build(node.ledger().block_by_index(1).unwrap(), &BloomConfig::default()).unwrap();
            for id in &included {
                prop_assert!(filter.might_contain(id));
            }

            let mut client = LightClient::new(LightClientConfig::default(), Arc::new(node));
            for (amount, nonce) in lookups {
                let absent = Transaction::new("outsider", "bob", amount, nonce).tx_id();
                let verdict = client.check_tx_in_block(1, &absent).unwrap();
                prop_assert_ne!(verdict, InclusionVerdict::Included);
                prop_assert_eq!(verdict == InclusionVerdict::FilteredOut, !filter.might_contain(&absent));
            }
        }
    }
}
