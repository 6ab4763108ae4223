//! # End-to-End Flows
//!
//! | Flow | Expectation |
//! |------|-------------|
//! | admit → mine → apply | fee and reward accounting |
//! | oversized block | rejected, chain unchanged |
//! | never-included transaction | proof phase says no, no error |
//! | unknown block index | distinct "block not found" error |

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use pl_03_merkle_commitment::merkle_root;
    use pl_04_ledger_state::LedgerConfig;
    use pl_06_mempool::MempoolApi;
    use pl_13_light_client::{InclusionVerdict, LightClient, LightClientConfig, LightClientError};
    use pl_17_block_production::build_candidate;
    use shared_types::{Transaction, BASE_FEE, BLOCK_REWARD, TIP};

    use crate::fixtures::{ledger_at_genesis, signed, test_node};

    // =========================================================================
    // SINGLE TRANSFER ACCOUNTING
    // =========================================================================

    #[test]
    fn test_single_transfer_fee_accounting() {
        let mut node = test_node();
        let tx = signed("alice", "bob", 50, 1);
        assert_eq!(tx.base_fee(), BASE_FEE);
        assert_eq!(tx.tip(), TIP);

        node.submit_transaction(tx).expect("alice can afford 55");
        let receipt = node.mine_block("miner").expect("block applies");

        assert_eq!(node.balance_of("alice"), 1000 - 50 - BASE_FEE - TIP);
        assert_eq!(node.balance_of("bob"), 550);
        assert_eq!(node.balance_of("charlie"), 200);
        assert_eq!(node.balance_of("miner"), TIP + BLOCK_REWARD);
        assert_eq!(node.ledger().total_burned(), 2);
        assert_eq!(node.ledger().total_minted(), 50);
        assert_eq!(receipt.reward, BLOCK_REWARD);
        assert_eq!(receipt.burned, BASE_FEE);
        node.ledger().audit_supply().expect("supply conserved");
    }

    // =========================================================================
    // OVERSIZED BLOCK
    // =========================================================================

    #[test]
    fn test_five_transaction_block_rejected() {
        let (mut ledger, _store) = ledger_at_genesis(LedgerConfig::for_testing());
        let batch: Vec<Transaction> = (1..=5).map(|n| signed("alice", "bob", 1, n)).collect();
        let candidate = build_candidate(ledger.latest_block().unwrap(), "miner", batch, 1);

        assert!(!ledger.add_block(&candidate, "miner"));
        assert_eq!(ledger.chain_len(), 1);
        assert_eq!(ledger.balance_of("alice"), 1000);
    }

    #[test]
    fn test_block_cap_is_inclusive() {
        let (mut ledger, _store) = ledger_at_genesis(LedgerConfig::for_testing());
        let batch: Vec<Transaction> = (1..=4).map(|n| signed("alice", "bob", 1, n)).collect();
        let candidate = build_candidate(ledger.latest_block().unwrap(), "miner", batch, 1);

        assert!(ledger.add_block(&candidate, "miner"));
        assert_eq!(ledger.chain_len(), 2);
    }

    // =========================================================================
    // NEVER-INCLUDED TRANSACTION
    // =========================================================================

    #[test]
    fn test_never_included_transaction_is_negative() {
        let mut node = test_node();
        node.submit_transaction(signed("alice", "bob", 10, 1)).unwrap();
        node.submit_transaction(signed("bob", "charlie", 10, 1)).unwrap();
        node.mine_block("miner").unwrap();

        let stranger = Transaction::new("mallory", "eve", 99, 1).tx_id();
        assert!(node.merkle_proof(1, &stranger).is_none());

        let block = node.ledger().block_by_index(1).unwrap();
        let bogus = pl_03_merkle_commitment::merkle_proof(&block.transactions, &stranger);
        assert!(!bogus.verify(&block.header.merkle_root, &stranger));
        assert_eq!(block.header.merkle_root, merkle_root(&block.transactions));

        let mut client = LightClient::new(LightClientConfig::default(), Arc::new(node));
        let verdict = client.check_tx_in_block(1, &stranger).expect("block exists");
        assert_ne!(verdict, InclusionVerdict::Included);
        assert!(!client.verify_inclusion(1, &stranger).unwrap());
    }

    // =========================================================================
    // BLOCK BEYOND THE CHAIN
    // =========================================================================

    #[test]
    fn test_unknown_block_is_distinct_error() {
        let mut node = test_node();
        let tx_id = node
            .submit_transaction(signed("alice", "bob", 10, 1))
            .unwrap();
        node.mine_block("miner").unwrap();
        assert_eq!(node.mempool().size(), 0);

        let mut client = LightClient::new(LightClientConfig::default(), Arc::new(node));

        assert_eq!(
            client.check_tx_in_block(2, &tx_id),
            Err(LightClientError::BlockNotFound { index: 2 })
        );
        assert_eq!(
            client.check_tx_in_block(1, &tx_id),
            Ok(InclusionVerdict::Included)
        );
    }
}
