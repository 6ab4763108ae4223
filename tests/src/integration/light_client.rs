//! # Light Client Flows
//!
//! Two-phase checks against a live [`FullNode`](node_runtime::FullNode).

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use pl_07_bloom_filters::{BlockFilter, BloomConfig};
    use pl_13_light_client::{FullNodeConnection, InclusionVerdict, LightClient, LightClientConfig};
    use shared_types::{Transaction, TxId};

    use crate::fixtures::{signed, test_node};

    /// Node with three blocks; returns the tx ids per block.
    fn mined_node() -> (node_runtime::FullNode, Vec<Vec<TxId>>) {
        let mut node = test_node();
        let mut per_block = Vec::new();
        for round in 1..=3u64 {
            let ids = vec![
                node.submit_transaction(signed("alice", "bob", round, round))
                    .unwrap(),
                node.submit_transaction(signed("bob", "charlie", round, round))
                    .unwrap(),
                node.submit_transaction(signed("charlie", "alice", round, round))
                    .unwrap(),
            ];
            node.mine_block("miner").unwrap();
            per_block.push(ids);
        }
        (node, per_block)
    }

    #[test]
    fn test_every_mined_transaction_verifies() {
        let (node, per_block) = mined_node();
        let mut client = LightClient::new(LightClientConfig::default(), Arc::new(node));

        for (offset, ids) in per_block.iter().enumerate() {
            let index = offset as u64 + 1;
            for id in ids {
                assert_eq!(
                    client.check_tx_in_block(index, id).unwrap(),
                    InclusionVerdict::Included,
                    "tx in block {index}"
                );
            }
        }
    }

    #[test]
    fn test_transaction_not_in_neighbouring_block() {
        let (node, per_block) = mined_node();
        let mut client = LightClient::new(LightClientConfig::default(), Arc::new(node));

        let from_block_one = per_block[0][0];
        for index in [0, 2, 3] {
            assert!(
                !client.verify_inclusion(index, &from_block_one).unwrap(),
                "block {index} must not prove a tx from block 1"
            );
        }
    }

    #[test]
    fn test_filter_answers_match_node_index() {
        let (node, per_block) = mined_node();
        let tip = node.ledger().latest_block().unwrap();
        let rebuilt = BlockFilter::build(tip, &BloomConfig::default()).unwrap();

        for id in &per_block[2] {
            assert!(rebuilt.might_contain(id));
            assert_eq!(node.might_contain_tx(3, id), Some(true));
        }
        let stranger = Transaction::new("x", "y", 1, 1).tx_id();
        assert_eq!(
            node.might_contain_tx(3, &stranger),
            Some(rebuilt.might_contain(&stranger))
        );
    }

    #[test]
    fn test_node_connection_reports_headers() {
        let (node, _) = mined_node();
        let header = FullNodeConnection::block_header(&node, 2).unwrap();
        assert_eq!(header.index, 2);
        assert!(header.is_applied());
        assert!(FullNodeConnection::block_header(&node, 4).is_none());
    }

    #[test]
    fn test_verified_proof_fetch() {
        let (node, per_block) = mined_node();
        let root = node.ledger().block_by_index(2).unwrap().header.merkle_root;
        let client = LightClient::new(LightClientConfig::default(), Arc::new(node));

        let proof = client.fetch_verified_proof(2, &per_block[1][1]).unwrap();
        assert!(proof.verify(&root, &per_block[1][1]));
        assert!(client.fetch_verified_proof(1, &per_block[1][1]).is_err());
    }
}
