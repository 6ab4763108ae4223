//! # Witness Separation
//!
//! Lean blocks travel without key material; witnesses and the signature
//! store put it back.

#[cfg(test)]
mod tests {
    use pl_03_merkle_commitment::merkle_root;
    use pl_04_ledger_state::LedgerConfig;
    use pl_17_block_production::build_candidate;
    use shared_types::{Block, CodecError, SignatureWitness, Witness};

    use crate::fixtures::{ledger_at_genesis, signed, signed_detached};

    #[test]
    fn test_lean_json_round_trip_reapplies() {
        let (mut ledger, store) = ledger_at_genesis(LedgerConfig::for_testing());
        let batch = vec![
            signed("alice", "bob", 10, 1),
            signed_detached("bob", "charlie", 5, 1, store.as_ref()),
        ];
        let block = build_candidate(ledger.latest_block().unwrap(), "miner", batch, 2);

        let (json, witnesses) = block.to_lean_json().unwrap();
        assert!(!json.contains("signature"), "lean form carries no signatures");
        assert!(!json.contains("public_key"));

        let restored = Block::from_lean_json(&json, &witnesses).unwrap();
        assert_eq!(restored.tx_ids(), block.tx_ids());
        assert_eq!(merkle_root(&restored.transactions), block.header.merkle_root);
        assert_eq!(restored.block_hash(), block.block_hash());
        assert!(matches!(
            restored.transactions[1].witness(),
            SignatureWitness::Detached
        ));

        assert!(ledger.add_block(&restored, "miner"));
    }

    #[test]
    fn test_lean_block_without_witnesses_fails_verification() {
        let (mut ledger, _store) = ledger_at_genesis(LedgerConfig::for_testing());
        let block = build_candidate(
            ledger.latest_block().unwrap(),
            "miner",
            vec![signed("alice", "bob", 10, 1)],
            2,
        );
        let (lean, _) = block.to_lean();

        let bare = Block::from_lean(lean, &Default::default()).unwrap();
        assert_eq!(bare.block_hash(), block.block_hash());
        assert!(!ledger.add_block(&bare, "miner"));
        assert_eq!(ledger.balance_of("alice"), 1000);
    }

    #[test]
    fn test_orphan_witness_rejected() {
        let (ledger, _store) = ledger_at_genesis(LedgerConfig::for_testing());
        let block = build_candidate(
            ledger.latest_block().unwrap(),
            "miner",
            vec![signed("alice", "bob", 10, 1)],
            2,
        );
        let (lean, mut witnesses) = block.to_lean();
        let stranger = signed("carol", "dave", 1, 1);
        witnesses.insert(
            stranger.tx_id(),
            Witness {
                signature: Some(vec![1, 2, 3]),
                public_key: None,
            },
        );

        assert!(matches!(
            Block::from_lean(lean, &witnesses),
            Err(CodecError::UnknownWitness { .. })
        ));
    }

    #[test]
    fn test_applied_header_survives_json() {
        let (mut ledger, _store) = ledger_at_genesis(LedgerConfig::for_testing());
        let block = build_candidate(
            ledger.latest_block().unwrap(),
            "miner",
            vec![signed("alice", "bob", 10, 1)],
            2,
        );
        ledger.try_add_block(&block, "miner").unwrap();
        let applied = ledger.latest_block().unwrap();

        let json = serde_json::to_string(applied).unwrap();
        let decoded: Block = serde_json::from_str(&json).unwrap();
        assert_eq!(decoded.block_hash(), applied.block_hash());
        assert_eq!(decoded.header.block_reward, Some(50));
    }
}
