//! # Full Node
//!
//! Owns every subsystem and runs the produce-and-apply cycle.

use std::sync::Arc;

use pl_03_merkle_commitment::{merkle_proof, MerkleProof};
use pl_04_ledger_state::{BalanceMap, BlockReceipt, BlockSizePolicy, Ledger};
use pl_06_mempool::{MempoolApi, MempoolStatus, SharedMempool};
use pl_07_bloom_filters::BloomIndex;
use pl_13_light_client::FullNodeConnection;
use pl_17_block_production::{build_candidate_now, ProofOfWorkSealer};
use shared_crypto::SignatureVerifier;
use shared_types::{Block, BlockHeader, InMemorySignatureStore, Transaction, TxId};
use tracing::{debug, info, instrument};

use crate::adapters::LedgerBalanceAdapter;
use crate::config::NodeConfig;
use crate::error::NodeError;

/// Single-process node: mempool, sealer, ledger and Bloom index.
pub struct FullNode {
    config: NodeConfig,
    ledger: Ledger,
    mempool: SharedMempool<LedgerBalanceAdapter>,
    bloom: BloomIndex,
    signatures: Arc<InMemorySignatureStore>,
    sealer: ProofOfWorkSealer,
    peers: Vec<String>,
}

impl FullNode {
    /// Build a node and create genesis from `initial_balances`.
    pub fn new(
        config: NodeConfig,
        initial_balances: BalanceMap,
        verifier: Arc<dyn SignatureVerifier>,
    ) -> Result<Self, NodeError> {
        config.validate()?;

        let signatures = Arc::new(InMemorySignatureStore::new());
        let mut ledger = Ledger::new(config.ledger.clone(), signatures.clone(), verifier);
        let genesis = ledger.add_genesis(initial_balances, "genesis")?;

        let bloom = BloomIndex::new(config.bloom.clone())?;
        bloom.insert_block(genesis);

        let mempool = SharedMempool::new(
            config.mempool.clone(),
            LedgerBalanceAdapter::new(ledger.shared_balances()),
        );
        let sealer = ProofOfWorkSealer::new(config.sealer.clone())?;

        info!(
            difficulty = ledger.difficulty(),
            seal_threads = sealer.config().threads,
            "full node initialized"
        );

        Ok(Self {
            config,
            ledger,
            mempool,
            bloom,
            signatures,
            sealer,
            peers: Vec::new(),
        })
    }

    // === Transactions ===

    /// Admit a transaction to the local mempool.
    pub fn submit_transaction(&self, tx: Transaction) -> Result<TxId, NodeError> {
        Ok(self.mempool.try_accept(tx)?)
    }

    /// Admit locally and announce to known peers. Announcing is a no-op: the
    /// node does not gossip.
    pub fn broadcast_transaction(&self, tx: Transaction) -> Result<TxId, NodeError> {
        let tx_id = self.submit_transaction(tx)?;
        debug!(tx = %tx_id, peers = self.peers.len(), "transaction announced");
        Ok(tx_id)
    }

    // === Blocks ===

    /// Draw a batch, seal it and apply it with `producer` as beneficiary.
    ///
    /// # Errors
    ///
    /// - `AwaitingFullBatch` under `BlockSizePolicy::Exactly` while fewer than
    ///   `cap` transactions are queued; nothing is drawn.
    /// - Sealing exhaustion or ledger rejection. In both cases the drawn batch
    ///   is dropped, not returned to the mempool.
    #[instrument(skip(self))]
    pub fn mine_block(&mut self, producer: &str) -> Result<BlockReceipt, NodeError> {
        let batch_size = match self.ledger.config().block_size {
            BlockSizePolicy::AtMost(cap) => self.config.mempool.default_batch_size.min(cap),
            BlockSizePolicy::Exactly(cap) => {
                // A partial batch could never validate; leave it queued.
                let pending = self.mempool.size();
                if pending > 0 && pending < cap {
                    debug!(pending, cap, "waiting for a full batch");
                    return Err(NodeError::AwaitingFullBatch { pending, cap });
                }
                cap
            }
        };
        let batch = self.mempool.get_batch(batch_size);

        let mut candidate = {
            let prev = self.ledger.latest_block().ok_or(NodeError::ChainEmpty)?;
            build_candidate_now(prev, producer, batch)
        };
        self.sealer
            .try_seal(&mut candidate, self.ledger.difficulty())?;

        let receipt = self.ledger.try_add_block(&candidate, producer)?;
        self.index_tip();
        Ok(receipt)
    }

    /// Apply a block produced elsewhere, crediting its header's producer.
    pub fn add_finalized_block(&mut self, block: &Block) -> Result<BlockReceipt, NodeError> {
        let producer = block.header.producer.clone();
        let receipt = self.ledger.try_add_block(block, &producer)?;
        self.index_tip();
        Ok(receipt)
    }

    fn index_tip(&self) {
        if let Some(tip) = self.ledger.latest_block() {
            self.bloom.insert_block(tip);
        }
    }

    // === Queries ===

    /// Bloom answer for `tx_id` in block `index`; `None` if the block is unknown.
    pub fn might_contain_tx(&self, index: u64, tx_id: &TxId) -> Option<bool> {
        let block = self.ledger.block_by_index(index)?;
        Some(self.bloom.might_contain(block, tx_id))
    }

    /// Inclusion proof; `None` if the block or the transaction is missing.
    pub fn merkle_proof(&self, index: u64, tx_id: &TxId) -> Option<MerkleProof> {
        let block = self.ledger.block_by_index(index)?;
        block
            .contains_tx(tx_id)
            .then(|| merkle_proof(&block.transactions, tx_id))
    }

    /// Record a peer address. Nothing is sent to it.
    pub fn add_peer(&mut self, address: impl Into<String>) {
        let address = address.into();
        if !self.peers.contains(&address) {
            self.peers.push(address);
        }
    }

    /// Known peer addresses.
    pub fn peers(&self) -> &[String] {
        &self.peers
    }

    /// Committed balance of `address`.
    pub fn balance_of(&self, address: &str) -> u64 {
        self.ledger.balance_of(address)
    }

    /// The ledger.
    pub fn ledger(&self) -> &Ledger {
        &self.ledger
    }

    /// Mempool handle.
    pub fn mempool(&self) -> &SharedMempool<LedgerBalanceAdapter> {
        &self.mempool
    }

    /// Mempool occupancy.
    pub fn mempool_status(&self) -> MempoolStatus {
        self.mempool.status()
    }

    /// Per-block Bloom filters.
    pub fn bloom_index(&self) -> &BloomIndex {
        &self.bloom
    }

    /// Store holding detached and applied signatures.
    pub fn signature_store(&self) -> Arc<InMemorySignatureStore> {
        Arc::clone(&self.signatures)
    }

    /// Configuration the node was built with.
    pub fn config(&self) -> &NodeConfig {
        &self.config
    }

    /// Snapshot of committed balances.
    pub fn balances(&self) -> BalanceMap {
        self.ledger.balances()
    }

    /// Height of the chain tip.
    pub fn height(&self) -> Option<u64> {
        self.ledger.latest_block().map(Block::index)
    }
}

impl FullNodeConnection for FullNode {
    fn block_header(&self, index: u64) -> Option<BlockHeader> {
        self.ledger.block_by_index(index).map(|b| b.header.clone())
    }

    fn might_contain_tx(&self, index: u64, tx_id: &TxId) -> Option<bool> {
        FullNode::might_contain_tx(self, index, tx_id)
    }

    fn merkle_proof(&self, index: u64, tx_id: &TxId) -> Option<MerkleProof> {
        FullNode::merkle_proof(self, index, tx_id)
    }
}
