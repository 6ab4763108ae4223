//! # Ledger
//!
//! Owns the chain, the committed balances and the supply counters. Blocks
//! are applied against a private copy of the balances; the copy replaces the
//! live map only after every transaction has passed.

use std::sync::Arc;

use pl_03_merkle_commitment::empty_root;
use shared_crypto::{Hash, SignatureVerifier, ZERO_HASH};
use shared_types::{Address, Block, BlockHeader, SignatureStore};
use tracing::{info, warn};

use super::balances::{BalanceMap, SharedBalances};
use super::errors::{LedgerError, StructuralError};
use super::validation;
use crate::config::{BlockSizePolicy, LedgerConfig};

/// Where the chain is in its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LedgerPhase {
    /// No genesis yet.
    Empty,
    /// Only the genesis block.
    GenesisSet,
    /// Genesis plus at least one applied block.
    Growing,
}

/// Outcome of a successful application.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlockReceipt {
    /// Height of the appended block.
    pub index: u64,
    /// Hash of the appended (stamped) header.
    pub block_hash: Hash,
    /// Account credited with reward and tips.
    pub producer: Address,
    /// Minted reward.
    pub reward: u64,
    /// Tips paid to the producer.
    pub tips: u64,
    /// Base fees burned.
    pub burned: u64,
    /// Number of transactions applied.
    pub transactions: usize,
}

/// The ledger state machine.
pub struct Ledger {
    config: LedgerConfig,
    balances: SharedBalances,
    blocks: Vec<Block>,
    initial_supply: u128,
    total_minted: u64,
    total_burned: u64,
    signatures: Arc<dyn SignatureStore>,
    verifier: Arc<dyn SignatureVerifier>,
}

impl Ledger {
    /// Empty ledger (no genesis).
    pub fn new(
        config: LedgerConfig,
        signatures: Arc<dyn SignatureStore>,
        verifier: Arc<dyn SignatureVerifier>,
    ) -> Self {
        Self {
            config,
            balances: SharedBalances::default(),
            blocks: Vec::new(),
            initial_supply: 0,
            total_minted: 0,
            total_burned: 0,
            signatures,
            verifier,
        }
    }

    // === Lifecycle ===

    /// Create block 0 with `initial_balances`, stamped with the current time.
    pub fn add_genesis(
        &mut self,
        initial_balances: BalanceMap,
        producer: &str,
    ) -> Result<&Block, LedgerError> {
        let now = u64::try_from(chrono::Utc::now().timestamp()).unwrap_or(0);
        self.add_genesis_at(initial_balances, producer, now)
    }

    /// Create block 0 with an explicit timestamp.
    ///
    /// # Errors
    ///
    /// `GenesisExists` if the chain already has a block.
    pub fn add_genesis_at(
        &mut self,
        initial_balances: BalanceMap,
        producer: &str,
        timestamp: u64,
    ) -> Result<&Block, LedgerError> {
        if !self.blocks.is_empty() {
            return Err(LedgerError::GenesisExists);
        }

        let header = BlockHeader {
            index: 0,
            prev_hash: ZERO_HASH,
            merkle_root: empty_root(),
            timestamp,
            nonce: 0,
            producer: producer.to_string(),
            block_reward: None,
            burned_fees: None,
        };

        self.initial_supply = initial_balances.values().map(|b| u128::from(*b)).sum();
        self.balances.replace(initial_balances);
        self.blocks.push(Block::new(header, Vec::new()));
        info!(
            accounts = self.balances.snapshot().len(),
            supply = %self.initial_supply,
            "genesis block created"
        );
        self.blocks.last().ok_or(LedgerError::ChainEmpty)
    }

    /// Current lifecycle phase.
    pub fn phase(&self) -> LedgerPhase {
        match self.blocks.len() {
            0 => LedgerPhase::Empty,
            1 => LedgerPhase::GenesisSet,
            _ => LedgerPhase::Growing,
        }
    }

    // === Validation & Application ===

    /// Check `block` against the chain tip under `policy`.
    pub fn try_validate_structure(
        &self,
        block: &Block,
        policy: BlockSizePolicy,
    ) -> Result<(), StructuralError> {
        let seal = self.config.enforce_seal.then_some(self.config.difficulty);
        validation::validate_structure(block, self.blocks.last(), policy, seal)
    }

    /// Boolean form of [`try_validate_structure`](Self::try_validate_structure).
    pub fn validate_structure(&self, block: &Block, policy: BlockSizePolicy) -> bool {
        match self.try_validate_structure(block, policy) {
            Ok(()) => true,
            Err(err) => {
                warn!(index = block.index(), %err, "block failed structural validation");
                false
            }
        }
    }

    /// Validate and apply `block`, crediting `producer`. All or nothing.
    ///
    /// # Errors
    /// - `Structural` for shape or sequencing problems
    /// - `InvalidSignature` if any transaction fails verification
    /// - `InsufficientFunds` if any sender cannot cover its total cost
    /// - `BalanceOverflow` if a credit or counter overflows
    pub fn try_apply(&mut self, block: &Block, producer: &str) -> Result<BlockReceipt, LedgerError> {
        self.try_validate_structure(block, self.config.block_size)?;

        let mut working = self.balances.snapshot();
        let mut burned: u64 = 0;
        let mut tips: u64 = 0;

        for tx in &block.transactions {
            let tx_id = tx.tx_id();
            if !tx.verify_signature(self.verifier.as_ref(), self.signatures.as_ref()) {
                return Err(LedgerError::InvalidSignature { tx_id });
            }

            let required = tx.total_cost().ok_or(LedgerError::BalanceOverflow)?;
            let available = working.get(tx.sender()).copied().unwrap_or(0);
            if available < required {
                return Err(LedgerError::InsufficientFunds {
                    tx_id,
                    required,
                    available,
                });
            }

            working.insert(tx.sender().to_string(), available - required);
            credit(&mut working, tx.recipient(), tx.amount())?;
            credit(&mut working, producer, tx.tip())?;
            tips = tips.checked_add(tx.tip()).ok_or(LedgerError::BalanceOverflow)?;
            burned = burned
                .checked_add(tx.base_fee())
                .ok_or(LedgerError::BalanceOverflow)?;
        }

        let reward = self.config.block_reward;
        credit(&mut working, producer, reward)?;
        let total_minted = self
            .total_minted
            .checked_add(reward)
            .ok_or(LedgerError::BalanceOverflow)?;
        let total_burned = self
            .total_burned
            .checked_add(burned)
            .ok_or(LedgerError::BalanceOverflow)?;

        // Commit. Nothing below can fail.
        self.balances.replace(working);
        self.total_minted = total_minted;
        self.total_burned = total_burned;

        let mut applied = block.clone();
        applied.header.block_reward = Some(reward);
        applied.header.burned_fees = Some(burned);
        for tx in &applied.transactions {
            if let Some(signature) = tx.resolve_signature(self.signatures.as_ref()) {
                self.signatures.store(tx.tx_id(), signature);
            }
        }

        let receipt = BlockReceipt {
            index: applied.index(),
            block_hash: applied.block_hash(),
            producer: producer.to_string(),
            reward,
            tips,
            burned,
            transactions: applied.transactions.len(),
        };
        self.blocks.push(applied);

        info!(
            index = receipt.index,
            txs = receipt.transactions,
            reward,
            tips,
            burned,
            "block applied"
        );
        Ok(receipt)
    }

    /// Boolean form of [`try_apply`](Self::try_apply).
    pub fn apply(&mut self, block: &Block, producer: &str) -> bool {
        self.report(block, |ledger| ledger.try_apply(block, producer))
    }

    /// `validate_structure` then `apply`.
    pub fn try_add_block(
        &mut self,
        block: &Block,
        producer: &str,
    ) -> Result<BlockReceipt, LedgerError> {
        self.try_validate_structure(block, self.config.block_size)?;
        self.try_apply(block, producer)
    }

    /// Boolean form of [`try_add_block`](Self::try_add_block).
    pub fn add_block(&mut self, block: &Block, producer: &str) -> bool {
        self.report(block, |ledger| ledger.try_add_block(block, producer))
    }

    fn report(
        &mut self,
        block: &Block,
        op: impl FnOnce(&mut Self) -> Result<BlockReceipt, LedgerError>,
    ) -> bool {
        match op(self) {
            Ok(_) => true,
            Err(err) => {
                warn!(index = block.index(), %err, "block rejected");
                false
            }
        }
    }

    // === Queries ===

    /// Chain tip.
    pub fn latest_block(&self) -> Option<&Block> {
        self.blocks.last()
    }

    /// Block at height `index`.
    pub fn block_by_index(&self, index: u64) -> Option<&Block> {
        usize::try_from(index).ok().and_then(|i| self.blocks.get(i))
    }

    /// All blocks, genesis first.
    pub fn blocks(&self) -> &[Block] {
        &self.blocks
    }

    /// Number of blocks including genesis.
    pub fn chain_len(&self) -> usize {
        self.blocks.len()
    }

    /// Committed balance of `address`.
    pub fn balance_of(&self, address: &str) -> u64 {
        self.balances.balance_of(address)
    }

    /// Copy of all committed balances.
    pub fn balances(&self) -> BalanceMap {
        self.balances.snapshot()
    }

    /// Live handle to the committed balances, for readers such as the mempool.
    pub fn shared_balances(&self) -> SharedBalances {
        self.balances.clone()
    }

    /// Sum of genesis balances.
    pub fn initial_supply(&self) -> u128 {
        self.initial_supply
    }

    /// Cumulative minted rewards.
    pub fn total_minted(&self) -> u64 {
        self.total_minted
    }

    /// Cumulative burned base fees.
    pub fn total_burned(&self) -> u64 {
        self.total_burned
    }

    /// Current proof-of-work difficulty.
    pub fn difficulty(&self) -> u32 {
        self.config.difficulty
    }

    /// Configuration in force.
    pub fn config(&self) -> &LedgerConfig {
        &self.config
    }

    /// Signature store shared with transaction verification.
    pub fn signature_store(&self) -> Arc<dyn SignatureStore> {
        Arc::clone(&self.signatures)
    }

    /// Checks `Σ balances == initial + minted - burned`.
    pub fn audit_supply(&self) -> Result<(), LedgerError> {
        let expected = self.initial_supply + u128::from(self.total_minted)
            - u128::from(self.total_burned);
        let actual = self.balances.total();
        if expected != actual {
            return Err(LedgerError::ConservationViolated { expected, actual });
        }
        Ok(())
    }
}

fn credit(balances: &mut BalanceMap, address: &str, amount: u64) -> Result<(), LedgerError> {
    let entry = balances.entry(address.to_string()).or_insert(0);
    *entry = entry
        .checked_add(amount)
        .ok_or(LedgerError::BalanceOverflow)?;
    Ok(())
}
