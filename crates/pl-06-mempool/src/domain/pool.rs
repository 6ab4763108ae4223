//! # Transaction Pool
//!
//! FIFO queue keyed by `tx_id`. Single-threaded; wrap it in
//! [`SharedMempool`](crate::SharedMempool) when several producers feed it.

use std::collections::{HashMap, VecDeque};

use shared_types::{Transaction, TxId};
use tracing::debug;

use super::errors::MempoolError;
use super::value_objects::{MempoolConfig, MempoolStatus};
use crate::ports::BalanceProvider;

/// Pending transactions in arrival order.
pub struct TransactionPool<P> {
    config: MempoolConfig,
    balances: P,
    /// Primary storage.
    by_id: HashMap<TxId, Transaction>,
    /// Arrival order. Holds exactly the keys of `by_id`.
    order: VecDeque<TxId>,
}

impl<P: BalanceProvider> TransactionPool<P> {
    /// Creates an empty pool that checks funds against `balances`.
    pub fn new(config: MempoolConfig, balances: P) -> Self {
        Self {
            config,
            balances,
            by_id: HashMap::new(),
            order: VecDeque::new(),
        }
    }

    /// Returns the configuration.
    pub fn config(&self) -> &MempoolConfig {
        &self.config
    }

    /// Number of queued transactions.
    pub fn size(&self) -> usize {
        self.by_id.len()
    }

    /// True if nothing is queued.
    pub fn is_empty(&self) -> bool {
        self.by_id.is_empty()
    }

    /// True if `tx_id` is queued.
    pub fn contains(&self, tx_id: &TxId) -> bool {
        self.by_id.contains_key(tx_id)
    }

    /// Queued transaction by id.
    pub fn get(&self, tx_id: &TxId) -> Option<&Transaction> {
        self.by_id.get(tx_id)
    }

    /// Queued ids, oldest first.
    pub fn pending_ids(&self) -> impl Iterator<Item = &TxId> {
        self.order.iter()
    }

    /// Adds a transaction to the back of the queue.
    ///
    /// # Errors
    /// - `DuplicateTransaction` if the id is already queued
    /// - `PoolFull` if at capacity
    /// - `CostOverflow` if amount plus fees overflows
    /// - `InsufficientBalance` if the sender cannot cover the total cost
    pub fn try_accept(&mut self, tx: Transaction) -> Result<TxId, MempoolError> {
        let tx_id = tx.tx_id();

        if self.by_id.contains_key(&tx_id) {
            return Err(MempoolError::DuplicateTransaction(tx_id));
        }

        if self.by_id.len() >= self.config.max_transactions {
            return Err(MempoolError::PoolFull {
                capacity: self.config.max_transactions,
            });
        }

        let required = tx.total_cost().ok_or(MempoolError::CostOverflow(tx_id))?;
        let available = self.balances.balance_of(tx.sender());
        if available < required {
            return Err(MempoolError::InsufficientBalance {
                tx_id,
                required,
                available,
            });
        }

        self.by_id.insert(tx_id, tx);
        self.order.push_back(tx_id);
        debug!(%tx_id, pending = self.order.len(), "transaction admitted");
        Ok(tx_id)
    }

    /// Boolean form of [`try_accept`](Self::try_accept).
    pub fn accept(&mut self, tx: Transaction) -> bool {
        match self.try_accept(tx) {
            Ok(_) => true,
            Err(err) => {
                debug!(%err, "transaction rejected");
                false
            }
        }
    }

    /// Removes and returns up to `max` transactions, oldest first.
    pub fn get_batch(&mut self, max: usize) -> Vec<Transaction> {
        let take = max.min(self.order.len());
        let batch: Vec<Transaction> = self
            .order
            .drain(..take)
            .filter_map(|id| self.by_id.remove(&id))
            .collect();
        debug!(drawn = batch.len(), remaining = self.order.len(), "batch drawn");
        batch
    }

    /// Draws a batch of the configured default size.
    pub fn get_default_batch(&mut self) -> Vec<Transaction> {
        self.get_batch(self.config.default_batch_size)
    }

    /// Drops every queued transaction.
    pub fn clear(&mut self) {
        self.by_id.clear();
        self.order.clear();
    }

    /// Current status.
    pub fn status(&self) -> MempoolStatus {
        MempoolStatus {
            pending: self.by_id.len(),
            capacity: self.config.max_transactions,
        }
    }
}
