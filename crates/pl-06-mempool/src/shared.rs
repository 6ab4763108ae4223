//! # Shared Mempool
//!
//! `accept` reads the pool and the balance view before writing, and
//! `get_batch` reads then drains. Both run under one mutex so concurrent
//! producers cannot interleave inside either operation.

use std::sync::Arc;

use parking_lot::Mutex;
use shared_types::{Transaction, TxId};
use tracing::debug;

use crate::domain::{MempoolConfig, MempoolError, MempoolStatus, TransactionPool};
use crate::ports::{BalanceProvider, MempoolApi};

/// Cloneable handle to a lock-protected [`TransactionPool`].
pub struct SharedMempool<P> {
    inner: Arc<Mutex<TransactionPool<P>>>,
}

impl<P> Clone for SharedMempool<P> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<P: BalanceProvider> SharedMempool<P> {
    /// Wrap a fresh pool.
    pub fn new(config: MempoolConfig, balances: P) -> Self {
        Self {
            inner: Arc::new(Mutex::new(TransactionPool::new(config, balances))),
        }
    }

    /// True if `tx_id` is queued.
    pub fn contains(&self, tx_id: &TxId) -> bool {
        self.inner.lock().contains(tx_id)
    }

    /// Draw a batch of the configured default size.
    pub fn get_default_batch(&self) -> Vec<Transaction> {
        self.inner.lock().get_default_batch()
    }

    /// Current status.
    pub fn status(&self) -> MempoolStatus {
        self.inner.lock().status()
    }
}

impl<P: BalanceProvider> MempoolApi for SharedMempool<P> {
    fn try_accept(&self, tx: Transaction) -> Result<TxId, MempoolError> {
        self.inner.lock().try_accept(tx)
    }

    fn accept(&self, tx: Transaction) -> bool {
        match self.try_accept(tx) {
            Ok(_) => true,
            Err(err) => {
                debug!(%err, "transaction rejected");
                false
            }
        }
    }

    fn get_batch(&self, max: usize) -> Vec<Transaction> {
        self.inner.lock().get_batch(max)
    }

    fn size(&self) -> usize {
        self.inner.lock().size()
    }

    fn clear(&self) {
        self.inner.lock().clear();
    }
}
