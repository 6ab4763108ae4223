//! Live balance map.
//!
//! One writer (the ledger commit) and many readers (mempool admission,
//! balance queries). Handles are cheap clones of the same map.

use std::collections::BTreeMap;
use std::sync::Arc;

use parking_lot::RwLock;
use shared_types::Address;

/// Address → balance. Absent addresses hold 0.
pub type BalanceMap = BTreeMap<Address, u64>;

/// Shared handle to the committed balances.
#[derive(Debug, Clone, Default)]
pub struct SharedBalances {
    inner: Arc<RwLock<BalanceMap>>,
}

impl SharedBalances {
    /// Handle over `initial`.
    pub fn new(initial: BalanceMap) -> Self {
        Self {
            inner: Arc::new(RwLock::new(initial)),
        }
    }

    /// Balance of `address`.
    pub fn balance_of(&self, address: &str) -> u64 {
        self.inner.read().get(address).copied().unwrap_or(0)
    }

    /// Copy of the whole map.
    pub fn snapshot(&self) -> BalanceMap {
        self.inner.read().clone()
    }

    /// Sum of all balances.
    pub fn total(&self) -> u128 {
        self.inner.read().values().map(|b| u128::from(*b)).sum()
    }

    /// Swap in a fully computed map.
    pub(crate) fn replace(&self, next: BalanceMap) {
        *self.inner.write() = next;
    }
}
