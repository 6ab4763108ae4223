//! Outbound (Driven) ports for the Mempool subsystem.

use std::collections::{BTreeMap, HashMap};
use std::sync::Arc;

use shared_types::Address;

/// Read access to current account balances.
///
/// The node runtime implements this over the ledger's live balance map, so
/// admission always sees the latest committed state.
pub trait BalanceProvider: Send + Sync {
    /// Balance of `address`; unknown accounts hold 0.
    fn balance_of(&self, address: &str) -> u64;
}

impl<T: BalanceProvider + ?Sized> BalanceProvider for Arc<T> {
    fn balance_of(&self, address: &str) -> u64 {
        (**self).balance_of(address)
    }
}

impl BalanceProvider for BTreeMap<Address, u64> {
    fn balance_of(&self, address: &str) -> u64 {
        self.get(address).copied().unwrap_or(0)
    }
}

impl BalanceProvider for HashMap<Address, u64> {
    fn balance_of(&self, address: &str) -> u64 {
        self.get(address).copied().unwrap_or(0)
    }
}
