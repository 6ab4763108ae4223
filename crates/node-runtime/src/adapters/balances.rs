//! # Balance Adapter
//!
//! Lets mempool admission read the ledger's committed balances.

use pl_04_ledger_state::SharedBalances;
use pl_06_mempool::BalanceProvider;

/// [`BalanceProvider`] over the ledger's live balance map.
#[derive(Debug, Clone)]
pub struct LedgerBalanceAdapter {
    balances: SharedBalances,
}

impl LedgerBalanceAdapter {
    /// Adapter reading `balances`.
    pub fn new(balances: SharedBalances) -> Self {
        Self { balances }
    }
}

impl BalanceProvider for LedgerBalanceAdapter {
    fn balance_of(&self, address: &str) -> u64 {
        self.balances.balance_of(address)
    }
}
