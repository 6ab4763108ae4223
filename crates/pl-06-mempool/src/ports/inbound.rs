//! Inbound (Driving) port: what block producers and wallets call.

use shared_types::Transaction;

use crate::domain::MempoolError;
use shared_types::TxId;

/// Admission and draw operations.
pub trait MempoolApi {
    /// Admit `tx`, reporting why it was refused.
    fn try_accept(&self, tx: Transaction) -> Result<TxId, MempoolError>;

    /// Admit `tx`. `false` for duplicates and unaffordable transactions.
    fn accept(&self, tx: Transaction) -> bool {
        self.try_accept(tx).is_ok()
    }

    /// Remove and return up to `max` transactions, oldest first.
    fn get_batch(&self, max: usize) -> Vec<Transaction>;

    /// Number of queued transactions.
    fn size(&self) -> usize;

    /// Drop everything.
    fn clear(&self);
}
