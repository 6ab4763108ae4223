//! # Fee Policy
//!
//! | Constant | Value | Destination |
//! |----------|-------|-------------|
//! | [`BLOCK_REWARD`] | 50 | producer, once per applied block |
//! | [`BASE_FEE`] | 2 | nobody (burned) |
//! | [`TIP`] | 3 | producer |
//!
//! All sums are checked; `None` means the total does not fit in `u64`.

use crate::Transaction;

/// Fixed reward minted to the producer of every applied block.
pub const BLOCK_REWARD: u64 = 50;

/// Default per-transaction base fee (burned).
pub const BASE_FEE: u64 = 2;

/// Default per-transaction tip (paid to the producer).
pub const TIP: u64 = 3;

/// `amount + base_fee + tip`.
pub fn total_cost(amount: u64, base_fee: u64, tip: u64) -> Option<u64> {
    amount.checked_add(base_fee)?.checked_add(tip)
}

/// `(base_fee, tip)` of a transaction.
pub fn transaction_fees(tx: &Transaction) -> (u64, u64) {
    (tx.base_fee(), tx.tip())
}

/// Sum of tips in a batch.
pub fn total_tips(txs: &[Transaction]) -> Option<u64> {
    txs.iter().try_fold(0u64, |acc, tx| acc.checked_add(tx.tip()))
}

/// Sum of base fees in a batch; the amount a block burns.
pub fn burned_fees(txs: &[Transaction]) -> Option<u64> {
    txs.iter()
        .try_fold(0u64, |acc, tx| acc.checked_add(tx.base_fee()))
}

/// What the producer of `txs` earns: `reward + Σ tip`.
pub fn mining_reward(txs: &[Transaction], reward: u64) -> Option<u64> {
    total_tips(txs)?.checked_add(reward)
}
