//! # Transaction Pool (Mempool) Subsystem
//!
//! **Subsystem ID:** 6
//!
//! ## Purpose
//!
//! Holds funds-checked, unconfirmed transactions in arrival order until the
//! block producer draws them into a candidate block.
//!
//! ## Domain Invariants
//!
//! | Invariant | Enforcement Location |
//! |-----------|---------------------|
//! | No duplicate `tx_id` | `domain/pool.rs` - `try_accept()` check |
//! | Map and FIFO order hold the same ids | `domain/pool.rs` - insert/draw touch both |
//! | Only `get_batch`/`clear` shrink the pool | `domain/pool.rs` |
//!
//! ## Admission
//!
//! ```text
//! accept(tx) ──dup?──→ reject
//!            ──balance(sender) < amount + base_fee + tip?──→ reject
//!            ──→ map[tx_id] = tx, order.push_back(tx_id)
//! get_batch(n) ──→ pop up to n ids from the front
//! ```
//!
//! Funds are checked once, against the live ledger balance at admission.
//! Nothing is re-checked on draw: a transaction admitted against a balance
//! that has since dropped is left for the ledger to reject when it applies
//! the block.
//!
//! ## Outbound Dependencies
//!
//! | Subsystem | Trait | Purpose |
//! |-----------|-------|---------|
//! | 4 (Ledger State) | `BalanceProvider` | Sender balance at admission |
//!
//! ## Module Structure
//!
//! ```text
//! ports/outbound.rs  - BalanceProvider
//! ports/inbound.rs   - MempoolApi
//! domain/pool.rs     - TransactionPool (single-threaded core)
//! shared.rs          - SharedMempool (one lock around accept/draw)
//! ```

#![warn(missing_docs)]

pub mod domain;
pub mod ports;
pub mod shared;

pub use domain::{MempoolConfig, MempoolError, MempoolStatus, TransactionPool};
pub use ports::{BalanceProvider, MempoolApi};
pub use shared::SharedMempool;
