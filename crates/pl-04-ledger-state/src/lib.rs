//! # pl-04-ledger-state
//!
//! Ledger state machine for the proof-of-work ledger.
//!
//! ## Role in System
//!
//! - **Single Source of Truth**: authoritative account balances
//! - **Gatekeeper**: a block joins the chain only through [`Ledger::add_block`]
//! - **Supply Accounting**: tracks minted rewards and burned base fees
//!
//! ## Lifecycle
//!
//! ```text
//! EMPTY ──add_genesis──→ GENESIS-SET ──apply──→ GROWING ──apply──→ GROWING ...
//! ```
//!
//! There is no rollback transition and no terminal state.
//!
//! ## Application
//!
//! ```text
//! validate_structure(block)
//!   └─ working = copy(balances)
//!        for tx in block:  verify signature, check funds, move value, pay tip
//!        credit reward
//!   └─ commit: balances = working, totals += (reward, burned), stamp header,
//!              append block, persist signatures
//! ```
//!
//! Any failure before commit leaves the ledger exactly as it was.
//!
//! ## Invariants
//!
//! | Invariant | Location |
//! |-----------|----------|
//! | `Σ balances = initial + minted - burned` | `Ledger::audit_supply` |
//! | `index = prev.index + 1`, `prev_hash = prev.hash` | `domain/validation.rs` |
//! | `merkle_root` commits to the block's transactions | `domain/validation.rs` |
//! | At most `cap` transactions per block | `domain/validation.rs` |

pub mod config;
pub mod domain;

pub use config::{BlockSizePolicy, LedgerConfig, BLOCK_TX_CAP};
pub use domain::*;
