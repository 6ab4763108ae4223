//! # Adapters
//!
//! Port implementations connecting subsystems.

pub mod balances;

pub use balances::LedgerBalanceAdapter;
