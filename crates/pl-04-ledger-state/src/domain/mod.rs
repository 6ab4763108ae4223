//! Ledger domain layer.

pub mod balances;
pub mod errors;
pub mod ledger;
pub mod validation;

pub use balances::{BalanceMap, SharedBalances};
pub use errors::{LedgerError, StructuralError};
pub use ledger::{BlockReceipt, Ledger, LedgerPhase};
pub use validation::validate_structure;
