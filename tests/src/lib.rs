//! # Proof-of-Ledger Test Suite
//!
//! ## Structure
//!
//! ```text
//! tests/src/
//! ├── fixtures.rs           # Wallets, genesis, signed transfers
//! └── integration/
//!     ├── end_to_end.rs     # Admit, mine, apply, query
//!     ├── ledger_flows.rs   # Mempool → sealer → ledger interplay
//!     ├── light_client.rs   # Bloom + Merkle two-phase checks
//!     ├── witnesses.rs      # Lean blocks and signature stores
//!     └── properties.rs     # Conservation, atomicity, Bloom soundness
//! ```
//!
//! ## Running Tests
//!
//! ```bash
//! cargo test -p pl-tests
//! cargo test -p pl-tests integration::end_to_end::
//! cargo bench -p pl-tests
//! ```

#![allow(dead_code)]

pub mod fixtures;
pub mod integration;
