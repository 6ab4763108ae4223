//! # Node Runtime Library
//!
//! Single-process wiring of the ledger subsystems. The `main.rs` binary runs
//! a mining simulation on top of it; tests drive [`FullNode`] directly.
//!
//! ## Wiring
//!
//! ```text
//!              submit_transaction
//!                      │
//!                      ▼
//!   ┌──────────── SharedMempool ◄──── LedgerBalanceAdapter (live balances)
//!   │  get_batch       │                        ▲
//!   ▼                  │                        │ commit
//! build_candidate ──► ProofOfWorkSealer ──► Ledger::try_add_block
//!                                               │
//!                                               ▼
//!                                          BloomIndex ──► FullNodeConnection
//!                                                                 │
//!                                                                 ▼
//!                                                            LightClient
//! ```
//!
//! ## Architectural Patterns
//!
//! - **Hexagonal Architecture**: subsystems expose ports; this crate provides
//!   the adapters between them
//! - **Explicit capabilities**: the signature store and verifier are owned here
//!   and injected, never global

#![warn(missing_docs)]
#![allow(clippy::type_complexity)]

pub mod adapters;
pub mod config;
pub mod error;
pub mod node;
pub mod simulation;

pub use adapters::LedgerBalanceAdapter;
pub use config::{load_config, load_config_from, NodeConfig, SimulationConfig};
pub use error::NodeError;
pub use node::FullNode;
pub use simulation::{run_simulation, SimulationReport};
