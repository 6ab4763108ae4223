//! # Light Client
//!
//! Answers "is transaction T in block B?" without holding the chain.
//!
//! ## Protocol
//!
//! | Phase | Query | Outcome |
//! |-------|-------|---------|
//! | 0 | header of block B | missing block is a hard error |
//! | 1 | Bloom filter of B | "absent" ends the check: [`InclusionVerdict::FilteredOut`] |
//! | 2 | Merkle proof for T | verifies against header root: [`InclusionVerdict::Included`] |
//! |   |                    | missing or failing proof: [`InclusionVerdict::ProofRejected`] |
//!
//! A negative verdict is a value, never an error. Only an unknown block index
//! produces [`LightClientError::BlockNotFound`], so callers can always tell
//! "no such block" from "not in this block".
//!
//! ## Module Structure
//!
//! ```text
//! pl-13-light-client/
//! ├── domain/          # InclusionVerdict, errors
//! ├── ports/           # FullNodeConnection (outbound)
//! ├── application/     # LightClient orchestrating both phases
//! └── config.rs        # LightClientConfig
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod application;
pub mod config;
pub mod domain;
pub mod ports;

// Re-exports
pub use application::LightClient;
pub use config::LightClientConfig;
pub use domain::{InclusionVerdict, LightClientError};
pub use ports::FullNodeConnection;
