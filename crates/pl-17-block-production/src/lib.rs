//! # Block Production - Candidate Assembly & Proof-of-Work Sealing
//!
//! Turns a drawn mempool batch into a sealed block:
//!
//! ```text
//! batch ──► build_candidate(prev, producer, batch) ──► Block { nonce: 0 }
//!                                                         │
//!                                                         ▼
//!                         ProofOfWorkSealer::seal(&mut block, difficulty)
//!                                                         │
//!                        ┌────────────────────────────────┴──────┐
//!                        ▼                                       ▼
//!            hash has `difficulty` leading            max_attempts exhausted
//!            zero hex digits: nonce kept              candidate discarded
//! ```
//!
//! ## Sealing
//!
//! | Mode | Search | Cancellation |
//! |------|--------|--------------|
//! | sequential (`threads = 1`) | nonce 0, 1, 2, ... | attempt bound |
//! | parallel (`threads > 1`) | worker `w` tries `w, w + T, w + 2T, ...` | shared flag + attempt bound |
//!
//! Both modes never exceed `max_attempts` hashes in total and always terminate.
//! The sealer only ever touches `header.nonce`.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod config;
pub mod domain;
pub mod error;

pub use config::SealerConfig;
pub use domain::{build_candidate, build_candidate_now, ProofOfWorkSealer, SealOutcome};
pub use error::{BlockProductionError, Result};
