//! # PL-07 Bloom Filters
//!
//! Per-block Bloom filters over transaction identities, consumed by light
//! clients as a cheap first pass before asking for a Merkle proof.
//!
//! ## Architecture
//!
//! - **Domain Layer** (`domain/`): Pure logic, no I/O
//!   - `BloomFilter`: m-bit array with k seeded SHA-256 positions
//!   - `BlockFilter`: filter over one block's `tx_id`s
//!   - `BloomConfig`: m and k, validated
//! - **Service Layer** (`service/`)
//!   - `BloomIndex`: block index → `BlockFilter`, built eagerly on
//!     finalization or lazily on first query
//!
//! ## Position Derivation
//!
//! ```text
//! pos_i(item) = U256_be( SHA-256( decimal(i) ‖ item ) ) mod m,   i = 0..k
//! ```
//!
//! ## Invariants
//!
//! - No false negatives: after `insert(x)`, `contains(x)` is true.
//! - A block's filter is built once and never mutated.

pub mod domain;
pub mod error;
pub mod service;

pub use domain::{compute_hash_positions, BlockFilter, BloomConfig, BloomFilter};
pub use error::FilterError;
pub use service::BloomIndex;
