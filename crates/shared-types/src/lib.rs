//! # Shared Types Crate
//!
//! Domain entities every ledger subsystem agrees on: the [`Transaction`]
//! record and its fee policy, the [`Block`]/[`BlockHeader`] pair, the
//! canonical JSON their hashes are computed over, and the external
//! [`SignatureStore`] capability used for detached signatures.
//!
//! ## Design Principles
//!
//! - **Signature-free identity**: `tx_id` hashes only the economic fields, so
//!   attaching, detaching or re-merging a signature never changes it.
//! - **Canonical hashing**: anything hashed is serialized as sorted-key JSON
//!   with no whitespace (see [`canonical`]).
//! - **Explicit signature resolution**: a transaction carries a
//!   [`SignatureWitness`] variant chosen once, never an implicit fallback chain.

pub mod block;
pub mod canonical;
pub mod errors;
pub mod fees;
pub mod signature_store;
pub mod transaction;
pub mod witness;

pub use block::{Block, BlockHeader};
pub use errors::CodecError;
pub use fees::{BASE_FEE, BLOCK_REWARD, TIP};
pub use signature_store::{InMemorySignatureStore, SignatureStore};
pub use transaction::{SignatureWitness, Transaction, TxId};
pub use witness::{LeanBlock, Witness, Witnesses};

pub use shared_crypto::{Hash, ZERO_HASH};

/// Account address. Any non-empty string, e.g. `"alice"`.
pub type Address = String;
