//! # Shared Crypto - Hashing and Signing Primitives
//!
//! Every hash in the ledger (transaction identity, header hash, Merkle nodes,
//! Bloom positions) is SHA-256. Signing is consumed by the rest of the
//! workspace only through the capability traits in [`capability`], so the
//! concrete curve is a wiring decision.
//!
//! ## Components
//!
//! | Module | Algorithm | Use Case |
//! |--------|-----------|----------|
//! | `hashing` | SHA-256 | Identities, headers, Merkle, Bloom, PoW target |
//! | `capability` | - | `sign(data)` / `verify(pubkey, data, sig)` seams |
//! | `signatures` | Ed25519 | Default wallet signing |
//! | `ecdsa` | secp256k1 | Alternative wallet signing |
//!
//! ## Security Properties
//!
//! - **Ed25519**: Deterministic nonces, no RNG dependency
//! - **secp256k1**: RFC 6979 deterministic nonces
//! - Secret key material is zeroized on drop

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod capability;
pub mod ecdsa;
pub mod errors;
pub mod hashing;
pub mod signatures;

// Re-exports
pub use capability::{SignatureVerifier, SigningCapability};
pub use ecdsa::{Secp256k1KeyPair, Secp256k1PublicKey, Secp256k1Signature, Secp256k1Verifier};
pub use errors::CryptoError;
pub use hashing::{
    leading_zero_nibbles, meets_difficulty, sha256, sha256_many, to_hex, Hash, Sha256Hasher,
    ZERO_HASH,
};
pub use signatures::{Ed25519KeyPair, Ed25519PublicKey, Ed25519Signature, Ed25519Verifier};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
