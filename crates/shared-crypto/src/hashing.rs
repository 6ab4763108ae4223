//! # SHA-256 Hashing
//!
//! The single 256-bit hash used across the ledger, plus the hex helpers the
//! proof-of-work target is expressed in.

use sha2::{Digest, Sha256};

/// SHA-256 output (256-bit).
pub type Hash = [u8; 32];

/// All-zero hash, used as the genesis parent.
pub const ZERO_HASH: Hash = [0u8; 32];

/// Stateful SHA-256 hasher.
#[derive(Clone, Default)]
pub struct Sha256Hasher {
    inner: Sha256,
}

impl Sha256Hasher {
    /// Create new hasher.
    pub fn new() -> Self {
        Self {
            inner: Sha256::new(),
        }
    }

    /// Update with data.
    pub fn update(&mut self, data: &[u8]) -> &mut Self {
        self.inner.update(data);
        self
    }

    /// Finalize and return hash. The hasher can keep absorbing afterwards.
    pub fn finalize(&self) -> Hash {
        self.inner.clone().finalize().into()
    }

    /// Reset hasher for reuse.
    pub fn reset(&mut self) {
        self.inner = Sha256::new();
    }
}

/// Hash data with SHA-256 (one-shot).
pub fn sha256(data: &[u8]) -> Hash {
    Sha256::digest(data).into()
}

/// Hash the concatenation of multiple inputs.
pub fn sha256_many(inputs: &[&[u8]]) -> Hash {
    let mut hasher = Sha256Hasher::new();
    for input in inputs {
        hasher.update(input);
    }
    hasher.finalize()
}

/// Lowercase hex encoding of a hash.
pub fn to_hex(hash: &Hash) -> String {
    hex::encode(hash)
}

/// Number of leading `0` characters in the lowercase hex form of `hash`.
pub fn leading_zero_nibbles(hash: &Hash) -> u32 {
    let mut count = 0;
    for byte in hash {
        if *byte == 0 {
            count += 2;
            continue;
        }
        if byte >> 4 == 0 {
            count += 1;
        }
        break;
    }
    count
}

/// True if the hex form of `hash` starts with `difficulty` zero characters.
pub fn meets_difficulty(hash: &Hash, difficulty: u32) -> bool {
    leading_zero_nibbles(hash) >= difficulty
}
