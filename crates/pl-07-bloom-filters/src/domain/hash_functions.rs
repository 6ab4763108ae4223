//! Hash functions for the Bloom filter
//!
//! Each of the k positions is an independent SHA-256 over the seed's decimal
//! string followed by the item bytes, read as a big-endian 256-bit integer
//! and reduced mod m.

use primitive_types::U256;
use shared_crypto::Sha256Hasher;

/// Position of `element` for hash function `seed` in an `m`-bit array.
pub fn seeded_position(element: &[u8], seed: usize, m: usize) -> usize {
    let mut hasher = Sha256Hasher::new();
    hasher.update(seed.to_string().as_bytes()).update(element);
    let digest = U256::from_big_endian(&hasher.finalize());
    // Remainder is < m, so it fits back into usize.
    (digest % U256::from(m)).low_u64() as usize
}

/// Compute k hash positions for an element
pub fn compute_hash_positions(element: &[u8], k: usize, m: usize) -> Vec<usize> {
    (0..k).map(|seed| seeded_position(element, seed, m)).collect()
}
