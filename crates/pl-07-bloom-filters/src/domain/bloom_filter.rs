//! Core Bloom filter implementation
//!
//! INVARIANT: No false negatives - if inserted, contains() MUST return true

use bitvec::prelude::*;
use serde::{Deserialize, Serialize};

use super::config::BloomConfig;
use super::hash_functions::compute_hash_positions;
use crate::error::FilterError;

/// Bloom filter for probabilistic membership testing
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BloomFilter {
    /// Bit array storing the filter state
    #[serde(with = "bitvec_serde")]
    bits: BitVec<u8, Lsb0>,
    /// Number of hash functions (k)
    k: usize,
    /// Size in bits (m)
    m: usize,
}

/// Serde support for BitVec
mod bitvec_serde {
    use bitvec::prelude::*;
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    pub fn serialize<S>(bits: &BitVec<u8, Lsb0>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        (bits.as_raw_slice(), bits.len()).serialize(serializer)
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<BitVec<u8, Lsb0>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let (bytes, len): (Vec<u8>, usize) = Deserialize::deserialize(deserializer)?;
        if len > bytes.len() * 8 {
            return Err(serde::de::Error::custom("bit length exceeds payload"));
        }
        let mut bits = BitVec::<u8, Lsb0>::from_vec(bytes);
        bits.truncate(len);
        Ok(bits)
    }
}

impl BloomFilter {
    /// Create an empty filter of `m` bits and `k` hash functions
    ///
    /// # Errors
    ///
    /// `InvalidParameters` if `m` or `k` is out of range.
    pub fn new(m: usize, k: usize) -> Result<Self, FilterError> {
        BloomConfig::new(m, k).map(|config| Self::empty(&config))
    }

    /// Create an empty filter from `config`, checking its ranges first
    pub fn with_config(config: &BloomConfig) -> Result<Self, FilterError> {
        config.validate()?;
        Ok(Self::empty(config))
    }

    /// Empty filter for a config that has already passed `validate`.
    pub(crate) fn empty(config: &BloomConfig) -> Self {
        Self {
            bits: bitvec![u8, Lsb0; 0; config.size_bits],
            k: config.hash_count,
            m: config.size_bits,
        }
    }

    /// Insert an element into the filter
    pub fn insert(&mut self, element: &[u8]) {
        for pos in compute_hash_positions(element, self.k, self.m) {
            self.bits.set(pos, true);
        }
    }

    /// Test if an element might be in the filter
    ///
    /// Returns:
    /// - `true` if the element might be in the set (could be false positive)
    /// - `false` if the element is definitely NOT in the set (never false negative)
    pub fn contains(&self, element: &[u8]) -> bool {
        compute_hash_positions(element, self.k, self.m)
            .into_iter()
            .all(|pos| self.bits[pos])
    }

    /// Get the number of bits set in the filter
    pub fn bits_set(&self) -> usize {
        self.bits.count_ones()
    }

    /// Get the filter size in bits
    pub fn size_bits(&self) -> usize {
        self.m
    }

    /// Get the number of hash functions
    pub fn hash_count(&self) -> usize {
        self.k
    }

    /// Serialize the filter to bytes
    pub fn to_bytes(&self) -> Result<Vec<u8>, FilterError> {
        bincode::serialize(self).map_err(|e| FilterError::SerializationError(e.to_string()))
    }

    /// Deserialize a filter from bytes
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, FilterError> {
        let filter: Self = bincode::deserialize(bytes)
            .map_err(|e| FilterError::SerializationError(e.to_string()))?;
        BloomConfig::new(filter.m, filter.k)?;
        if filter.bits.len() != filter.m {
            return Err(FilterError::SerializationError(format!(
                "bit array holds {} bits, header says {}",
                filter.bits.len(),
                filter.m
            )));
        }
        Ok(filter)
    }
}
