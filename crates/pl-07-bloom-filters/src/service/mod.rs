//! Bloom filter services.

pub mod bloom_index;

pub use bloom_index::BloomIndex;
