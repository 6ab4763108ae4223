//! Bloom filter domain layer.

pub mod block_filter;
pub mod bloom_filter;
pub mod config;
pub mod hash_functions;

pub use block_filter::BlockFilter;
pub use bloom_filter::BloomFilter;
pub use config::BloomConfig;
pub use hash_functions::compute_hash_positions;
