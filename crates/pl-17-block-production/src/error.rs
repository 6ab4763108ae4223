//! Error types for block production

use thiserror::Error;

/// Result type alias for block production operations
pub type Result<T> = std::result::Result<T, BlockProductionError>;

/// Errors that can occur during block production
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BlockProductionError {
    /// No nonce within the attempt bound met the difficulty
    #[error("mining exhausted after {attempts} attempts at difficulty {difficulty}")]
    MiningExhausted {
        /// Hashes tried
        attempts: u64,
        /// Required leading zero hex digits
        difficulty: u32,
    },

    /// Invalid configuration
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}
