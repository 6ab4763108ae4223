//! Mempool domain layer.

pub mod errors;
pub mod pool;
pub mod value_objects;

pub use errors::MempoolError;
pub use pool::TransactionPool;
pub use value_objects::{MempoolConfig, MempoolStatus};
