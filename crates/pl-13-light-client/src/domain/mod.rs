//! # Domain Layer

pub mod errors;
pub mod verdict;

pub use errors::LightClientError;
pub use verdict::InclusionVerdict;
