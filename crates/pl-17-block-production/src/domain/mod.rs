//! Block production domain: candidate assembly and nonce search.

pub mod candidate;
pub mod sealer;

pub use candidate::{build_candidate, build_candidate_now};
pub use sealer::{ProofOfWorkSealer, SealOutcome};
