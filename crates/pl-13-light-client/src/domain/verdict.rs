//! # Inclusion Verdicts

use serde::{Deserialize, Serialize};

/// Answer to "is the transaction in this block?".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InclusionVerdict {
    /// Merkle proof verified against the header root.
    Included,
    /// The Bloom filter ruled it out; no proof was fetched.
    FilteredOut,
    /// Filter said maybe, but no proof verified (false positive).
    ProofRejected,
}

impl InclusionVerdict {
    /// True only for a verified proof.
    pub fn is_included(self) -> bool {
        matches!(self, Self::Included)
    }

    /// True if the Bloom filter answered "maybe".
    pub fn passed_filter(self) -> bool {
        !matches!(self, Self::FilteredOut)
    }
}
