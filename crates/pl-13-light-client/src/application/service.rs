//! # Light Client Service
//!
//! Orchestrates the filter phase and the proof phase against one full node.

use lru::LruCache;
use std::num::NonZeroUsize;

use pl_03_merkle_commitment::{verify_proof, MerkleProof};
use shared_types::TxId;
use tracing::debug;

use crate::config::LightClientConfig;
use crate::domain::{InclusionVerdict, LightClientError};
use crate::ports::FullNodeConnection;

/// Light client bound to a full node.
pub struct LightClient<N: FullNodeConnection> {
    /// Configuration.
    config: LightClientConfig,
    /// Source of headers, filters and proofs.
    node: N,
    /// Settled verdicts keyed by (block index, tx id).
    verdicts: Option<LruCache<(u64, TxId), InclusionVerdict>>,
}

impl<N: FullNodeConnection> LightClient<N> {
    /// Create a light client talking to `node`.
    pub fn new(config: LightClientConfig, node: N) -> Self {
        let verdicts = NonZeroUsize::new(config.verdict_cache_size).map(LruCache::new);
        Self {
            config,
            node,
            verdicts,
        }
    }

    /// Configuration in use.
    pub fn config(&self) -> &LightClientConfig {
        &self.config
    }

    /// The connected full node.
    pub fn node(&self) -> &N {
        &self.node
    }

    /// Number of cached verdicts.
    pub fn cached_verdicts(&self) -> usize {
        self.verdicts.as_ref().map_or(0, LruCache::len)
    }

    /// Run the two-phase inclusion check for `tx_id` in block `index`.
    ///
    /// # Errors
    ///
    /// `BlockNotFound` if the node has no block at `index`. Every other
    /// outcome, including "not included", is an `Ok` verdict.
    pub fn check_tx_in_block(
        &mut self,
        index: u64,
        tx_id: &TxId,
    ) -> Result<InclusionVerdict, LightClientError> {
        let key = (index, *tx_id);
        if let Some(verdict) = self.verdicts.as_mut().and_then(|cache| cache.get(&key)) {
            return Ok(*verdict);
        }

        let verdict = self.evaluate(index, tx_id)?;
        debug!(index, tx = %tx_id, ?verdict, "inclusion verdict");
        if let Some(cache) = self.verdicts.as_mut() {
            cache.put(key, verdict);
        }
        Ok(verdict)
    }

    /// `true` iff the transaction is provably in block `index`.
    pub fn verify_inclusion(&mut self, index: u64, tx_id: &TxId) -> Result<bool, LightClientError> {
        self.check_tx_in_block(index, tx_id)
            .map(InclusionVerdict::is_included)
    }

    /// Fetch a proof and return it only if it verifies against the header.
    ///
    /// Skips the Bloom phase; for callers that want the proof itself.
    pub fn fetch_verified_proof(
        &self,
        index: u64,
        tx_id: &TxId,
    ) -> Result<MerkleProof, LightClientError> {
        let header = self
            .node
            .block_header(index)
            .ok_or(LightClientError::BlockNotFound { index })?;
        match self.node.merkle_proof(index, tx_id) {
            Some(proof) if verify_proof(&header.merkle_root, tx_id, &proof) => Ok(proof),
            _ => Err(LightClientError::InvalidProof {
                index,
                tx_id: *tx_id,
            }),
        }
    }

    fn evaluate(&self, index: u64, tx_id: &TxId) -> Result<InclusionVerdict, LightClientError> {
        let not_found = LightClientError::BlockNotFound { index };
        let header = self.node.block_header(index).ok_or(not_found.clone())?;

        // Phase 1: a negative filter answer is final.
        if !self.node.might_contain_tx(index, tx_id).ok_or(not_found)? {
            return Ok(InclusionVerdict::FilteredOut);
        }

        // Phase 2: only a verifying proof confirms.
        let verified = self
            .node
            .merkle_proof(index, tx_id)
            .is_some_and(|proof| verify_proof(&header.merkle_root, tx_id, &proof));
        Ok(if verified {
            InclusionVerdict::Included
        } else {
            InclusionVerdict::ProofRejected
        })
    }
}
