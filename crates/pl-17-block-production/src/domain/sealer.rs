//! Proof-of-work nonce search.

use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};

use shared_crypto::{meets_difficulty, Hash};
use shared_types::{Block, BlockHeader};
use tracing::{debug, info, warn};

use crate::config::SealerConfig;
use crate::error::{BlockProductionError, Result};

/// A successful seal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SealOutcome {
    /// Winning nonce, already written into the header.
    pub nonce: u64,
    /// Hashes computed across all workers.
    pub attempts: u64,
    /// Sealed header hash.
    pub hash: Hash,
}

/// Bounded nonce search over a block header.
#[derive(Debug, Clone, Default)]
pub struct ProofOfWorkSealer {
    config: SealerConfig,
}

impl ProofOfWorkSealer {
    /// Sealer with `config`.
    pub fn new(config: SealerConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Active configuration.
    pub fn config(&self) -> &SealerConfig {
        &self.config
    }

    /// Search for a nonce whose header hash has `difficulty` leading zero hex
    /// digits. Returns false once `max_attempts` hashes have failed; the nonce
    /// is then left at the last value tried.
    pub fn seal(&self, block: &mut Block, difficulty: u32) -> bool {
        match self.try_seal(block, difficulty) {
            Ok(_) => true,
            Err(err) => {
                warn!(index = block.index(), %err, "sealing failed");
                false
            }
        }
    }

    /// [`seal`](Self::seal) reporting the outcome.
    #[tracing::instrument(
        skip(self, block),
        fields(index = block.header.index, threads = self.config.threads)
    )]
    pub fn try_seal(&self, block: &mut Block, difficulty: u32) -> Result<SealOutcome> {
        debug!(max_attempts = self.config.max_attempts, "starting nonce search");

        let found = if self.config.threads <= 1 {
            self.scan_sequential(&mut block.header, difficulty)
        } else {
            self.scan_parallel(&block.header, difficulty)
        };

        match found {
            (Some(nonce), attempts) => {
                block.header.nonce = nonce;
                let hash = block.header.hash();
                info!(nonce, attempts, hash = %shared_crypto::to_hex(&hash), "block sealed");
                Ok(SealOutcome {
                    nonce,
                    attempts,
                    hash,
                })
            }
            (None, attempts) => {
                block.header.nonce = self.config.max_attempts.saturating_sub(1);
                Err(BlockProductionError::MiningExhausted {
                    attempts,
                    difficulty,
                })
            }
        }
    }

    fn scan_sequential(&self, header: &mut BlockHeader, difficulty: u32) -> (Option<u64>, u64) {
        for nonce in 0..self.config.max_attempts {
            header.nonce = nonce;
            if meets_difficulty(&header.hash(), difficulty) {
                return (Some(nonce), nonce + 1);
            }
        }
        (None, self.config.max_attempts)
    }

    /// Worker `w` of `T` tries `w, w + T, w + 2T, ...` below `max_attempts`.
    /// The first hit flips `found`; the others stop at their next check.
    fn scan_parallel(&self, header: &BlockHeader, difficulty: u32) -> (Option<u64>, u64) {
        let threads = self.config.threads as u64;
        let max_attempts = self.config.max_attempts;
        let found = AtomicBool::new(false);
        let winner = AtomicU64::new(0);
        let attempts = AtomicU64::new(0);

        std::thread::scope(|scope| {
            for worker in 0..threads {
                let mut header = header.clone();
                let (found, winner, attempts) = (&found, &winner, &attempts);
                scope.spawn(move || {
                    let mut tried = 0u64;
                    let mut nonce = worker;
                    while nonce < max_attempts && !found.load(Ordering::Acquire) {
                        header.nonce = nonce;
                        tried += 1;
                        if meets_difficulty(&header.hash(), difficulty) {
                            if found
                                .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
                                .is_ok()
                            {
                                winner.store(nonce, Ordering::Release);
                            }
                            break;
                        }
                        nonce = match nonce.checked_add(threads) {
                            Some(next) => next,
                            None => break,
                        };
                    }
                    attempts.fetch_add(tried, Ordering::Relaxed);
                });
            }
        });

        let attempts = attempts.into_inner();
        if found.into_inner() {
            (Some(winner.into_inner()), attempts)
        } else {
            (None, attempts)
        }
    }
}
