//! # Signature Store
//!
//! External key-value capability holding detached signatures by `tx_id`.
//! Entries are write-once: the first signature stored for an id wins.
//! The store is owned and injected, never a process global.

use std::collections::HashMap;
use std::sync::Arc;

use parking_lot::RwLock;
use tracing::debug;

use crate::TxId;

/// Detached signature storage.
pub trait SignatureStore: Send + Sync {
    /// Record `signature` for `tx_id`. Returns `false` if one was already kept.
    fn store(&self, tx_id: TxId, signature: Vec<u8>) -> bool;

    /// Signature previously stored for `tx_id`.
    fn get(&self, tx_id: &TxId) -> Option<Vec<u8>>;
}

impl<T: SignatureStore + ?Sized> SignatureStore for Arc<T> {
    fn store(&self, tx_id: TxId, signature: Vec<u8>) -> bool {
        (**self).store(tx_id, signature)
    }

    fn get(&self, tx_id: &TxId) -> Option<Vec<u8>> {
        (**self).get(tx_id)
    }
}

/// Process-lifetime in-memory store (shared reader / exclusive writer).
#[derive(Debug, Default)]
pub struct InMemorySignatureStore {
    entries: RwLock<HashMap<TxId, Vec<u8>>>,
}

impl InMemorySignatureStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored signatures.
    pub fn len(&self) -> usize {
        self.entries.read().len()
    }

    /// True if nothing is stored.
    pub fn is_empty(&self) -> bool {
        self.entries.read().is_empty()
    }
}

impl SignatureStore for InMemorySignatureStore {
    fn store(&self, tx_id: TxId, signature: Vec<u8>) -> bool {
        let mut entries = self.entries.write();
        if let Some(existing) = entries.get(&tx_id) {
            if *existing != signature {
                debug!(tx = %tx_id, "conflicting signature ignored, first write kept");
            }
            return false;
        }
        entries.insert(tx_id, signature);
        true
    }

    fn get(&self, tx_id: &TxId) -> Option<Vec<u8>> {
        self.entries.read().get(tx_id).cloned()
    }
}
