//! # Witness Separation
//!
//! A lean block carries transactions without keys or signatures; those travel
//! in a parallel [`Witnesses`] map keyed by `tx_id`. Re-merging restores the
//! original block and cannot alter any identity or the Merkle root, since
//! neither covers witness data.
//!
//! A transaction without a witness entry comes back as
//! [`SignatureWitness::Detached`]: its signature, if any, must be resolved
//! from the signature store.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_with::{hex::Hex, serde_as};

use crate::errors::CodecError;
use crate::{Block, BlockHeader, SignatureWitness, Transaction, TxId};

/// Key material detached from a lean transaction.
#[serde_as]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Witness {
    /// Signature bytes, absent when the signature lives in the store.
    #[serde_as(as = "Option<Hex>")]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub signature: Option<Vec<u8>>,
    /// Sender public key.
    #[serde_as(as = "Option<Hex>")]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub public_key: Option<Vec<u8>>,
}

/// `tx_id -> witness`, ordered for stable output.
pub type Witnesses = BTreeMap<TxId, Witness>;

/// Block whose transactions carry no key material.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeanBlock {
    /// Header, unchanged.
    pub header: BlockHeader,
    /// Stripped transactions.
    pub transactions: Vec<Transaction>,
}

impl Block {
    /// Split into a lean block and its witnesses.
    pub fn to_lean(&self) -> (LeanBlock, Witnesses) {
        let mut witnesses = Witnesses::new();
        for tx in &self.transactions {
            let signature = match tx.witness() {
                SignatureWitness::Attached(sig) => Some(sig.clone()),
                _ => None,
            };
            let public_key = tx.public_key().map(<[u8]>::to_vec);
            if signature.is_some() || public_key.is_some() {
                witnesses.insert(
                    tx.tx_id(),
                    Witness {
                        signature,
                        public_key,
                    },
                );
            }
        }
        let lean = LeanBlock {
            header: self.header.clone(),
            transactions: self.transactions.iter().map(Transaction::stripped).collect(),
        };
        (lean, witnesses)
    }

    /// Re-merge a lean block with its witnesses.
    ///
    /// # Errors
    ///
    /// [`CodecError::UnknownWitness`] if a witness names a transaction the
    /// block does not contain.
    pub fn from_lean(lean: LeanBlock, witnesses: &Witnesses) -> Result<Self, CodecError> {
        if let Some(orphan) = witnesses
            .keys()
            .find(|id| !lean.transactions.iter().any(|tx| tx.tx_id() == **id))
        {
            return Err(CodecError::UnknownWitness {
                tx_id: orphan.to_hex(),
            });
        }

        let transactions = lean
            .transactions
            .into_iter()
            .map(|mut tx| {
                match witnesses.get(&tx.tx_id()) {
                    Some(w) => {
                        let variant = match &w.signature {
                            Some(sig) => SignatureWitness::Attached(sig.clone()),
                            None => SignatureWitness::Detached,
                        };
                        tx.set_witness(w.public_key.clone(), variant);
                    }
                    None => tx.set_witness(None, SignatureWitness::Detached),
                }
                tx
            })
            .collect();

        Ok(Block::new(lean.header, transactions))
    }

    /// Lean block as JSON, plus witnesses.
    pub fn to_lean_json(&self) -> Result<(String, Witnesses), CodecError> {
        let (lean, witnesses) = self.to_lean();
        Ok((serde_json::to_string(&lean)?, witnesses))
    }

    /// Decode a lean JSON block and re-merge `witnesses`.
    pub fn from_lean_json(json: &str, witnesses: &Witnesses) -> Result<Self, CodecError> {
        let lean: LeanBlock = serde_json::from_str(json)?;
        Self::from_lean(lean, witnesses)
    }
}
