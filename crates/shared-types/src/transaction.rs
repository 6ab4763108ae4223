//! # Transaction Model
//!
//! An immutable value transfer. Identity is the SHA-256 of the canonical JSON
//! of `{amount, base_fee, nonce, recipient, sender, tip}`; the public key and
//! signature are deliberately outside the preimage.
//!
//! ## Signature Resolution
//!
//! ```text
//! SignatureWitness::Unsigned  -> verify = false
//! SignatureWitness::Attached  -> verify(pk, preimage, sig)
//! SignatureWitness::Detached  -> verify(pk, preimage, store.get(tx_id)?)
//! ```

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::{json, Value};
use serde_with::{hex::Hex, serde_as};
use shared_crypto::{to_hex, Hash, SignatureVerifier, SigningCapability};

use crate::canonical::{canonical_bytes, canonical_hash};
use crate::errors::CodecError;
use crate::fees::{self, BASE_FEE, TIP};
use crate::signature_store::SignatureStore;
use crate::Address;

/// Transaction identity: SHA-256 of the canonical non-signature fields.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TxId(pub Hash);

impl TxId {
    /// Raw digest bytes.
    pub fn as_bytes(&self) -> &Hash {
        &self.0
    }

    /// Lowercase hex form.
    pub fn to_hex(&self) -> String {
        to_hex(&self.0)
    }
}

impl fmt::Display for TxId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl fmt::Debug for TxId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "TxId({}..)", &self.to_hex()[..12])
    }
}

impl FromStr for TxId {
    type Err = CodecError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let bytes = hex::decode(s).map_err(|e| CodecError::InvalidHex(e.to_string()))?;
        let hash: Hash = bytes
            .try_into()
            .map_err(|_| CodecError::InvalidHex(format!("expected 32 bytes: {s}")))?;
        Ok(Self(hash))
    }
}

impl Serialize for TxId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> Deserialize<'de> for TxId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

/// Where a transaction's signature lives.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SignatureWitness {
    /// No signature. Verification always fails.
    #[default]
    Unsigned,
    /// Signature bytes travel with the transaction.
    Attached(Vec<u8>),
    /// Signature is kept in an external [`SignatureStore`] keyed by `tx_id`.
    Detached,
}

/// A value transfer between two accounts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "TransactionRecord", into = "TransactionRecord")]
pub struct Transaction {
    sender: Address,
    recipient: Address,
    amount: u64,
    nonce: u64,
    base_fee: u64,
    tip: u64,
    public_key: Option<Vec<u8>>,
    witness: SignatureWitness,
    tx_id: TxId,
}

impl Transaction {
    /// Create an unsigned transfer with the default fees.
    pub fn new(
        sender: impl Into<Address>,
        recipient: impl Into<Address>,
        amount: u64,
        nonce: u64,
    ) -> Self {
        let mut tx = Self {
            sender: sender.into(),
            recipient: recipient.into(),
            amount,
            nonce,
            base_fee: BASE_FEE,
            tip: TIP,
            public_key: None,
            witness: SignatureWitness::Unsigned,
            tx_id: TxId([0u8; 32]),
        };
        tx.tx_id = tx.compute_id();
        tx
    }

    /// Replace the fees. Any existing signature is dropped since it no longer
    /// covers the preimage.
    pub fn with_fees(mut self, base_fee: u64, tip: u64) -> Self {
        self.base_fee = base_fee;
        self.tip = tip;
        self.public_key = None;
        self.witness = SignatureWitness::Unsigned;
        self.tx_id = self.compute_id();
        self
    }

    fn preimage(&self) -> Value {
        json!({
            "amount": self.amount,
            "base_fee": self.base_fee,
            "nonce": self.nonce,
            "recipient": self.recipient,
            "sender": self.sender,
            "tip": self.tip,
        })
    }

    fn compute_id(&self) -> TxId {
        TxId(canonical_hash(&self.preimage()))
    }

    /// Bytes that signatures cover.
    pub fn signing_preimage(&self) -> Vec<u8> {
        canonical_bytes(&self.preimage())
    }

    /// Transaction identity.
    pub fn tx_id(&self) -> TxId {
        self.tx_id
    }

    /// Sending account.
    pub fn sender(&self) -> &str {
        &self.sender
    }

    /// Receiving account.
    pub fn recipient(&self) -> &str {
        &self.recipient
    }

    /// Value moved to the recipient.
    pub fn amount(&self) -> u64 {
        self.amount
    }

    /// Per-sender sequence number.
    pub fn nonce(&self) -> u64 {
        self.nonce
    }

    /// Burned fee.
    pub fn base_fee(&self) -> u64 {
        self.base_fee
    }

    /// Fee paid to the block producer.
    pub fn tip(&self) -> u64 {
        self.tip
    }

    /// Sender public key, if signed.
    pub fn public_key(&self) -> Option<&[u8]> {
        self.public_key.as_deref()
    }

    /// Signature resolution variant.
    pub fn witness(&self) -> &SignatureWitness {
        &self.witness
    }

    /// `amount + base_fee + tip`, or `None` on overflow.
    pub fn total_cost(&self) -> Option<u64> {
        fees::total_cost(self.amount, self.base_fee, self.tip)
    }

    /// Sign and keep the signature inside the transaction.
    pub fn sign(&mut self, signer: &dyn SigningCapability) {
        let signature = signer.sign_bytes(&self.signing_preimage());
        self.public_key = Some(signer.public_key_bytes());
        self.witness = SignatureWitness::Attached(signature);
    }

    /// Sign and write the signature to `store`, keeping only the key here.
    pub fn sign_detached(&mut self, signer: &dyn SigningCapability, store: &dyn SignatureStore) {
        let signature = signer.sign_bytes(&self.signing_preimage());
        store.store(self.tx_id, signature);
        self.public_key = Some(signer.public_key_bytes());
        self.witness = SignatureWitness::Detached;
    }

    /// Install a witness decoded from a lean block.
    pub(crate) fn set_witness(&mut self, public_key: Option<Vec<u8>>, witness: SignatureWitness) {
        self.public_key = public_key;
        self.witness = witness;
    }

    /// Copy with key and signature removed. Identity is unchanged.
    pub fn stripped(&self) -> Self {
        let mut tx = self.clone();
        tx.public_key = None;
        tx.witness = SignatureWitness::Unsigned;
        tx
    }

    /// Signature bytes according to the witness variant.
    pub fn resolve_signature(&self, store: &dyn SignatureStore) -> Option<Vec<u8>> {
        match &self.witness {
            SignatureWitness::Unsigned => None,
            SignatureWitness::Attached(sig) => Some(sig.clone()),
            SignatureWitness::Detached => store.get(&self.tx_id),
        }
    }

    /// True iff a public key is present and the resolved signature validates
    /// against the signing preimage.
    pub fn verify_signature(
        &self,
        verifier: &dyn SignatureVerifier,
        store: &dyn SignatureStore,
    ) -> bool {
        let Some(public_key) = self.public_key.as_deref() else {
            return false;
        };
        let Some(signature) = self.resolve_signature(store) else {
            return false;
        };
        verifier.verify(public_key, &self.signing_preimage(), &signature)
    }
}

/// Serialized form. The id is recomputed on decode, never trusted.
#[serde_as]
#[derive(Serialize, Deserialize)]
struct TransactionRecord {
    sender: Address,
    recipient: Address,
    amount: u64,
    nonce: u64,
    #[serde(default = "default_base_fee")]
    base_fee: u64,
    #[serde(default = "default_tip")]
    tip: u64,
    #[serde_as(as = "Option<Hex>")]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    public_key: Option<Vec<u8>>,
    #[serde_as(as = "Option<Hex>")]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    signature: Option<Vec<u8>>,
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    detached: bool,
}

fn default_base_fee() -> u64 {
    BASE_FEE
}

fn default_tip() -> u64 {
    TIP
}

impl From<TransactionRecord> for Transaction {
    fn from(record: TransactionRecord) -> Self {
        let witness = match (record.signature, record.detached) {
            (Some(sig), _) => SignatureWitness::Attached(sig),
            (None, true) => SignatureWitness::Detached,
            (None, false) => SignatureWitness::Unsigned,
        };
        let mut tx = Transaction::new(record.sender, record.recipient, record.amount, record.nonce)
            .with_fees(record.base_fee, record.tip);
        tx.set_witness(record.public_key, witness);
        tx
    }
}

impl From<Transaction> for TransactionRecord {
    fn from(tx: Transaction) -> Self {
        let (signature, detached) = match tx.witness {
            SignatureWitness::Unsigned => (None, false),
            SignatureWitness::Attached(sig) => (Some(sig), false),
            SignatureWitness::Detached => (None, true),
        };
        Self {
            sender: tx.sender,
            recipient: tx.recipient,
            amount: tx.amount,
            nonce: tx.nonce,
            base_fee: tx.base_fee,
            tip: tx.tip,
            public_key: tx.public_key,
            signature,
            detached,
        }
    }
}
