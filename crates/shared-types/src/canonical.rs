//! # Canonical Serialization
//!
//! Hash preimages are JSON objects with keys in sorted order and no
//! whitespace, e.g. `{"amount":50,"base_fee":2,...}`. `serde_json::Map` is a
//! `BTreeMap` unless `preserve_order` is enabled, so building a [`Value`] and
//! printing it compactly yields exactly that form.

use serde_json::Value;
use shared_crypto::{sha256, Hash};

/// Compact sorted-key JSON bytes of `value`.
pub fn canonical_bytes(value: &Value) -> Vec<u8> {
    value.to_string().into_bytes()
}

/// SHA-256 of the canonical form of `value`.
pub fn canonical_hash(value: &Value) -> Hash {
    sha256(&canonical_bytes(value))
}
