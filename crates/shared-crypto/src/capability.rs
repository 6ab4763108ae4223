//! # Signing Capability
//!
//! The ledger never touches a curve directly. Wallets hand transactions a
//! [`SigningCapability`]; validators check them through a
//! [`SignatureVerifier`]. Both work on raw byte slices so signatures and keys
//! can travel through serialized blocks unchanged.

/// Produces signatures over arbitrary data.
pub trait SigningCapability: Send + Sync {
    /// Encoded public key matching the signatures this capability produces.
    fn public_key_bytes(&self) -> Vec<u8>;

    /// Sign `data`, returning the encoded signature.
    fn sign_bytes(&self, data: &[u8]) -> Vec<u8>;
}

/// Checks signatures produced by a [`SigningCapability`].
pub trait SignatureVerifier: Send + Sync {
    /// True iff `signature` is a valid signature of `data` under `public_key`.
    ///
    /// Malformed keys or signatures yield `false`, never a panic.
    fn verify(&self, public_key: &[u8], data: &[u8], signature: &[u8]) -> bool;
}

impl<T: SigningCapability + ?Sized> SigningCapability for &T {
    fn public_key_bytes(&self) -> Vec<u8> {
        (**self).public_key_bytes()
    }

    fn sign_bytes(&self, data: &[u8]) -> Vec<u8> {
        (**self).sign_bytes(data)
    }
}

impl<T: SignatureVerifier + ?Sized> SignatureVerifier for std::sync::Arc<T> {
    fn verify(&self, public_key: &[u8], data: &[u8], signature: &[u8]) -> bool {
        (**self).verify(public_key, data, signature)
    }
}
