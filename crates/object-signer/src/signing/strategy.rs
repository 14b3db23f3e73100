use crate::error::SignerError;

/// Hashes the canonical form into the digest that gets signed.
///
/// A signer instance uses one digest strategy for both its sign and verify
/// paths. Two instances configured with different digest strategies will
/// not accept each other's signatures — the library cannot detect that
/// mismatch, so callers supplying an override must use it on both sides.
pub trait DigestStrategy: Send + Sync {
    fn digest(&self, canonical: &str) -> Vec<u8>;
}

/// Produces signature bytes over a digest with the supplied private key.
///
/// Implementations are sync — signing is CPU-bound. For async backends
/// (e.g. KMS), use `spawn_blocking`.
pub trait SignatureStrategy: Send + Sync {
    fn sign_digest(&self, digest: &[u8], private_key: &[u8]) -> Result<Vec<u8>, SignerError>;
}

/// Checks signature bytes against a digest and public key.
///
/// `Ok(false)` means the signature does not match. `Err` is reserved for
/// inputs the strategy cannot interpret at all, such as a malformed key or
/// signature encoding.
pub trait VerificationStrategy: Send + Sync {
    fn verify_digest(
        &self,
        signature: &[u8],
        digest: &[u8],
        public_key: &[u8],
    ) -> Result<bool, SignerError>;
}
