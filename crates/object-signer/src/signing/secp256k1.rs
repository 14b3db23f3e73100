use k256::ecdsa::signature::hazmat::{PrehashSigner, PrehashVerifier};
use k256::ecdsa::{Signature, SigningKey, VerifyingKey};

use super::strategy::{SignatureStrategy, VerificationStrategy};
use crate::error::SignerError;

/// Default signature scheme: ECDSA over secp256k1.
///
/// Nonces follow RFC 6979, so a given key and digest always produce the
/// same 64-byte (r‖s) signature.
pub struct Secp256k1Signer;

impl SignatureStrategy for Secp256k1Signer {
    fn sign_digest(&self, digest: &[u8], private_key: &[u8]) -> Result<Vec<u8>, SignerError> {
        let signing_key = SigningKey::from_slice(private_key)
            .map_err(|e| SignerError::Signing(format!("invalid secp256k1 private key: {e}")))?;
        let signature: Signature = signing_key
            .sign_prehash(digest)
            .map_err(|e| SignerError::Signing(format!("secp256k1 sign_prehash failed: {e}")))?;
        Ok(signature.to_bytes().to_vec())
    }
}

/// Verifies signatures produced by [`Secp256k1Signer`].
///
/// Expects a SEC1-encoded public key (33-byte compressed or 65-byte
/// uncompressed).
pub struct Secp256k1Verifier;

impl VerificationStrategy for Secp256k1Verifier {
    fn verify_digest(
        &self,
        signature: &[u8],
        digest: &[u8],
        public_key: &[u8],
    ) -> Result<bool, SignerError> {
        let verifying_key = VerifyingKey::from_sec1_bytes(public_key)
            .map_err(|e| SignerError::Verification(format!("invalid secp256k1 public key: {e}")))?;
        let signature = Signature::from_slice(signature)
            .map_err(|e| SignerError::Verification(format!("malformed signature: {e}")))?;
        Ok(verifying_key.verify_prehash(digest, &signature).is_ok())
    }
}
