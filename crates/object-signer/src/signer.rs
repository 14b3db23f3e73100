use std::sync::Arc;

use serde::Serialize;
use tracing::Level;

use crate::canonical;
use crate::error::SignerError;
use crate::signing::{
    DigestStrategy, Secp256k1Signer, Secp256k1Verifier, Sha3Digest, SignatureStrategy,
    VerificationStrategy,
};

/// Configuration for [`ObjectSigner`].
///
/// Only the private key is required. Each pipeline stage falls back to its
/// default strategy (SHA3-256 digest, secp256k1 ECDSA) when no override is
/// supplied.
pub struct SignerConfig {
    private_key: Vec<u8>,
    digest: Option<Arc<dyn DigestStrategy>>,
    signature: Option<Arc<dyn SignatureStrategy>>,
    verification: Option<Arc<dyn VerificationStrategy>>,
    log_level: Level,
}

impl SignerConfig {
    pub fn new(private_key: impl Into<Vec<u8>>) -> Self {
        Self {
            private_key: private_key.into(),
            digest: None,
            signature: None,
            verification: None,
            log_level: Level::INFO,
        }
    }

    /// Replaces the SHA3-256 digest stage.
    ///
    /// The override feeds both `sign` and `verify`; a peer verifying
    /// signatures from this instance must be configured with the same
    /// strategy.
    pub fn with_digest_strategy(mut self, strategy: impl DigestStrategy + 'static) -> Self {
        self.digest = Some(Arc::new(strategy));
        self
    }

    /// Replaces the secp256k1 signing stage.
    pub fn with_signature_strategy(mut self, strategy: impl SignatureStrategy + 'static) -> Self {
        self.signature = Some(Arc::new(strategy));
        self
    }

    /// Replaces the secp256k1 verification stage.
    pub fn with_verification_strategy(
        mut self,
        strategy: impl VerificationStrategy + 'static,
    ) -> Self {
        self.verification = Some(Arc::new(strategy));
        self
    }

    /// Logging severity for this signer. Defaults to `INFO`, which
    /// suppresses the per-sign debug event.
    pub fn with_log_level(mut self, level: Level) -> Self {
        self.log_level = level;
        self
    }
}

/// Signs and verifies arbitrary serializable values.
///
/// Every operation runs the same pipeline: canonicalize the value as
/// RFC 8785 JSON, hash the canonical form with the digest strategy, then
/// hand the digest to the signature or verification strategy. Instances
/// hold no mutable state and may be shared across threads.
pub struct ObjectSigner {
    private_key: Vec<u8>,
    digest: Arc<dyn DigestStrategy>,
    signature: Arc<dyn SignatureStrategy>,
    verification: Arc<dyn VerificationStrategy>,
    log_level: Level,
}

impl std::fmt::Debug for ObjectSigner {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ObjectSigner")
            .field("log_level", &self.log_level)
            .finish_non_exhaustive()
    }
}

impl ObjectSigner {
    /// Builds a signer, wiring in default strategies where the config has
    /// no override.
    ///
    /// Fails with [`SignerError::Configuration`] when the private key is
    /// empty.
    pub fn new(config: SignerConfig) -> Result<Self, SignerError> {
        if config.private_key.is_empty() {
            return Err(SignerError::Configuration(
                "private key material is empty".into(),
            ));
        }
        Ok(Self {
            private_key: config.private_key,
            digest: config.digest.unwrap_or_else(|| Arc::new(Sha3Digest)),
            signature: config.signature.unwrap_or_else(|| Arc::new(Secp256k1Signer)),
            verification: config
                .verification
                .unwrap_or_else(|| Arc::new(Secp256k1Verifier)),
            log_level: config.log_level,
        })
    }

    /// Canonicalizes `value`, hashes it, and signs the digest with the
    /// configured private key.
    ///
    /// At `DEBUG` severity and above this emits a tracing event containing
    /// the full canonical form — the payload, sensitive fields included,
    /// ends up in the logs.
    pub fn sign<T>(&self, value: &T) -> Result<Vec<u8>, SignerError>
    where
        T: Serialize + ?Sized,
    {
        let canonical = canonical::to_canonical_json(value)?;
        if self.log_level >= Level::DEBUG {
            tracing::debug!(canonical = %canonical, "signing canonical form");
        }
        let digest = self.digest.digest(&canonical);
        self.signature.sign_digest(&digest, &self.private_key)
    }

    /// Checks `signature` against `value` and `public_key`.
    ///
    /// The value is canonicalized and hashed exactly as in [`sign`], so a
    /// signature over one key permutation verifies against any other.
    /// Returns `Ok(false)` for a mismatched signature; errors only when
    /// the verification strategy cannot interpret its inputs.
    ///
    /// [`sign`]: ObjectSigner::sign
    pub fn verify<T>(
        &self,
        value: &T,
        signature: &[u8],
        public_key: &[u8],
    ) -> Result<bool, SignerError>
    where
        T: Serialize + ?Sized,
    {
        let canonical = canonical::to_canonical_json(value)?;
        let digest = self.digest.digest(&canonical);
        self.verification.verify_digest(signature, &digest, public_key)
    }
}
