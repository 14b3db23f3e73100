/// Errors surfaced by signer construction, signing, and verification.
///
/// A mismatched signature is not an error — `verify` reports it as
/// `Ok(false)`.
#[derive(Debug, thiserror::Error)]
pub enum SignerError {
    /// A required construction field is missing or empty.
    #[error("invalid signer configuration: {0}")]
    Configuration(String),
    /// The input value could not be canonicalized.
    #[error("failed to canonicalize value: {0}")]
    Serialization(String),
    /// The signature strategy rejected the private key or digest.
    #[error("signing failed: {0}")]
    Signing(String),
    /// The verification strategy could not interpret the signature or
    /// public key at all.
    #[error("verification failed: {0}")]
    Verification(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn configuration_message_is_stable() {
        let error = SignerError::Configuration("private key material is empty".into());
        assert_eq!(
            error.to_string(),
            "invalid signer configuration: private key material is empty"
        );
    }

    #[test]
    fn serialization_message_carries_cause() {
        let error = SignerError::Serialization("too deep".into());
        assert_eq!(error.to_string(), "failed to canonicalize value: too deep");
    }

    #[test]
    fn signing_message_carries_cause() {
        let error = SignerError::Signing("bad key".into());
        assert_eq!(error.to_string(), "signing failed: bad key");
    }

    #[test]
    fn verification_message_carries_cause() {
        let error = SignerError::Verification("malformed signature".into());
        assert_eq!(error.to_string(), "verification failed: malformed signature");
    }
}
