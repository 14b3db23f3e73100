use k256::ecdsa::SigningKey;
use rand_core::{CryptoRng, OsRng, RngCore};

/// An owned secp256k1 key pair: 32 private-key bytes and the 33-byte
/// compressed public key derived from them.
#[derive(Clone)]
pub struct KeyPair {
    pub private_key: Vec<u8>,
    pub public_key: Vec<u8>,
}

/// Generates a fresh key pair from the operating-system RNG.
pub fn generate_key_pair() -> KeyPair {
    generate_key_pair_from_rng(&mut OsRng)
}

/// Generates a key pair from a caller-supplied RNG.
///
/// Candidate bytes are rejection-sampled until they form a valid non-zero
/// curve scalar; the expected number of draws is one.
pub fn generate_key_pair_from_rng(rng: &mut (impl RngCore + CryptoRng)) -> KeyPair {
    let signing_key = loop {
        let mut candidate = [0u8; 32];
        rng.fill_bytes(&mut candidate);
        if let Ok(key) = SigningKey::from_slice(&candidate) {
            break key;
        }
    };
    let public_key = signing_key
        .verifying_key()
        .to_encoded_point(true)
        .as_bytes()
        .to_vec();
    KeyPair {
        private_key: signing_key.to_bytes().to_vec(),
        public_key,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand_chacha::ChaCha20Rng;
    use rand_chacha::rand_core::SeedableRng;

    #[test]
    fn private_key_is_a_valid_curve_scalar() {
        let pair = generate_key_pair();
        assert_eq!(pair.private_key.len(), 32);
        assert!(SigningKey::from_slice(&pair.private_key).is_ok());
    }

    #[test]
    fn public_key_is_33_bytes_compressed() {
        let pair = generate_key_pair();
        assert_eq!(pair.public_key.len(), 33);
        assert!(pair.public_key[0] == 0x02 || pair.public_key[0] == 0x03);
    }

    #[test]
    fn public_key_rederives_from_private_key() {
        let pair = generate_key_pair();
        let signing_key = SigningKey::from_slice(&pair.private_key).unwrap();
        let derived = signing_key
            .verifying_key()
            .to_encoded_point(true)
            .as_bytes()
            .to_vec();
        assert_eq!(derived, pair.public_key);
    }

    #[test]
    fn seeded_generation_is_reproducible() {
        let pair_a = generate_key_pair_from_rng(&mut ChaCha20Rng::from_seed([1u8; 32]));
        let pair_b = generate_key_pair_from_rng(&mut ChaCha20Rng::from_seed([1u8; 32]));
        assert_eq!(pair_a.private_key, pair_b.private_key);
        assert_eq!(pair_a.public_key, pair_b.public_key);
    }

    #[test]
    fn different_seeds_produce_different_keys() {
        let pair_a = generate_key_pair_from_rng(&mut ChaCha20Rng::from_seed([1u8; 32]));
        let pair_b = generate_key_pair_from_rng(&mut ChaCha20Rng::from_seed([2u8; 32]));
        assert_ne!(pair_a.public_key, pair_b.public_key);
    }

    #[test]
    fn successive_calls_produce_independent_keys() {
        let pair_a = generate_key_pair();
        let pair_b = generate_key_pair();
        assert_ne!(pair_a.private_key, pair_b.private_key);
    }
}
