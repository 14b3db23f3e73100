use sha3::{Digest, Sha3_256};

use super::strategy::DigestStrategy;

/// Default digest stage: SHA3-256 over the canonical form.
pub struct Sha3Digest;

impl DigestStrategy for Sha3Digest {
    fn digest(&self, canonical: &str) -> Vec<u8> {
        Sha3_256::digest(canonical.as_bytes()).to_vec()
    }
}
