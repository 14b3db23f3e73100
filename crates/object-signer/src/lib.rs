pub mod canonical;
pub mod error;
pub mod signer;
pub mod signing;

pub use canonical::to_canonical_json;
pub use error::SignerError;
pub use signer::{ObjectSigner, SignerConfig};
pub use signing::{
    DigestStrategy, KeyPair, Secp256k1Signer, Secp256k1Verifier, Sha3Digest, SignatureStrategy,
    VerificationStrategy, generate_key_pair, generate_key_pair_from_rng,
};
