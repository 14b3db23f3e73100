mod digest;
mod keypair;
mod secp256k1;
mod strategy;

pub use digest::Sha3Digest;
pub use keypair::{KeyPair, generate_key_pair, generate_key_pair_from_rng};
pub use secp256k1::{Secp256k1Signer, Secp256k1Verifier};
pub use strategy::{DigestStrategy, SignatureStrategy, VerificationStrategy};
