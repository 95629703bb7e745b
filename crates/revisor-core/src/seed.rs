//! Deterministic seed derivation
//!
//! A document identifier maps to a 31-bit seed: SHA-256 of its UTF-8 bytes,
//! first 16 hex characters read as a base-16 integer, reduced modulo 2^31.
//! Changing any step changes every historical score, so the algorithm is fixed.

use sha2::{Digest, Sha256};

/// Seeds live in `[0, 2^31)`
pub const SEED_MODULUS: u64 = 1 << 31;

/// Number of leading hex characters of the digest that feed the seed
const SEED_HEX_CHARS: usize = 16;

/// Derive the generator seed for a document identifier
pub fn derive_seed(identifier: &str) -> u32 {
    let digest = Sha256::digest(identifier.as_bytes());
    // 16 hex chars are exactly the first 8 digest bytes, big-endian
    let prefix = digest
        .iter()
        .take(SEED_HEX_CHARS / 2)
        .fold(0u64, |acc, byte| (acc << 8) | u64::from(*byte));
    (prefix % SEED_MODULUS) as u32
}

/// Full hex digest of an identifier, for display alongside its seed
pub fn identifier_digest(identifier: &str) -> String {
    hex::encode(Sha256::digest(identifier.as_bytes()))
}
