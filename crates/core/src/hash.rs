//! Hashing utilities for key digests
//!
//! seahash is unseeded, so digests are identical for a given input
//! across runs and platforms.

use seahash::hash;

/// Compute a 64-bit digest of the given bytes
pub fn compute_digest(data: &[u8]) -> u64 {
    hash(data)
}

/// Compute a digest from a key string
pub fn digest_key(key: &str) -> u64 {
    compute_digest(key.as_bytes())
}
