//! Centralized hashing for scope-key derivation
//!
//! One module owns the digest algorithm so a future change touches a single
//! place. Current algorithm: SHA-256 (32-byte output).

use sha2::{Digest, Sha256};

/// Hash a single byte slice to a 32-byte digest.
pub fn hash(data: &[u8]) -> [u8; 32] {
    let mut hasher = Sha256::new();
    hasher.update(data);
    hasher.finalize().into()
}

/// Incremental hasher for multi-part input.
#[derive(Debug, Default)]
pub struct Hasher(Sha256);

impl Hasher {
    /// Start a fresh hasher.
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed more bytes.
    pub fn update(&mut self, data: &[u8]) {
        self.0.update(data);
    }

    /// Consume the hasher and return the digest.
    pub fn finalize(self) -> [u8; 32] {
        self.0.finalize().into()
    }
}
