//! Cryptographic Utilities

use rand::{RngCore, rngs::OsRng};
use sha2::{Digest, Sha256};

const GRAVATAR_BASE_URL: &str = "https://www.gravatar.com/avatar/";

/// Generate cryptographically secure random bytes
pub fn random_bytes(len: usize) -> Vec<u8> {
    let mut bytes = vec![0u8; len];
    OsRng.fill_bytes(&mut bytes);
    bytes
}

/// Compute SHA-256 hash
pub fn sha256(data: &[u8]) -> [u8; 32] {
    let mut hasher = Sha256::new();
    hasher.update(data);
    hasher.finalize().into()
}

/// SHA-256 as lowercase hex
pub fn sha256_hex(data: &[u8]) -> String {
    sha256(data).iter().map(|b| format!("{:02x}", b)).collect()
}

/// Gravatar URL for an email address (200px, PG rated, mystery-person fallback)
pub fn avatar_url(email: &str) -> String {
    let normalized = email.trim().to_lowercase();
    format!(
        "{}{}?s=200&r=pg&d=mm",
        GRAVATAR_BASE_URL,
        sha256_hex(normalized.as_bytes())
    )
}
