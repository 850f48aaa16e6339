use sha2::{Digest, Sha256};

/// Hex SHA-256 of a token; only this form is ever persisted.
pub fn hash_token(token: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(token.as_bytes());
    format!("{:x}", hasher.finalize())
}
