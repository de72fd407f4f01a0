// 🔐 Content Hasher - rules-text fingerprint for change detection

use sha2::{Digest, Sha256};

/// SHA-256 of the UTF-8 bytes, as 64 lowercase hex characters
pub fn fingerprint(text: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(text.as_bytes());
    format!("{:x}", hasher.finalize())
}
