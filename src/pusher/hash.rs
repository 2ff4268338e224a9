use sha2::{Digest, Sha256};

/// Hex digest of the lines concatenated verbatim. Only used to detect changes.
pub fn content_hash<S: AsRef<str>>(lines: &[S]) -> String {
    let mut hasher = Sha256::new();
    for line in lines {
        hasher.update(line.as_ref().as_bytes());
    }
    hex::encode(hasher.finalize())
}
