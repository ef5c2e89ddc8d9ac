//! Content digests for integrity verification.
//!
//! SHA-256 over the original, uncompressed bytes. Text content is always
//! hashed over its UTF-8 byte encoding, so the pack and validate sides of a
//! round trip agree by construction.

use crate::Result;
use sha2::{Digest, Sha256};
use std::fs;
use std::path::Path;

/// Hex-encoded SHA-256 digest of a byte sequence.
pub fn digest(bytes: &[u8]) -> String {
    let mut hasher = Sha256::new();
    hasher.update(bytes);
    hex::encode(hasher.finalize())
}

/// Hex-encoded SHA-256 digest of a file's contents.
pub fn digest_file(path: &Path) -> Result<String> {
    Ok(digest(&fs::read(path)?))
}
