//! Canonical bundle serialization.
//!
//! A bundle is the pre-compression form of a seed: one self-describing JSON
//! document holding the manifest verbatim plus both payloads as base64
//! strings, so the whole thing is representable as a single text-safe byte
//! sequence. This is a pure structural transform — no hashing and no
//! compression happen here, and `deserialize` is the exact left inverse of
//! `serialize`.

use crate::{ArchiveError, Result, SeedManifest};
use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine as _;
use serde::{Deserialize, Serialize};

/// JSON shape of a serialized bundle.
#[derive(Debug, Serialize, Deserialize)]
struct BundleDocument {
    manifest: SeedManifest,
    asset_bytes_b64: String,
    text_bytes_b64: String,
}

/// Serialize a manifest and both payloads into one bundle document.
pub fn serialize(
    manifest: &SeedManifest,
    asset_bytes: &[u8],
    text_bytes: &[u8],
) -> Result<Vec<u8>> {
    let doc = BundleDocument {
        manifest: manifest.clone(),
        asset_bytes_b64: BASE64.encode(asset_bytes),
        text_bytes_b64: BASE64.encode(text_bytes),
    };
    Ok(serde_json::to_vec(&doc)?)
}

/// Parse a bundle document back into its manifest and payloads.
///
/// Fails with [`ArchiveError::MalformedBundle`] when the document is not
/// the expected shape (unparseable JSON or missing keys) and with
/// [`ArchiveError::Encoding`] when a payload is not valid base64.
pub fn deserialize(bytes: &[u8]) -> Result<(SeedManifest, Vec<u8>, Vec<u8>)> {
    let doc: BundleDocument = serde_json::from_slice(bytes)
        .map_err(|e| ArchiveError::MalformedBundle(e.to_string()))?;

    let asset_bytes = BASE64.decode(doc.asset_bytes_b64.as_bytes())?;
    let text_bytes = BASE64.decode(doc.text_bytes_b64.as_bytes())?;

    Ok((doc.manifest, asset_bytes, text_bytes))
}
