//! Seed manifest types and serialization.
//!
//! The manifest describes one archived page: format identifiers, derived
//! page metadata, the base names of both original files, SHA-256 digests of
//! their original uncompressed bytes, and an opaque `layout_info` blob the
//! core round-trips but never interprets.

use crate::{ArchiveError, Result};
use serde::{Deserialize, Serialize};
use sz_meta::PageMetadata;

/// Current manifest version.
pub const MANIFEST_VERSION: &str = "1.0";

/// Format identifier for lossless seeds.
pub const FORMAT_SPEC: &str = "lossless_v1";

const DIGEST_HEX_LEN: usize = 64;

/// Metadata describing one archived page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeedManifest {
    /// Manifest format version.
    pub version: String,

    /// Seed format identifier.
    pub format_spec: String,

    /// Attributes derived from the asset's name.
    pub page_metadata: PageMetadata,

    /// Base name of the original asset file. Never contains path separators.
    pub asset_filename: String,

    /// Base name of the original text file. Never contains path separators.
    pub text_filename: String,

    /// SHA-256 of the original asset bytes (64 hex chars).
    pub asset_digest: String,

    /// SHA-256 of the original text content, hashed as UTF-8 bytes.
    pub text_digest: String,

    /// Opaque layout description from the metadata provider.
    pub layout_info: serde_json::Value,
}

impl SeedManifest {
    /// Create a manifest for the current format version.
    pub fn new(
        page_metadata: PageMetadata,
        asset_filename: impl Into<String>,
        text_filename: impl Into<String>,
        asset_digest: impl Into<String>,
        text_digest: impl Into<String>,
        layout_info: serde_json::Value,
    ) -> Self {
        Self {
            version: MANIFEST_VERSION.to_string(),
            format_spec: FORMAT_SPEC.to_string(),
            page_metadata,
            asset_filename: asset_filename.into(),
            text_filename: text_filename.into(),
            asset_digest: asset_digest.into(),
            text_digest: text_digest.into(),
            layout_info,
        }
    }

    /// Structural validation: digests are hex SHA-256, filenames non-empty.
    pub fn validate(&self) -> Result<()> {
        for (digest, name) in [
            (&self.asset_digest, "asset_digest"),
            (&self.text_digest, "text_digest"),
        ] {
            if digest.len() != DIGEST_HEX_LEN || !digest.chars().all(|c| c.is_ascii_hexdigit()) {
                return Err(ArchiveError::MalformedBundle(format!(
                    "{name} is not a hex SHA-256 digest"
                )));
            }
        }
        for (filename, name) in [
            (&self.asset_filename, "asset_filename"),
            (&self.text_filename, "text_filename"),
        ] {
            if filename.is_empty() {
                return Err(ArchiveError::MalformedBundle(format!("{name} is empty")));
            }
        }
        Ok(())
    }

    /// Serialize to pretty JSON.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Parse from JSON.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::path::Path;

    fn sample_manifest() -> SeedManifest {
        SeedManifest::new(
            PageMetadata::from_asset_path(Path::new("tribune_1925_page1.png")),
            "tribune_1925_page1.png",
            "tribune_1925_page1.txt",
            "a".repeat(64),
            "b".repeat(64),
            json!({ "layout_archetype_id": "LAYOUT_FRONT_PAGE_1920S_A" }),
        )
    }

    #[test]
    fn test_new_sets_format_identifiers() {
        let manifest = sample_manifest();
        assert_eq!(manifest.version, MANIFEST_VERSION);
        assert_eq!(manifest.format_spec, FORMAT_SPEC);
    }

    #[test]
    fn test_validate_ok() {
        assert!(sample_manifest().validate().is_ok());
    }

    #[test]
    fn test_validate_bad_digest_length() {
        let mut manifest = sample_manifest();
        manifest.asset_digest = "deadbeef".to_string();
        assert!(matches!(
            manifest.validate(),
            Err(ArchiveError::MalformedBundle(_))
        ));
    }

    #[test]
    fn test_validate_non_hex_digest() {
        let mut manifest = sample_manifest();
        manifest.text_digest = "z".repeat(64);
        assert!(manifest.validate().is_err());
    }

    #[test]
    fn test_validate_empty_filename() {
        let mut manifest = sample_manifest();
        manifest.text_filename = String::new();
        assert!(manifest.validate().is_err());
    }

    #[test]
    fn test_json_roundtrip() {
        let manifest = sample_manifest();
        let json = manifest.to_json().unwrap();
        let parsed = SeedManifest::from_json(&json).unwrap();
        assert_eq!(parsed, manifest);
    }

    #[test]
    fn test_layout_info_key_order_preserved() {
        let mut manifest = sample_manifest();
        manifest.layout_info = json!({ "zeta": 1, "alpha": 2, "mid": 3 });

        let json = manifest.to_json().unwrap();
        let parsed = SeedManifest::from_json(&json).unwrap();

        let keys: Vec<&String> = parsed.layout_info.as_object().unwrap().keys().collect();
        assert_eq!(keys, ["zeta", "alpha", "mid"]);
    }

    #[test]
    fn test_numeric_typing_survives_roundtrip() {
        let mut manifest = sample_manifest();
        manifest.layout_info = json!({ "count": 4, "ratio": 0.25, "label": "4" });

        let parsed = SeedManifest::from_json(&manifest.to_json().unwrap()).unwrap();
        assert!(parsed.layout_info["count"].is_u64());
        assert!(parsed.layout_info["ratio"].is_f64());
        assert!(parsed.layout_info["label"].is_string());
    }
}
