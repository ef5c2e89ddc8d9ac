//! Integrity validation of reconstructed files.
//!
//! The sole correctness oracle for a round trip: a seed is lossless iff the
//! digests recomputed over the reconstructed files match the manifest.

use crate::{hash, Result, SeedManifest};
use serde::Serialize;
use std::path::Path;
use tracing::warn;

/// Outcome of comparing reconstructed files against manifest digests.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ValidationReport {
    /// Whether the reconstructed asset matches `asset_digest`.
    pub asset_match: bool,

    /// Whether the reconstructed text matches `text_digest`.
    pub text_match: bool,
}

impl ValidationReport {
    /// True iff the round trip reproduced both originals exactly.
    pub fn is_lossless(&self) -> bool {
        self.asset_match && self.text_match
    }
}

/// Recompute digests over the two reconstructed files and compare against
/// the manifest. A mismatch is a normal (if undesirable) result, not an
/// error; only unreadable files fail.
pub fn validate(
    manifest: &SeedManifest,
    asset_path: &Path,
    text_path: &Path,
) -> Result<ValidationReport> {
    let asset_match = hash::digest_file(asset_path)? == manifest.asset_digest;
    let text_match = hash::digest_file(text_path)? == manifest.text_digest;

    let report = ValidationReport {
        asset_match,
        text_match,
    };
    if !report.is_lossless() {
        warn!(asset_match, text_match, "Digest mismatch on reconstructed files");
    }
    Ok(report)
}
