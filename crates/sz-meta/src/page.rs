//! Page metadata derived from asset filenames.
//!
//! Scanned page assets follow a `publication_date_pageN.ext` naming
//! convention, e.g. `tribune_1925-03-14_page3.png`. Parsing is best-effort:
//! a missing component falls back to the [`UNKNOWN`] sentinel and never
//! fails the pipeline.

use serde::{Deserialize, Serialize};
use std::path::Path;

/// Sentinel for filename components that could not be derived.
pub const UNKNOWN: &str = "Unknown";

/// Attributes derived from one scanned page's filename.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageMetadata {
    /// Base name of the asset file.
    pub filename: String,

    /// Publication identifier (first `_`-separated token).
    pub publication: String,

    /// Publication date (second token).
    pub date: String,

    /// Page number: the first token containing `page`, with that substring
    /// and any file extension stripped.
    pub page_num: String,

    /// Path the asset was read from at pack time.
    pub original_path: String,
}

impl PageMetadata {
    /// Derive metadata from an asset path.
    pub fn from_asset_path(path: &Path) -> Self {
        let filename = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();

        let parts: Vec<&str> = filename.split('_').collect();

        let publication = parts
            .first()
            .copied()
            .filter(|p| !p.is_empty())
            .unwrap_or(UNKNOWN)
            .to_string();
        let date = parts.get(1).copied().unwrap_or(UNKNOWN).to_string();

        let mut page_num = UNKNOWN.to_string();
        for part in &parts {
            if part.contains("page") {
                let stripped = part.replace("page", "");
                page_num = stripped.split('.').next().unwrap_or_default().to_string();
                break;
            }
        }

        PageMetadata {
            filename,
            publication,
            date,
            page_num,
            original_path: path.display().to_string(),
        }
    }
}
