//! Metadata provider boundary consumed by the archive writer.
//!
//! Implementations own whatever analysis they like (layout detection, OCR
//! alignment); the archive core copies their output into the seed manifest
//! verbatim and never inspects it.

use crate::layout::LayoutStore;
use crate::page::PageMetadata;
use serde_json::{json, Value};
use std::path::Path;
use tracing::{debug, warn};

/// Supplies page metadata and layout info for an asset being packed.
pub trait MetadataProvider {
    /// Derived page attributes for the asset. Best-effort, never fails.
    fn page_metadata(&self, asset_path: &Path) -> PageMetadata;

    /// Opaque layout description for the page. Round-tripped by the core,
    /// never interpreted.
    fn layout_info(&self, asset_path: &Path, text_path: &Path) -> Value;
}

/// Default provider: filename-derived metadata plus placeholder layout
/// analysis against an archetype dictionary.
///
/// The layout side is a stand-in for a real analyzer: it tags every page
/// with a fixed front-page archetype and a canned element list.
pub struct ArchetypeProvider<'a> {
    store: &'a LayoutStore,
}

impl<'a> ArchetypeProvider<'a> {
    /// Create a provider backed by the given archetype dictionary.
    pub fn new(store: &'a LayoutStore) -> Self {
        Self { store }
    }
}

impl MetadataProvider for ArchetypeProvider<'_> {
    fn page_metadata(&self, asset_path: &Path) -> PageMetadata {
        PageMetadata::from_asset_path(asset_path)
    }

    fn layout_info(&self, asset_path: &Path, _text_path: &Path) -> Value {
        debug!(asset = %asset_path.display(), "Analyzing page layout (placeholder)");

        let layout_archetype_id = "LAYOUT_FRONT_PAGE_1920S_A";
        if self.store.layout_archetype(layout_archetype_id).is_none() {
            warn!(layout_archetype_id, "Layout archetype not found in dictionary");
        }

        json!({
            "layout_archetype_id": layout_archetype_id,
            "elements_data": [
                {
                    "type": "headline",
                    "archetype_id": "ELEMENT_HEADLINE_LARGE_BOLD",
                    "position": [0.1, 0.05, 0.9, 0.15],
                    "content_ref": "headline_1"
                },
                {
                    "type": "article",
                    "archetype_id": "ELEMENT_ARTICLE_TEXT_BLOCK",
                    "position": [0.05, 0.2, 0.45, 0.7],
                    "content_ref": "article_1"
                },
                {
                    "type": "image",
                    "archetype_id": "ELEMENT_PHOTO_SQUARE_B&W",
                    "position": [0.5, 0.25, 0.75, 0.45],
                    "content_ref": "image_1"
                }
            ]
        })
    }
}
