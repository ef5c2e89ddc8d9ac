//! Layout archetype dictionary store.
//!
//! The dictionary records reusable layout and element archetypes that layout
//! analysis refers to by id. It is an explicit handle with a load/save
//! lifecycle at the call boundary; the archive core never reads it.

use crate::error::Result;
use serde::{Deserialize, Serialize};
use serde_json::{json, Map, Value};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// On-disk shape of the archetype dictionary.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LayoutDictionary {
    /// Whole-page layout archetypes keyed by id.
    #[serde(default)]
    pub layout_archetypes: Map<String, Value>,

    /// Page element archetypes keyed by id.
    #[serde(default)]
    pub element_archetypes: Map<String, Value>,
}

/// Handle over one archetype dictionary file.
#[derive(Debug)]
pub struct LayoutStore {
    path: PathBuf,
    dictionary: LayoutDictionary,
}

impl LayoutStore {
    /// Open the dictionary at `path`, initializing an empty one if the file
    /// does not exist yet.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let dictionary = if path.exists() {
            debug!(path = %path.display(), "Loading layout dictionary");
            serde_json::from_str(&fs::read_to_string(&path)?)?
        } else {
            debug!(path = %path.display(), "Layout dictionary not found, starting empty");
            LayoutDictionary::default()
        };
        Ok(Self { path, dictionary })
    }

    /// Persist the current dictionary state to its file.
    pub fn save(&self) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        fs::write(&self.path, serde_json::to_string_pretty(&self.dictionary)?)?;
        info!(path = %self.path.display(), "Layout dictionary saved");
        Ok(())
    }

    /// Path of the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Add or replace a layout archetype.
    pub fn add_layout_archetype(&mut self, id: impl Into<String>, description: &str, structure: Value) {
        self.dictionary.layout_archetypes.insert(
            id.into(),
            json!({ "description": description, "structure": structure }),
        );
    }

    /// Look up a layout archetype by id.
    pub fn layout_archetype(&self, id: &str) -> Option<&Value> {
        self.dictionary.layout_archetypes.get(id)
    }

    /// Add or replace an element archetype.
    pub fn add_element_archetype(&mut self, id: impl Into<String>, description: &str, properties: Value) {
        self.dictionary.element_archetypes.insert(
            id.into(),
            json!({ "description": description, "properties": properties }),
        );
    }

    /// Look up an element archetype by id.
    pub fn element_archetype(&self, id: &str) -> Option<&Value> {
        self.dictionary.element_archetypes.get(id)
    }

    /// Install the baseline archetypes the placeholder analyzer refers to.
    /// Existing entries are left untouched.
    pub fn seed_defaults(&mut self) {
        if self.layout_archetype("LAYOUT_FRONT_PAGE_1920S_A").is_none() {
            self.add_layout_archetype(
                "LAYOUT_FRONT_PAGE_1920S_A",
                "Common 1920s front page layout with large masthead and multi-column articles.",
                json!({ "masthead_area": [0, 0, 1, 0.1], "main_article_area": [0, 0.1, 0.7, 0.9] }),
            );
        }
        if self.layout_archetype("LAYOUT_INNER_PAGE_TEXT_HEAVY_B").is_none() {
            self.add_layout_archetype(
                "LAYOUT_INNER_PAGE_TEXT_HEAVY_B",
                "Standard inner page with 4 text columns and small ads/images.",
                json!({ "column_count": 4, "ad_slots": [[0.8, 0.1, 0.9, 0.2]] }),
            );
        }
        if self.element_archetype("ELEMENT_HEADLINE_LARGE_BOLD").is_none() {
            self.add_element_archetype(
                "ELEMENT_HEADLINE_LARGE_BOLD",
                "Large, bold headline style typical of front pages.",
                json!({ "font_size_range": [36, 48], "font_weight": "bold" }),
            );
        }
        if self.element_archetype("ELEMENT_ARTICLE_TEXT_BLOCK").is_none() {
            self.add_element_archetype(
                "ELEMENT_ARTICLE_TEXT_BLOCK",
                "Standard body text block for articles.",
                json!({ "font_size_range": [9, 11], "line_height": 1.2 }),
            );
        }
        if self.element_archetype("ELEMENT_PHOTO_SQUARE_B&W").is_none() {
            self.add_element_archetype(
                "ELEMENT_PHOTO_SQUARE_B&W",
                "Typical square black and white news photo.",
                json!({ "aspect_ratio": "1:1", "color_mode": "grayscale" }),
            );
        }
    }
}
