//! Seed archive encode/decode/validate pipeline for soulzip.
//!
//! A `.soulzip` seed bundles one scanned page — the binary page asset and
//! its extracted text — into a single compressed, integrity-verifiable file
//! and reconstructs the originals byte-for-byte later.
//!
//! # Seed Format
//!
//! A seed is the zstd-compressed bytes of one JSON bundle document:
//! - `manifest`: format identifiers, derived page metadata, base filenames,
//!   SHA-256 digests of the original uncompressed bytes, and an opaque
//!   `layout_info` blob supplied by an external metadata provider.
//! - `asset_bytes_b64` / `text_bytes_b64`: the two payloads, base64-encoded
//!   so the bundle is one self-contained text-safe document.
//!
//! One seed holds exactly one page: one asset plus one text payload. Seeds
//! are written once and immutable; a changed source page produces a new seed.
//!
//! # Example
//!
//! ```no_run
//! use std::path::Path;
//! use sz_meta::{ArchetypeProvider, LayoutStore};
//!
//! let store = LayoutStore::open("data/layout/archetypes.json").unwrap();
//! let provider = ArchetypeProvider::new(&store);
//!
//! let report = sz_archive::pack(
//!     Path::new("front_1925.png"),
//!     Path::new("front_1925.txt"),
//!     &provider,
//!     Path::new("out/front_1925.soulzip"),
//! ).unwrap();
//!
//! let outcome = sz_archive::unpack(&report.archive_path, Path::new("restored")).unwrap();
//! let check = sz_archive::validate(&outcome.manifest, &outcome.asset_path, &outcome.text_path).unwrap();
//! assert!(check.is_lossless());
//! ```

pub mod bundle;
pub mod codec;
pub mod error;
pub mod hash;
pub mod manifest;
pub mod reader;
pub mod validator;
pub mod writer;

pub use error::{ArchiveError, Result};
pub use manifest::{SeedManifest, FORMAT_SPEC, MANIFEST_VERSION};
pub use reader::{unpack, UnpackOutcome};
pub use validator::{validate, ValidationReport};
pub use writer::{pack, PackReport};
