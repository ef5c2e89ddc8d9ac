//! Archive writer: pack one page into a `.soulzip` seed.

use crate::{bundle, codec, hash, ArchiveError, Result, SeedManifest};
use std::fs;
use std::path::{Path, PathBuf};
use sz_meta::MetadataProvider;
use tempfile::NamedTempFile;
use tracing::{debug, info};

/// Byte accounting for a completed pack. Informational only; nothing here
/// alters the archive's bytes.
#[derive(Debug, Clone)]
pub struct PackReport {
    /// Where the seed was written.
    pub archive_path: PathBuf,

    /// Serialized bundle size before compression.
    pub bundle_bytes: u64,

    /// Seed size after compression.
    pub compressed_bytes: u64,
}

impl PackReport {
    /// Achieved compression ratio (uncompressed : compressed).
    pub fn ratio(&self) -> Option<f64> {
        (self.compressed_bytes > 0).then(|| self.bundle_bytes as f64 / self.compressed_bytes as f64)
    }
}

fn read_source(path: &Path) -> Result<Vec<u8>> {
    fs::read(path).map_err(|source| ArchiveError::SourceNotFound {
        path: path.display().to_string(),
        source,
    })
}

fn file_base_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default()
}

/// Pack a page asset and its extracted text into a compressed seed at
/// `output_path`.
///
/// Digests are computed over the exact bytes read from disk, before any
/// encoding or compression. The provider's output is copied into the
/// manifest without interpretation. The seed is compressed into a temporary
/// file in the destination directory and persisted atomically, so a failed
/// pack leaves no archive behind.
pub fn pack(
    asset_path: &Path,
    text_path: &Path,
    provider: &dyn MetadataProvider,
    output_path: &Path,
) -> Result<PackReport> {
    debug!(
        asset = %asset_path.display(),
        text = %text_path.display(),
        "Packing page"
    );

    let asset_bytes = read_source(asset_path)?;
    let text_bytes = read_source(text_path)?;

    let page_metadata = provider.page_metadata(asset_path);
    let layout_info = provider.layout_info(asset_path, text_path);

    let manifest = SeedManifest::new(
        page_metadata,
        file_base_name(asset_path),
        file_base_name(text_path),
        hash::digest(&asset_bytes),
        hash::digest(&text_bytes),
        layout_info,
    );

    let serialized = bundle::serialize(&manifest, &asset_bytes, &text_bytes)?;
    let bundle_bytes = serialized.len() as u64;

    let out_dir = match output_path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    fs::create_dir_all(out_dir)?;

    let tmp = NamedTempFile::new_in(out_dir)?;
    let compressed_bytes = codec::compress_to(&serialized, tmp.as_file())?;
    tmp.persist(output_path).map_err(|e| ArchiveError::Io(e.error))?;

    let report = PackReport {
        archive_path: output_path.to_path_buf(),
        bundle_bytes,
        compressed_bytes,
    };

    info!(
        archive = %report.archive_path.display(),
        bundle_bytes,
        compressed_bytes,
        ratio = report.ratio().unwrap_or(0.0),
        "Seed written"
    );

    Ok(report)
}
