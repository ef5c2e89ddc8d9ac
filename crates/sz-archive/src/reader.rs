//! Archive reader: unpack a seed back into its original files.

use crate::{bundle, codec, ArchiveError, Result, SeedManifest};
use serde::Serialize;
use std::fs::{self, File};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Result of unpacking one seed.
#[derive(Debug, Clone, Serialize)]
pub struct UnpackOutcome {
    /// The manifest recovered from the seed.
    pub manifest: SeedManifest,

    /// Where the asset was reconstructed.
    pub asset_path: PathBuf,

    /// Where the text was reconstructed.
    pub text_path: PathBuf,
}

/// Strip an embedded file name down to its base name.
///
/// Embedded names are never trusted: any directory components are reduced to
/// the final component, so reconstruction stays strictly inside the output
/// directory. Names with no usable final component are rejected.
fn sanitize_file_name(name: &str) -> Result<String> {
    match Path::new(name).file_name() {
        Some(base) => Ok(base.to_string_lossy().into_owned()),
        None => Err(ArchiveError::MalformedBundle(format!(
            "unusable embedded file name: {name:?}"
        ))),
    }
}

/// Unpack a seed into `output_dir` (created if absent), reconstructing the
/// original asset and text files.
///
/// Fails with [`ArchiveError::Decompression`] on corrupt compressed input
/// and [`ArchiveError::MalformedBundle`] / [`ArchiveError::Encoding`] on a
/// structurally invalid bundle. Partial reconstructed files from a failed
/// run are the caller's to discard.
pub fn unpack(archive_path: &Path, output_dir: &Path) -> Result<UnpackOutcome> {
    let archive = File::open(archive_path).map_err(|source| ArchiveError::SourceNotFound {
        path: archive_path.display().to_string(),
        source,
    })?;

    let serialized = codec::decompress_from(archive)?;
    debug!(
        archive = %archive_path.display(),
        bundle_bytes = serialized.len(),
        "Seed decompressed"
    );

    let (manifest, asset_bytes, text_bytes) = bundle::deserialize(&serialized)?;
    manifest.validate()?;

    let asset_name = sanitize_file_name(&manifest.asset_filename)?;
    let text_name = sanitize_file_name(&manifest.text_filename)?;

    fs::create_dir_all(output_dir)?;
    let asset_path = output_dir.join(asset_name);
    let text_path = output_dir.join(text_name);

    fs::write(&asset_path, &asset_bytes)?;
    fs::write(&text_path, &text_bytes)?;

    info!(
        archive = %archive_path.display(),
        asset = %asset_path.display(),
        text = %text_path.display(),
        "Seed unpacked"
    );

    Ok(UnpackOutcome {
        manifest,
        asset_path,
        text_path,
    })
}
