//! No-mock round-trip tests for the seed pipeline.
//!
//! Exercises real pack/unpack/validate over temp files:
//! - Byte-for-byte round-trip identity for binary assets and unicode text
//! - Validator as the correctness oracle, including targeted corruption
//! - Archive-level corruption detection
//! - Path-traversal manifests confined to the output directory

use serde_json::json;
use std::fs;
use std::path::{Path, PathBuf};
use sz_archive::{pack, unpack, validate, ArchiveError};
use sz_meta::{ArchetypeProvider, LayoutStore, PageMetadata};
use tempfile::TempDir;

/// Pseudo-random but deterministic binary payload with embedded nulls.
fn fake_scan_bytes(len: usize) -> Vec<u8> {
    let mut state = 0x2545f491u32;
    (0..len)
        .map(|_| {
            state = state.wrapping_mul(1664525).wrapping_add(1013904223);
            (state >> 24) as u8
        })
        .collect()
}

fn write_page(dir: &TempDir, asset_name: &str, text_name: &str, text: &str) -> (PathBuf, PathBuf) {
    let asset_path = dir.path().join(asset_name);
    let text_path = dir.path().join(text_name);
    fs::write(&asset_path, fake_scan_bytes(1200)).unwrap();
    fs::write(&text_path, text).unwrap();
    (asset_path, text_path)
}

fn seeded_store(dir: &TempDir) -> LayoutStore {
    let mut store = LayoutStore::open(dir.path().join("archetypes.json")).unwrap();
    store.seed_defaults();
    store
}

#[test]
fn roundtrip_is_byte_identical() {
    let dir = TempDir::new().unwrap();
    let (asset_path, text_path) = write_page(&dir, "front_1925.png", "front_1925.txt", "HEADLINE TEXT");
    let store = seeded_store(&dir);
    let provider = ArchetypeProvider::new(&store);

    let archive = dir.path().join("seeds/front_1925.soulzip");
    let report = pack(&asset_path, &text_path, &provider, &archive).unwrap();
    assert!(archive.exists());
    assert!(report.bundle_bytes > 0);
    assert!(report.compressed_bytes > 0);

    let out_dir = dir.path().join("restored");
    let outcome = unpack(&archive, &out_dir).unwrap();

    assert_eq!(
        fs::read(&outcome.asset_path).unwrap(),
        fs::read(&asset_path).unwrap()
    );
    assert_eq!(fs::read_to_string(&outcome.text_path).unwrap(), "HEADLINE TEXT");

    let check = validate(&outcome.manifest, &outcome.asset_path, &outcome.text_path).unwrap();
    assert!(check.asset_match);
    assert!(check.text_match);
    assert!(check.is_lossless());
}

#[test]
fn roundtrip_preserves_unicode_text() {
    let dir = TempDir::new().unwrap();
    let text = "EXTRA! EXTRA!\n見出し — tête-à-tête\r\nSecond line.\n";
    let (asset_path, text_path) = write_page(&dir, "herald_1931_page2.png", "herald_1931_page2.txt", text);
    let store = seeded_store(&dir);
    let provider = ArchetypeProvider::new(&store);

    let archive = dir.path().join("h.soulzip");
    pack(&asset_path, &text_path, &provider, &archive).unwrap();
    let outcome = unpack(&archive, &dir.path().join("out")).unwrap();

    assert_eq!(fs::read_to_string(&outcome.text_path).unwrap(), text);
    assert!(validate(&outcome.manifest, &outcome.asset_path, &outcome.text_path)
        .unwrap()
        .is_lossless());
}

#[test]
fn manifest_reflects_filename_convention() {
    let dir = TempDir::new().unwrap();
    let (asset_path, text_path) =
        write_page(&dir, "tribune_1925-03-14_page3.png", "tribune_1925-03-14_page3.txt", "x");
    let store = seeded_store(&dir);
    let provider = ArchetypeProvider::new(&store);

    let archive = dir.path().join("t.soulzip");
    pack(&asset_path, &text_path, &provider, &archive).unwrap();
    let outcome = unpack(&archive, &dir.path().join("out")).unwrap();

    let meta = &outcome.manifest.page_metadata;
    assert_eq!(meta.publication, "tribune");
    assert_eq!(meta.date, "1925-03-14");
    assert_eq!(meta.page_num, "3");
    assert_eq!(outcome.manifest.version, "1.0");
    assert_eq!(outcome.manifest.format_spec, "lossless_v1");
    assert_eq!(
        outcome.manifest.layout_info["layout_archetype_id"],
        "LAYOUT_FRONT_PAGE_1920S_A"
    );
}

#[test]
fn corrupting_reconstructed_asset_flips_only_that_flag() {
    let dir = TempDir::new().unwrap();
    let (asset_path, text_path) = write_page(&dir, "p_1_page1.png", "p_1_page1.txt", "body");
    let store = seeded_store(&dir);
    let provider = ArchetypeProvider::new(&store);

    let archive = dir.path().join("p.soulzip");
    pack(&asset_path, &text_path, &provider, &archive).unwrap();
    let outcome = unpack(&archive, &dir.path().join("out")).unwrap();

    let mut bytes = fs::read(&outcome.asset_path).unwrap();
    bytes[0] ^= 0xff;
    fs::write(&outcome.asset_path, &bytes).unwrap();

    let check = validate(&outcome.manifest, &outcome.asset_path, &outcome.text_path).unwrap();
    assert!(!check.asset_match);
    assert!(check.text_match);
}

#[test]
fn corrupted_archive_fails_or_validates_false() {
    let dir = TempDir::new().unwrap();
    let (asset_path, text_path) = write_page(&dir, "c_1_page1.png", "c_1_page1.txt", "content");
    let store = seeded_store(&dir);
    let provider = ArchetypeProvider::new(&store);

    let archive = dir.path().join("c.soulzip");
    pack(&asset_path, &text_path, &provider, &archive).unwrap();

    // Flip one byte in the middle of the compressed stream.
    let mut bytes = fs::read(&archive).unwrap();
    let mid = bytes.len() / 2;
    bytes[mid] ^= 0x01;
    fs::write(&archive, &bytes).unwrap();

    match unpack(&archive, &dir.path().join("out")) {
        Err(
            ArchiveError::Decompression(_)
            | ArchiveError::MalformedBundle(_)
            | ArchiveError::Encoding(_),
        ) => {}
        Err(other) => panic!("unexpected error kind: {other}"),
        Ok(outcome) => {
            let check =
                validate(&outcome.manifest, &outcome.asset_path, &outcome.text_path).unwrap();
            assert!(!check.is_lossless());
        }
    }
}

#[test]
fn truncated_archive_is_rejected() {
    let dir = TempDir::new().unwrap();
    let (asset_path, text_path) = write_page(&dir, "t_1_page1.png", "t_1_page1.txt", "content");
    let store = seeded_store(&dir);
    let provider = ArchetypeProvider::new(&store);

    let archive = dir.path().join("t.soulzip");
    pack(&asset_path, &text_path, &provider, &archive).unwrap();

    let bytes = fs::read(&archive).unwrap();
    fs::write(&archive, &bytes[..bytes.len() / 3]).unwrap();

    assert!(unpack(&archive, &dir.path().join("out")).is_err());
}

#[test]
fn traversal_filenames_confined_to_output_dir() {
    // A hostile manifest naming "../../etc/passwd" must reconstruct to a
    // file literally named "passwd" inside the output directory. The seed
    // is hand-built since pack() always stores base names.
    let dir = TempDir::new().unwrap();
    let manifest = sz_archive::SeedManifest::new(
        PageMetadata::from_asset_path(Path::new("evil.png")),
        "../../etc/passwd",
        "../escape.txt",
        sz_archive::hash::digest(b"a"),
        sz_archive::hash::digest(b"t"),
        json!({}),
    );
    let serialized = sz_archive::bundle::serialize(&manifest, b"a", b"t").unwrap();
    let archive = dir.path().join("evil.soulzip");
    let mut file = fs::File::create(&archive).unwrap();
    sz_archive::codec::compress_to(&serialized, &mut file).unwrap();
    drop(file);

    let out_dir = dir.path().join("restored");
    let outcome = unpack(&archive, &out_dir).unwrap();

    assert_eq!(outcome.asset_path, out_dir.join("passwd"));
    assert_eq!(outcome.text_path, out_dir.join("escape.txt"));
    assert!(outcome.asset_path.starts_with(&out_dir));
    assert!(!dir.path().join("escape.txt").exists());
}

#[test]
fn independent_archives_do_not_interfere() {
    // Two packs into the same directory, unpacked into separate dirs.
    let dir = TempDir::new().unwrap();
    let store = seeded_store(&dir);
    let provider = ArchetypeProvider::new(&store);

    let (a1, t1) = write_page(&dir, "one_1_page1.png", "one_1_page1.txt", "first");
    let (a2, t2) = write_page(&dir, "two_2_page2.png", "two_2_page2.txt", "second");

    let s1 = dir.path().join("seeds/one.soulzip");
    let s2 = dir.path().join("seeds/two.soulzip");
    pack(&a1, &t1, &provider, &s1).unwrap();
    pack(&a2, &t2, &provider, &s2).unwrap();

    let o1 = unpack(&s1, &dir.path().join("out1")).unwrap();
    let o2 = unpack(&s2, &dir.path().join("out2")).unwrap();

    assert_eq!(fs::read_to_string(&o1.text_path).unwrap(), "first");
    assert_eq!(fs::read_to_string(&o2.text_path).unwrap(), "second");
    assert!(validate(&o1.manifest, &o1.asset_path, &o1.text_path).unwrap().is_lossless());
    assert!(validate(&o2.manifest, &o2.asset_path, &o2.text_path).unwrap().is_lossless());
}
