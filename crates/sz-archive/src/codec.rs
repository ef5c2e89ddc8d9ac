//! Zstandard stream codec for seeds.
//!
//! Compression runs at a high level since seeds are written once and read
//! rarely. Both directions move data through a fixed-size chunk buffer, so
//! peak memory stays independent of payload size.

use crate::{ArchiveError, Result};
use std::io::{Read, Write};

/// Fixed chunk size for streaming (1 MiB).
pub const CHUNK_SIZE: usize = 1024 * 1024;

/// Zstd compression level. Favors size over speed.
pub const COMPRESSION_LEVEL: i32 = 19;

/// Write adapter that counts bytes passed through to the inner writer.
struct CountingWriter<W: Write> {
    inner: W,
    written: u64,
}

impl<W: Write> Write for CountingWriter<W> {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        let n = self.inner.write(buf)?;
        self.written += n as u64;
        Ok(n)
    }

    fn flush(&mut self) -> std::io::Result<()> {
        self.inner.flush()
    }
}

/// Compress `input` into `dst`, returning the number of compressed bytes
/// written.
pub fn compress_to<W: Write>(input: &[u8], dst: W) -> Result<u64> {
    let counter = CountingWriter {
        inner: dst,
        written: 0,
    };
    let mut encoder = zstd::stream::write::Encoder::new(counter, COMPRESSION_LEVEL)?;
    for chunk in input.chunks(CHUNK_SIZE) {
        encoder.write_all(chunk)?;
    }
    let counter = encoder.finish()?;
    Ok(counter.written)
}

/// Compress into an in-memory buffer.
pub fn compress(input: &[u8]) -> Result<Vec<u8>> {
    let mut out = Vec::new();
    compress_to(input, &mut out)?;
    Ok(out)
}

/// Decompress a zstd stream fully into memory via bounded chunk reads.
///
/// Fails with [`ArchiveError::Decompression`] on truncated or non-zstd
/// input rather than returning partial data.
pub fn decompress_from<R: Read>(src: R) -> Result<Vec<u8>> {
    let mut decoder = zstd::stream::read::Decoder::new(src).map_err(ArchiveError::Decompression)?;
    let mut out = Vec::new();
    let mut chunk = vec![0u8; CHUNK_SIZE];
    loop {
        let n = decoder
            .read(&mut chunk)
            .map_err(ArchiveError::Decompression)?;
        if n == 0 {
            break;
        }
        out.extend_from_slice(&chunk[..n]);
    }
    Ok(out)
}

/// Decompress an in-memory buffer.
pub fn decompress(input: &[u8]) -> Result<Vec<u8>> {
    decompress_from(input)
}
