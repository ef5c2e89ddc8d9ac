//! Fuzz target for seed decompression.
//!
//! Truncated or corrupt compressed streams must fail cleanly.

#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let _ = sz_archive::codec::decompress(data);
});
