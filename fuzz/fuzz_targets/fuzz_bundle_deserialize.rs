//! Fuzz target for bundle document parsing.
//!
//! Seeds may come from untrusted sources; parsing arbitrary bytes must only
//! ever return an error, never panic.

#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let _ = sz_archive::bundle::deserialize(data);
});
