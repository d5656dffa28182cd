//! Fuzz target for dataset profiling.
//!
//! Profiling must never panic: malformed text either yields a profile with
//! issues or a parse error.

#![no_main]

use libfuzzer_sys::fuzz_target;
use std::io::Write;
use tablescope::Profiler;

fuzz_target!(|data: &[u8]| {
    if data.len() > 100_000 {
        return;
    }

    let profiler = Profiler::new();
    let _ = profiler.profile(&String::from_utf8_lossy(data));

    // Non-UTF-8 files must surface as an error, not a panic.
    if let Ok(mut temp_file) = tempfile::NamedTempFile::new() {
        if temp_file.write_all(data).is_ok() {
            let _ = profiler.profile_file(temp_file.path());
        }
    }
});
