//! Fuzz target for response extraction.
//!
//! Extraction must never panic, and any recovered dataset is re-profiled.

#![no_main]

use libfuzzer_sys::fuzz_target;
use tablescope::Profiler;

fuzz_target!(|data: &[u8]| {
    if data.len() > 100_000 {
        return;
    }

    if let Ok(text) = std::str::from_utf8(data) {
        let outcome = Profiler::new().apply_response(text);
        assert_eq!(outcome.text, outcome.text.trim());
    }
});
