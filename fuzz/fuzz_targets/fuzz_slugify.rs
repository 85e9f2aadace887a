#![no_main]

use libfuzzer_sys::fuzz_target;
use vehicle_catalog::utils::{highlight_segments, slugify};

/// Slugs must be stable under re-slugification.
fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        let slug = slugify(s);
        assert_eq!(slugify(&slug), slug);
        let _ = highlight_segments(s, s, &[]);
    }
});
