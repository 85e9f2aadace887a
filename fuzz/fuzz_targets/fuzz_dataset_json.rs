#![no_main]

use libfuzzer_sys::fuzz_target;
use vehicle_catalog::model::Dataset;

/// Feed arbitrary UTF-8 to the dataset loader, covering JSON shape checks,
/// name validation and year expansion.
fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        let _ = Dataset::from_json_str(s);
    }
});
