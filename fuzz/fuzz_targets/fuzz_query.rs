#![no_main]

use libfuzzer_sys::fuzz_target;
use vehicle_catalog::catalog::{run_query, FilterState, SortConfig};
use vehicle_catalog::model::Dataset;

const DATASET: &str = include_str!("../../tests/fixtures/vehicles.json");

/// Run arbitrary query and year text against the fixture dataset.
fuzz_target!(|data: &[u8]| {
    let Ok(query) = std::str::from_utf8(data) else {
        return;
    };
    let Ok(dataset) = Dataset::from_json_str(DATASET) else {
        return;
    };
    let filters = FilterState::new().with_query(query).with_year(query);
    let _ = run_query(&dataset, &filters, &SortConfig::default());
    let _ = dataset.suggest(query);
});
