//! Default values and well-known file locations.

/// Theme names accepted by the browser.
pub const THEMES: [&str; 3] = ["dark", "light", "high-contrast"];

/// Theme used when nothing is configured.
pub const DEFAULT_THEME: &str = "dark";

/// Dataset files probed, relative to the working directory, when no
/// dataset is configured.
pub const DEFAULT_DATASET_FILES: [&str; 3] =
    ["metadata.json", "data/metadata.json", "src/data/metadata.json"];

/// Reports index picked up next to the dataset when present.
pub const DEFAULT_REPORTS_FILE: &str = "longitudinal_reports.json";
