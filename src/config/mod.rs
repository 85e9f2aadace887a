//! Configuration module for vehicle-catalog.
//!
//! This module provides a unified configuration system with:
//! - Type-safe configuration structures
//! - Validation for all configuration values
//! - YAML config file loading and discovery
//! - CLI argument merging
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use vehicle_catalog::config::{AppConfig, load_or_default};
//!
//! let config = AppConfig::builder()
//!     .dataset(Some("metadata.json".into()))
//!     .sort_field(SortField::Year)
//!     .build();
//!
//! let (config, loaded_from) = load_or_default(None);
//! ```
//!
//! # Configuration File
//!
//! Place a `.vehicle-catalog.yaml` file in your project root or
//! `~/.config/vehicle-catalog/`:
//!
//! ```yaml
//! data:
//!   dataset: src/data/metadata.json
//! catalog:
//!   sort:
//!     field: year
//!     order: desc
//! tui:
//!   theme: high-contrast
//! ```

mod defaults;
pub mod file;
mod types;
mod validation;

pub use defaults::{DEFAULT_DATASET_FILES, DEFAULT_REPORTS_FILE, DEFAULT_THEME, THEMES};
pub use types::{
    AppConfig, AppConfigBuilder, CatalogConfig, DataConfig, OutputConfig, TuiConfig,
    TuiPreferences,
};
pub use validation::{ConfigError, Validatable};

pub use file::{
    discover_config_file, generate_example_config, generate_full_example_config, load_config_file,
    load_or_default, user_config_dir, ConfigFileError,
};

/// Generate a JSON Schema for the `AppConfig` configuration format.
///
/// Editors can use it to validate `.vehicle-catalog.yaml` files.
pub fn generate_json_schema() -> serde_json::Result<String> {
    let schema = schemars::schema_for!(AppConfig);
    serde_json::to_string_pretty(&schema)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_json_schema_lists_sections() {
        let schema = generate_json_schema().unwrap();
        for section in ["data", "output", "catalog", "tui"] {
            assert!(schema.contains(&format!("\"{section}\"")), "missing {section}");
        }
    }
}
