//! Configuration types for vehicle-catalog.
//!
//! Provides structured configuration for data sources, output, catalog
//! defaults and the interactive browser.

use super::defaults::DEFAULT_THEME;
use crate::catalog::{SortConfig, SortField, SortOrder};
use crate::reports::ReportFormat;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

// ============================================================================
// Unified Application Configuration
// ============================================================================

/// Unified application configuration that can be loaded from CLI args or config files.
///
/// CLI arguments are layered over the file with [`AppConfig::merge`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct AppConfig {
    /// Dataset locations
    pub data: DataConfig,
    /// Output configuration (format, file, colors)
    pub output: OutputConfig,
    /// Catalog defaults (sort, result limit)
    pub catalog: CatalogConfig,
    /// TUI-specific configuration
    pub tui: TuiConfig,
}

impl AppConfig {
    /// Create a new `AppConfig` with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an `AppConfig` builder.
    pub fn builder() -> AppConfigBuilder {
        AppConfigBuilder::default()
    }
}

// ============================================================================
// Builder for AppConfig
// ============================================================================

/// Builder for constructing `AppConfig` with fluent API.
#[derive(Debug, Default)]
#[must_use]
pub struct AppConfigBuilder {
    config: AppConfig,
}

impl AppConfigBuilder {
    /// Set the dataset file.
    pub fn dataset(mut self, path: Option<PathBuf>) -> Self {
        self.config.data.dataset = path;
        self
    }

    /// Set the longitudinal reports index file.
    pub fn reports(mut self, path: Option<PathBuf>) -> Self {
        self.config.data.reports = path;
        self
    }

    /// Set the output format.
    pub const fn output_format(mut self, format: ReportFormat) -> Self {
        self.config.output.format = format;
        self
    }

    /// Set the output file.
    pub fn output_file(mut self, file: Option<PathBuf>) -> Self {
        self.config.output.file = file;
        self
    }

    /// Disable colored output.
    pub const fn no_color(mut self, no_color: bool) -> Self {
        self.config.output.no_color = no_color;
        self
    }

    /// Set the default sort field.
    pub const fn sort_field(mut self, field: SortField) -> Self {
        self.config.catalog.sort.field = field;
        self
    }

    /// Set the default sort direction.
    pub const fn sort_order(mut self, order: SortOrder) -> Self {
        self.config.catalog.sort.order = order;
        self
    }

    /// Limit the number of listed results.
    pub const fn limit(mut self, limit: Option<usize>) -> Self {
        self.config.catalog.limit = limit;
        self
    }

    /// Set the TUI theme.
    pub fn theme(mut self, theme: impl Into<String>) -> Self {
        self.config.tui.theme = theme.into();
        self
    }

    /// Build the `AppConfig`.
    #[must_use]
    pub fn build(self) -> AppConfig {
        self.config
    }
}

// ============================================================================
// TUI Preferences (persisted)
// ============================================================================

/// TUI preferences that persist across sessions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct TuiPreferences {
    /// Theme name: "dark", "light", or "high-contrast"
    pub theme: String,
}

impl Default for TuiPreferences {
    fn default() -> Self {
        Self {
            theme: DEFAULT_THEME.to_string(),
        }
    }
}

impl TuiPreferences {
    /// Get the path to the preferences file.
    #[must_use]
    pub fn config_path() -> Option<PathBuf> {
        super::file::user_config_dir().map(|p| p.join("preferences.json"))
    }

    /// Load preferences from disk, or return defaults if not found.
    #[must_use]
    pub fn load() -> Self {
        Self::config_path()
            .and_then(|p| std::fs::read_to_string(p).ok())
            .and_then(|s| serde_json::from_str(&s).ok())
            .unwrap_or_default()
    }

    /// Save preferences to disk.
    pub fn save(&self) -> std::io::Result<()> {
        if let Some(path) = Self::config_path() {
            if let Some(parent) = path.parent() {
                std::fs::create_dir_all(parent)?;
            }
            let json = serde_json::to_string_pretty(self)
                .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e))?;
            std::fs::write(path, json)?;
        }
        Ok(())
    }
}

// ============================================================================
// Sub-configuration Types
// ============================================================================

/// Where the catalog data comes from.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct DataConfig {
    /// Vehicle dataset JSON (array of records)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dataset: Option<PathBuf>,
    /// Longitudinal reports index JSON, keyed by platform fingerprint
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reports: Option<PathBuf>,
}

/// Output-related configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct OutputConfig {
    /// Output format
    pub format: ReportFormat,
    /// Output file path (None for stdout)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file: Option<PathBuf>,
    /// Disable colored output
    pub no_color: bool,
}

/// Catalog defaults applied to `list` and the browser.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct CatalogConfig {
    /// Initial sort
    pub sort: SortConfig,
    /// Maximum number of results printed by `list`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<usize>,
}

/// TUI-specific configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct TuiConfig {
    /// Theme name: "dark", "light", or "high-contrast"
    pub theme: String,
    /// Enable mouse support
    pub mouse_enabled: bool,
    /// Show the card grid instead of the list on startup
    pub grid_view: bool,
}

impl Default for TuiConfig {
    fn default() -> Self {
        Self {
            theme: DEFAULT_THEME.to_string(),
            mouse_enabled: true,
            grid_view: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder() {
        let config = AppConfig::builder()
            .dataset(Some(PathBuf::from("cars.json")))
            .output_format(ReportFormat::Json)
            .sort_field(SortField::Year)
            .sort_order(SortOrder::Desc)
            .limit(Some(10))
            .theme("light")
            .build();

        assert_eq!(config.data.dataset, Some(PathBuf::from("cars.json")));
        assert_eq!(config.output.format, ReportFormat::Json);
        assert_eq!(config.catalog.sort, SortConfig::new(SortField::Year, SortOrder::Desc));
        assert_eq!(config.catalog.limit, Some(10));
        assert_eq!(config.tui.theme, "light");
    }

    #[test]
    fn test_partial_yaml_uses_defaults() {
        let config: AppConfig = serde_yaml::from_str("catalog:\n  sort:\n    field: year\n").unwrap();
        assert_eq!(config.catalog.sort.field, SortField::Year);
        assert_eq!(config.catalog.sort.order, SortOrder::Asc);
        assert_eq!(config.tui, TuiConfig::default());
    }

    #[test]
    fn test_preferences_default() {
        assert_eq!(TuiPreferences::default().theme, "dark");
    }
}
