//! Configuration file loading and discovery.
//!
//! Supports loading configuration from YAML files with automatic discovery.

use super::defaults::DEFAULT_THEME;
use super::types::AppConfig;
use crate::reports::ReportFormat;
use std::path::{Path, PathBuf};
use thiserror::Error;

// ============================================================================
// Configuration File Discovery
// ============================================================================

/// Directory name under the user config directory.
pub const CONFIG_DIR_NAME: &str = "vehicle-catalog";

/// Standard config file names to search for.
const CONFIG_FILE_NAMES: &[&str] = &[
    ".vehicle-catalog.yaml",
    ".vehicle-catalog.yml",
    "vehicle-catalog.yaml",
    "vehicle-catalog.yml",
    ".vehicle-catalogrc",
];

/// Discover a config file by searching standard locations.
///
/// Search order:
/// 1. Explicit path if provided
/// 2. Current directory
/// 3. Git repository root (if in a repo)
/// 4. User config directory (~/.config/vehicle-catalog/)
/// 5. Home directory
#[must_use]
pub fn discover_config_file(explicit_path: Option<&Path>) -> Option<PathBuf> {
    if let Some(path) = explicit_path {
        if path.exists() {
            return Some(path.to_path_buf());
        }
    }

    if let Ok(cwd) = std::env::current_dir() {
        if let Some(path) = find_config_in_dir(&cwd) {
            return Some(path);
        }
    }

    if let Some(path) = find_git_root().and_then(|root| find_config_in_dir(&root)) {
        return Some(path);
    }

    if let Some(path) = user_config_dir().and_then(|dir| find_config_in_dir(&dir)) {
        return Some(path);
    }

    dirs::home_dir().and_then(|home| find_config_in_dir(&home))
}

/// `~/.config/vehicle-catalog` or the platform equivalent.
#[must_use]
pub fn user_config_dir() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(CONFIG_DIR_NAME))
}

/// Find a config file in a specific directory.
fn find_config_in_dir(dir: &Path) -> Option<PathBuf> {
    CONFIG_FILE_NAMES
        .iter()
        .map(|name| dir.join(name))
        .find(|path| path.exists())
}

/// Find the git repository root by walking up the directory tree.
fn find_git_root() -> Option<PathBuf> {
    let cwd = std::env::current_dir().ok()?;
    let mut current = cwd.as_path();

    loop {
        if current.join(".git").exists() {
            return Some(current.to_path_buf());
        }
        current = current.parent()?;
    }
}

// ============================================================================
// Configuration File Loading
// ============================================================================

/// Error type for config file operations.
#[derive(Debug, Error)]
pub enum ConfigFileError {
    #[error("Config file not found: {}", .0.display())]
    NotFound(PathBuf),

    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse config file: {0}")]
    Parse(#[from] serde_yaml::Error),
}

/// Load an `AppConfig` from a YAML file.
pub fn load_config_file(path: &Path) -> Result<AppConfig, ConfigFileError> {
    if !path.exists() {
        return Err(ConfigFileError::NotFound(path.to_path_buf()));
    }

    let content = std::fs::read_to_string(path)?;
    let config: AppConfig = serde_yaml::from_str(&content)?;
    Ok(config)
}

/// Load config from discovered file, or return default.
#[must_use]
pub fn load_or_default(explicit_path: Option<&Path>) -> (AppConfig, Option<PathBuf>) {
    discover_config_file(explicit_path).map_or_else(
        || (AppConfig::default(), None),
        |path| match load_config_file(&path) {
            Ok(config) => {
                tracing::debug!("Loaded config from {}", path.display());
                (config, Some(path))
            }
            Err(e) => {
                tracing::warn!("Failed to load config from {}: {}", path.display(), e);
                (AppConfig::default(), None)
            }
        },
    )
}

// ============================================================================
// Configuration Merging
// ============================================================================

impl AppConfig {
    /// Merge another config into this one, with `other` taking precedence.
    ///
    /// Values still at their defaults in `other` leave `self` untouched.
    pub fn merge(&mut self, other: &Self) {
        if other.data.dataset.is_some() {
            self.data.dataset.clone_from(&other.data.dataset);
        }
        if other.data.reports.is_some() {
            self.data.reports.clone_from(&other.data.reports);
        }

        if other.output.format != ReportFormat::Auto {
            self.output.format = other.output.format;
        }
        if other.output.file.is_some() {
            self.output.file.clone_from(&other.output.file);
        }
        if other.output.no_color {
            self.output.no_color = true;
        }

        if other.catalog.sort != crate::catalog::SortConfig::default() {
            self.catalog.sort = other.catalog.sort;
        }
        if other.catalog.limit.is_some() {
            self.catalog.limit = other.catalog.limit;
        }

        if other.tui.theme != DEFAULT_THEME {
            self.tui.theme.clone_from(&other.tui.theme);
        }
        if !other.tui.mouse_enabled {
            self.tui.mouse_enabled = false;
        }
        if other.tui.grid_view {
            self.tui.grid_view = true;
        }
    }

    /// Load from file and merge with CLI overrides.
    #[must_use]
    pub fn from_file_with_overrides(
        config_path: Option<&Path>,
        cli_overrides: &Self,
    ) -> (Self, Option<PathBuf>) {
        let (mut config, loaded_from) = load_or_default(config_path);
        config.merge(cli_overrides);
        (config, loaded_from)
    }
}

// ============================================================================
// Example Config Generation
// ============================================================================

/// Generate an example config file content.
#[must_use]
pub fn generate_example_config() -> String {
    let example = AppConfig::default();
    format!(
        r"# vehicle-catalog configuration
# Place this file at .vehicle-catalog.yaml in your project root or ~/.config/vehicle-catalog/

{}
",
        serde_yaml::to_string(&example).unwrap_or_default()
    )
}

/// Generate a commented example config with all options.
#[must_use]
pub fn generate_full_example_config() -> String {
    r"# vehicle-catalog configuration file
# ==================================
#
# Place it at:
#   - .vehicle-catalog.yaml in your project root
#   - ~/.config/vehicle-catalog/vehicle-catalog.yaml for global config
#
# CLI arguments always override file settings.

# Data sources
# data:
#   # Vehicle dataset (JSON array of records)
#   dataset: data/cars.json
#   # Longitudinal reports index keyed by platform fingerprint
#   reports: data/longitudinal_reports.json

# Output configuration
output:
  # Format: auto, tui, summary, table, json, csv, markdown
  format: auto
  # Output file path (omit for stdout)
  # file: cars.json
  # Disable colored output
  no_color: false

# Catalog defaults
catalog:
  sort:
    # Field: make, support-type, year
    field: make
    # Direction: asc, desc
    order: asc
  # Maximum number of results printed by `list`
  # limit: 50

# Interactive browser
tui:
  # Theme: dark, light, high-contrast
  theme: dark
  mouse_enabled: true
  # Start in the card grid instead of the list
  grid_view: false
"
    .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::SortField;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_load_config_file() {
        let mut file = NamedTempFile::with_suffix(".yaml").unwrap();
        writeln!(
            file,
            "data:\n  dataset: cars.json\noutput:\n  format: json\ncatalog:\n  limit: 5\ntui:\n  theme: light"
        )
        .unwrap();

        let config = load_config_file(file.path()).unwrap();
        assert_eq!(config.data.dataset, Some(PathBuf::from("cars.json")));
        assert_eq!(config.output.format, ReportFormat::Json);
        assert_eq!(config.catalog.limit, Some(5));
        assert_eq!(config.tui.theme, "light");
    }

    #[test]
    fn test_load_missing_file() {
        let result = load_config_file(Path::new("/definitely/not/here.yaml"));
        assert!(matches!(result, Err(ConfigFileError::NotFound(_))));
    }

    #[test]
    fn test_load_invalid_yaml() {
        let mut file = NamedTempFile::with_suffix(".yaml").unwrap();
        writeln!(file, "catalog: [not, a, mapping").unwrap();
        assert!(matches!(
            load_config_file(file.path()),
            Err(ConfigFileError::Parse(_))
        ));
    }

    #[test]
    fn test_discover_explicit_path() {
        let file = NamedTempFile::with_suffix(".yaml").unwrap();
        let found = discover_config_file(Some(file.path()));
        assert_eq!(found, Some(file.path().to_path_buf()));
    }

    #[test]
    fn test_find_config_in_dir() {
        let dir = tempfile::tempdir().unwrap();
        assert!(find_config_in_dir(dir.path()).is_none());
        std::fs::write(dir.path().join("vehicle-catalog.yml"), "tui:\n  theme: light\n").unwrap();
        assert_eq!(
            find_config_in_dir(dir.path()),
            Some(dir.path().join("vehicle-catalog.yml"))
        );
    }

    #[test]
    fn test_merge_cli_overrides_file() {
        let mut file_config = AppConfig::builder()
            .dataset(Some(PathBuf::from("file.json")))
            .limit(Some(20))
            .theme("light")
            .build();
        let cli = AppConfig::builder()
            .dataset(Some(PathBuf::from("cli.json")))
            .output_format(ReportFormat::Csv)
            .sort_field(SortField::Year)
            .build();

        file_config.merge(&cli);
        assert_eq!(file_config.data.dataset, Some(PathBuf::from("cli.json")));
        assert_eq!(file_config.output.format, ReportFormat::Csv);
        assert_eq!(file_config.catalog.sort.field, SortField::Year);
        // Defaults on the CLI side keep the file values.
        assert_eq!(file_config.catalog.limit, Some(20));
        assert_eq!(file_config.tui.theme, "light");
    }

    #[test]
    fn test_example_configs_parse() {
        let config: AppConfig = serde_yaml::from_str(&generate_full_example_config()).unwrap();
        assert_eq!(config, AppConfig::default());
        assert!(generate_example_config().contains("vehicle-catalog"));
    }
}
