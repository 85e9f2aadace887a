//! Configuration validation.

use super::defaults::THEMES;
use super::types::{AppConfig, CatalogConfig, DataConfig, OutputConfig, TuiConfig};
use crate::reports::ReportFormat;

// ============================================================================
// Configuration Error
// ============================================================================

/// Error type for configuration validation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{field}: {message}")]
pub struct ConfigError {
    /// The field that failed validation
    pub field: String,
    /// Description of the validation error
    pub message: String,
}

impl ConfigError {
    fn new(field: &str, message: impl Into<String>) -> Self {
        Self {
            field: field.to_string(),
            message: message.into(),
        }
    }
}

// ============================================================================
// Validation Trait
// ============================================================================

/// Trait for validatable configuration types.
pub trait Validatable {
    /// Validate the configuration, returning any errors found.
    fn validate(&self) -> Vec<ConfigError>;

    /// Check if the configuration is valid.
    fn is_valid(&self) -> bool {
        self.validate().is_empty()
    }
}

// ============================================================================
// Validation Implementations
// ============================================================================

impl Validatable for AppConfig {
    fn validate(&self) -> Vec<ConfigError> {
        let mut errors = Vec::new();
        errors.extend(self.data.validate());
        errors.extend(self.output.validate());
        errors.extend(self.catalog.validate());
        errors.extend(self.tui.validate());
        errors
    }
}

impl Validatable for DataConfig {
    fn validate(&self) -> Vec<ConfigError> {
        let mut errors = Vec::new();
        if let Some(dataset) = &self.dataset {
            if dataset.as_os_str().is_empty() {
                errors.push(ConfigError::new("data.dataset", "Path must not be empty"));
            }
        }
        if let Some(reports) = &self.reports {
            if reports.as_os_str().is_empty() {
                errors.push(ConfigError::new("data.reports", "Path must not be empty"));
            }
        }
        errors
    }
}

impl Validatable for OutputConfig {
    fn validate(&self) -> Vec<ConfigError> {
        let mut errors = Vec::new();
        if self.format == ReportFormat::Tui && self.file.is_some() {
            errors.push(ConfigError::new(
                "output.file",
                "The tui format cannot be written to a file",
            ));
        }
        errors
    }
}

impl Validatable for CatalogConfig {
    fn validate(&self) -> Vec<ConfigError> {
        let mut errors = Vec::new();
        if self.limit == Some(0) {
            errors.push(ConfigError::new(
                "catalog.limit",
                "Limit must be greater than 0",
            ));
        }
        errors
    }
}

impl Validatable for TuiConfig {
    fn validate(&self) -> Vec<ConfigError> {
        let mut errors = Vec::new();
        if !THEMES.contains(&self.theme.as_str()) {
            errors.push(ConfigError::new(
                "tui.theme",
                format!(
                    "Invalid theme '{}'. Valid options: {}",
                    self.theme,
                    THEMES.join(", ")
                ),
            ));
        }
        errors
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_default_config_is_valid() {
        assert!(AppConfig::default().is_valid());
    }

    #[test]
    fn test_invalid_theme() {
        let config = AppConfig::builder().theme("neon").build();
        let errors = config.validate();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].field, "tui.theme");
        assert!(errors[0].to_string().contains("high-contrast"));
    }

    #[test]
    fn test_zero_limit() {
        let config = AppConfig::builder().limit(Some(0)).build();
        assert!(!config.is_valid());
    }

    #[test]
    fn test_tui_to_file() {
        let config = AppConfig::builder()
            .output_format(ReportFormat::Tui)
            .output_file(Some(PathBuf::from("out.txt")))
            .build();
        assert_eq!(config.validate()[0].field, "output.file");
    }

    #[test]
    fn test_errors_accumulate() {
        let config = AppConfig::builder()
            .dataset(Some(PathBuf::new()))
            .limit(Some(0))
            .theme("neon")
            .build();
        assert_eq!(config.validate().len(), 3);
    }
}
