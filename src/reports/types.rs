//! Report type definitions.

use clap::ValueEnum;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Output format for reports
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum ReportFormat {
    /// Auto-detect: TUI if TTY, summary otherwise
    #[default]
    Auto,
    /// Interactive TUI display
    Tui,
    /// Brief summary output
    Summary,
    /// Aligned table for terminal (colored)
    Table,
    /// Structured JSON output
    Json,
    /// CSV for spreadsheet import
    Csv,
    /// Human-readable Markdown
    #[value(alias = "md")]
    Markdown,
}

impl std::fmt::Display for ReportFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Auto => write!(f, "auto"),
            Self::Tui => write!(f, "tui"),
            Self::Summary => write!(f, "summary"),
            Self::Table => write!(f, "table"),
            Self::Json => write!(f, "json"),
            Self::Csv => write!(f, "csv"),
            Self::Markdown => write!(f, "markdown"),
        }
    }
}

/// Configuration for report generation
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ReportConfig {
    /// Title for the report
    pub title: Option<String>,
    /// Maximum rows in list reports
    pub max_items: Option<usize>,
    /// Only keep comparison rows whose values differ
    pub only_differences: bool,
    /// Additional metadata to include
    pub metadata: ReportMetadata,
}

impl ReportConfig {
    pub fn with_metadata(metadata: ReportMetadata) -> Self {
        Self {
            metadata,
            ..Default::default()
        }
    }

    /// Number of rows to print out of `total`.
    pub fn shown(&self, total: usize) -> usize {
        self.max_items.map_or(total, |max| max.min(total))
    }
}

/// Metadata included in reports
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ReportMetadata {
    /// Tool version
    pub tool_version: String,
    /// Dataset file the report was produced from
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dataset_path: Option<String>,
    /// Older snapshot, for diff reports
    #[serde(skip_serializing_if = "Option::is_none")]
    pub old_dataset_path: Option<String>,
    /// Newer snapshot, for diff reports
    #[serde(skip_serializing_if = "Option::is_none")]
    pub new_dataset_path: Option<String>,
    /// Records in the dataset
    pub total_records: usize,
    /// Active filter chips, e.g. `Make: Honda`
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub filters: Vec<String>,
    /// Sort description, e.g. `Year ↓`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort: Option<String>,
}

impl ReportMetadata {
    pub fn new() -> Self {
        Self {
            tool_version: env!("CARGO_PKG_VERSION").to_string(),
            ..Default::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_display_matches_value_names() {
        for format in ReportFormat::value_variants() {
            let name = format.to_possible_value().unwrap();
            assert_eq!(name.get_name(), format.to_string());
        }
    }

    #[test]
    fn test_shown_respects_limit() {
        let mut config = ReportConfig::default();
        assert_eq!(config.shown(12), 12);
        config.max_items = Some(5);
        assert_eq!(config.shown(12), 5);
        assert_eq!(config.shown(3), 3);
    }
}
