//! Report generation for catalog output.
//!
//! Every reporter renders the same five payloads:
//! - list: the filtered, sorted result set
//! - detail: one vehicle with every spec grouped by category
//! - comparison: the side-by-side table of two to six vehicles
//! - diff: changes between two dataset snapshots
//! - options: the facet values that populate filter menus
//!
//! Formats:
//! - JSON: Structured data for programmatic integration
//! - CSV: Spreadsheet import
//! - Markdown: Human-readable documentation
//! - Summary: Compact shell-friendly output
//! - Table: Aligned tabular terminal output
//!
//! Dataset text is escaped through [`escape`] before it is embedded in
//! Markdown or CSV.

mod csv;
pub mod escape;
mod json;
mod markdown;
mod summary;
mod types;

pub use csv::CsvReporter;
pub use json::JsonReporter;
pub use markdown::MarkdownReporter;
pub use summary::{SummaryReporter, TableReporter};
pub use types::{ReportConfig, ReportFormat, ReportMetadata};

use crate::catalog::FacetOptions;
use crate::compare::ComparisonTable;
use crate::diff::DatasetDiff;
use crate::model::VehicleRecord;
use std::io::Write;
use thiserror::Error;

/// Errors that can occur during report generation
#[derive(Error, Debug)]
pub enum ReportError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(String),

    #[error("Format error: {0}")]
    FormatError(#[from] std::fmt::Error),
}

impl From<serde_json::Error> for ReportError {
    fn from(err: serde_json::Error) -> Self {
        Self::SerializationError(err.to_string())
    }
}

/// Trait for report generators
pub trait ReportGenerator {
    /// Render a result list in display order
    fn generate_list_report(
        &self,
        records: &[&VehicleRecord],
        config: &ReportConfig,
    ) -> Result<String, ReportError>;

    /// Render one vehicle's detail page
    fn generate_detail_report(
        &self,
        record: &VehicleRecord,
        config: &ReportConfig,
    ) -> Result<String, ReportError>;

    /// Render a side-by-side comparison
    fn generate_comparison_report(
        &self,
        table: &ComparisonTable<'_>,
        config: &ReportConfig,
    ) -> Result<String, ReportError>;

    /// Render the changes between two snapshots
    fn generate_diff_report(
        &self,
        diff: &DatasetDiff,
        config: &ReportConfig,
    ) -> Result<String, ReportError>;

    /// Render filter menu choices
    fn generate_options_report(
        &self,
        options: &FacetOptions,
        config: &ReportConfig,
    ) -> Result<String, ReportError>;

    /// Write a list report to a writer
    fn write_list_report(
        &self,
        records: &[&VehicleRecord],
        config: &ReportConfig,
        writer: &mut dyn Write,
    ) -> Result<(), ReportError> {
        let report = self.generate_list_report(records, config)?;
        writer.write_all(report.as_bytes())?;
        Ok(())
    }

    /// Get the format this generator produces
    fn format(&self) -> ReportFormat;
}

/// Rows of a comparison honoring `only_differences`.
pub(crate) fn comparison_rows<'t>(
    table: &'t ComparisonTable<'_>,
    config: &ReportConfig,
) -> impl Iterator<Item = &'t crate::compare::ComparisonRow> {
    let only_differences = config.only_differences;
    table
        .rows()
        .filter(move |row| !only_differences || row.differs())
}

/// Create a report generator for the given format
#[must_use]
pub fn create_reporter(format: ReportFormat) -> Box<dyn ReportGenerator> {
    create_reporter_with_options(format, true)
}

/// Create a report generator with color control
#[must_use]
pub fn create_reporter_with_options(
    format: ReportFormat,
    use_color: bool,
) -> Box<dyn ReportGenerator> {
    match format {
        ReportFormat::Auto | ReportFormat::Summary | ReportFormat::Tui => {
            if use_color {
                Box::new(SummaryReporter::new())
            } else {
                Box::new(SummaryReporter::new().no_color())
            }
        }
        ReportFormat::Table => {
            if use_color {
                Box::new(TableReporter::new())
            } else {
                Box::new(TableReporter::new().no_color())
            }
        }
        ReportFormat::Json => Box::new(JsonReporter::new()),
        ReportFormat::Csv => Box::new(CsvReporter::new()),
        ReportFormat::Markdown => Box::new(MarkdownReporter::new()),
    }
}
