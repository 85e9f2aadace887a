//! JSON report generator.

use super::{comparison_rows, ReportConfig, ReportError, ReportFormat, ReportGenerator};
use crate::catalog::FacetOptions;
use crate::compare::{specs_by_category, ComparisonRow, ComparisonTable};
use crate::diff::{DatasetDiff, DiffSummary, VehicleChange};
use crate::model::{SupportType, VehicleRecord};
use chrono::Utc;
use indexmap::IndexMap;
use serde::Serialize;

/// JSON report generator
pub struct JsonReporter {
    /// Pretty print output
    pretty: bool,
}

impl JsonReporter {
    /// Create a new JSON reporter
    #[must_use]
    pub const fn new() -> Self {
        Self { pretty: true }
    }

    /// Set pretty printing
    #[must_use]
    pub const fn pretty(mut self, pretty: bool) -> Self {
        self.pretty = pretty;
        self
    }

    fn render<T: Serialize>(&self, value: &T) -> Result<String, ReportError> {
        let json = if self.pretty {
            serde_json::to_string_pretty(value)?
        } else {
            serde_json::to_string(value)?
        };
        Ok(json)
    }
}

impl Default for JsonReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportGenerator for JsonReporter {
    fn generate_list_report(
        &self,
        records: &[&VehicleRecord],
        config: &ReportConfig,
    ) -> Result<String, ReportError> {
        let shown = config.shown(records.len());
        let report = JsonListReport {
            metadata: JsonReportMetadata::from_config(config),
            total: records.len(),
            results: records[..shown]
                .iter()
                .map(|r| JsonListEntry::from_record(r))
                .collect(),
        };
        self.render(&report)
    }

    fn generate_detail_report(
        &self,
        record: &VehicleRecord,
        config: &ReportConfig,
    ) -> Result<String, ReportError> {
        let specs = specs_by_category()
            .into_iter()
            .map(|group| {
                let values = group
                    .specs
                    .iter()
                    .map(|spec| (spec.id, spec.display(record)))
                    .collect();
                (group.category.label(), values)
            })
            .collect();
        let report = JsonDetailReport {
            metadata: JsonReportMetadata::from_config(config),
            slug: record.slug(),
            vehicle: record,
            specs,
        };
        self.render(&report)
    }

    fn generate_comparison_report(
        &self,
        table: &ComparisonTable<'_>,
        config: &ReportConfig,
    ) -> Result<String, ReportError> {
        let report = JsonComparisonReport {
            metadata: JsonReportMetadata::from_config(config),
            columns: table.columns().iter().map(|r| r.name.as_str()).collect(),
            rows: comparison_rows(table, config).collect(),
        };
        self.render(&report)
    }

    fn generate_diff_report(
        &self,
        diff: &DatasetDiff,
        config: &ReportConfig,
    ) -> Result<String, ReportError> {
        let report = JsonDiffReport {
            metadata: JsonReportMetadata::from_config(config),
            summary: diff.summary,
            added: &diff.added,
            removed: &diff.removed,
            changed: &diff.changed,
            by_platform: &diff.by_platform,
        };
        self.render(&report)
    }

    fn generate_options_report(
        &self,
        options: &FacetOptions,
        config: &ReportConfig,
    ) -> Result<String, ReportError> {
        let report = JsonOptionsReport {
            metadata: JsonReportMetadata::from_config(config),
            options,
        };
        self.render(&report)
    }

    fn format(&self) -> ReportFormat {
        ReportFormat::Json
    }
}

// JSON structures

#[derive(Serialize)]
struct JsonReportMetadata {
    tool: ToolInfo,
    generated_at: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    dataset: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    old_dataset: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    new_dataset: Option<String>,
    total_records: usize,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    filters: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    sort: Option<String>,
}

impl JsonReportMetadata {
    fn from_config(config: &ReportConfig) -> Self {
        let meta = &config.metadata;
        Self {
            tool: ToolInfo {
                name: "vehicle-catalog".to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
            },
            generated_at: Utc::now().to_rfc3339(),
            dataset: meta.dataset_path.clone(),
            old_dataset: meta.old_dataset_path.clone(),
            new_dataset: meta.new_dataset_path.clone(),
            total_records: meta.total_records,
            filters: meta.filters.clone(),
            sort: meta.sort.clone(),
        }
    }
}

#[derive(Serialize)]
struct ToolInfo {
    name: String,
    version: String,
}

#[derive(Serialize)]
struct JsonListReport<'a> {
    metadata: JsonReportMetadata,
    total: usize,
    results: Vec<JsonListEntry<'a>>,
}

#[derive(Serialize)]
struct JsonListEntry<'a> {
    name: &'a str,
    slug: String,
    make: &'a str,
    model: &'a str,
    years: &'a str,
    support_type: &'a SupportType,
    package: &'a str,
    has_video: bool,
    has_setup_video: bool,
    has_longitudinal_report: bool,
}

impl<'a> JsonListEntry<'a> {
    fn from_record(record: &'a VehicleRecord) -> Self {
        Self {
            name: &record.name,
            slug: record.slug(),
            make: &record.make,
            model: &record.model,
            years: &record.years,
            support_type: &record.support_type,
            package: &record.package,
            has_video: record.has_video(),
            has_setup_video: record.has_setup_video(),
            has_longitudinal_report: record.has_longitudinal_report(),
        }
    }
}

#[derive(Serialize)]
struct JsonDetailReport<'a> {
    metadata: JsonReportMetadata,
    slug: String,
    vehicle: &'a VehicleRecord,
    /// Formatted spec values by category label
    specs: IndexMap<&'static str, IndexMap<&'static str, String>>,
}

#[derive(Serialize)]
struct JsonComparisonReport<'a> {
    metadata: JsonReportMetadata,
    columns: Vec<&'a str>,
    rows: Vec<&'a ComparisonRow>,
}

#[derive(Serialize)]
struct JsonDiffReport<'a> {
    metadata: JsonReportMetadata,
    summary: DiffSummary,
    added: &'a [String],
    removed: &'a [String],
    changed: &'a [VehicleChange],
    by_platform: &'a IndexMap<String, Vec<String>>,
}

#[derive(Serialize)]
struct JsonOptionsReport<'a> {
    metadata: JsonReportMetadata,
    #[serde(flatten)]
    options: &'a FacetOptions,
}
