//! Report output stage.
//!
//! Handles format auto-detection, reporter selection and writing to file or
//! stdout for every non-interactive command.

use crate::catalog::FacetOptions;
use crate::compare::ComparisonTable;
use crate::config::AppConfig;
use crate::diff::DatasetDiff;
use crate::model::VehicleRecord;
use crate::reports::{create_reporter_with_options, ReportConfig, ReportError, ReportMetadata};
use anyhow::Result;

use super::{auto_detect_format, should_use_color, write_output, OutputTarget};

/// What a command wants rendered.
#[derive(Clone, Copy)]
pub enum ReportPayload<'a> {
    /// Filtered, sorted results
    List(&'a [&'a VehicleRecord]),
    /// One vehicle
    Detail(&'a VehicleRecord),
    /// Side-by-side comparison
    Comparison(&'a ComparisonTable<'a>),
    /// Snapshot diff
    Diff(&'a DatasetDiff),
    /// Filter menu choices
    Options(&'a FacetOptions),
}

/// Build the report configuration shared by all commands.
#[must_use]
pub fn report_config_for(config: &AppConfig, metadata: ReportMetadata) -> ReportConfig {
    ReportConfig {
        max_items: config.catalog.limit,
        ..ReportConfig::with_metadata(metadata)
    }
}

/// Render a payload in the configured format and write it out.
pub fn output_report(
    config: &AppConfig,
    payload: ReportPayload<'_>,
    report_config: &ReportConfig,
    quiet: bool,
) -> Result<()> {
    let output_target = OutputTarget::from_option(config.output.file.clone());
    let effective_output = auto_detect_format(config.output.format, &output_target);
    let use_color = should_use_color(config.output.no_color) && output_target.is_terminal();

    tracing::debug!("Rendering {effective_output} report");
    let reporter = create_reporter_with_options(effective_output, use_color);
    let report = render(reporter.as_ref(), payload, report_config)?;

    write_output(&report, &output_target, quiet)
}

fn render(
    reporter: &dyn crate::reports::ReportGenerator,
    payload: ReportPayload<'_>,
    config: &ReportConfig,
) -> Result<String, ReportError> {
    match payload {
        ReportPayload::List(records) => reporter.generate_list_report(records, config),
        ReportPayload::Detail(record) => reporter.generate_detail_report(record, config),
        ReportPayload::Comparison(table) => reporter.generate_comparison_report(table, config),
        ReportPayload::Diff(diff) => reporter.generate_diff_report(diff, config),
        ReportPayload::Options(options) => reporter.generate_options_report(options, config),
    }
}
