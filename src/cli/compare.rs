//! Compare command handler.
//!
//! Implements the `compare` subcommand: a side-by-side table of two to six
//! vehicles given as slugs, names, or one comma-separated `cars` value.

use crate::compare::{resolve_cars_param, ComparisonView, MIN_FOR_COMPARISON};
use crate::config::AppConfig;
use crate::pipeline::{
    auto_detect_format, exit_codes, load_from_config, output_report, report_config_for,
    OutputTarget, PipelineError, ReportPayload,
};
use crate::reports::ReportFormat;
use anyhow::Result;

/// Run the compare command
pub fn run_compare(
    config: &AppConfig,
    vehicles: &[String],
    only_differences: bool,
    quiet: bool,
) -> Result<i32> {
    let loaded = load_from_config(config, quiet)?;

    // Slug lookup slugifies its input, so display names resolve as well.
    let records = resolve_cars_param(&loaded.dataset, &vehicles.join(","));

    if records.len() < MIN_FOR_COMPARISON {
        let err = PipelineError::NotEnoughVehicles {
            resolved: records.len(),
        };
        eprintln!("{err}");
        return Ok(err.exit_code());
    }

    let output_target = OutputTarget::from_option(config.output.file.clone());
    if auto_detect_format(config.output.format, &output_target) == ReportFormat::Tui {
        let names = records.iter().map(|r| r.name.clone()).collect();
        return super::run_tui(
            config,
            loaded,
            super::TuiLaunch {
                compare: names,
                ..Default::default()
            },
        );
    }

    let ComparisonView::Ready(table) = ComparisonView::from_records(records) else {
        return Ok(exit_codes::NOT_FOUND);
    };

    let mut report_config = report_config_for(config, super::dataset_metadata(&loaded));
    report_config.only_differences = only_differences;
    output_report(
        config,
        ReportPayload::Comparison(&table),
        &report_config,
        quiet,
    )?;
    Ok(exit_codes::SUCCESS)
}
