//! Options command handler.
//!
//! Implements the `options` subcommand: the values that populate the
//! make, model, year and support-type filter menus.

use crate::catalog::FacetOptions;
use crate::config::AppConfig;
use crate::pipeline::{exit_codes, load_from_config, output_report, report_config_for, ReportPayload};
use anyhow::Result;

/// Run the options command
pub fn run_options(config: &AppConfig, quiet: bool) -> Result<i32> {
    let loaded = load_from_config(config, quiet)?;
    let options = FacetOptions::from_dataset(&loaded.dataset);
    tracing::debug!(
        "{} makes, {} models, {} years",
        options.makes.len(),
        options.models.len(),
        options.years.len()
    );

    output_report(
        config,
        ReportPayload::Options(&options),
        &report_config_for(config, super::dataset_metadata(&loaded)),
        quiet,
    )?;
    Ok(exit_codes::SUCCESS)
}
