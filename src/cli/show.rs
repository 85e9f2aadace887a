//! Show command handler.
//!
//! Implements the `show` subcommand: print one vehicle's detail page,
//! addressed by display name or slug.

use crate::config::AppConfig;
use crate::pipeline::{
    auto_detect_format, exit_codes, load_from_config, output_report, report_config_for,
    OutputTarget, PipelineError, ReportPayload,
};
use crate::reports::ReportFormat;
use crate::utils::slugify;
use anyhow::Result;

/// Run the show command
pub fn run_show(config: &AppConfig, ident: &str, quiet: bool) -> Result<i32> {
    let loaded = load_from_config(config, quiet)?;

    let Some(record) = loaded.dataset.resolve(ident) else {
        let err = PipelineError::NotFound {
            ident: ident.to_string(),
            suggestion: loaded.dataset.suggest(ident).map(str::to_string),
        };
        eprintln!("{err}");
        return Ok(err.exit_code());
    };
    tracing::debug!("Resolved '{ident}' to '{}'", record.name);

    let output_target = OutputTarget::from_option(config.output.file.clone());
    if auto_detect_format(config.output.format, &output_target) == ReportFormat::Tui {
        let slug = slugify(&record.name);
        return super::run_tui(
            config,
            loaded,
            super::TuiLaunch {
                detail: Some(slug),
                ..Default::default()
            },
        );
    }

    let mut report_config = report_config_for(config, super::dataset_metadata(&loaded));
    report_config.title = Some(record.name.clone());
    output_report(config, ReportPayload::Detail(record), &report_config, quiet)?;
    Ok(exit_codes::SUCCESS)
}
