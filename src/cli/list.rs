//! List command handler.
//!
//! Implements the `list` subcommand: filter, search and sort the catalog and
//! print the visible records.

use crate::catalog::{run_query, FilterState, PresenceFilter};
use crate::config::AppConfig;
use crate::model::SupportType;
use crate::pipeline::{
    auto_detect_format, exit_codes, load_from_config, output_report, report_config_for,
    OutputTarget, ReportPayload,
};
use crate::reports::ReportFormat;
use crate::utils::slugify;
use anyhow::{bail, Result};

/// Filter criteria given on the command line.
///
/// All active filters are AND-combined, exactly as in the browser.
#[derive(Debug, Clone, Default)]
pub struct ListFilter {
    /// Free-text search
    pub query: Option<String>,
    /// Support level label or slug, e.g. `upstream` or `"Dashcam mode"`
    pub support: Option<String>,
    pub make: Option<String>,
    pub model: Option<String>,
    /// Matches any year the vehicle covers
    pub year: Option<String>,
    pub has_video: PresenceFilter,
    pub has_setup_video: PresenceFilter,
    pub has_report: PresenceFilter,
}

impl ListFilter {
    /// Build the catalog filter state.
    pub fn to_filter_state(&self) -> Result<FilterState> {
        let mut filters = FilterState::new();
        if let Some(query) = &self.query {
            filters.set_query(query.as_str());
        }
        if let Some(support) = &self.support {
            filters.set_support(Some(parse_support_arg(support)?));
        }
        if let Some(make) = &self.make {
            filters.set_make(make.as_str());
        }
        if let Some(model) = &self.model {
            filters.set_model(model.as_str());
        }
        if let Some(year) = &self.year {
            filters.set_year(year.as_str());
        }
        filters.set_has_video(self.has_video);
        filters.set_has_setup_video(self.has_setup_video);
        filters.set_has_report(self.has_report);
        Ok(filters)
    }
}

/// Parse a support level given as its label or slug, ignoring case.
pub fn parse_support_arg(value: &str) -> Result<SupportType> {
    let wanted = slugify(value);
    if let Some(found) = SupportType::ALL
        .iter()
        .find(|support| slugify(support.as_str()) == wanted)
    {
        return Ok(found.clone());
    }
    let valid: Vec<String> = SupportType::ALL
        .iter()
        .map(|support| slugify(support.as_str()))
        .collect();
    bail!(
        "unknown support type '{value}' (expected one of: {})",
        valid.join(", ")
    )
}

/// Run the list command
pub fn run_list(config: &AppConfig, filter: &ListFilter, quiet: bool) -> Result<i32> {
    let filters = filter.to_filter_state()?;

    let loaded = load_from_config(config, quiet)?;

    let output_target = OutputTarget::from_option(config.output.file.clone());
    if auto_detect_format(config.output.format, &output_target) == ReportFormat::Tui {
        return super::run_tui(
            config,
            loaded,
            super::TuiLaunch {
                filters,
                ..Default::default()
            },
        );
    }

    let records = run_query(&loaded.dataset, &filters, &config.catalog.sort);
    tracing::debug!(
        "{} of {} vehicles match",
        records.len(),
        loaded.dataset.len()
    );

    let mut metadata = super::dataset_metadata(&loaded);
    metadata.filters = filters
        .active_filters()
        .into_iter()
        .map(|chip| format!("{}: {}", chip.label, chip.value))
        .collect();
    metadata.sort = Some(config.catalog.sort.to_string());

    output_report(
        config,
        ReportPayload::List(&records),
        &report_config_for(config, metadata),
        quiet,
    )?;

    if records.is_empty() {
        Ok(exit_codes::NOT_FOUND)
    } else {
        Ok(exit_codes::SUCCESS)
    }
}
