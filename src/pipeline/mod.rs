//! Pipeline orchestration for catalog commands.
//!
//! Shared load → query → report plumbing used by every CLI handler, so each
//! command only decides *what* to render.

mod load;
mod output;
mod report_stage;

pub use load::{load_dataset, load_from_config, resolve_dataset_path, resolve_reports_path, LoadedDataset};
pub use output::{auto_detect_format, should_use_color, write_output, OutputTarget};
pub use report_stage::{output_report, report_config_for, ReportPayload};

/// Structured pipeline error types for better diagnostics.
#[derive(Debug, thiserror::Error)]
pub enum PipelineError {
    /// Failed to read or parse a dataset file
    #[error("Load failed for {path}: {source}")]
    LoadFailed {
        path: String,
        #[source]
        source: crate::CatalogError,
    },

    /// A vehicle could not be resolved by name or slug
    #[error("No vehicle matches '{ident}'{}", suggestion_hint(.suggestion))]
    NotFound {
        ident: String,
        suggestion: Option<String>,
    },

    /// A comparison needs more vehicles than were resolved
    #[error("Comparison needs at least 2 vehicles, {resolved} resolved")]
    NotEnoughVehicles { resolved: usize },

    /// Report generation or output failed
    #[error("Report failed: {source}")]
    ReportFailed {
        #[source]
        source: anyhow::Error,
    },
}

fn suggestion_hint(suggestion: &Option<String>) -> String {
    suggestion
        .as_ref()
        .map(|s| format!(" (did you mean '{s}'?)"))
        .unwrap_or_default()
}

impl PipelineError {
    /// Process exit code for this error
    #[must_use]
    pub const fn exit_code(&self) -> i32 {
        match self {
            Self::NotFound { .. } | Self::NotEnoughVehicles { .. } => exit_codes::NOT_FOUND,
            Self::LoadFailed { .. } | Self::ReportFailed { .. } => exit_codes::ERROR,
        }
    }
}

/// Exit codes for scripting
pub mod exit_codes {
    /// Success
    pub const SUCCESS: i32 = 0;
    /// A requested vehicle was not found, or a query returned nothing
    pub const NOT_FOUND: i32 = 1;
    /// Dataset snapshots differ (with `diff --fail-on-change`)
    pub const CHANGES_DETECTED: i32 = 1;
    /// An error occurred
    pub const ERROR: i32 = 3;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_codes_values() {
        assert_eq!(exit_codes::SUCCESS, 0);
        assert_eq!(exit_codes::NOT_FOUND, 1);
        assert_eq!(exit_codes::CHANGES_DETECTED, 1);
        assert_eq!(exit_codes::ERROR, 3);
    }

    #[test]
    fn test_not_found_message_includes_suggestion() {
        let err = PipelineError::NotFound {
            ident: "honda-civc-2022".to_string(),
            suggestion: Some("Honda Civic 2022".to_string()),
        };
        assert_eq!(
            err.to_string(),
            "No vehicle matches 'honda-civc-2022' (did you mean 'Honda Civic 2022'?)"
        );
        assert_eq!(err.exit_code(), exit_codes::NOT_FOUND);

        let bare = PipelineError::NotFound {
            ident: "zzz".to_string(),
            suggestion: None,
        };
        assert_eq!(bare.to_string(), "No vehicle matches 'zzz'");
    }

    #[test]
    fn test_report_failure_is_an_error_exit() {
        let err = PipelineError::ReportFailed {
            source: anyhow::anyhow!("disk full"),
        };
        assert_eq!(err.exit_code(), exit_codes::ERROR);
    }
}
