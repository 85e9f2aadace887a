//! Diff command handler.
//!
//! Implements the `diff` subcommand for comparing two dataset snapshots.

use crate::config::AppConfig;
use crate::diff::{diff_datasets, DatasetDiff};
use crate::pipeline::{exit_codes, load_dataset, output_report, report_config_for, ReportPayload};
use crate::reports::ReportMetadata;
use anyhow::Result;
use std::path::Path;

/// Run the diff command, returning the desired exit code.
///
/// The caller is responsible for calling `std::process::exit()` with the
/// returned code when it is non-zero.
pub fn run_diff(
    config: &AppConfig,
    old: &Path,
    new: &Path,
    fail_on_change: bool,
    quiet: bool,
) -> Result<i32> {
    let old_loaded = load_dataset(old, None, quiet)?;
    let new_loaded = load_dataset(new, None, quiet)?;

    let diff = diff_datasets(&old_loaded.dataset, &new_loaded.dataset);
    if !quiet {
        tracing::info!("{}", diff.spec_change_summary());
    }

    let metadata = ReportMetadata {
        old_dataset_path: Some(old_loaded.display_path()),
        new_dataset_path: Some(new_loaded.display_path()),
        total_records: new_loaded.dataset.len(),
        ..ReportMetadata::new()
    };
    output_report(
        config,
        ReportPayload::Diff(&diff),
        &report_config_for(config, metadata),
        quiet,
    )?;

    Ok(determine_exit_code(fail_on_change, &diff))
}

/// Determine the exit code based on diff results and flags.
fn determine_exit_code(fail_on_change: bool, diff: &DatasetDiff) -> i32 {
    if fail_on_change && diff.has_changes() {
        exit_codes::CHANGES_DETECTED
    } else {
        exit_codes::SUCCESS
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Dataset;

    #[test]
    fn test_exit_code_only_fails_when_requested() {
        let old = Dataset::from_json_str(r#"[{"name": "A"}]"#).unwrap();
        let new = Dataset::from_json_str(r#"[{"name": "A"}, {"name": "B"}]"#).unwrap();
        let diff = diff_datasets(&old, &new);

        assert_eq!(determine_exit_code(false, &diff), exit_codes::SUCCESS);
        assert_eq!(determine_exit_code(true, &diff), exit_codes::CHANGES_DETECTED);

        let same = diff_datasets(&old, &old);
        assert_eq!(determine_exit_code(true, &same), exit_codes::SUCCESS);
    }
}
