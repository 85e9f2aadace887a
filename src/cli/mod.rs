//! CLI command handlers.
//!
//! This module provides testable command handlers that are invoked by main.rs.
//! Each handler implements the business logic for a specific CLI subcommand
//! and returns a process exit code.

mod browse;
mod compare;
mod diff;
mod list;
mod options;
mod show;

pub use browse::{run_browse, run_tui, TuiLaunch};
pub use compare::run_compare;
pub use diff::run_diff;
pub use list::{parse_support_arg, run_list, ListFilter};
pub use options::run_options;
pub use show::run_show;

// Re-export config types used by handlers
pub use crate::config::AppConfig;

use crate::pipeline::LoadedDataset;
use crate::reports::ReportMetadata;

/// Report metadata describing the dataset a command ran against.
fn dataset_metadata(loaded: &LoadedDataset) -> ReportMetadata {
    ReportMetadata {
        dataset_path: Some(loaded.display_path()),
        total_records: loaded.dataset.len(),
        ..ReportMetadata::new()
    }
}
