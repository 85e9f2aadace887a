//! Dataset loading stage.
//!
//! Resolves dataset and reports paths from flags, config and well-known
//! locations, then builds the immutable [`Dataset`].

use crate::config::{AppConfig, DEFAULT_DATASET_FILES, DEFAULT_REPORTS_FILE};
use crate::error::{CatalogError, ErrorContext, Result};
use crate::model::{parse_reports_index, Dataset, ReportsIndex};
use std::path::{Path, PathBuf};

/// A loaded dataset with the paths it came from
#[derive(Debug)]
pub struct LoadedDataset {
    /// The immutable dataset
    pub dataset: Dataset,
    /// Path of the dataset file
    pub path: PathBuf,
    /// Path of the longitudinal reports index, if one was attached
    pub reports_path: Option<PathBuf>,
}

impl LoadedDataset {
    /// Dataset path as a display string for report metadata
    #[must_use]
    pub fn display_path(&self) -> String {
        self.path.to_string_lossy().to_string()
    }
}

/// Resolve the dataset path.
///
/// An explicit path is returned unchanged. Otherwise the first existing
/// well-known dataset file relative to `base` is used.
pub fn resolve_dataset_path(explicit: Option<&Path>, base: &Path) -> Result<PathBuf> {
    if let Some(path) = explicit {
        return Ok(path.to_path_buf());
    }
    DEFAULT_DATASET_FILES
        .iter()
        .map(|name| base.join(name))
        .find(|candidate| candidate.is_file())
        .ok_or_else(|| {
            CatalogError::config(format!(
                "no dataset given and none of {} found in {}; pass --data or set data.dataset",
                DEFAULT_DATASET_FILES.join(", "),
                base.display()
            ))
        })
}

/// Resolve the reports index path.
///
/// An explicit path wins. Otherwise a reports file sitting next to the
/// dataset is picked up when present.
#[must_use]
pub fn resolve_reports_path(dataset_path: &Path, explicit: Option<&Path>) -> Option<PathBuf> {
    if let Some(path) = explicit {
        return Some(path.to_path_buf());
    }
    let sibling = dataset_path
        .parent()
        .unwrap_or_else(|| Path::new("."))
        .join(DEFAULT_REPORTS_FILE);
    sibling.is_file().then_some(sibling)
}

fn read_reports_index(path: &Path) -> Result<ReportsIndex> {
    let json = std::fs::read_to_string(path).map_err(|e| CatalogError::io(path, e))?;
    parse_reports_index(&json).with_context(|| format!("reading reports index {}", path.display()))
}

/// Load a dataset and optionally attach a longitudinal reports index
pub fn load_dataset(path: &Path, reports: Option<&Path>, quiet: bool) -> Result<LoadedDataset> {
    if !quiet {
        tracing::info!("Loading dataset: {}", path.display());
    }

    let json = std::fs::read_to_string(path).map_err(|e| CatalogError::io(path, e))?;
    let index = reports.map(read_reports_index).transpose()?;
    if let (Some(index), Some(reports_path)) = (&index, reports) {
        tracing::debug!(
            "Loaded reports for {} platforms from {}",
            index.len(),
            reports_path.display()
        );
    }

    let dataset = Dataset::from_json_str_with_reports(&json, index.as_ref())
        .with_context(|| format!("reading {}", path.display()))?;

    if !quiet {
        tracing::info!("Loaded {} vehicles", dataset.len());
    }

    Ok(LoadedDataset {
        dataset,
        path: path.to_path_buf(),
        reports_path: reports.map(Path::to_path_buf),
    })
}

/// Load the dataset named by the configuration, falling back to well-known
/// locations under the current directory.
pub fn load_from_config(config: &AppConfig, quiet: bool) -> Result<LoadedDataset> {
    let cwd = std::env::current_dir()?;
    let path = resolve_dataset_path(config.data.dataset.as_deref(), &cwd)?;
    let reports = resolve_reports_path(&path, config.data.reports.as_deref());
    load_dataset(&path, reports.as_deref(), quiet)
}
