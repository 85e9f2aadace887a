//! Snapshot diffing for vehicle datasets.
//!
//! Records are matched by `name`. A record counts as changed when any field
//! of its JSON form differs, which includes fields this build only carries
//! through defaults.

mod result;

pub use result::{DatasetDiff, DiffSummary, VehicleChange, UNKNOWN_PLATFORM};

use crate::model::{Dataset, VehicleRecord};
use indexmap::IndexMap;
use std::collections::{BTreeMap, BTreeSet};

/// Compare two snapshots.
pub fn diff_datasets(old: &Dataset, new: &Dataset) -> DatasetDiff {
    let old_names: BTreeSet<&str> = old.iter().map(|r| r.name.as_str()).collect();
    let new_names: BTreeSet<&str> = new.iter().map(|r| r.name.as_str()).collect();

    let added = new_names
        .difference(&old_names)
        .map(|s| (*s).to_string())
        .collect();
    let removed = old_names
        .difference(&new_names)
        .map(|s| (*s).to_string())
        .collect();

    let mut changed = Vec::new();
    for name in old_names.intersection(&new_names) {
        let (Some(before), Some(after)) = (old.find_by_name(name), new.find_by_name(name)) else {
            continue;
        };
        let fields = changed_fields(before, after);
        if !fields.is_empty() {
            changed.push(VehicleChange {
                name: (*name).to_string(),
                platform: after
                    .car_fingerprint
                    .clone()
                    .filter(|f| !f.is_empty())
                    .unwrap_or_else(|| UNKNOWN_PLATFORM.to_string()),
                fields,
            });
        }
    }

    let mut grouped: BTreeMap<String, Vec<String>> = BTreeMap::new();
    for change in &changed {
        grouped
            .entry(change.platform.clone())
            .or_default()
            .push(change.name.clone());
    }
    let by_platform: IndexMap<String, Vec<String>> = grouped
        .into_iter()
        .map(|(platform, mut names)| {
            names.sort();
            (platform, names)
        })
        .collect();

    let mut diff = DatasetDiff {
        added,
        removed,
        changed,
        by_platform,
        ..DatasetDiff::default()
    };
    diff.calculate_summary();
    tracing::debug!(
        "Dataset diff: {} added, {} removed, {} changed",
        diff.summary.added,
        diff.summary.removed,
        diff.summary.changed
    );
    diff
}

/// Names of JSON fields that differ between two records.
fn changed_fields(before: &VehicleRecord, after: &VehicleRecord) -> Vec<String> {
    if before == after {
        return Vec::new();
    }
    let (Ok(serde_json::Value::Object(a)), Ok(serde_json::Value::Object(b))) =
        (serde_json::to_value(before), serde_json::to_value(after))
    else {
        return vec!["*".to_string()];
    };
    let keys: BTreeSet<&String> = a.keys().chain(b.keys()).collect();
    keys.into_iter()
        .filter(|k| a.get(*k) != b.get(*k))
        .map(|k| k.to_string())
        .collect()
}
