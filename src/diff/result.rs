//! Dataset diff result structures.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Platform name used for records without a fingerprint.
pub const UNKNOWN_PLATFORM: &str = "UNKNOWN";

/// A vehicle whose record differs between snapshots.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VehicleChange {
    pub name: String,
    /// Fingerprint in the new snapshot, or [`UNKNOWN_PLATFORM`]
    pub platform: String,
    /// JSON field names whose values differ, sorted
    pub fields: Vec<String>,
}

/// Counts of each change kind.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiffSummary {
    pub added: usize,
    pub removed: usize,
    pub changed: usize,
    pub platforms_changed: usize,
}

/// Complete result of comparing two dataset snapshots.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[must_use]
pub struct DatasetDiff {
    pub summary: DiffSummary,
    /// Names only in the new snapshot, sorted
    pub added: Vec<String>,
    /// Names only in the old snapshot, sorted
    pub removed: Vec<String>,
    /// Changed vehicles, sorted by name
    pub changed: Vec<VehicleChange>,
    /// Changed vehicle names by platform, platforms and names sorted
    pub by_platform: IndexMap<String, Vec<String>>,
}

impl DatasetDiff {
    pub fn has_changes(&self) -> bool {
        !(self.added.is_empty() && self.removed.is_empty() && self.changed.is_empty())
    }

    /// Recompute counts from the change lists.
    pub fn calculate_summary(&mut self) {
        self.summary = DiffSummary {
            added: self.added.len(),
            removed: self.removed.len(),
            changed: self.changed.len(),
            platforms_changed: self.by_platform.len(),
        };
    }

    /// Multi-line summary of spec changes grouped by platform.
    ///
    /// Empty when no existing vehicle changed.
    pub fn spec_change_summary(&self) -> String {
        if self.changed.is_empty() {
            return String::new();
        }
        let mut lines = vec![format!(
            "Spec changes in {} car(s) across {} platform(s):",
            self.changed.len(),
            self.by_platform.len()
        )];
        for (platform, names) in &self.by_platform {
            lines.push(format!("- {platform}: {}", names.join(", ")));
        }
        lines.join("\n")
    }
}
