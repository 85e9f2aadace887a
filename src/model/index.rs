//! Precomputed search keys for fast query evaluation.
//!
//! Normalizing every record on every keystroke is wasteful, so each record
//! gets a [`VehicleSearchKey`] built once when the dataset is loaded. The
//! engine then only has to normalize the query.

use super::VehicleRecord;
use crate::utils::normalize;
use rayon::prelude::*;

/// Datasets smaller than this are indexed sequentially.
const PARALLEL_THRESHOLD: usize = 512;

/// Normalized text for one record.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VehicleSearchKey {
    /// Name, make, model, support type, package and every year, space-joined
    pub blob: String,
    /// Normalized make, used for relevance
    pub make: String,
    /// Normalized model, used for relevance
    pub model: String,
}

impl VehicleSearchKey {
    /// Build the key for a record
    pub fn from_record(record: &VehicleRecord) -> Self {
        let mut parts: Vec<&str> = vec![
            &record.name,
            &record.make,
            &record.model,
            record.support_type.as_str(),
            &record.package,
        ];
        parts.extend(record.year_list.iter().map(String::as_str));

        Self {
            blob: normalize(&parts.join(" ")),
            make: normalize(&record.make),
            model: normalize(&record.model),
        }
    }

    /// True when every token is a substring of the blob.
    ///
    /// Tokens are expected to be normalized already. No tokens means a match.
    pub fn matches_all<S: AsRef<str>>(&self, tokens: &[S]) -> bool {
        tokens.iter().all(|t| self.blob.contains(t.as_ref()))
    }

    /// Relevance of this record against a normalized whole query.
    ///
    /// Make prefix beats make substring beats model prefix beats model
    /// substring. Anything else scores zero.
    pub fn relevance(&self, query: &str) -> u8 {
        if query.is_empty() {
            0
        } else if self.make.starts_with(query) {
            4
        } else if self.make.contains(query) {
            3
        } else if self.model.starts_with(query) {
            2
        } else if self.model.contains(query) {
            1
        } else {
            0
        }
    }
}

/// Build search keys for all records, index-aligned with the input.
pub fn build_search_keys(records: &[VehicleRecord]) -> Vec<VehicleSearchKey> {
    if records.len() < PARALLEL_THRESHOLD {
        records.iter().map(VehicleSearchKey::from_record).collect()
    } else {
        records.par_iter().map(VehicleSearchKey::from_record).collect()
    }
}
