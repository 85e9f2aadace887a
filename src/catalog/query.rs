//! Query evaluation: filter, search, rank and sort.
//!
//! [`run_query`] is a pure function of its inputs. It never mutates the
//! dataset and keeps no memory between calls, so the same inputs always
//! produce the same ordered output.

use super::{FilterState, SortConfig};
use crate::model::{Dataset, SupportType, VehicleRecord};
use crate::utils::{normalize, tokenize};
use serde::Serialize;
use std::collections::{BTreeMap, BTreeSet};

/// Indices into the dataset of records visible under `filters`, in display
/// order.
pub fn query_indices(dataset: &Dataset, filters: &FilterState, sort: &SortConfig) -> Vec<usize> {
    let tokens = tokenize(filters.query());
    let whole = normalize(filters.query().trim());
    let ranked = !tokens.is_empty();

    let mut hits: Vec<(usize, u8)> = dataset
        .indexed()
        .enumerate()
        .filter(|(_, (record, key))| filters.matches(record) && key.matches_all(tokens.as_slice()))
        .map(|(i, (_, key))| (i, if ranked { key.relevance(&whole) } else { 0 }))
        .collect();

    let records = dataset.records();
    // Vec::sort_by is stable, so full ties keep dataset order.
    hits.sort_by(|(a, score_a), (b, score_b)| {
        score_b
            .cmp(score_a)
            .then_with(|| sort.compare(&records[*a], &records[*b]))
    });

    tracing::debug!(
        "Query '{}' matched {} of {} records",
        filters.query().trim(),
        hits.len(),
        dataset.len()
    );

    hits.into_iter().map(|(i, _)| i).collect()
}

/// Records visible under `filters`, in display order.
pub fn run_query<'a>(
    dataset: &'a Dataset,
    filters: &FilterState,
    sort: &SortConfig,
) -> Vec<&'a VehicleRecord> {
    query_indices(dataset, filters, sort)
        .into_iter()
        .filter_map(|i| dataset.get(i))
        .collect()
}

/// Choices for populating filter menus.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FacetOptions {
    pub makes: Vec<String>,
    pub models: Vec<String>,
    pub years: Vec<String>,
    pub support_types: Vec<SupportType>,
    /// Models offered once a make is chosen
    #[serde(skip)]
    pub models_by_make: BTreeMap<String, Vec<String>>,
}

impl FacetOptions {
    /// Sorted unique makes, models and years, plus the known support levels
    /// in canonical order.
    pub fn from_dataset(dataset: &Dataset) -> Self {
        let mut makes = BTreeSet::new();
        let mut models = BTreeSet::new();
        let mut years = BTreeSet::new();
        let mut by_make: BTreeMap<String, BTreeSet<String>> = BTreeMap::new();
        for record in dataset.iter() {
            if !record.make.is_empty() {
                makes.insert(record.make.clone());
            }
            if !record.model.is_empty() {
                models.insert(record.model.clone());
                by_make
                    .entry(record.make.clone())
                    .or_default()
                    .insert(record.model.clone());
            }
            years.extend(record.year_list.iter().cloned());
        }
        Self {
            makes: makes.into_iter().collect(),
            models: models.into_iter().collect(),
            years: years.into_iter().collect(),
            support_types: SupportType::ALL.to_vec(),
            models_by_make: by_make
                .into_iter()
                .map(|(make, models)| (make, models.into_iter().collect()))
                .collect(),
        }
    }

    /// Models to offer for `make`, or every model when no make is chosen.
    pub fn models_for(&self, make: Option<&str>) -> &[String] {
        match make.and_then(|m| self.models_by_make.get(m)) {
            Some(models) => models,
            None => &self.models,
        }
    }
}

/// Qualitative size of a result set, used to color the count.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResultTone {
    None,
    Few,
    Many,
}

impl ResultTone {
    pub const fn for_count(count: usize) -> Self {
        match count {
            0 => Self::None,
            1..=5 => Self::Few,
            _ => Self::Many,
        }
    }
}

/// "1 RESULT" / "N RESULTS".
pub fn result_label(count: usize) -> String {
    if count == 1 {
        "1 RESULT".to_string()
    } else {
        format!("{count} RESULTS")
    }
}
