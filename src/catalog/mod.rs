//! Search, filter and sort engine.
//!
//! The engine maps `(dataset, filters, sort)` to an ordered subset of the
//! dataset. [`CatalogState`] owns the mutable inputs and re-derives the
//! visible list after every change through [`CatalogState::refresh`].

mod filter;
mod query;
mod sort;

pub use filter::{ActiveFilter, FilterKey, FilterState, PresenceFilter};
pub use query::{query_indices, result_label, run_query, FacetOptions, ResultTone};
pub use sort::{SortConfig, SortField, SortOrder};

use crate::model::{Dataset, VehicleRecord};

/// Filters, sort and the derived visible list for one browsing session.
#[derive(Debug, Clone, Default)]
pub struct CatalogState {
    pub filters: FilterState,
    pub sort: SortConfig,
    visible: Vec<usize>,
}

impl CatalogState {
    /// Create a state with every record visible under `sort`.
    pub fn new(dataset: &Dataset, sort: SortConfig) -> Self {
        let mut state = Self {
            filters: FilterState::new(),
            sort,
            visible: Vec::new(),
        };
        state.refresh(dataset);
        state
    }

    /// Recompute the visible list from the current filters and sort.
    pub fn refresh(&mut self, dataset: &Dataset) {
        self.visible = query_indices(dataset, &self.filters, &self.sort);
    }

    /// Dataset indices currently visible, in order.
    pub fn visible(&self) -> &[usize] {
        &self.visible
    }

    pub fn visible_count(&self) -> usize {
        self.visible.len()
    }

    /// The visible record at display position `pos`.
    pub fn visible_record<'a>(&self, dataset: &'a Dataset, pos: usize) -> Option<&'a VehicleRecord> {
        self.visible.get(pos).and_then(|&i| dataset.get(i))
    }

    pub fn tone(&self) -> ResultTone {
        ResultTone::for_count(self.visible.len())
    }
}
