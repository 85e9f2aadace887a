//! Filter predicates applied to the catalog.

use crate::model::{SupportType, VehicleRecord};
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Tri-state presence constraint for optional links and reports.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum PresenceFilter {
    /// No constraint
    #[default]
    Any,
    /// Present and non-empty
    Yes,
    /// Absent or empty
    No,
}

impl PresenceFilter {
    /// Whether a record with presence `present` passes.
    pub const fn accepts(self, present: bool) -> bool {
        match self {
            Self::Any => true,
            Self::Yes => present,
            Self::No => !present,
        }
    }

    pub const fn is_active(self) -> bool {
        !matches!(self, Self::Any)
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Any => "Any",
            Self::Yes => "Yes",
            Self::No => "No",
        }
    }
}

impl fmt::Display for PresenceFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Identifies one removable filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FilterKey {
    Query,
    Support,
    Make,
    Model,
    Year,
    Video,
    SetupVideo,
    Report,
}

/// A chip describing one active filter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActiveFilter {
    pub key: FilterKey,
    pub label: &'static str,
    pub value: String,
}

/// All user-controlled catalog filters.
///
/// Equality predicates are conjunctive. Setting a blank value clears the
/// predicate instead of matching empty fields.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterState {
    query: String,
    support: Option<SupportType>,
    make: Option<String>,
    model: Option<String>,
    year: Option<String>,
    has_video: PresenceFilter,
    has_setup_video: PresenceFilter,
    has_report: PresenceFilter,
}

fn non_blank(value: impl Into<String>) -> Option<String> {
    let value = value.into();
    if value.trim().is_empty() {
        None
    } else {
        Some(value)
    }
}

impl FilterState {
    pub fn new() -> Self {
        Self::default()
    }

    // Accessors

    pub fn query(&self) -> &str {
        &self.query
    }

    pub const fn support(&self) -> Option<&SupportType> {
        self.support.as_ref()
    }

    pub fn make(&self) -> Option<&str> {
        self.make.as_deref()
    }

    pub fn model(&self) -> Option<&str> {
        self.model.as_deref()
    }

    pub fn year(&self) -> Option<&str> {
        self.year.as_deref()
    }

    pub const fn has_video(&self) -> PresenceFilter {
        self.has_video
    }

    pub const fn has_setup_video(&self) -> PresenceFilter {
        self.has_setup_video
    }

    pub const fn has_report(&self) -> PresenceFilter {
        self.has_report
    }

    // Setters

    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
    }

    pub fn set_support(&mut self, support: Option<SupportType>) {
        self.support = support.filter(|s| !s.as_str().is_empty());
    }

    pub fn set_make(&mut self, make: impl Into<String>) {
        self.make = non_blank(make);
    }

    pub fn set_model(&mut self, model: impl Into<String>) {
        self.model = non_blank(model);
    }

    pub fn set_year(&mut self, year: impl Into<String>) {
        self.year = non_blank(year);
    }

    pub fn set_has_video(&mut self, filter: PresenceFilter) {
        self.has_video = filter;
    }

    pub fn set_has_setup_video(&mut self, filter: PresenceFilter) {
        self.has_setup_video = filter;
    }

    pub fn set_has_report(&mut self, filter: PresenceFilter) {
        self.has_report = filter;
    }

    /// Builder-style setters for one-shot queries.
    #[must_use]
    pub fn with_query(mut self, query: impl Into<String>) -> Self {
        self.set_query(query);
        self
    }

    #[must_use]
    pub fn with_support(mut self, support: SupportType) -> Self {
        self.set_support(Some(support));
        self
    }

    #[must_use]
    pub fn with_make(mut self, make: impl Into<String>) -> Self {
        self.set_make(make);
        self
    }

    #[must_use]
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.set_model(model);
        self
    }

    #[must_use]
    pub fn with_year(mut self, year: impl Into<String>) -> Self {
        self.set_year(year);
        self
    }

    #[must_use]
    pub fn with_presence(mut self, key: FilterKey, filter: PresenceFilter) -> Self {
        match key {
            FilterKey::Video => self.has_video = filter,
            FilterKey::SetupVideo => self.has_setup_video = filter,
            FilterKey::Report => self.has_report = filter,
            _ => {}
        }
        self
    }

    /// Clear one filter.
    pub fn remove(&mut self, key: FilterKey) {
        match key {
            FilterKey::Query => self.query.clear(),
            FilterKey::Support => self.support = None,
            FilterKey::Make => self.make = None,
            FilterKey::Model => self.model = None,
            FilterKey::Year => self.year = None,
            FilterKey::Video => self.has_video = PresenceFilter::Any,
            FilterKey::SetupVideo => self.has_setup_video = PresenceFilter::Any,
            FilterKey::Report => self.has_report = PresenceFilter::Any,
        }
    }

    /// Reset every filter, the search query included.
    pub fn clear_all(&mut self) {
        *self = Self::default();
    }

    /// Whether the query has any non-whitespace content.
    pub fn has_query(&self) -> bool {
        !self.query.trim().is_empty()
    }

    /// Whether anything narrows the result set.
    pub fn is_active(&self) -> bool {
        self.has_query() || !self.active_filters().is_empty()
    }

    /// Chips for the active filters, search first.
    pub fn active_filters(&self) -> Vec<ActiveFilter> {
        let mut chips = Vec::new();
        let mut push = |key, label, value: String| chips.push(ActiveFilter { key, label, value });

        if self.has_query() {
            push(FilterKey::Query, "Search", self.query.trim().to_string());
        }
        if let Some(year) = &self.year {
            push(FilterKey::Year, "Year", year.clone());
        }
        if let Some(make) = &self.make {
            push(FilterKey::Make, "Make", make.clone());
        }
        if let Some(model) = &self.model {
            push(FilterKey::Model, "Model", model.clone());
        }
        if let Some(support) = &self.support {
            push(FilterKey::Support, "Support", support.to_string());
        }
        for (key, label, filter) in [
            (FilterKey::Video, "User video", self.has_video),
            (FilterKey::SetupVideo, "Setup video", self.has_setup_video),
            (FilterKey::Report, "Longitudinal report", self.has_report),
        ] {
            if filter.is_active() {
                push(key, label, filter.to_string());
            }
        }
        chips
    }

    /// Whether a record passes every equality and presence predicate.
    ///
    /// The free-text query is evaluated separately against search keys.
    pub fn matches(&self, record: &VehicleRecord) -> bool {
        if let Some(support) = &self.support {
            if &record.support_type != support {
                return false;
            }
        }
        if let Some(make) = &self.make {
            if &record.make != make {
                return false;
            }
        }
        if let Some(model) = &self.model {
            if &record.model != model {
                return false;
            }
        }
        if let Some(year) = &self.year {
            if !record.covers_year(year) {
                return false;
            }
        }
        self.has_video.accepts(record.has_video())
            && self.has_setup_video.accepts(record.has_setup_video())
            && self.has_report.accepts(record.has_longitudinal_report())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record() -> VehicleRecord {
        let mut r = VehicleRecord::new("Toyota RAV4 2019-21", "Toyota", "RAV4");
        r.support_type = SupportType::Upstream;
        r.year_list = vec!["2019".into(), "2020".into(), "2021".into()];
        r
    }

    #[test]
    fn test_empty_state_matches_everything() {
        assert!(FilterState::new().matches(&record()));
        assert!(!FilterState::new().is_active());
    }

    #[test]
    fn test_blank_values_clear_predicate() {
        let mut filters = FilterState::new().with_make("Honda");
        assert!(!filters.matches(&record()));
        filters.set_make("   ");
        assert_eq!(filters.make(), None);
        assert!(filters.matches(&record()));
    }

    #[test]
    fn test_year_matches_any_entry() {
        assert!(FilterState::new().with_year("2020").matches(&record()));
        assert!(!FilterState::new().with_year("2022").matches(&record()));
    }

    #[test]
    fn test_presence_no_accepts_empty_string() {
        let mut r = record();
        r.video = Some(String::new());
        let filters = FilterState::new().with_presence(FilterKey::Video, PresenceFilter::No);
        assert!(filters.matches(&r));
        r.video = Some("https://youtu.be/abc".into());
        assert!(!filters.matches(&r));
    }

    #[test]
    fn test_chips_and_remove() {
        let mut filters = FilterState::new()
            .with_query(" rav ")
            .with_make("Toyota")
            .with_support(SupportType::Upstream)
            .with_presence(FilterKey::Report, PresenceFilter::Yes);
        let keys: Vec<_> = filters.active_filters().iter().map(|c| c.key).collect();
        assert_eq!(
            keys,
            vec![FilterKey::Query, FilterKey::Make, FilterKey::Support, FilterKey::Report]
        );
        assert_eq!(filters.active_filters()[0].value, "rav");

        filters.remove(FilterKey::Make);
        assert_eq!(filters.make(), None);
        assert_eq!(filters.query(), " rav ");

        filters.clear_all();
        assert_eq!(filters, FilterState::default());
    }
}
