//! Filter drawer rows and value cycling.
//!
//! Each drawer row edits one predicate of the catalog
//! [`FilterState`](crate::catalog::FilterState). Left and right step
//! through the row's choices, wrapping through "Any".

use crate::catalog::{FacetOptions, FilterKey, FilterState, PresenceFilter};
use crate::model::SupportType;

/// Trait for enum-based settings that cycle through a fixed set of values.
pub trait CycleFilter: Clone + Copy + Default {
    /// Get the next value in the cycle.
    #[must_use]
    fn next(&self) -> Self;

    /// Get the previous value in the cycle.
    #[must_use]
    fn prev(&self) -> Self;

    /// Get a display name for the value.
    fn display_name(&self) -> &str;
}

impl CycleFilter for PresenceFilter {
    fn next(&self) -> Self {
        match self {
            Self::Any => Self::Yes,
            Self::Yes => Self::No,
            Self::No => Self::Any,
        }
    }

    fn prev(&self) -> Self {
        match self {
            Self::Any => Self::No,
            Self::Yes => Self::Any,
            Self::No => Self::Yes,
        }
    }

    fn display_name(&self) -> &str {
        self.label()
    }
}

/// Step through `options` from `current`, with `None` ("Any") between the
/// last and the first option. A value not in `options` restarts the cycle.
pub fn cycle_choice(current: Option<&str>, options: &[String], forward: bool) -> Option<String> {
    if options.is_empty() {
        return None;
    }
    let pos = current.and_then(|c| options.iter().position(|o| o == c));
    let next = match (pos, forward) {
        (None, true) => Some(0),
        (None, false) => Some(options.len() - 1),
        (Some(i), true) if i + 1 < options.len() => Some(i + 1),
        (Some(i), false) if i > 0 => Some(i - 1),
        _ => None,
    };
    next.map(|i| options[i].clone())
}

/// One editable row of the filter drawer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterRow {
    Support,
    Make,
    Model,
    Year,
    Video,
    SetupVideo,
    Report,
}

impl FilterRow {
    /// Rows in drawer order.
    pub const ALL: [Self; 7] = [
        Self::Support,
        Self::Make,
        Self::Model,
        Self::Year,
        Self::Video,
        Self::SetupVideo,
        Self::Report,
    ];

    pub const fn label(self) -> &'static str {
        match self {
            Self::Support => "Support Type",
            Self::Make => "Make",
            Self::Model => "Model",
            Self::Year => "Year",
            Self::Video => "User Video",
            Self::SetupVideo => "Setup Video",
            Self::Report => "Longitudinal Report",
        }
    }

    pub const fn key(self) -> FilterKey {
        match self {
            Self::Support => FilterKey::Support,
            Self::Make => FilterKey::Make,
            Self::Model => FilterKey::Model,
            Self::Year => FilterKey::Year,
            Self::Video => FilterKey::Video,
            Self::SetupVideo => FilterKey::SetupVideo,
            Self::Report => FilterKey::Report,
        }
    }

    /// Current value as shown in the drawer.
    pub fn value(self, filters: &FilterState) -> String {
        let text = match self {
            Self::Support => filters.support().map(SupportType::as_str),
            Self::Make => filters.make(),
            Self::Model => filters.model(),
            Self::Year => filters.year(),
            Self::Video => return filters.has_video().display_name().to_string(),
            Self::SetupVideo => return filters.has_setup_video().display_name().to_string(),
            Self::Report => return filters.has_report().display_name().to_string(),
        };
        text.unwrap_or("Any").to_string()
    }

    /// Step this row's value. Model choices follow the selected make.
    pub fn cycle(self, filters: &mut FilterState, facets: &FacetOptions, forward: bool) {
        let step = |p: PresenceFilter| if forward { p.next() } else { p.prev() };
        match self {
            Self::Support => {
                let levels: Vec<String> = facets
                    .support_types
                    .iter()
                    .map(|s| s.as_str().to_string())
                    .collect();
                let current = filters.support().map(SupportType::as_str);
                let next = cycle_choice(current, &levels, forward);
                filters.set_support(next.map(|s| SupportType::parse(&s)));
            }
            Self::Make => {
                let next = cycle_choice(filters.make(), &facets.makes, forward);
                filters.set_make(next.as_deref().unwrap_or(""));
                filters.set_model("");
            }
            Self::Model => {
                let models = facets.models_for(filters.make());
                let next = cycle_choice(filters.model(), models, forward);
                filters.set_model(next.as_deref().unwrap_or(""));
            }
            Self::Year => {
                let next = cycle_choice(filters.year(), &facets.years, forward);
                filters.set_year(next.as_deref().unwrap_or(""));
            }
            Self::Video => filters.set_has_video(step(filters.has_video())),
            Self::SetupVideo => filters.set_has_setup_video(step(filters.has_setup_video())),
            Self::Report => filters.set_has_report(step(filters.has_report())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn options() -> Vec<String> {
        vec!["Honda".into(), "Kia".into(), "Toyota".into()]
    }

    #[test]
    fn test_cycle_choice_wraps_through_any() {
        let opts = options();
        assert_eq!(cycle_choice(None, &opts, true).as_deref(), Some("Honda"));
        assert_eq!(cycle_choice(Some("Honda"), &opts, true).as_deref(), Some("Kia"));
        assert_eq!(cycle_choice(Some("Toyota"), &opts, true), None);
        assert_eq!(cycle_choice(None, &opts, false).as_deref(), Some("Toyota"));
        assert_eq!(cycle_choice(Some("Honda"), &opts, false), None);
        assert_eq!(cycle_choice(Some("Ford"), &opts, true).as_deref(), Some("Honda"));
        assert_eq!(cycle_choice(None, &[], true), None);
    }

    #[test]
    fn test_presence_cycle() {
        assert_eq!(PresenceFilter::Any.next(), PresenceFilter::Yes);
        assert_eq!(PresenceFilter::Any.prev(), PresenceFilter::No);
        assert_eq!(PresenceFilter::No.next().display_name(), "Any");
    }

    #[test]
    fn test_row_cycle_updates_filters() {
        let facets = FacetOptions {
            makes: options(),
            models: vec!["Civic".into(), "EV6".into()],
            years: vec!["2022".into()],
            support_types: SupportType::ALL.to_vec(),
            ..FacetOptions::default()
        };
        let mut filters = FilterState::new();

        FilterRow::Support.cycle(&mut filters, &facets, true);
        assert_eq!(FilterRow::Support.value(&filters), "Upstream");

        filters.set_model("Civic");
        FilterRow::Make.cycle(&mut filters, &facets, true);
        assert_eq!(filters.make(), Some("Honda"));
        assert_eq!(filters.model(), None);

        FilterRow::Video.cycle(&mut filters, &facets, false);
        assert_eq!(FilterRow::Video.value(&filters), "No");
        assert_eq!(FilterRow::Year.value(&filters), "Any");
    }
}
