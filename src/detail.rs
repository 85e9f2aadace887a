//! Vehicle detail pages: slug lookup, collapsible sections and quick
//! navigation.

use crate::compare::{section_for_spec, specs_by_category, SpecCategory, SpecDefinition};
use crate::model::{Dataset, VehicleRecord};
use std::collections::BTreeSet;

/// Section ids open when a detail page is first shown.
pub const DEFAULT_OPEN_SECTIONS: [&str; 8] = [
    "general",
    "technical",
    "system",
    "capabilities",
    "compatibility-info",
    "longitudinal-reports",
    "quick-nav",
    "vehicle-metrics",
];

/// Sections closed by default.
pub const DEFAULT_CLOSED_SECTIONS: [&str; 3] = ["parts", "user-video", "user-install-video"];

/// Ticks to wait before scrolling when a section had to expand first.
pub const EXPAND_DELAY_TICKS: u16 = 2;

/// Ticks a jumped-to spec stays highlighted.
pub const JUMP_HIGHLIGHT_TICKS: u16 = 30;

fn all_sections() -> impl Iterator<Item = &'static str> {
    DEFAULT_OPEN_SECTIONS
        .into_iter()
        .chain(DEFAULT_CLOSED_SECTIONS)
}

/// Result of resolving a detail route.
#[derive(Debug, Clone, PartialEq)]
pub enum DetailLookup<'a> {
    Found(&'a VehicleRecord),
    NotFound {
        slug: String,
        suggestion: Option<&'a str>,
    },
}

impl<'a> DetailLookup<'a> {
    /// Resolve a slug or display name.
    pub fn resolve(dataset: &'a Dataset, slug: &str) -> Self {
        match dataset.resolve(slug) {
            Some(record) => Self::Found(record),
            None => Self::NotFound {
                slug: slug.to_string(),
                suggestion: dataset.suggest(slug),
            },
        }
    }

    /// Message shown for an unknown vehicle.
    pub fn not_found_message(slug: &str) -> String {
        format!("The requested vehicle \"{slug}\" could not be found in our database.")
    }
}

/// Open/closed state of the detail page sections.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SectionToggles {
    open: BTreeSet<&'static str>,
}

impl Default for SectionToggles {
    fn default() -> Self {
        Self {
            open: DEFAULT_OPEN_SECTIONS.into_iter().collect(),
        }
    }
}

impl SectionToggles {
    pub fn is_open(&self, id: &str) -> bool {
        self.open.contains(id)
    }

    /// Flip one section. Unknown ids are ignored.
    pub fn toggle(&mut self, id: &str) {
        if let Some(known) = all_sections().find(|s| *s == id) {
            if !self.open.remove(known) {
                self.open.insert(known);
            }
        }
    }

    /// Open a section if it is closed. Returns whether it had to open.
    pub fn expand(&mut self, id: &str) -> bool {
        match all_sections().find(|s| *s == id) {
            Some(known) => self.open.insert(known),
            None => false,
        }
    }

    /// Close everything when anything is open, otherwise open everything.
    pub fn toggle_all(&mut self) {
        if self.open.is_empty() {
            self.open = all_sections().collect();
        } else {
            self.open.clear();
        }
    }

    pub fn is_all_open(&self) -> bool {
        self.open.len() == all_sections().count()
    }

    /// Label for the master toggle.
    pub fn master_label(&self) -> &'static str {
        if self.open.is_empty() {
            "Expand all"
        } else {
            "Collapse all"
        }
    }
}

/// One entry in the quick navigation list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuickNavEntry {
    pub spec_id: &'static str,
    pub label: &'static str,
    pub section_id: &'static str,
}

/// Quick navigation entries grouped under their category headers.
pub fn quick_nav_groups() -> Vec<(SpecCategory, Vec<QuickNavEntry>)> {
    specs_by_category()
        .into_iter()
        .map(|group| {
            let entries = group
                .specs
                .into_iter()
                .map(|spec: &SpecDefinition| QuickNavEntry {
                    spec_id: spec.id,
                    label: spec.label,
                    section_id: spec.section_id(),
                })
                .collect();
            (group.category, entries)
        })
        .collect()
}

/// Transient state of one open detail page.
#[derive(Debug, Clone, Default)]
pub struct DetailState {
    pub toggles: SectionToggles,
    /// Spec whose long description is expanded
    pub open_description: Option<&'static str>,
    pending_scroll: Option<(&'static str, u16)>,
    highlighted: Option<(&'static str, u16)>,
}

impl DetailState {
    /// Expand or collapse the description of a spec. Only one is open at a time.
    pub fn toggle_description(&mut self, spec_id: &'static str) {
        if self.open_description == Some(spec_id) {
            self.open_description = None;
        } else {
            self.open_description = Some(spec_id);
        }
    }

    /// Navigate to a spec: open its section and schedule the scroll.
    ///
    /// When the section was collapsed, the scroll waits a few ticks for the
    /// expansion. A previous pending jump is replaced.
    pub fn jump_to(&mut self, spec_id: &'static str) {
        let needs_expansion = section_for_spec(spec_id)
            .is_some_and(|section| self.toggles.expand(section));
        let delay = if needs_expansion { EXPAND_DELAY_TICKS } else { 0 };
        self.pending_scroll = Some((spec_id, delay));
        self.highlighted = None;
    }

    /// Advance one tick. Returns the spec to scroll to once its delay has
    /// elapsed; that spec is then highlighted for a while.
    pub fn tick(&mut self) -> Option<&'static str> {
        if let Some((spec, remaining)) = self.highlighted {
            self.highlighted = remaining.checked_sub(1).filter(|r| *r > 0).map(|r| (spec, r));
        }
        match self.pending_scroll {
            Some((spec, 0)) => {
                self.pending_scroll = None;
                self.highlighted = Some((spec, JUMP_HIGHLIGHT_TICKS));
                Some(spec)
            }
            Some((spec, remaining)) => {
                self.pending_scroll = Some((spec, remaining - 1));
                None
            }
            None => None,
        }
    }

    pub fn highlighted_spec(&self) -> Option<&'static str> {
        self.highlighted.map(|(spec, _)| spec)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_sections() {
        let toggles = SectionToggles::default();
        assert!(toggles.is_open("technical"));
        assert!(!toggles.is_open("parts"));
        assert!(!toggles.is_all_open());
    }

    #[test]
    fn test_master_toggle() {
        let mut toggles = SectionToggles::default();
        toggles.toggle_all();
        assert!(!toggles.is_open("technical"));
        assert_eq!(toggles.master_label(), "Expand all");
        toggles.toggle_all();
        assert!(toggles.is_all_open());
        // One open section is enough to collapse everything.
        toggles.toggle_all();
        toggles.toggle("parts");
        toggles.toggle_all();
        assert!(!toggles.is_open("parts"));
    }

    #[test]
    fn test_toggle_unknown_ignored() {
        let mut toggles = SectionToggles::default();
        let before = toggles.clone();
        toggles.toggle("not-a-section");
        assert_eq!(toggles, before);
    }

    #[test]
    fn test_jump_to_collapsed_section_waits() {
        let mut state = DetailState::default();
        state.toggles.toggle("technical");
        state.jump_to("stop-accel");
        assert!(state.toggles.is_open("technical"));
        assert_eq!(state.tick(), None);
        assert_eq!(state.tick(), None);
        assert_eq!(state.tick(), Some("stop-accel"));
        assert_eq!(state.highlighted_spec(), Some("stop-accel"));
    }

    #[test]
    fn test_jump_to_open_section_immediate() {
        let mut state = DetailState::default();
        state.jump_to("wheelbase");
        assert_eq!(state.tick(), Some("wheelbase"));
        for _ in 0..JUMP_HIGHLIGHT_TICKS {
            state.tick();
        }
        assert_eq!(state.highlighted_spec(), None);
    }

    #[test]
    fn test_quick_nav_covers_registry() {
        let total: usize = quick_nav_groups().iter().map(|(_, e)| e.len()).sum();
        assert_eq!(total, crate::compare::SPECS.len());
    }

    #[test]
    fn test_lookup_not_found() {
        let dataset = Dataset::from_json_str(r#"[{"name": "Honda Civic 2022"}]"#).expect("ds");
        assert!(matches!(
            DetailLookup::resolve(&dataset, "honda-civic-2022"),
            DetailLookup::Found(_)
        ));
        match DetailLookup::resolve(&dataset, "honda-civic-2023") {
            DetailLookup::NotFound { suggestion, .. } => {
                assert_eq!(suggestion, Some("Honda Civic 2022"));
            }
            other => panic!("expected NotFound, got {other:?}"),
        }
    }
}
