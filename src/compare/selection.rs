//! Bounded selection of vehicles to compare.

use crate::model::{Dataset, VehicleRecord};
use crate::utils::slugify;

/// Most vehicles a comparison can hold.
pub const MAX_SELECTED: usize = 6;

/// Fewest vehicles that make a comparison.
pub const MIN_FOR_COMPARISON: usize = 2;

/// Query parameter carrying the compared slugs.
pub const CARS_PARAM: &str = "cars";

/// Result of toggling a vehicle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToggleOutcome {
    Added,
    Removed,
    /// The set is full and the vehicle wasn't in it
    Full,
}

/// Ordered set of selected vehicle names. Insertion order is column order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionSet {
    names: Vec<String>,
    compare_mode: bool,
}

impl SelectionSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Remove `name` if present, else append it when there is room.
    pub fn toggle(&mut self, name: &str) -> ToggleOutcome {
        if let Some(pos) = self.position(name) {
            self.names.remove(pos);
            ToggleOutcome::Removed
        } else if self.names.len() < MAX_SELECTED {
            self.names.push(name.to_string());
            ToggleOutcome::Added
        } else {
            ToggleOutcome::Full
        }
    }

    /// Remove `name`. Returns whether it was selected.
    pub fn remove(&mut self, name: &str) -> bool {
        match self.position(name) {
            Some(pos) => {
                self.names.remove(pos);
                true
            }
            None => false,
        }
    }

    pub fn clear(&mut self) {
        self.names.clear();
    }

    pub fn contains(&self, name: &str) -> bool {
        self.position(name).is_some()
    }

    fn position(&self, name: &str) -> Option<usize> {
        self.names.iter().position(|n| n == name)
    }

    pub fn names(&self) -> &[String] {
        &self.names
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.names.len() >= MAX_SELECTED
    }

    pub fn can_compare(&self) -> bool {
        self.names.len() >= MIN_FOR_COMPARISON
    }

    pub const fn compare_mode(&self) -> bool {
        self.compare_mode
    }

    pub fn enter_compare_mode(&mut self) {
        self.compare_mode = true;
    }

    /// Leave compare mode. The selection does not outlive the mode.
    pub fn exit_compare_mode(&mut self) {
        self.compare_mode = false;
        self.names.clear();
    }

    pub fn toggle_compare_mode(&mut self) {
        if self.compare_mode {
            self.exit_compare_mode();
        } else {
            self.enter_compare_mode();
        }
    }

    /// Slugs of the selection joined for a compare link.
    pub fn to_cars_param(&self) -> String {
        encode_cars_param(self.names.iter().map(String::as_str))
    }
}

/// Join vehicle names into a `cars` parameter value.
pub fn encode_cars_param<'a>(names: impl IntoIterator<Item = &'a str>) -> String {
    names
        .into_iter()
        .map(slugify)
        .take(MAX_SELECTED)
        .collect::<Vec<_>>()
        .join(",")
}

/// Full relative compare link for a set of names.
pub fn compare_link<'a>(names: impl IntoIterator<Item = &'a str>) -> String {
    format!("/compare?{CARS_PARAM}={}", encode_cars_param(names))
}

/// Split a `cars` parameter value into at most six non-empty slugs.
pub fn parse_cars_param(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .take(MAX_SELECTED)
        .map(str::to_string)
        .collect()
}

/// Resolve a `cars` parameter against the dataset.
///
/// Unresolvable slugs are dropped with a warning, never reported as errors.
/// Repeated slugs resolve once.
pub fn resolve_cars_param<'a>(dataset: &'a Dataset, value: &str) -> Vec<&'a VehicleRecord> {
    let mut resolved: Vec<&VehicleRecord> = Vec::new();
    for slug in parse_cars_param(value) {
        match dataset.find_by_slug(&slug) {
            Some(record) => {
                if !resolved.iter().any(|r| r.name == record.name) {
                    resolved.push(record);
                }
            }
            None => tracing::warn!("Dropping unknown vehicle slug '{slug}'"),
        }
    }
    resolved
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_is_involution() {
        let mut set = SelectionSet::new();
        assert_eq!(set.toggle("A"), ToggleOutcome::Added);
        assert_eq!(set.toggle("A"), ToggleOutcome::Removed);
        assert!(set.is_empty());
    }

    #[test]
    fn test_seventh_toggle_is_noop() {
        let mut set = SelectionSet::new();
        for name in ["A", "B", "C", "D", "E", "F"] {
            set.toggle(name);
        }
        let before = set.clone();
        assert_eq!(set.toggle("G"), ToggleOutcome::Full);
        assert_eq!(set, before);
        assert!(set.is_full());
    }

    #[test]
    fn test_order_preserved() {
        let mut set = SelectionSet::new();
        set.toggle("C");
        set.toggle("A");
        set.toggle("B");
        set.toggle("A");
        assert_eq!(set.names(), &["C".to_string(), "B".to_string()]);
    }

    #[test]
    fn test_can_compare_threshold() {
        let mut set = SelectionSet::new();
        set.toggle("A");
        assert!(!set.can_compare());
        set.toggle("B");
        assert!(set.can_compare());
    }

    #[test]
    fn test_exit_compare_mode_clears() {
        let mut set = SelectionSet::new();
        set.enter_compare_mode();
        set.toggle("A");
        set.toggle_compare_mode();
        assert!(!set.compare_mode());
        assert!(set.is_empty());
    }

    #[test]
    fn test_cars_param_encoding() {
        let mut set = SelectionSet::new();
        set.toggle("Honda Civic 2022");
        set.toggle("Toyota RAV4 2019-21");
        assert_eq!(set.to_cars_param(), "honda-civic-2022,toyota-rav4-2019-21");
        assert_eq!(
            compare_link(["Honda Civic 2022"]),
            "/compare?cars=honda-civic-2022"
        );
    }

    #[test]
    fn test_parse_cars_param_caps_at_six() {
        let parsed = parse_cars_param("a,b,,c,d,e,f,g");
        assert_eq!(parsed, vec!["a", "b", "c", "d", "e", "f"]);
        assert!(parse_cars_param("").is_empty());
    }

    #[test]
    fn test_resolve_drops_unknown() {
        let dataset = Dataset::from_json_str(
            r#"[{"name": "Honda Civic 2022"}, {"name": "Acura RDX 2019-21"}]"#,
        )
        .expect("dataset");
        let resolved = resolve_cars_param(&dataset, "honda-civic-2022,nope,acura-rdx-2019-21");
        let names: Vec<_> = resolved.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["Honda Civic 2022", "Acura RDX 2019-21"]);
    }
}
