//! Side-by-side comparison of selected vehicles.

use super::fit::FitState;
use super::highlight::HighlightState;
use super::selection::{encode_cars_param, resolve_cars_param, MIN_FOR_COMPARISON};
use super::specs::{specs_by_category, SpecCategory, SpecDefinition, SPECS};
use crate::model::{Dataset, VehicleRecord};
use serde::Serialize;

/// One spec row with a display value per column.
#[derive(Debug, Clone, Serialize)]
pub struct ComparisonRow {
    pub spec_id: &'static str,
    pub label: &'static str,
    #[serde(skip)]
    pub category: SpecCategory,
    pub values: Vec<String>,
}

impl ComparisonRow {
    /// Whether the columns disagree on this spec.
    pub fn differs(&self) -> bool {
        self.values.windows(2).any(|w| w[0] != w[1])
    }
}

/// Rows of one category.
#[derive(Debug, Clone, Serialize)]
pub struct ComparisonSection {
    pub category: &'static str,
    pub section_id: &'static str,
    pub rows: Vec<ComparisonRow>,
}

/// A ready comparison of at least two vehicles.
#[derive(Debug, Clone, Serialize)]
pub struct ComparisonTable<'a> {
    #[serde(serialize_with = "serialize_column_names")]
    columns: Vec<&'a VehicleRecord>,
    sections: Vec<ComparisonSection>,
}

fn serialize_column_names<S: serde::Serializer>(
    columns: &[&VehicleRecord],
    serializer: S,
) -> Result<S::Ok, S::Error> {
    serializer.collect_seq(columns.iter().map(|r| r.name.as_str()))
}

impl<'a> ComparisonTable<'a> {
    fn build(columns: Vec<&'a VehicleRecord>) -> Self {
        let sections = specs_by_category()
            .into_iter()
            .map(|group| ComparisonSection {
                category: group.category.label(),
                section_id: group.category.section_id(),
                rows: group
                    .specs
                    .into_iter()
                    .map(|spec| row_for(spec, &columns))
                    .collect(),
            })
            .collect();
        Self { columns, sections }
    }

    pub fn columns(&self) -> &[&'a VehicleRecord] {
        &self.columns
    }

    pub fn sections(&self) -> &[ComparisonSection] {
        &self.sections
    }

    /// All rows across sections, in registry order.
    pub fn rows(&self) -> impl Iterator<Item = &ComparisonRow> {
        self.sections.iter().flat_map(|s| s.rows.iter())
    }

    pub fn row_count(&self) -> usize {
        SPECS.len()
    }
}

fn row_for(spec: &'static SpecDefinition, columns: &[&VehicleRecord]) -> ComparisonRow {
    ComparisonRow {
        spec_id: spec.id,
        label: spec.label,
        category: spec.category,
        values: columns.iter().map(|r| spec.display(r)).collect(),
    }
}

/// What the compare view should show.
#[derive(Debug, Clone)]
pub enum ComparisonView<'a> {
    /// Fewer than two resolvable vehicles
    NotEnoughSelected { selected: usize },
    Ready(ComparisonTable<'a>),
}

impl<'a> ComparisonView<'a> {
    pub fn from_records(records: Vec<&'a VehicleRecord>) -> Self {
        if records.len() < MIN_FOR_COMPARISON {
            Self::NotEnoughSelected {
                selected: records.len(),
            }
        } else {
            Self::Ready(ComparisonTable::build(records))
        }
    }

    /// Heading and hint shown when there is nothing to compare yet.
    pub fn empty_message(selected: usize) -> (String, &'static str) {
        if selected == 0 {
            (
                "No cars selected".to_string(),
                "Select cars from the list to compare them",
            )
        } else {
            (
                format!("Need at least {MIN_FOR_COMPARISON} cars to compare"),
                "Add more cars to start comparing",
            )
        }
    }
}

/// Navigation result of removing a column.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RemoveOutcome {
    /// The comparison continues with the remaining vehicles
    Updated { cars: String },
    /// Too few vehicles remain; go back to selecting
    BackToSelection,
    /// The vehicle wasn't in the comparison
    NotInComparison,
}

/// An open comparison, addressed by the vehicle names in column order.
#[derive(Debug, Clone, Default)]
pub struct Comparison {
    names: Vec<String>,
    pub highlight: HighlightState,
    pub fit: FitState,
}

impl Comparison {
    pub fn new(names: Vec<String>) -> Self {
        Self {
            names,
            ..Self::default()
        }
    }

    /// Open a comparison from a `cars` parameter value.
    pub fn from_cars_param(dataset: &Dataset, value: &str) -> Self {
        Self::new(
            resolve_cars_param(dataset, value)
                .into_iter()
                .map(|r| r.name.clone())
                .collect(),
        )
    }

    pub fn names(&self) -> &[String] {
        &self.names
    }

    pub fn cars_param(&self) -> String {
        encode_cars_param(self.names.iter().map(String::as_str))
    }

    pub fn records<'a>(&self, dataset: &'a Dataset) -> Vec<&'a VehicleRecord> {
        self.names
            .iter()
            .filter_map(|n| dataset.find_by_name(n))
            .collect()
    }

    pub fn view<'a>(&self, dataset: &'a Dataset) -> ComparisonView<'a> {
        ComparisonView::from_records(self.records(dataset))
    }

    /// Drop a column. Both highlight slots are cleared either way.
    pub fn remove(&mut self, name: &str) -> RemoveOutcome {
        let Some(pos) = self.names.iter().position(|n| n == name) else {
            return RemoveOutcome::NotInComparison;
        };
        self.names.remove(pos);
        self.highlight.clear();

        if self.names.len() < MIN_FOR_COMPARISON {
            RemoveOutcome::BackToSelection
        } else {
            RemoveOutcome::Updated {
                cars: self.cars_param(),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compare::highlight::CellPosition;

    fn dataset() -> Dataset {
        Dataset::from_json_str(
            r#"[
                {"name": "Honda Civic 2022", "make": "Honda", "wheelbase": 2.7},
                {"name": "Acura RDX 2019-21", "make": "Acura", "wheelbase": 2.75},
                {"name": "Toyota RAV4 2019-21", "make": "Toyota", "wheelbase": 2.69}
            ]"#,
        )
        .expect("dataset")
    }

    #[test]
    fn test_not_enough_selected() {
        let ds = dataset();
        let comparison = Comparison::from_cars_param(&ds, "honda-civic-2022,unknown");
        assert!(matches!(
            comparison.view(&ds),
            ComparisonView::NotEnoughSelected { selected: 1 }
        ));
    }

    #[test]
    fn test_table_rows() {
        let ds = dataset();
        let comparison =
            Comparison::from_cars_param(&ds, "honda-civic-2022,acura-rdx-2019-21");
        let ComparisonView::Ready(table) = comparison.view(&ds) else {
            panic!("expected a ready table");
        };
        assert_eq!(table.columns().len(), 2);
        assert_eq!(table.rows().count(), table.row_count());
        let wheelbase = table
            .rows()
            .find(|r| r.spec_id == "wheelbase")
            .expect("wheelbase row");
        assert_eq!(wheelbase.values, vec!["~2.70 m", "~2.75 m"]);
        assert!(wheelbase.differs());
    }

    #[test]
    fn test_remove_below_minimum_goes_back() {
        let ds = dataset();
        let mut comparison = Comparison::from_cars_param(
            &ds,
            "honda-civic-2022,acura-rdx-2019-21,toyota-rav4-2019-21",
        );
        comparison.highlight.click(CellPosition::new(1, "wheelbase"));

        assert_eq!(
            comparison.remove("Acura RDX 2019-21"),
            RemoveOutcome::Updated {
                cars: "honda-civic-2022,toyota-rav4-2019-21".to_string()
            }
        );
        assert_eq!(comparison.highlight, HighlightState::default());
        assert_eq!(
            comparison.remove("Honda Civic 2022"),
            RemoveOutcome::BackToSelection
        );
        assert_eq!(comparison.remove("nope"), RemoveOutcome::NotInComparison);
    }

    #[test]
    fn test_empty_message() {
        assert_eq!(ComparisonView::empty_message(0).0, "No cars selected");
        assert_eq!(
            ComparisonView::empty_message(1).0,
            "Need at least 2 cars to compare"
        );
    }
}
