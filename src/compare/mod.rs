//! Vehicle selection and side-by-side comparison.
//!
//! - [`selection`]: the bounded set of chosen vehicles and compare links
//! - [`specs`]: typed registry of every displayable parameter
//! - [`descriptions`]: long-form explanations of specs
//! - [`table`]: comparison rows, column removal and navigation outcomes
//! - [`highlight`]: hover and click highlighting
//! - [`fit`]: fit-to-screen scaling and overflow detection

pub mod descriptions;
pub mod fit;
pub mod highlight;
pub mod selection;
pub mod specs;
pub mod table;

pub use descriptions::spec_description;
pub use fit::{FitConfig, FitState, TableMetrics};
pub use highlight::{CardStyle, CellPosition, CellStyle, HighlightState, RowStyle};
pub use selection::{
    compare_link, encode_cars_param, parse_cars_param, resolve_cars_param, SelectionSet,
    ToggleOutcome, CARS_PARAM, MAX_SELECTED, MIN_FOR_COMPARISON,
};
pub use specs::{
    find_spec, format_bus_lookup, section_for_spec, specs_by_category, SpecCategory,
    SpecDefinition, SpecFormat, SpecGroup, SpecValue, SPECS,
};
pub use table::{
    Comparison, ComparisonRow, ComparisonSection, ComparisonTable, ComparisonView, RemoveOutcome,
};
