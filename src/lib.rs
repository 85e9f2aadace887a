//! **Browse, filter and compare the vehicles a driver-assistance system supports.**
//!
//! `vehicle-catalog` loads the vehicle metadata dataset (one JSON record per
//! supported car) into an immutable [`Dataset`] and answers the questions a
//! compatibility website answers: which cars match these filters, what does
//! this car's detail page say, and how do these cars differ side by side.
//!
//! The same engine powers a scripting-friendly CLI and an interactive
//! terminal browser.
//!
//! ## Core Concepts & Modules
//!
//! - **[`model`]**: [`VehicleRecord`], [`SupportType`] and the [`Dataset`]
//!   with its precomputed search keys.
//! - **[`catalog`]**: filters, free-text search with relevance ranking,
//!   sorting and facet options.
//! - **[`compare`]**: the bounded selection, the typed spec registry and the
//!   comparison table with its highlight and fit-to-screen state.
//! - **[`detail`]**: detail page lookup, section toggles and quick navigation.
//! - **[`diff`]**: changes between two dataset snapshots.
//! - **[`reports`]**: JSON, CSV, Markdown, summary and table output.
//! - **[`pipeline`]**: the load → query → report plumbing shared by the CLI.
//! - **[`tui`]**: the interactive browser.
//!
//! ## Getting Started
//!
//! ```no_run
//! use vehicle_catalog::catalog::{run_query, FilterState, SortConfig};
//! use vehicle_catalog::model::Dataset;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let json = std::fs::read_to_string("vehicles.json")?;
//!     let dataset = Dataset::from_json_str(&json)?;
//!
//!     let filters = FilterState::new().with_make("Toyota").with_query("rav4");
//!     for record in run_query(&dataset, &filters, &SortConfig::default()) {
//!         println!("{} ({})", record.name, record.support_type);
//!     }
//!     Ok(())
//! }
//! ```
//!
//! ### Comparing Vehicles
//!
//! ```no_run
//! use vehicle_catalog::compare::{resolve_cars_param, ComparisonView};
//! use vehicle_catalog::model::Dataset;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let dataset = Dataset::from_json_str(&std::fs::read_to_string("vehicles.json")?)?;
//!     let records = resolve_cars_param(&dataset, "honda-civic-2022,toyota-rav4-2019-21");
//!     if let ComparisonView::Ready(table) = ComparisonView::from_records(records) {
//!         for row in table.rows().filter(|row| row.differs()) {
//!             println!("{}: {}", row.label, row.values.join(" | "));
//!         }
//!     }
//!     Ok(())
//! }
//! ```

// Lint to discourage unwrap() in production code - prefer explicit error handling
#![warn(clippy::unwrap_used)]
// Pedantic lints: allow categories that are design choices for this codebase
#![allow(
    // Cast safety: usize↔f64/u16 casts are pervasive in TUI layout math
    // and fit-to-screen scaling; all values are bounded in practice
    clippy::cast_precision_loss,
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::cast_possible_wrap,
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    // TUI render functions are inherently long
    clippy::too_many_lines,
    clippy::struct_excessive_bools,
    clippy::similar_names
)]

pub mod catalog;
pub mod cli;
pub mod compare;
pub mod config;
pub mod detail;
pub mod diff;
pub mod error;
pub mod model;
pub mod pipeline;
pub mod reports;
pub mod tui;
pub mod utils;

// Re-export main types for convenience
pub use catalog::{run_query, CatalogState, FacetOptions, FilterState, SortConfig};
pub use compare::{Comparison, ComparisonView, SelectionSet};
pub use config::{AppConfig, AppConfigBuilder, ConfigError, TuiConfig, Validatable};
pub use diff::{diff_datasets, DatasetDiff};
pub use error::{CatalogError, ErrorContext, OptionContext, Result};
pub use model::{Dataset, SupportType, VehicleRecord};
pub use reports::{ReportFormat, ReportGenerator};
