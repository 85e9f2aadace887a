//! Vehicle data model.
//!
//! A [`Dataset`] is loaded once from the JSON emitted by the metadata
//! generator and never changes afterwards. Every record carries a
//! precomputed [`VehicleSearchKey`] so queries only normalize the query text.
//!
//! ```ignore
//! let dataset = Dataset::from_json_str(&std::fs::read_to_string("cars.json")?)?;
//! let civic = dataset.find_by_slug("honda-civic-2022");
//! ```

mod dataset;
mod index;
mod support;
mod vehicle;

pub use dataset::{attach_reports, expand_years, parse_reports_index, Dataset, ReportsIndex};
pub use index::{build_search_keys, VehicleSearchKey};
pub use support::{ExpandableSection, Reference, SupportTypeInfo};
pub use vehicle::{BusLookup, LongitudinalReport, Part, SupportType, VehicleRecord};
