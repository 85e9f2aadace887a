//! Sort configuration for catalog results.

use crate::model::VehicleRecord;
use clap::ValueEnum;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;

/// Field the catalog is ordered by.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, ValueEnum, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "kebab-case")]
pub enum SortField {
    #[default]
    Make,
    SupportType,
    /// First model year
    Year,
}

impl SortField {
    pub const ALL: [Self; 3] = [Self::Make, Self::Year, Self::SupportType];

    pub const fn label(self) -> &'static str {
        match self {
            Self::Make => "Make",
            Self::SupportType => "Support Level",
            Self::Year => "Year",
        }
    }

    /// Compare two records by this field alone.
    pub fn compare(self, a: &VehicleRecord, b: &VehicleRecord) -> Ordering {
        match self {
            Self::Make => a.make.cmp(&b.make),
            Self::SupportType => a.support_type.as_str().cmp(b.support_type.as_str()),
            Self::Year => a.first_year().cmp(&b.first_year()),
        }
    }
}

impl fmt::Display for SortField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, ValueEnum, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    #[default]
    Asc,
    Desc,
}

impl SortOrder {
    #[must_use]
    pub const fn reversed(self) -> Self {
        match self {
            Self::Asc => Self::Desc,
            Self::Desc => Self::Asc,
        }
    }

    pub const fn apply(self, ordering: Ordering) -> Ordering {
        match self {
            Self::Asc => ordering,
            Self::Desc => ordering.reverse(),
        }
    }

    pub const fn arrow(self) -> &'static str {
        match self {
            Self::Asc => "↑",
            Self::Desc => "↓",
        }
    }
}

/// Sort field plus direction. Defaults to make, ascending.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct SortConfig {
    pub field: SortField,
    pub order: SortOrder,
}

impl SortConfig {
    pub const fn new(field: SortField, order: SortOrder) -> Self {
        Self { field, order }
    }

    pub fn toggle_order(&mut self) {
        self.order = self.order.reversed();
    }

    /// Select a field, keeping the current direction.
    pub fn set_field(&mut self, field: SortField) {
        self.field = field;
    }

    /// Cycle to the next field in menu order.
    pub fn cycle_field(&mut self) {
        let pos = SortField::ALL
            .iter()
            .position(|f| *f == self.field)
            .unwrap_or(0);
        self.field = SortField::ALL[(pos + 1) % SortField::ALL.len()];
    }

    pub fn compare(&self, a: &VehicleRecord, b: &VehicleRecord) -> Ordering {
        self.order.apply(self.field.compare(a, b))
    }
}

impl fmt::Display for SortConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.field, self.order.arrow())
    }
}
