//! The loaded, immutable vehicle dataset.

use super::index::{build_search_keys, VehicleSearchKey};
use super::{LongitudinalReport, VehicleRecord};
use crate::error::{CatalogError, LoadErrorKind, Result};
use crate::utils::slugify;
use indexmap::IndexMap;
use std::collections::HashMap;

/// Longitudinal reports keyed by platform fingerprint.
pub type ReportsIndex = IndexMap<String, Vec<LongitudinalReport>>;

/// Minimum similarity for a did-you-mean suggestion.
const SUGGESTION_THRESHOLD: f64 = 0.8;

/// Immutable collection of vehicle records with lookup tables.
///
/// Record order is the order of the input file and is what stable sorting
/// falls back to on ties.
#[derive(Debug, Clone, Default)]
pub struct Dataset {
    records: Vec<VehicleRecord>,
    keys: Vec<VehicleSearchKey>,
    by_name: HashMap<String, usize>,
    by_slug: HashMap<String, usize>,
}

impl Dataset {
    /// Build a dataset from records, validating names and deriving missing
    /// year lists.
    pub fn from_records(mut records: Vec<VehicleRecord>) -> Result<Self> {
        let mut by_name = HashMap::with_capacity(records.len());
        let mut by_slug = HashMap::with_capacity(records.len());

        for (index, record) in records.iter_mut().enumerate() {
            if record.name.trim().is_empty() {
                return Err(CatalogError::load(
                    "validating records",
                    LoadErrorKind::EmptyName { index },
                ));
            }
            if by_name.insert(record.name.clone(), index).is_some() {
                return Err(CatalogError::load(
                    "validating records",
                    LoadErrorKind::DuplicateName(record.name.clone()),
                ));
            }
            if record.year_list.is_empty() && !record.years.is_empty() {
                record.year_list = expand_years(&record.years);
            }

            let slug = slugify(&record.name);
            if let Some(&first) = by_slug.get(&slug) {
                tracing::warn!(
                    "Slug '{slug}' of '{}' collides with record {first}; keeping the first",
                    record.name
                );
            } else {
                by_slug.insert(slug, index);
            }
        }

        let keys = build_search_keys(&records);
        tracing::debug!("Indexed {} vehicle records", records.len());

        Ok(Self {
            records,
            keys,
            by_name,
            by_slug,
        })
    }

    /// Parse a JSON array of records.
    pub fn from_json_str(json: &str) -> Result<Self> {
        Self::from_json_str_with_reports(json, None)
    }

    /// Parse a JSON array of records and attach reports from a platform index.
    pub fn from_json_str_with_reports(json: &str, reports: Option<&ReportsIndex>) -> Result<Self> {
        let value: serde_json::Value = serde_json::from_str(json)?;
        if !value.is_array() {
            return Err(CatalogError::load(
                "parsing dataset",
                LoadErrorKind::NotAnArray,
            ));
        }
        let mut records: Vec<VehicleRecord> = serde_json::from_value(value)?;
        if let Some(index) = reports {
            attach_reports(&mut records, index);
        }
        Self::from_records(records)
    }

    pub fn records(&self) -> &[VehicleRecord] {
        &self.records
    }

    pub fn iter(&self) -> std::slice::Iter<'_, VehicleRecord> {
        self.records.iter()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&VehicleRecord> {
        self.records.get(index)
    }

    /// Records paired with their search keys.
    pub fn indexed(&self) -> impl Iterator<Item = (&VehicleRecord, &VehicleSearchKey)> {
        self.records.iter().zip(self.keys.iter())
    }

    /// Exact lookup by display name.
    pub fn find_by_name(&self, name: &str) -> Option<&VehicleRecord> {
        self.by_name.get(name).map(|&i| &self.records[i])
    }

    /// Lookup by URL slug. The input is slugified first, so a display name
    /// works too.
    pub fn find_by_slug(&self, slug: &str) -> Option<&VehicleRecord> {
        self.by_slug.get(&slugify(slug)).map(|&i| &self.records[i])
    }

    /// Resolve a user-supplied identifier: exact name first, then slug.
    pub fn resolve(&self, ident: &str) -> Option<&VehicleRecord> {
        self.find_by_name(ident).or_else(|| self.find_by_slug(ident))
    }

    /// Closest vehicle name to an unresolved identifier, if any is close
    /// enough to be worth suggesting.
    pub fn suggest(&self, ident: &str) -> Option<&str> {
        let wanted = slugify(ident);
        if wanted.is_empty() {
            return None;
        }
        self.records
            .iter()
            .map(|r| (strsim::jaro_winkler(&wanted, &slugify(&r.name)), r))
            .filter(|(score, _)| *score >= SUGGESTION_THRESHOLD)
            .max_by(|a, b| a.0.total_cmp(&b.0))
            .map(|(_, r)| r.name.as_str())
    }
}

/// Attach reports to records whose fingerprint appears in the index.
///
/// Records that already embed reports keep them.
pub fn attach_reports(records: &mut [VehicleRecord], index: &ReportsIndex) {
    let mut attached = 0usize;
    for record in records.iter_mut() {
        if !record.longitudinal_reports.is_empty() {
            continue;
        }
        let Some(fingerprint) = record.car_fingerprint.as_deref() else {
            continue;
        };
        if let Some(reports) = index.get(fingerprint) {
            record.longitudinal_reports = reports.clone();
            attached += 1;
        }
    }
    tracing::debug!("Attached longitudinal reports to {attached} records");
}

/// Parse a `platform -> [report]` JSON index.
pub fn parse_reports_index(json: &str) -> Result<ReportsIndex> {
    Ok(serde_json::from_str(json)?)
}

/// Expand a display year string like `"2017-19, 2021"` into individual years.
///
/// Two-digit range ends borrow the century of the range start. Parts that
/// don't look like years are skipped.
pub fn expand_years(years: &str) -> Vec<String> {
    let mut out = Vec::new();
    for part in years.split(',') {
        let part = part.trim();
        let (start, end) = match part.split_once('-') {
            Some((s, e)) => (s.trim(), Some(e.trim())),
            None => (part, None),
        };
        let Some(start_year) = parse_year(start) else {
            continue;
        };
        let end_year = match end {
            None => start_year,
            Some(e) if e.len() == 2 => match e.parse::<u32>() {
                Ok(yy) => start_year - start_year % 100 + yy,
                Err(_) => continue,
            },
            Some(e) => match parse_year(e) {
                Some(y) => y,
                None => continue,
            },
        };
        if end_year < start_year {
            out.push(start_year.to_string());
            continue;
        }
        out.extend((start_year..=end_year).map(|y| y.to_string()));
    }
    out
}

fn parse_year(s: &str) -> Option<u32> {
    if s.len() == 4 && s.bytes().all(|b| b.is_ascii_digit()) {
        s.parse().ok()
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"[
        {"name": "Honda Civic 2022", "make": "Honda", "model": "Civic", "years": "2022", "year_list": ["2022"]},
        {"name": "Acura RDX 2019-21", "make": "Acura", "model": "RDX", "years": "2019-21", "car_fingerprint": "ACURA_RDX_3G"}
    ]"#;

    #[test]
    fn test_from_json_derives_year_list() {
        let dataset = Dataset::from_json_str(SAMPLE).expect("load");
        assert_eq!(dataset.len(), 2);
        let rdx = dataset.find_by_name("Acura RDX 2019-21").expect("rdx");
        assert_eq!(rdx.year_list, vec!["2019", "2020", "2021"]);
    }

    #[test]
    fn test_rejects_non_array() {
        let err = Dataset::from_json_str(r#"{"name": "x"}"#).unwrap_err();
        assert!(matches!(
            err,
            CatalogError::Load {
                source: LoadErrorKind::NotAnArray,
                ..
            }
        ));
    }

    #[test]
    fn test_rejects_duplicate_names() {
        let json = r#"[{"name": "A"}, {"name": "A"}]"#;
        let err = Dataset::from_json_str(json).unwrap_err();
        assert!(matches!(
            err,
            CatalogError::Load {
                source: LoadErrorKind::DuplicateName(ref n),
                ..
            } if n == "A"
        ));
    }

    #[test]
    fn test_rejects_empty_name() {
        let err = Dataset::from_json_str(r#"[{"name": "A"}, {"make": "B"}]"#).unwrap_err();
        assert!(matches!(
            err,
            CatalogError::Load {
                source: LoadErrorKind::EmptyName { index: 1 },
                ..
            }
        ));
    }

    #[test]
    fn test_slug_lookup_and_resolve() {
        let dataset = Dataset::from_json_str(SAMPLE).expect("load");
        let civic = dataset.find_by_slug("honda-civic-2022").expect("civic");
        assert_eq!(civic.name, "Honda Civic 2022");
        assert!(dataset.resolve("Honda Civic 2022").is_some());
        assert!(dataset.resolve("honda-civic-2022").is_some());
        assert!(dataset.resolve("toyota-prius").is_none());
    }

    #[test]
    fn test_suggest_close_slug() {
        let dataset = Dataset::from_json_str(SAMPLE).expect("load");
        assert_eq!(dataset.suggest("honda-civic-2023"), Some("Honda Civic 2022"));
        assert_eq!(dataset.suggest("zzz"), None);
        assert_eq!(dataset.suggest(""), None);
    }

    #[test]
    fn test_attach_reports_by_fingerprint() {
        let index = parse_reports_index(
            r#"{"ACURA_RDX_3G": [{"description": "Stop and go", "link": "https://example.com/r"}]}"#,
        )
        .expect("index");
        let dataset = Dataset::from_json_str_with_reports(SAMPLE, Some(&index)).expect("load");
        let rdx = dataset.find_by_name("Acura RDX 2019-21").expect("rdx");
        assert!(rdx.has_longitudinal_report());
        let civic = dataset.find_by_name("Honda Civic 2022").expect("civic");
        assert!(!civic.has_longitudinal_report());
    }

    #[test]
    fn test_expand_years() {
        assert_eq!(expand_years("2017-19, 2021"), vec!["2017", "2018", "2019", "2021"]);
        assert_eq!(expand_years("2020-2021"), vec!["2020", "2021"]);
        assert_eq!(expand_years("2023"), vec!["2023"]);
        assert!(expand_years("All").is_empty());
    }
}
