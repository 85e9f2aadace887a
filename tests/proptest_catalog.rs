//! Property-based tests for the query engine, slugs and selection.
//!
//! Ensures the engine handles arbitrary datasets and queries without
//! panicking, and that its ordering and filtering invariants hold.

use proptest::prelude::*;
use vehicle_catalog::catalog::{run_query, FilterState, SortConfig, SortField, SortOrder};
use vehicle_catalog::compare::{SelectionSet, ToggleOutcome, MAX_SELECTED};
use vehicle_catalog::model::{Dataset, SupportType, VehicleRecord};
use vehicle_catalog::utils::{normalize, slugify, tokenize};

const MAKES: [&str; 5] = ["Honda", "Acura", "Toyota", "Škoda", "Hyundai"];
const MODELS: [&str; 5] = ["Civic", "RDX", "RAV4", "Kodiaq", "Ioniq 5"];

fn support_strategy() -> impl Strategy<Value = SupportType> {
    prop::sample::select(SupportType::ALL.to_vec())
}

fn record_strategy() -> impl Strategy<Value = (usize, usize, u32, u32, SupportType)> {
    (0..MAKES.len(), 0..MODELS.len(), 2015u32..2024, 0u32..4, support_strategy())
}

fn dataset_strategy() -> impl Strategy<Value = Dataset> {
    prop::collection::vec(record_strategy(), 0..24).prop_map(|specs| {
        let records = specs
            .into_iter()
            .enumerate()
            .map(|(i, (make, model, start, span, support))| {
                let years = if span == 0 {
                    start.to_string()
                } else {
                    format!("{start}-{:02}", (start + span) % 100)
                };
                let mut record = VehicleRecord::new(
                    format!("{} {} {years} #{i}", MAKES[make], MODELS[model]),
                    MAKES[make],
                    MODELS[model],
                );
                record.years = years;
                record.support_type = support;
                record
            })
            .collect();
        Dataset::from_records(records).expect("generated names are unique")
    })
}

fn sort_strategy() -> impl Strategy<Value = SortConfig> {
    (
        prop::sample::select(SortField::ALL.to_vec()),
        prop::bool::ANY,
    )
        .prop_map(|(field, desc)| {
            SortConfig::new(field, if desc { SortOrder::Desc } else { SortOrder::Asc })
        })
}

fn filter_strategy() -> impl Strategy<Value = FilterState> {
    (
        "[a-zA-Z0-9 ]{0,8}",
        prop::option::of(0..MAKES.len()),
        prop::option::of(support_strategy()),
        prop::option::of(2015u32..2028),
    )
        .prop_map(|(query, make, support, year)| {
            let mut filters = FilterState::new().with_query(query);
            if let Some(make) = make {
                filters.set_make(MAKES[make]);
            }
            filters.set_support(support);
            if let Some(year) = year {
                filters.set_year(year.to_string());
            }
            filters
        })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn results_are_a_filtered_subset(
        dataset in dataset_strategy(),
        filters in filter_strategy(),
        sort in sort_strategy(),
    ) {
        let results = run_query(&dataset, &filters, &sort);
        prop_assert!(results.len() <= dataset.len());
        for record in &results {
            prop_assert!(filters.matches(record));
            prop_assert!(dataset.find_by_name(&record.name).is_some());
        }
        let excluded = dataset.len() - results.len();
        let rejected = dataset
            .iter()
            .filter(|r| !results.iter().any(|hit| hit.name == r.name))
            .count();
        prop_assert_eq!(excluded, rejected);
    }

    #[test]
    fn every_result_contains_every_token(
        dataset in dataset_strategy(),
        filters in filter_strategy(),
    ) {
        let tokens = tokenize(filters.query());
        for record in run_query(&dataset, &filters, &SortConfig::default()) {
            let blob = normalize(&format!(
                "{} {} {} {} {} {}",
                record.name,
                record.make,
                record.model,
                record.support_type,
                record.package,
                record.year_list.join(" ")
            ));
            for token in &tokens {
                prop_assert!(blob.contains(token.as_str()), "{} lacks {}", record.name, token);
            }
        }
    }

    #[test]
    fn query_is_deterministic(
        dataset in dataset_strategy(),
        filters in filter_strategy(),
        sort in sort_strategy(),
    ) {
        let first: Vec<&str> = run_query(&dataset, &filters, &sort)
            .iter()
            .map(|r| r.name.as_str())
            .collect();
        let second: Vec<&str> = run_query(&dataset, &filters, &sort)
            .iter()
            .map(|r| r.name.as_str())
            .collect();
        prop_assert_eq!(first, second);
    }

    #[test]
    fn year_filter_accepts_any_covered_year(dataset in dataset_strategy(), year in 2015u32..2028) {
        let filters = FilterState::new().with_year(year.to_string());
        let year = year.to_string();
        let expected = dataset.iter().filter(|r| r.year_list.contains(&year)).count();
        prop_assert_eq!(run_query(&dataset, &filters, &SortConfig::default()).len(), expected);
    }

    #[test]
    fn slugify_is_idempotent(s in "\\PC{0,60}") {
        let once = slugify(&s);
        prop_assert_eq!(slugify(&once), once.clone());
        prop_assert!(once.chars().all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-'));
        prop_assert!(!once.starts_with('-') && !once.ends_with('-'));
        prop_assert!(!once.contains("--"));
    }

    #[test]
    fn selection_toggle_is_an_involution(
        names in prop::collection::vec("[A-Z][a-z]{2,6}", 1..MAX_SELECTED),
        extra in "[A-Z][a-z]{2,6}",
    ) {
        let mut selection = SelectionSet::new();
        for name in &names {
            selection.toggle(name);
        }
        let before = selection.clone();
        if selection.contains(&extra) || !selection.is_full() {
            selection.toggle(&extra);
            selection.toggle(&extra);
            prop_assert_eq!(selection.contains(&extra), before.contains(&extra));
            prop_assert_eq!(selection.len(), before.len());
        } else {
            prop_assert_eq!(selection.toggle(&extra), ToggleOutcome::Full);
            prop_assert_eq!(selection, before);
        }
    }
}
