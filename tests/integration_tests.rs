//! Integration tests for vehicle-catalog
//!
//! These tests load the fixture dataset and exercise the query engine,
//! slug routing, comparisons, detail lookup and snapshot diffing together.

use vehicle_catalog::{
    catalog::{run_query, FacetOptions, FilterKey, FilterState, PresenceFilter, SortConfig},
    catalog::{SortField, SortOrder},
    compare::{resolve_cars_param, ComparisonView, SelectionSet, ToggleOutcome, MAX_SELECTED},
    detail::DetailLookup,
    diff::diff_datasets,
    model::{parse_reports_index, Dataset, SupportType},
    utils::slugify,
};
use std::path::Path;

// ============================================================================
// Test Fixtures
// ============================================================================

const FIXTURES_DIR: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/tests/fixtures");

fn fixture_path(name: &str) -> std::path::PathBuf {
    Path::new(FIXTURES_DIR).join(name)
}

fn load(name: &str) -> Dataset {
    let json = std::fs::read_to_string(fixture_path(name)).expect("fixture should exist");
    Dataset::from_json_str(&json).expect("fixture should parse")
}

fn dataset() -> Dataset {
    load("vehicles.json")
}

fn names(dataset: &Dataset, filters: &FilterState, sort: &SortConfig) -> Vec<String> {
    run_query(dataset, filters, sort)
        .into_iter()
        .map(|r| r.name.clone())
        .collect()
}

// ============================================================================
// Dataset Tests
// ============================================================================

mod dataset_tests {
    use super::*;

    #[test]
    fn test_load_fixture() {
        let dataset = dataset();
        assert_eq!(dataset.len(), 8);
        let acura = dataset.find_by_name("Acura ILX 2016-19").unwrap();
        assert_eq!(acura.year_list, vec!["2016", "2017", "2018", "2019"]);
        assert_eq!(acura.support_type, SupportType::Upstream);
    }

    #[test]
    fn test_diacritics_in_slug() {
        let dataset = dataset();
        let skoda = dataset.find_by_slug("skoda-kodiaq-2017-23").unwrap();
        assert_eq!(skoda.make, "Škoda");
    }

    #[test]
    fn test_attach_reports_index() {
        let json = std::fs::read_to_string(fixture_path("vehicles.json")).unwrap();
        let index_json =
            std::fs::read_to_string(fixture_path("longitudinal_reports.json")).unwrap();
        let index = parse_reports_index(&index_json).unwrap();
        let dataset = Dataset::from_json_str_with_reports(&json, Some(&index)).unwrap();

        let rav4 = dataset.find_by_name("Toyota RAV4 2019-21").unwrap();
        assert_eq!(rav4.longitudinal_reports.len(), 2);
        assert!(rav4.has_longitudinal_report());
        let prius = dataset.find_by_name("Toyota Prius 2016").unwrap();
        assert!(!prius.has_longitudinal_report());
    }

    #[test]
    fn test_empty_setup_video_counts_as_absent() {
        let dataset = dataset();
        let acura = dataset.find_by_name("Acura ILX 2016-19").unwrap();
        assert!(acura.has_video());
        assert!(!acura.has_setup_video());
    }
}

// ============================================================================
// Query Tests
// ============================================================================

mod query_tests {
    use super::*;

    #[test]
    fn test_no_filters_returns_everything() {
        let dataset = dataset();
        let all = names(&dataset, &FilterState::new(), &SortConfig::default());
        assert_eq!(all.len(), dataset.len());
        assert_eq!(all[0], "Acura ILX 2016-19");
    }

    #[test]
    fn test_filters_are_conjunctive() {
        let dataset = dataset();
        let filters = FilterState::new()
            .with_make("Toyota")
            .with_support(SupportType::Upstream);
        assert_eq!(
            names(&dataset, &filters, &SortConfig::default()),
            vec!["Toyota RAV4 2019-21"]
        );
    }

    #[test]
    fn test_model_filter_narrows_make() {
        let dataset = dataset();
        let filters = FilterState::new().with_make("Toyota").with_model("Prius");
        assert_eq!(
            names(&dataset, &filters, &SortConfig::default()),
            vec!["Toyota Prius 2016"]
        );
        let filters = FilterState::new().with_make("Honda").with_model("Prius");
        assert!(names(&dataset, &filters, &SortConfig::default()).is_empty());
    }

    #[test]
    fn test_year_filter_matches_any_covered_year() {
        let dataset = dataset();
        let filters = FilterState::new().with_year("2021");
        let found = names(&dataset, &filters, &SortConfig::default());
        assert!(found.contains(&"Toyota RAV4 2019-21".to_string()));
        assert!(found.contains(&"Škoda Kodiaq 2017-23".to_string()));
        assert!(!found.contains(&"Toyota Prius 2016".to_string()));
    }

    #[test]
    fn test_make_relevance_beats_sort_order() {
        let dataset = dataset();
        let filters = FilterState::new().with_query("hon");
        let sort = SortConfig::new(SortField::Make, SortOrder::Desc);
        let found = names(&dataset, &filters, &sort);
        assert_eq!(found, vec!["Honda Civic 2022", "Acura ILX 2016-19"]);
    }

    #[test]
    fn test_search_ignores_diacritics_and_case() {
        let dataset = dataset();
        let filters = FilterState::new().with_query("SKODA kodiaq");
        assert_eq!(
            names(&dataset, &filters, &SortConfig::default()),
            vec!["Škoda Kodiaq 2017-23"]
        );
    }

    #[test]
    fn test_every_token_must_match() {
        let dataset = dataset();
        let filters = FilterState::new().with_query("toyota 2016");
        assert_eq!(
            names(&dataset, &filters, &SortConfig::default()),
            vec!["Toyota Prius 2016"]
        );
        let filters = FilterState::new().with_query("toyota tesla");
        assert!(names(&dataset, &filters, &SortConfig::default()).is_empty());
    }

    #[test]
    fn test_presence_no_includes_empty_strings() {
        let dataset = dataset();
        let filters =
            FilterState::new().with_presence(FilterKey::SetupVideo, PresenceFilter::No);
        let found = names(&dataset, &filters, &SortConfig::default());
        assert!(found.contains(&"Acura ILX 2016-19".to_string()));
        assert!(!found.contains(&"Honda Civic 2022".to_string()));
        assert!(!found.contains(&"Toyota RAV4 2019-21".to_string()));
    }

    #[test]
    fn test_sort_by_year_descending() {
        let dataset = dataset();
        let sort = SortConfig::new(SortField::Year, SortOrder::Desc);
        let found = names(&dataset, &FilterState::new(), &sort);
        assert_eq!(found[0], "Tesla Model 3 2023");
        let mut oldest = found[found.len() - 2..].to_vec();
        oldest.sort();
        assert_eq!(oldest, vec!["Acura ILX 2016-19", "Toyota Prius 2016"]);
    }

    #[test]
    fn test_facet_options() {
        let options = FacetOptions::from_dataset(&dataset());
        assert_eq!(options.makes.first().map(String::as_str), Some("Acura"));
        assert!(options.years.contains(&"2020".to_string()));
        // "2022-24" contributes its last year too
        assert_eq!(options.years.last().map(String::as_str), Some("2024"));
        assert_eq!(options.models_for(Some("Toyota")), ["Prius", "RAV4"]);
        assert_eq!(options.support_types, SupportType::ALL.to_vec());
    }

    #[test]
    fn test_facet_options_snapshot() {
        let options = FacetOptions::from_dataset(&dataset());
        insta::assert_json_snapshot!("facet_options", options);
    }
}

// ============================================================================
// Comparison Tests
// ============================================================================

mod compare_tests {
    use super::*;

    #[test]
    fn test_slug_round_trip_into_comparison() {
        let dataset = dataset();
        let mut selection = SelectionSet::new();
        selection.toggle("Honda Civic 2022");
        selection.toggle("Toyota RAV4 2019-21");
        let cars = selection.to_cars_param();
        assert_eq!(cars, "honda-civic-2022,toyota-rav4-2019-21");

        let records = resolve_cars_param(&dataset, &cars);
        let resolved: Vec<&str> = records.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(resolved, vec!["Honda Civic 2022", "Toyota RAV4 2019-21"]);
    }

    #[test]
    fn test_unknown_slugs_are_dropped() {
        let dataset = dataset();
        let records = resolve_cars_param(&dataset, "honda-civic-2022,not-a-car,toyota-prius-2016");
        assert_eq!(records.len(), 2);
    }

    #[test]
    fn test_selection_is_bounded() {
        let dataset = dataset();
        let mut selection = SelectionSet::new();
        for record in dataset.iter().take(MAX_SELECTED) {
            assert_eq!(selection.toggle(&record.name), ToggleOutcome::Added);
        }
        let seventh = &dataset.records()[MAX_SELECTED].name;
        assert_eq!(selection.toggle(seventh), ToggleOutcome::Full);
        assert_eq!(selection.len(), MAX_SELECTED);
    }

    #[test]
    fn test_comparison_rows_flag_differences() {
        let dataset = dataset();
        let records = resolve_cars_param(&dataset, "honda-civic-2022,toyota-prius-2016");
        let ComparisonView::Ready(table) = ComparisonView::from_records(records) else {
            panic!("two vehicles should be comparable");
        };
        let wheelbase = table.rows().find(|r| r.spec_id == "wheelbase").unwrap();
        assert!(!wheelbase.differs());
        let ratio = table.rows().find(|r| r.spec_id == "steer-ratio").unwrap();
        assert!(ratio.differs());
    }

    #[test]
    fn test_single_vehicle_is_not_comparable() {
        let dataset = dataset();
        let records = resolve_cars_param(&dataset, "honda-civic-2022");
        assert!(matches!(
            ComparisonView::from_records(records),
            ComparisonView::NotEnoughSelected { selected: 1 }
        ));
    }
}

// ============================================================================
// Detail Tests
// ============================================================================

mod detail_tests {
    use super::*;

    #[test]
    fn test_detail_resolves_slug() {
        let dataset = dataset();
        let slug = slugify("Honda Civic 2022");
        assert!(matches!(
            DetailLookup::resolve(&dataset, &slug),
            DetailLookup::Found(r) if r.name == "Honda Civic 2022"
        ));
    }

    #[test]
    fn test_detail_not_found_suggests() {
        let dataset = dataset();
        match DetailLookup::resolve(&dataset, "honda-civic-2023") {
            DetailLookup::NotFound { slug, suggestion } => {
                assert_eq!(slug, "honda-civic-2023");
                assert_eq!(suggestion, Some("Honda Civic 2022"));
            }
            DetailLookup::Found(_) => panic!("unknown slug should not resolve"),
        }
    }
}

// ============================================================================
// Diff Tests
// ============================================================================

mod diff_tests {
    use super::*;

    #[test]
    fn test_diff_fixture_snapshots() {
        let diff = diff_datasets(&load("vehicles.json"), &load("vehicles_new.json"));
        assert!(diff.has_changes());
        assert_eq!(diff.added, vec!["Kia EV6 2023"]);
        assert_eq!(diff.removed, vec!["Ford Focus 2018"]);
        assert_eq!(diff.summary.changed, 2);
        assert_eq!(
            diff.by_platform.get("HONDA_CIVIC_2022"),
            Some(&vec!["Honda Civic 2022".to_string()])
        );
        assert!(diff
            .spec_change_summary()
            .starts_with("Spec changes in 2 car(s) across 2 platform(s):"));
    }

    #[test]
    fn test_diff_identical_snapshots() {
        let diff = diff_datasets(&dataset(), &dataset());
        assert!(!diff.has_changes());
        assert!(diff.spec_change_summary().is_empty());
    }
}
