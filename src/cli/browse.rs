//! Browser launch handler.
//!
//! Implements the `tui` subcommand, and the interactive fallback that
//! `list`, `show` and `compare` take when stdout is a terminal.

use crate::catalog::FilterState;
use crate::config::AppConfig;
use crate::pipeline::{exit_codes, load_from_config, LoadedDataset};
use crate::tui::{run_catalog_tui, CatalogApp};
use anyhow::Result;

/// Where the browser opens.
#[derive(Debug, Clone, Default)]
pub struct TuiLaunch {
    /// Filters applied to the initial list
    pub filters: FilterState,
    /// Vehicle name or slug to open on its detail page
    pub detail: Option<String>,
    /// Vehicles to open side by side, in column order
    pub compare: Vec<String>,
}

/// Load the dataset and run the browser.
pub fn run_browse(config: &AppConfig, launch: TuiLaunch, quiet: bool) -> Result<i32> {
    let loaded = load_from_config(config, quiet)?;
    run_tui(config, loaded, launch)
}

/// Run the browser over an already loaded dataset.
pub fn run_tui(config: &AppConfig, loaded: LoadedDataset, launch: TuiLaunch) -> Result<i32> {
    let mut app = build_app(config, loaded, launch);
    run_catalog_tui(&mut app, &config.tui.theme)?;
    Ok(exit_codes::SUCCESS)
}

fn build_app(config: &AppConfig, loaded: LoadedDataset, launch: TuiLaunch) -> CatalogApp {
    tracing::info!(
        "Opening browser over {} vehicles from {}",
        loaded.dataset.len(),
        loaded.display_path()
    );
    let mut app = CatalogApp::new(loaded.dataset, config);
    app.set_filters(launch.filters);
    if launch.compare.len() > 1 {
        app.open_comparison(launch.compare);
    } else if let Some(ident) = launch.detail {
        app.open_detail(&ident);
    }
    app
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Dataset;
    use crate::tui::CatalogView;
    use std::path::PathBuf;

    fn loaded() -> LoadedDataset {
        LoadedDataset {
            dataset: Dataset::from_json_str(
                r#"[{"name": "Kia EV6 2023", "make": "Kia"}, {"name": "Hyundai Ioniq 5 2022", "make": "Hyundai"}]"#,
            )
            .unwrap(),
            path: PathBuf::from("vehicles.json"),
            reports_path: None,
        }
    }

    #[test]
    fn test_launch_defaults_to_list() {
        let app = build_app(&AppConfig::default(), loaded(), TuiLaunch::default());
        assert_eq!(app.view(), CatalogView::List);
    }

    #[test]
    fn test_launch_detail_and_compare() {
        let launch = TuiLaunch {
            detail: Some("kia-ev6-2023".to_string()),
            ..Default::default()
        };
        let app = build_app(&AppConfig::default(), loaded(), launch);
        assert_eq!(app.view(), CatalogView::Detail);
        assert_eq!(app.detail_record().map(|r| r.make.as_str()), Some("Kia"));

        let launch = TuiLaunch {
            compare: vec!["Kia EV6 2023".to_string(), "Hyundai Ioniq 5 2022".to_string()],
            ..Default::default()
        };
        let app = build_app(&AppConfig::default(), loaded(), launch);
        assert_eq!(app.view(), CatalogView::Compare);
    }

    #[test]
    fn test_launch_applies_filters() {
        let launch = TuiLaunch {
            filters: FilterState::new().with_make("Kia"),
            ..Default::default()
        };
        let app = build_app(&AppConfig::default(), loaded(), launch);
        assert_eq!(app.catalog.visible_count(), 1);
    }
}
