//! Interactive catalog browser built on ratatui.
//!
//! One [`CatalogApp`] holds all state: the filtered list, the compare
//! selection, an open detail page or comparison, and the overlays. The
//! event loop feeds key, mouse and tick events into it and redraws after
//! each one.
//!
//! - [`app`]: state transitions
//! - `events`: key and mouse dispatch
//! - `views`: list, grid, detail, compare and overlay rendering
//! - [`viewmodel`]: overlay, status, search and filter drawer state

pub mod app;
pub(crate) mod constants;
mod events;
pub mod state;
pub mod theme;
mod ui;
pub mod viewmodel;
mod views;
pub(crate) mod widgets;

// Theme exports
pub use theme::{
    colors, current_theme_name, set_theme, toggle_theme, ColorScheme, FooterHints, Styles, Theme,
};

// Shared state exports
pub use state::{ListNavigation, ListState};

pub use app::{CatalogApp, CatalogView};
pub use events::Event;
pub use ui::run_catalog_tui;
