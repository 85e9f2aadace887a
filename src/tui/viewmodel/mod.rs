//! View-model layer for the catalog TUI.
//!
//! Small state machines that the app embeds and the renderers read:
//!
//! - [`OverlayState`] - which overlay or drawer is open
//! - [`StatusMessage`] - temporary status bar message
//! - [`SearchInput`] - the live search box
//! - [`FilterRow`] / [`CycleFilter`] - filter drawer rows and value cycling

mod filter;
mod overlay;
mod search;
mod status;

pub use filter::{cycle_choice, CycleFilter, FilterRow};
pub use overlay::{OverlayKind, OverlayState};
pub use search::SearchInput;
pub use status::{StatusLevel, StatusMessage};
