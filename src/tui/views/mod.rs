//! Screen renderers for the catalog browser.

mod compare;
mod detail;
mod list;
mod overlays;

pub use compare::render_compare;
pub use detail::render_detail;
pub use list::render_catalog;
pub use overlays::{render_filter_drawer, render_help, render_quick_nav, render_support_info};
