//! Named constants for TUI layout, timing and navigation.

/// Number of items to scroll per page-up/page-down action.
pub(crate) const PAGE_SIZE: usize = 10;

/// Event loop tick rate in milliseconds.
pub(crate) const TICK_RATE_MS: u64 = 100;

/// Ticks a status message stays visible (about four seconds).
pub(crate) const STATUS_TICKS: u16 = 40;

/// Ticks between closing the quick-nav drawer and starting the jump.
pub(crate) const DRAWER_CLOSE_TICKS: u16 = 3;

/// Width of one card in the grid view, borders included.
pub(crate) const GRID_CARD_WIDTH: u16 = 38;

/// Height of one card in the grid view, borders included.
pub(crate) const GRID_CARD_HEIGHT: u16 = 6;

/// Width of the spec label column in the comparison table.
pub(crate) const COMPARE_LABEL_WIDTH: u16 = 26;

/// Natural width of one vehicle column in the comparison table.
pub(crate) const COMPARE_COLUMN_WIDTH: u16 = 24;

/// Narrowest a vehicle column gets when the table is zoomed out.
pub(crate) const COMPARE_MIN_COLUMN_WIDTH: u16 = 8;
