//! Shared utilities.

mod format;
mod text;

pub use format::{
    format_boolean, format_enabled, format_speed, format_thousands, format_value, format_weight,
    pad_to_width, truncate_to_width, NOT_AVAILABLE,
};
pub use text::{highlight_segments, normalize, slugify, tokenize, TextSegment};
