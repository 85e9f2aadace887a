//! Centralized theme and color scheme for the catalog TUI.
//!
//! All views read colors through [`colors`], so switching the theme at
//! runtime restyles everything on the next frame.

use crate::catalog::ResultTone;
use crate::compare::{CardStyle, CellStyle, RowStyle};
use crate::model::SupportType;
use ratatui::prelude::*;
use std::sync::{PoisonError, RwLock};

/// Color scheme for the TUI application.
/// Provides semantic colors for different UI elements.
#[derive(Debug, Clone, Copy)]
pub struct ColorScheme {
    // Support level colors
    pub upstream: Color,
    pub under_review: Color,
    pub community: Color,
    pub dashcam: Color,
    pub not_compatible: Color,
    pub unknown_support: Color,

    // UI element colors
    pub primary: Color,
    pub secondary: Color,
    pub accent: Color,
    pub muted: Color,
    pub border: Color,
    pub border_focused: Color,
    pub background: Color,
    pub background_alt: Color,
    pub text: Color,
    pub text_muted: Color,
    pub selection: Color,
    pub highlight: Color,

    // Status colors
    pub success: Color,
    pub warning: Color,
    pub error: Color,

    // Badge foreground colors (for text on colored backgrounds)
    pub badge_fg_dark: Color,
    pub badge_fg_light: Color,

    // Comparison table
    pub cell_selected_bg: Color,
    pub column_selected_bg: Color,
    pub column_hovered_bg: Color,
    pub row_selected_bg: Color,
    pub row_hovered_bg: Color,
    pub stripe_bg: Color,
    pub search_highlight_bg: Color,
}

impl Default for ColorScheme {
    fn default() -> Self {
        Self::dark()
    }
}

impl ColorScheme {
    /// Dark theme (default)
    pub const fn dark() -> Self {
        Self {
            upstream: Color::Green,
            under_review: Color::Blue,
            community: Color::Magenta,
            dashcam: Color::Yellow,
            not_compatible: Color::Red,
            unknown_support: Color::DarkGray,

            primary: Color::Cyan,
            secondary: Color::Blue,
            accent: Color::Yellow,
            muted: Color::DarkGray,
            border: Color::DarkGray,
            border_focused: Color::Cyan,
            background: Color::Reset,
            background_alt: Color::Rgb(30, 30, 40),
            text: Color::White,
            text_muted: Color::Gray,
            selection: Color::DarkGray,
            highlight: Color::Yellow,

            success: Color::Green,
            warning: Color::Yellow,
            error: Color::Red,

            badge_fg_dark: Color::Black,
            badge_fg_light: Color::White,

            cell_selected_bg: Color::Rgb(110, 90, 20),
            column_selected_bg: Color::Rgb(60, 60, 90),
            column_hovered_bg: Color::Rgb(45, 45, 60),
            row_selected_bg: Color::Rgb(70, 70, 100),
            row_hovered_bg: Color::Rgb(50, 50, 65),
            stripe_bg: Color::Rgb(28, 28, 34),
            search_highlight_bg: Color::Rgb(100, 80, 0),
        }
    }

    /// Light theme
    pub const fn light() -> Self {
        Self {
            upstream: Color::Rgb(0, 128, 0),
            under_review: Color::Rgb(0, 80, 200),
            community: Color::Rgb(128, 0, 128),
            dashcam: Color::Rgb(180, 140, 0),
            not_compatible: Color::Rgb(200, 0, 0),
            unknown_support: Color::Rgb(100, 100, 100),

            primary: Color::Rgb(0, 100, 150),
            secondary: Color::Rgb(0, 0, 150),
            accent: Color::Rgb(180, 140, 0),
            muted: Color::Rgb(150, 150, 150),
            border: Color::Rgb(180, 180, 180),
            border_focused: Color::Rgb(0, 100, 150),
            background: Color::Rgb(255, 255, 255),
            background_alt: Color::Rgb(240, 240, 245),
            text: Color::Rgb(30, 30, 30),
            text_muted: Color::Rgb(100, 100, 100),
            selection: Color::Rgb(200, 220, 240),
            highlight: Color::Rgb(180, 140, 0),

            success: Color::Rgb(0, 128, 0),
            warning: Color::Rgb(180, 140, 0),
            error: Color::Rgb(200, 0, 0),

            badge_fg_dark: Color::Rgb(30, 30, 30),
            badge_fg_light: Color::White,

            cell_selected_bg: Color::Rgb(255, 225, 140),
            column_selected_bg: Color::Rgb(215, 225, 250),
            column_hovered_bg: Color::Rgb(232, 238, 250),
            row_selected_bg: Color::Rgb(200, 215, 245),
            row_hovered_bg: Color::Rgb(228, 234, 248),
            stripe_bg: Color::Rgb(246, 246, 250),
            search_highlight_bg: Color::Rgb(255, 230, 150),
        }
    }

    /// High contrast theme (accessibility)
    pub const fn high_contrast() -> Self {
        Self {
            upstream: Color::LightGreen,
            under_review: Color::LightBlue,
            community: Color::LightMagenta,
            dashcam: Color::LightYellow,
            not_compatible: Color::LightRed,
            unknown_support: Color::Gray,

            primary: Color::LightCyan,
            secondary: Color::LightBlue,
            accent: Color::LightYellow,
            muted: Color::Gray,
            border: Color::White,
            border_focused: Color::LightCyan,
            background: Color::Black,
            background_alt: Color::Rgb(20, 20, 20),
            text: Color::White,
            text_muted: Color::Gray,
            selection: Color::White,
            highlight: Color::LightYellow,

            success: Color::LightGreen,
            warning: Color::LightYellow,
            error: Color::LightRed,

            badge_fg_dark: Color::Black,
            badge_fg_light: Color::White,

            cell_selected_bg: Color::Rgb(140, 110, 0),
            column_selected_bg: Color::Rgb(50, 50, 110),
            column_hovered_bg: Color::Rgb(40, 40, 70),
            row_selected_bg: Color::Rgb(60, 60, 130),
            row_hovered_bg: Color::Rgb(45, 45, 80),
            stripe_bg: Color::Rgb(15, 15, 15),
            search_highlight_bg: Color::Rgb(120, 100, 0),
        }
    }

    /// Get color for a support level. Unknown labels fall back to the muted tone.
    pub fn support_color(&self, support: &SupportType) -> Color {
        match support {
            SupportType::Upstream => self.upstream,
            SupportType::UnderReview => self.under_review,
            SupportType::Community => self.community,
            SupportType::DashcamMode => self.dashcam,
            SupportType::NotCompatible => self.not_compatible,
            SupportType::Unknown | SupportType::Other(_) => self.unknown_support,
        }
    }

    /// Foreground for text on a support badge
    pub fn support_badge_fg(&self, support: &SupportType) -> Color {
        match support {
            SupportType::UnderReview | SupportType::Community | SupportType::NotCompatible => {
                self.badge_fg_light
            }
            _ => self.badge_fg_dark,
        }
    }

    /// Color for the result count
    pub const fn tone_color(&self, tone: ResultTone) -> Color {
        match tone {
            ResultTone::None => self.error,
            ResultTone::Few => self.warning,
            ResultTone::Many => self.success,
        }
    }

    /// Background of a comparison value cell. `None` keeps the row background.
    pub const fn cell_bg(&self, style: CellStyle) -> Option<Color> {
        match style {
            CellStyle::Selected => Some(self.cell_selected_bg),
            CellStyle::ColumnSelected => Some(self.column_selected_bg),
            CellStyle::ColumnHovered => Some(self.column_hovered_bg),
            CellStyle::Default => None,
        }
    }

    /// Background of a comparison row
    pub const fn row_bg(&self, style: RowStyle) -> Color {
        match style {
            RowStyle::Selected => self.row_selected_bg,
            RowStyle::Hovered => self.row_hovered_bg,
            RowStyle::Even => self.background,
            RowStyle::Odd => self.stripe_bg,
        }
    }

    /// Border color of a column header card
    pub const fn card_border(&self, style: CardStyle) -> Color {
        match style {
            CardStyle::Selected => self.accent,
            CardStyle::Hovered => self.border_focused,
            CardStyle::Default => self.border,
        }
    }
}

/// Global theme instance (runtime switchable)
static THEME: RwLock<Theme> = RwLock::new(Theme::dark());

/// Theme configuration
#[derive(Debug, Clone)]
pub struct Theme {
    pub colors: ColorScheme,
    pub name: &'static str,
}

impl Default for Theme {
    fn default() -> Self {
        Self::dark()
    }
}

impl Theme {
    pub const fn dark() -> Self {
        Self {
            colors: ColorScheme::dark(),
            name: "dark",
        }
    }

    pub const fn light() -> Self {
        Self {
            colors: ColorScheme::light(),
            name: "light",
        }
    }

    pub const fn high_contrast() -> Self {
        Self {
            colors: ColorScheme::high_contrast(),
            name: "high-contrast",
        }
    }

    pub fn from_name(name: &str) -> Self {
        match name.to_lowercase().as_str() {
            "light" => Self::light(),
            "high-contrast" | "highcontrast" | "hc" => Self::high_contrast(),
            _ => Self::dark(),
        }
    }

    /// Get the next theme in the rotation
    pub fn next(&self) -> Self {
        match self.name {
            "dark" => Self::light(),
            "light" => Self::high_contrast(),
            _ => Self::dark(),
        }
    }
}

/// Get the current theme name
pub fn current_theme_name() -> &'static str {
    THEME.read().unwrap_or_else(PoisonError::into_inner).name
}

/// Set the current theme
pub fn set_theme(theme: Theme) {
    *THEME.write().unwrap_or_else(PoisonError::into_inner) = theme;
}

/// Toggle to the next theme in rotation (dark -> light -> high-contrast -> dark)
pub fn toggle_theme() -> &'static str {
    let mut theme = THEME.write().unwrap_or_else(PoisonError::into_inner);
    *theme = theme.next();
    theme.name
}

/// Convenience function to get current colors
pub fn colors() -> ColorScheme {
    THEME.read().unwrap_or_else(PoisonError::into_inner).colors
}

// ============================================================================
// Style Helpers
// ============================================================================

/// Common style presets for consistent UI elements
pub struct Styles;

impl Styles {
    /// Header title style
    pub fn header_title() -> Style {
        Style::default().fg(colors().primary).bold()
    }

    /// Section title style
    pub fn section_title() -> Style {
        Style::default().fg(colors().primary).bold()
    }

    pub fn text() -> Style {
        Style::default().fg(colors().text)
    }

    pub fn text_muted() -> Style {
        Style::default().fg(colors().text_muted)
    }

    /// Label text style
    pub fn label() -> Style {
        Style::default().fg(colors().muted)
    }

    /// Value text style (for data values)
    pub fn value() -> Style {
        Style::default().fg(colors().text).bold()
    }

    pub fn highlight() -> Style {
        Style::default().fg(colors().highlight).bold()
    }

    /// Search match inside a name or make
    pub fn search_match() -> Style {
        Style::default()
            .bg(colors().search_highlight_bg)
            .fg(colors().text)
            .bold()
    }

    /// Selection style (for selected items)
    pub fn selected() -> Style {
        Style::default()
            .bg(colors().selection)
            .fg(colors().text)
            .bold()
    }

    pub fn border() -> Style {
        Style::default().fg(colors().border)
    }

    pub fn border_focused() -> Style {
        Style::default().fg(colors().border_focused)
    }

    /// Status bar background style
    pub fn status_bar() -> Style {
        Style::default().bg(colors().background_alt)
    }

    /// Keyboard shortcut style
    pub fn shortcut_key() -> Style {
        Style::default().fg(colors().accent)
    }

    /// Shortcut description style
    pub fn shortcut_desc() -> Style {
        Style::default().fg(colors().text_muted)
    }

    pub fn success() -> Style {
        Style::default().fg(colors().success)
    }

    pub fn warning() -> Style {
        Style::default().fg(colors().warning)
    }

    pub fn error() -> Style {
        Style::default().fg(colors().error)
    }
}

// ============================================================================
// Badge Rendering Helpers
// ============================================================================

/// Render a support level badge
pub fn support_badge(support: &SupportType) -> Span<'static> {
    let scheme = colors();
    let label = if support.as_str().is_empty() {
        "Unknown"
    } else {
        support.as_str()
    };
    let style = Style::default()
        .fg(scheme.support_badge_fg(support))
        .bg(scheme.support_color(support));
    let style = if support.is_known() {
        style.bold()
    } else {
        style.dim()
    };
    Span::styled(format!(" {label} "), style)
}

/// Render a count badge colored by how many results there are
pub fn count_badge(count: usize) -> Span<'static> {
    let scheme = colors();
    Span::styled(
        format!(" {count} "),
        Style::default()
            .fg(scheme.badge_fg_dark)
            .bg(scheme.tone_color(ResultTone::for_count(count)))
            .bold(),
    )
}

/// Render an active filter chip
pub fn filter_badge(label: &str, value: &str) -> Vec<Span<'static>> {
    let scheme = colors();
    vec![
        Span::styled(format!("{label}: "), Style::default().fg(scheme.text_muted)),
        Span::styled(
            format!(" {value} "),
            Style::default()
                .fg(scheme.badge_fg_dark)
                .bg(scheme.accent)
                .bold(),
        ),
    ]
}

/// Render a mode indicator badge
pub fn mode_badge(mode: &str) -> Span<'static> {
    let scheme = colors();
    let color = match mode.to_lowercase().as_str() {
        "compare" => scheme.accent,
        "detail" => scheme.secondary,
        "grid" => scheme.success,
        _ => scheme.primary,
    };

    Span::styled(
        format!(" {} ", mode.to_uppercase()),
        Style::default().fg(scheme.badge_fg_dark).bg(color).bold(),
    )
}

// ============================================================================
// Footer Hints
// ============================================================================

/// View-specific footer hints
pub struct FooterHints;

impl FooterHints {
    /// Hints for the catalog list or grid
    pub fn for_list(compare_mode: bool) -> Vec<(&'static str, &'static str)> {
        let mut hints = Self::global();
        if compare_mode {
            hints.insert(0, ("Space", "select"));
            hints.insert(1, ("c", "compare selected"));
            hints.insert(2, ("x", "exit compare mode"));
        } else {
            hints.insert(0, ("Enter", "details"));
            hints.insert(1, ("x", "compare mode"));
        }
        hints.insert(2, ("f", "filters"));
        hints.insert(3, ("s/r", "sort/reverse"));
        hints.insert(4, ("g", "grid"));
        hints
    }

    /// Hints for a detail page
    pub fn for_detail() -> Vec<(&'static str, &'static str)> {
        let mut hints = Self::global();
        hints.insert(0, ("Esc", "back"));
        hints.insert(1, ("Enter", "toggle section"));
        hints.insert(2, ("a", "expand/collapse all"));
        hints.insert(3, ("n", "quick nav"));
        hints.insert(4, ("d", "describe"));
        hints
    }

    /// Hints for the comparison table
    pub fn for_compare() -> Vec<(&'static str, &'static str)> {
        let mut hints = Self::global();
        hints.insert(0, ("Esc", "back"));
        hints.insert(1, ("←→↑↓", "move"));
        hints.insert(2, ("Enter", "pin cell"));
        hints.insert(3, ("Del", "remove car"));
        hints.insert(4, ("z", "fit to screen"));
        hints.insert(5, ("D", "only differences"));
        hints
    }

    /// Global hints (always shown)
    pub fn global() -> Vec<(&'static str, &'static str)> {
        vec![
            ("/", "search"),
            ("i", "support info"),
            ("T", "theme"),
            ("?", "help"),
            ("q", "quit"),
        ]
    }
}

/// Render footer hints as spans
pub fn render_footer_hints(hints: &[(&str, &str)]) -> Vec<Span<'static>> {
    let mut spans = Vec::new();

    for (i, (key, desc)) in hints.iter().enumerate() {
        if i > 0 {
            spans.push(Span::raw(" "));
        }
        spans.push(Span::styled(format!("[{key}]"), Styles::shortcut_key()));
        spans.push(Span::styled(desc.to_string(), Styles::shortcut_desc()));
    }

    spans
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_theme_rotation() {
        assert_eq!(Theme::dark().next().name, "light");
        assert_eq!(Theme::light().next().name, "high-contrast");
        assert_eq!(Theme::high_contrast().next().name, "dark");
        assert_eq!(Theme::from_name("HC").name, "high-contrast");
        assert_eq!(Theme::from_name("unknown").name, "dark");
    }

    #[test]
    fn test_unknown_support_uses_muted_color() {
        let scheme = ColorScheme::dark();
        assert_eq!(
            scheme.support_color(&SupportType::Other("Beta".into())),
            scheme.unknown_support
        );
        assert_eq!(scheme.support_color(&SupportType::Upstream), scheme.upstream);
    }

    #[test]
    fn test_footer_hints_depend_on_mode() {
        let browse = FooterHints::for_list(false);
        let compare = FooterHints::for_list(true);
        assert!(browse.iter().any(|(_, d)| *d == "details"));
        assert!(compare.iter().any(|(_, d)| *d == "compare selected"));
        let spans = render_footer_hints(&[("q", "quit")]);
        assert_eq!(spans[0].content, "[q]");
    }
}
