//! Reusable widgets for the catalog TUI.

use crate::catalog::ActiveFilter;
use crate::tui::theme::{colors, filter_badge, Styles};
use crate::utils::{highlight_segments, TextSegment};
use unicode_width::UnicodeWidthStr;
use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
};

/// Render an empty state placeholder with a heading and an optional hint.
pub fn render_empty_state(frame: &mut Frame, area: Rect, message: &str, hint: Option<&str>) {
    let scheme = colors();
    let mut lines = vec![
        Line::from(""),
        Line::styled(message.to_string(), Style::default().fg(scheme.text).bold()),
    ];

    if let Some(h) = hint {
        lines.push(Line::from(""));
        lines.push(Line::styled(
            h.to_string(),
            Style::default().fg(scheme.text_muted).italic(),
        ));
    }

    let paragraph = Paragraph::new(lines)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(scheme.border)),
        )
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });

    frame.render_widget(paragraph, area);
}

/// Render the "nothing matches" state listing what is filtering.
pub fn render_no_results_state(frame: &mut Frame, area: Rect, chips: &[ActiveFilter]) {
    let scheme = colors();
    let mut lines = vec![
        Line::from(""),
        Line::styled("No vehicles found", Style::default().fg(scheme.text).bold()),
        Line::from(""),
    ];
    for chip in chips {
        lines.push(Line::from(filter_badge(chip.label, &chip.value)));
    }
    lines.push(Line::from(""));
    lines.push(Line::styled(
        "Press [f] to change filters or [C] to clear them",
        Style::default().fg(scheme.text_muted),
    ));

    let paragraph = Paragraph::new(lines)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(scheme.border)),
        )
        .alignment(Alignment::Center);

    frame.render_widget(paragraph, area);
}

/// Render a popup overlay.
pub fn render_popup(
    frame: &mut Frame,
    area: Rect,
    title: &str,
    content: Vec<Line<'static>>,
    percent_x: u16,
    percent_y: u16,
    border_color: Color,
) {
    let popup_area = centered_rect(percent_x, percent_y, area);
    frame.render_widget(Clear, popup_area);

    let popup = Paragraph::new(content)
        .block(
            Block::default()
                .title(format!(" {title} "))
                .title_style(Style::default().fg(border_color).bold())
                .borders(Borders::ALL)
                .border_style(Style::default().fg(border_color)),
        )
        .wrap(Wrap { trim: false });

    frame.render_widget(popup, popup_area);
}

/// Helper function to create a centered rectangle.
pub fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}

/// A right-hand drawer covering `width` columns of `area`.
pub fn drawer_rect(width: u16, area: Rect) -> Rect {
    let width = width.min(area.width);
    Rect {
        x: area.x + area.width - width,
        y: area.y,
        width,
        height: area.height,
    }
}

/// Spans for `text` with the parts matching `query` highlighted.
pub fn highlighted_spans(
    text: &str,
    query: &str,
    year_list: &[String],
    base: Style,
) -> Vec<Span<'static>> {
    highlight_segments(text, query, year_list)
        .into_iter()
        .map(|TextSegment { text, highlighted }| {
            if highlighted {
                Span::styled(text, Styles::search_match())
            } else {
                Span::styled(text, base)
            }
        })
        .collect()
}

/// Render the active filter chips on one line.
pub fn filter_chip_spans(chips: &[ActiveFilter]) -> Vec<Span<'static>> {
    let mut spans = Vec::new();
    for (i, chip) in chips.iter().enumerate() {
        if i > 0 {
            spans.push(Span::raw("  "));
        }
        spans.extend(filter_badge(chip.label, &chip.value));
    }
    spans
}

/// Greedy word wrap by display width. Words wider than `width` get a line
/// of their own.
pub fn wrap_text(text: &str, width: usize) -> Vec<String> {
    let width = width.max(1);
    let mut lines = Vec::new();
    let mut current = String::new();
    let mut current_width = 0;
    for word in text.split_whitespace() {
        let word_width = UnicodeWidthStr::width(word);
        if current_width > 0 && current_width + 1 + word_width > width {
            lines.push(std::mem::take(&mut current));
            current_width = 0;
        }
        if current_width > 0 {
            current.push(' ');
            current_width += 1;
        }
        current.push_str(word);
        current_width += word_width;
    }
    if !current.is_empty() {
        lines.push(current);
    }
    lines
}

/// Minimum terminal size for the full layout.
pub const MIN_WIDTH: u16 = 80;
pub const MIN_HEIGHT: u16 = 24;

/// Check if terminal meets minimum size requirements.
pub fn check_terminal_size(width: u16, height: u16) -> Result<(), (u16, u16)> {
    if width < MIN_WIDTH || height < MIN_HEIGHT {
        Err((MIN_WIDTH, MIN_HEIGHT))
    } else {
        Ok(())
    }
}

/// Render a warning when the terminal is too small.
pub fn render_size_warning(
    frame: &mut Frame,
    area: Rect,
    required_width: u16,
    required_height: u16,
) {
    let scheme = colors();
    let lines = vec![
        Line::styled("Terminal too small", Style::default().fg(scheme.warning).bold()),
        Line::from(""),
        Line::from(vec![
            Span::raw("Current: "),
            Span::styled(
                format!("{}x{}", area.width, area.height),
                Style::default().fg(scheme.text),
            ),
        ]),
        Line::from(vec![
            Span::raw("Required: "),
            Span::styled(
                format!("{required_width}x{required_height}"),
                Style::default().fg(scheme.accent),
            ),
        ]),
        Line::from(""),
        Line::styled(
            "Please resize your terminal",
            Style::default().fg(scheme.text_muted),
        ),
    ];

    let paragraph = Paragraph::new(lines)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(scheme.warning)),
        )
        .alignment(Alignment::Center);

    frame.render_widget(paragraph, area);
}
