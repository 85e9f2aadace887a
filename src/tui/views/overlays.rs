//! Help popup, filter drawer, support level explainer and quick navigation.

use crate::detail::quick_nav_groups;
use crate::tui::app::CatalogApp;
use crate::tui::theme::{colors, count_badge, support_badge, FooterHints, Styles};
use crate::tui::viewmodel::FilterRow;
use crate::tui::widgets::{drawer_rect, render_popup, wrap_text};
use crate::utils::pad_to_width;
use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Clear, Paragraph},
};

const FILTER_DRAWER_WIDTH: u16 = 44;
const QUICK_NAV_WIDTH: u16 = 36;

fn hint_lines(title: &str, hints: &[(&str, &str)]) -> Vec<Line<'static>> {
    let mut lines = vec![Line::styled(title.to_string(), Styles::section_title())];
    for (key, desc) in hints {
        lines.push(Line::from(vec![
            Span::styled(format!("  {}", pad_to_width(key, 10)), Styles::shortcut_key()),
            Span::styled(desc.to_string(), Styles::text()),
        ]));
    }
    lines.push(Line::from(""));
    lines
}

pub fn render_help(frame: &mut Frame, area: Rect) {
    let mut lines = hint_lines("Catalog", &FooterHints::for_list(false));
    lines.extend(hint_lines(
        "Compare mode",
        &[
            ("Space", "select or unselect the car"),
            ("c", "compare the selection"),
            ("x / Esc", "leave compare mode"),
            ("C", "clear all filters"),
        ],
    ));
    lines.extend(hint_lines("Details", &FooterHints::for_detail()));
    lines.extend(hint_lines("Comparison", &FooterHints::for_compare()));
    lines.extend(hint_lines(
        "Mouse",
        &[
            ("click", "select, click again to open"),
            ("hover", "highlight a comparison cell"),
            ("scroll", "move the cursor"),
        ],
    ));
    render_popup(frame, area, "Help", lines, 70, 85, colors().accent);
}

pub fn render_filter_drawer(frame: &mut Frame, area: Rect, app: &CatalogApp) {
    let scheme = colors();
    let drawer = drawer_rect(FILTER_DRAWER_WIDTH, area);
    frame.render_widget(Clear, drawer);

    let mut lines = vec![
        Line::from(vec![
            count_badge(app.catalog.visible_count()),
            Span::styled(" matching vehicles", Styles::text_muted()),
        ]),
        Line::from(""),
    ];
    for (i, row) in FilterRow::ALL.iter().enumerate() {
        let focused = i == app.filter_drawer.selected;
        let value = row.value(app.filters());
        let active = value != "Any";
        let marker = if focused { "▶ " } else { "  " };
        let label_style = if focused {
            Styles::selected()
        } else {
            Styles::label()
        };
        let value_style = if active {
            Style::default()
                .fg(scheme.badge_fg_dark)
                .bg(scheme.accent)
                .bold()
        } else {
            Styles::text_muted()
        };
        lines.push(Line::from(vec![
            Span::styled(marker, Style::default().fg(scheme.accent)),
            Span::styled(pad_to_width(row.label(), 14), label_style),
            Span::styled(format!("◀ {value} ▶"), value_style),
        ]));
    }
    lines.push(Line::from(""));
    for (key, desc) in [
        ("↑↓", "choose filter"),
        ("←→", "change value"),
        ("Del", "reset filter"),
        ("C", "clear all"),
        ("Esc", "close"),
    ] {
        lines.push(Line::from(vec![
            Span::styled(format!("[{key}] "), Styles::shortcut_key()),
            Span::styled(desc, Styles::shortcut_desc()),
        ]));
    }

    frame.render_widget(
        Paragraph::new(lines).block(
            Block::default()
                .title(" Filters ")
                .title_style(Styles::header_title())
                .borders(Borders::ALL)
                .border_style(Styles::border_focused())
                .style(Style::default().bg(scheme.background_alt)),
        ),
        drawer,
    );
}

pub fn render_support_info(frame: &mut Frame, area: Rect, app: &CatalogApp) {
    let scheme = colors();
    let support = app.support_info.current();
    let width = usize::from(area.width.saturating_mul(7) / 10).saturating_sub(4);

    let mut lines = vec![Line::from(support_badge(&support)), Line::from("")];
    if let Some(info) = support.info() {
        for paragraph in info.paragraphs {
            lines.extend(wrap_text(paragraph, width).into_iter().map(|l| Line::styled(l, Styles::text())));
            lines.push(Line::from(""));
        }
        if let Some(reference) = info.reference {
            lines.push(Line::from(vec![
                Span::styled(format!("{}: ", reference.text), Styles::label()),
                Span::styled(reference.url, Style::default().fg(scheme.secondary).underlined()),
            ]));
            lines.push(Line::from(""));
        }
        if !info.expandable.is_empty() {
            let arrow = if app.support_info.expanded { "▼" } else { "▶" };
            lines.push(Line::styled(
                format!("{arrow} More details [Enter]"),
                Styles::shortcut_key(),
            ));
            if app.support_info.expanded {
                for section in info.expandable {
                    if !section.title.is_empty() {
                        lines.push(Line::styled(section.title, Styles::section_title()));
                    }
                    for paragraph in section.paragraphs {
                        lines.extend(
                            wrap_text(paragraph, width)
                                .into_iter()
                                .map(|l| Line::styled(l, Styles::text())),
                        );
                    }
                    if let Some(link) = section.link {
                        lines.push(Line::styled(
                            format!("{}: {}", link.text, link.url),
                            Style::default().fg(scheme.secondary),
                        ));
                    }
                    lines.push(Line::from(""));
                }
            }
        }
    }
    lines.push(Line::styled("[←→] other levels  [Esc] close", Styles::text_muted()));

    render_popup(
        frame,
        area,
        "Support Levels",
        lines,
        70,
        80,
        scheme.support_color(&support),
    );
}

pub fn render_quick_nav(frame: &mut Frame, area: Rect, app: &CatalogApp) {
    let scheme = colors();
    let drawer = drawer_rect(QUICK_NAV_WIDTH, area);
    frame.render_widget(Clear, drawer);

    let mut lines = Vec::new();
    let mut entry_index = 0;
    let mut selected_line = 0;
    for (category, entries) in quick_nav_groups() {
        lines.push(Line::styled(category.label(), Styles::section_title()));
        for entry in entries {
            let focused = entry_index == app.quick_nav.selected;
            if focused {
                selected_line = lines.len();
            }
            let style = if focused { Styles::selected() } else { Styles::text() };
            let marker = if focused { "▶ " } else { "  " };
            lines.push(Line::from(vec![
                Span::styled(marker, Style::default().fg(scheme.accent)),
                Span::styled(entry.label, style),
            ]));
            entry_index += 1;
        }
    }

    let height = usize::from(drawer.height.saturating_sub(2)).max(1);
    let scroll = selected_line.saturating_sub(height / 2);
    let title = if app.overlay.is_closing() {
        " Jumping… "
    } else {
        " Quick Navigation "
    };

    frame.render_widget(
        Paragraph::new(lines)
            .scroll((u16::try_from(scroll).unwrap_or(u16::MAX), 0))
            .block(
                Block::default()
                    .title(title)
                    .title_style(Styles::header_title())
                    .borders(Borders::ALL)
                    .border_style(Styles::border_focused())
                    .style(Style::default().bg(scheme.background_alt)),
            ),
        drawer,
    );
}
