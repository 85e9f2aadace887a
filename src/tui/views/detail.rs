//! Detail page for one vehicle.

use crate::compare::spec_description;
use crate::detail::DetailLookup;
use crate::model::VehicleRecord;
use crate::tui::app::{CatalogApp, DetailItem, DetailPage};
use crate::tui::theme::{colors, support_badge, Styles};
use crate::tui::widgets::{render_empty_state, wrap_text};
use crate::utils::pad_to_width;
use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Paragraph},
};

const LABEL_WIDTH: usize = 28;

pub fn render_detail(frame: &mut Frame, area: Rect, app: &mut CatalogApp) {
    let Some(page) = app.detail.as_mut() else {
        render_empty_state(frame, area, "No vehicle selected", None);
        return;
    };

    let record = match DetailLookup::resolve(&app.dataset, &page.slug) {
        DetailLookup::Found(record) => record,
        DetailLookup::NotFound { slug, suggestion } => {
            let hint = suggestion.map_or_else(
                || "Press Esc to return to the catalog".to_string(),
                |name| format!("Did you mean \"{name}\"? Press Esc to return to the catalog"),
            );
            render_empty_state(
                frame,
                area,
                &DetailLookup::not_found_message(&slug),
                Some(&hint),
            );
            return;
        }
    };

    let block = Block::default()
        .title(format!(" {} ", record.name))
        .title_style(Styles::header_title())
        .borders(Borders::ALL)
        .border_style(Styles::border_focused());
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let (lines, cursor_line) = page_lines(page, record, usize::from(inner.width));

    // Keep the focused line in view.
    let height = inner.height.max(1);
    let cursor_line = u16::try_from(cursor_line).unwrap_or(u16::MAX);
    if cursor_line < page.scroll {
        page.scroll = cursor_line;
    } else if cursor_line >= page.scroll.saturating_add(height) {
        page.scroll = cursor_line + 1 - height;
    }

    frame.render_widget(Paragraph::new(lines).scroll((page.scroll, 0)), inner);
}

/// Lines of a detail page and the line index of the focused item.
fn page_lines(page: &DetailPage, record: &VehicleRecord, width: usize) -> (Vec<Line<'static>>, usize) {
    let scheme = colors();
    let mut lines = vec![Line::from(vec![
        support_badge(&record.support_type),
        Span::raw(" "),
        Span::styled(
            format!("{} {} {}", record.make, record.model, record.years),
            Styles::text_muted(),
        ),
    ])];
    if let Some(sentence) = &record.detail_sentence {
        for line in wrap_text(sentence, width.saturating_sub(1)) {
            lines.push(Line::styled(line, Styles::text()));
        }
    }
    lines.push(Line::from(vec![
        Span::styled("[a] ", Styles::shortcut_key()),
        Span::styled(page.state.toggles.master_label(), Styles::shortcut_desc()),
    ]));
    lines.push(Line::from(""));

    let highlighted = page.state.highlighted_spec();
    let mut cursor_line = 0;
    for (i, item) in page.items().iter().enumerate() {
        let focused = i == page.cursor.selected;
        if focused {
            cursor_line = lines.len();
        }
        let marker = if focused { "▶ " } else { "  " };
        match item {
            DetailItem::Section { id, title } => {
                let open = page.state.toggles.is_open(id);
                let arrow = if open { "▼" } else { "▶" };
                let mut style = Styles::section_title();
                if focused {
                    style = style.bg(scheme.selection);
                }
                if i > 0 {
                    lines.push(Line::from(""));
                    if focused {
                        cursor_line = lines.len();
                    }
                }
                lines.push(Line::from(vec![
                    Span::styled(marker, Style::default().fg(scheme.accent)),
                    Span::styled(format!("{arrow} {title}"), style),
                ]));
                if open {
                    lines.extend(section_content(id, record, width));
                }
            }
            DetailItem::Spec(spec) => {
                let mut label_style = Styles::label();
                let mut value_style = Styles::value();
                if highlighted == Some(spec.id) {
                    label_style = Styles::highlight();
                    value_style = Styles::highlight();
                }
                if focused {
                    label_style = label_style.bg(scheme.selection);
                    value_style = value_style.bg(scheme.selection);
                }
                let has_description = spec_description(spec.id).is_some();
                let info = if has_description { " ⓘ" } else { "" };
                lines.push(Line::from(vec![
                    Span::styled(marker, Style::default().fg(scheme.accent)),
                    Span::styled(
                        pad_to_width(&format!("  {}{info}", spec.label), LABEL_WIDTH),
                        label_style,
                    ),
                    Span::styled(spec.display(record), value_style),
                ]));
                if page.state.open_description == Some(spec.id) {
                    if let Some(text) = spec_description(spec.id) {
                        for line in wrap_text(text, width.saturating_sub(8)) {
                            lines.push(Line::styled(
                                format!("      {line}"),
                                Styles::text_muted().italic(),
                            ));
                        }
                    }
                }
            }
        }
    }
    (lines, cursor_line)
}

fn field(label: &str, value: impl Into<String>) -> Line<'static> {
    Line::from(vec![
        Span::styled(pad_to_width(&format!("    {label}"), LABEL_WIDTH + 2), Styles::label()),
        Span::styled(value.into(), Styles::value()),
    ])
}

fn muted(text: impl Into<String>) -> Line<'static> {
    Line::styled(format!("    {}", text.into()), Styles::text_muted().italic())
}

/// Body of the sections that are not spec lists.
fn section_content(id: &str, record: &VehicleRecord, width: usize) -> Vec<Line<'static>> {
    let mut lines = Vec::new();
    match id {
        "general" => {
            lines.push(field("Make", record.make.clone()));
            lines.push(field("Model", record.model.clone()));
            lines.push(field("Years", record.years.clone()));
            if !record.package.is_empty() {
                lines.push(field("Package", record.package.clone()));
            }
            if let Some(brand) = &record.brand {
                lines.push(field("Brand", brand.clone()));
            }
            if let Some(link) = &record.buy_link {
                lines.push(field("Buy", link.clone()));
            }
            for (n, note) in record.footnotes.iter().enumerate() {
                for (i, line) in wrap_text(note, width.saturating_sub(10)).into_iter().enumerate() {
                    let prefix = if i == 0 { format!("{}.", n + 1) } else { String::new() };
                    lines.push(muted(format!("{prefix:<3} {line}")));
                }
            }
            if !record.setup_notes.is_empty() {
                lines.push(Line::styled("    Setup notes", Styles::label()));
                for note in &record.setup_notes {
                    for line in wrap_text(note, width.saturating_sub(8)) {
                        lines.push(muted(line));
                    }
                }
            }
        }
        "parts" if record.parts.is_empty() => lines.push(muted("No parts listed")),
        "parts" => {
            for part in &record.parts {
                let kind = if part.part_type.is_empty() {
                    String::new()
                } else {
                    format!(" ({})", part.part_type)
                };
                lines.push(Line::from(vec![
                    Span::styled(format!("    {}× ", part.count), Styles::value()),
                    Span::styled(part.name.clone(), Styles::text()),
                    Span::styled(kind, Styles::text_muted()),
                ]));
            }
        }
        "longitudinal-reports" if record.longitudinal_reports.is_empty() => {
            lines.push(muted("No longitudinal reports yet"));
        }
        "longitudinal-reports" => {
            for report in &record.longitudinal_reports {
                lines.push(Line::styled(format!("    • {}", report.description), Styles::text()));
                if !report.link.is_empty() {
                    lines.push(muted(report.link.clone()));
                }
            }
        }
        "user-video" => lines.push(match &record.video {
            Some(url) if !url.is_empty() => field("Video", url.clone()),
            _ => muted("No user video available"),
        }),
        "user-install-video" => lines.push(match &record.setup_video {
            Some(url) if !url.is_empty() => field("Setup video", url.clone()),
            _ => muted("No setup video available"),
        }),
        _ => {}
    }
    lines
}
