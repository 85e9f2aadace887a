//! Side-by-side comparison table.

use crate::compare::{ComparisonTable, ComparisonView, TableMetrics};
use crate::tui::app::{CatalogApp, CompareHit};
use crate::tui::constants::{COMPARE_COLUMN_WIDTH, COMPARE_LABEL_WIDTH, COMPARE_MIN_COLUMN_WIDTH};
use crate::tui::theme::{colors, support_badge, Styles};
use crate::tui::widgets::render_empty_state;
use crate::utils::{pad_to_width, truncate_to_width};
use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Paragraph},
};

const CARD_HEIGHT: u16 = 4;

/// One line of the table body.
enum BodyLine<'t> {
    Category(&'static str),
    Spec {
        spec_id: &'static str,
        label: &'static str,
        values: &'t [String],
        differs: bool,
        index: usize,
    },
}

/// Body lines honoring the differences filter. Categories left without
/// rows are dropped.
fn body_lines<'t>(table: &'t ComparisonTable<'_>, only_differences: bool) -> Vec<BodyLine<'t>> {
    let mut lines = Vec::new();
    let mut index = 0;
    for section in table.sections() {
        let rows: Vec<_> = section
            .rows
            .iter()
            .filter(|row| !only_differences || row.differs())
            .collect();
        if rows.is_empty() {
            continue;
        }
        lines.push(BodyLine::Category(section.category));
        for row in rows {
            lines.push(BodyLine::Spec {
                spec_id: row.spec_id,
                label: row.label,
                values: &row.values,
                differs: row.differs(),
                index,
            });
            index += 1;
        }
    }
    lines
}

/// Scaled label and column widths.
fn column_widths(scale: f64) -> (u16, u16) {
    let scaled = |w: u16, min: u16| -> u16 {
        let w = (f64::from(w) * scale).floor();
        // clamp keeps the cast in range
        (w.clamp(f64::from(min), f64::from(u16::MAX)) as u16).max(min)
    };
    (
        scaled(COMPARE_LABEL_WIDTH, 10),
        scaled(COMPARE_COLUMN_WIDTH, COMPARE_MIN_COLUMN_WIDTH),
    )
}

/// First visible column so that `cursor` stays on screen.
fn first_visible_column(cursor: usize, visible: usize) -> usize {
    let visible = visible.max(1);
    if cursor >= visible {
        cursor + 1 - visible
    } else {
        0
    }
}

pub fn render_compare(frame: &mut Frame, area: Rect, app: &mut CatalogApp) {
    app.compare_hit = None;
    let view = app.comparison.view(&app.dataset);
    let table = match view {
        ComparisonView::NotEnoughSelected { selected } => {
            let (heading, hint) = ComparisonView::empty_message(selected);
            render_empty_state(frame, area, &heading, Some(hint));
            return;
        }
        ComparisonView::Ready(table) => table,
    };
    let scheme = colors();
    let highlight = app.comparison.highlight;
    let lines = body_lines(&table, app.only_differences);
    let columns = table.columns();

    let natural_width = f64::from(COMPARE_LABEL_WIDTH)
        + f64::from(COMPARE_COLUMN_WIDTH) * columns.len() as f64;
    app.comparison.fit.observe(TableMetrics {
        viewport_width: f64::from(area.width),
        container_width: f64::from(area.width.saturating_sub(2)),
        content_width: natural_width,
        content_height: lines.len() as f64,
    });
    let fit = app.comparison.fit;
    let (label_width, column_width) = column_widths(fit.scale());

    let mut title = format!(" Compare ({}) ", columns.len());
    if fit.is_zoomed_out() {
        title.push_str(&format!("· zoom {:.0}% ", fit.scale() * 100.0));
    } else if fit.has_overflow() {
        title.push_str("· [z] fit to screen ");
    }
    if app.only_differences {
        title.push_str("· differences only ");
    }

    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(Styles::border_focused());
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(CARD_HEIGHT), Constraint::Min(1)])
        .split(inner);

    let visible_columns =
        usize::from(inner.width.saturating_sub(label_width) / column_width.max(1)).max(1);
    let first_column = first_visible_column(app.compare_cursor.column, visible_columns);
    let shown: Vec<usize> = (first_column..columns.len()).take(visible_columns).collect();

    // Vehicle cards
    for (slot, &column) in shown.iter().enumerate() {
        let record = columns[column];
        let card = Rect {
            x: chunks[0].x + label_width + slot as u16 * column_width,
            y: chunks[0].y,
            width: column_width.min(chunks[0].width.saturating_sub(label_width)),
            height: CARD_HEIGHT,
        };
        let name_width = usize::from(column_width.saturating_sub(2));
        let card_lines = vec![
            Line::styled(truncate_to_width(&record.name, name_width), Styles::header_title()),
            Line::from(support_badge(&record.support_type)),
        ];
        frame.render_widget(
            Paragraph::new(card_lines).block(
                Block::default().borders(Borders::ALL).border_style(
                    Style::default().fg(scheme.card_border(highlight.card_style(column))),
                ),
            ),
            card,
        );
    }
    if first_column > 0 {
        frame.render_widget(
            Paragraph::new(Line::styled(format!("◀ {first_column} more"), Styles::text_muted())),
            Rect { height: 1, width: label_width, ..chunks[0] },
        );
    }
    let hidden_right = columns.len().saturating_sub(first_column + shown.len());
    if hidden_right > 0 {
        frame.render_widget(
            Paragraph::new(Line::styled(format!("{hidden_right} more ▶"), Styles::text_muted())),
            Rect { y: chunks[0].y + 1, height: 1, width: label_width, ..chunks[0] },
        );
    }

    // Body, scrolled to keep the cursor row visible
    let body = chunks[1];
    let height = usize::from(body.height.max(1));
    let cursor_line = lines
        .iter()
        .position(|line| matches!(line, BodyLine::Spec { index, .. } if *index == app.compare_cursor.row))
        .unwrap_or(0);
    let top = if cursor_line >= height { cursor_line + 1 - height } else { 0 };

    let label_chars = usize::from(label_width);
    let cell_chars = usize::from(column_width);
    let mut rendered = Vec::new();
    let mut hit_rows = Vec::new();
    for line in lines.iter().skip(top).take(height) {
        match line {
            BodyLine::Category(category) => {
                hit_rows.push(None);
                rendered.push(Line::styled(
                    pad_to_width(&format!("▌{category}"), label_chars + cell_chars * shown.len()),
                    Styles::section_title().bg(scheme.background_alt),
                ));
            }
            BodyLine::Spec { spec_id, label, values, differs, index } => {
                hit_rows.push(Some(*spec_id));
                let row_bg = scheme.row_bg(highlight.row_style(spec_id, *index));
                let marker = if *differs { "≠ " } else { "  " };
                let mut label_style = Styles::label().bg(row_bg);
                if highlight.label_highlighted(spec_id) {
                    label_style = label_style.fg(scheme.accent).bold();
                }
                let mut spans = vec![Span::styled(
                    pad_to_width(
                        &truncate_to_width(&format!("{marker}{label}"), label_chars.saturating_sub(1)),
                        label_chars,
                    ),
                    label_style,
                )];
                for &column in &shown {
                    let value = values.get(column).map_or("", String::as_str);
                    let bg = scheme
                        .cell_bg(highlight.cell_style(column, spec_id))
                        .unwrap_or(row_bg);
                    let mut style = Styles::value().bg(bg);
                    if *index == app.compare_cursor.row && column == app.compare_cursor.column {
                        style = style.add_modifier(Modifier::UNDERLINED);
                    }
                    spans.push(Span::styled(
                        pad_to_width(
                            &truncate_to_width(value, cell_chars.saturating_sub(1)),
                            cell_chars,
                        ),
                        style,
                    ));
                }
                rendered.push(Line::from(spans));
            }
        }
    }
    frame.render_widget(Paragraph::new(rendered), body);

    app.compare_hit = Some(CompareHit {
        body,
        label_width,
        column_width,
        first_column,
        columns: shown.len(),
        rows: hit_rows,
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Dataset;

    #[test]
    fn test_body_lines_drop_empty_categories() {
        let ds = Dataset::from_json_str(
            r#"[{"name": "A", "wheelbase": 2.7}, {"name": "B", "wheelbase": 2.8}]"#,
        )
        .unwrap();
        let ComparisonView::Ready(table) = ComparisonView::from_records(ds.iter().collect()) else {
            panic!("expected a ready table");
        };
        let all = body_lines(&table, false);
        let diffs = body_lines(&table, true);
        assert!(diffs.len() < all.len());
        let categories: Vec<_> = diffs
            .iter()
            .filter_map(|l| match l {
                BodyLine::Category(c) => Some(*c),
                BodyLine::Spec { .. } => None,
            })
            .collect();
        assert_eq!(categories, vec!["Vehicle Metrics"]);
    }

    #[test]
    fn test_column_widths_respect_minimum() {
        assert_eq!(column_widths(1.0), (COMPARE_LABEL_WIDTH, COMPARE_COLUMN_WIDTH));
        let (_, narrow) = column_widths(0.1);
        assert_eq!(narrow, COMPARE_MIN_COLUMN_WIDTH);
    }

    #[test]
    fn test_first_visible_column() {
        assert_eq!(first_visible_column(0, 3), 0);
        assert_eq!(first_visible_column(2, 3), 0);
        assert_eq!(first_visible_column(4, 3), 2);
    }
}
