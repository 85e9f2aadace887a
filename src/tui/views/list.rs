//! Catalog list and card grid.

use crate::catalog::result_label;
use crate::model::VehicleRecord;
use crate::tui::app::{CatalogApp, ListHit};
use crate::tui::constants::{GRID_CARD_HEIGHT, GRID_CARD_WIDTH};
use crate::tui::theme::{colors, count_badge, support_badge, Styles};
use crate::tui::widgets::{
    filter_chip_spans, highlighted_spans, render_empty_state, render_no_results_state,
};
use crate::utils::truncate_to_width;
use ratatui::{
    prelude::*,
    widgets::{
        Block, Borders, Cell, Paragraph, Row, Scrollbar, ScrollbarOrientation, ScrollbarState,
        Table, TableState,
    },
};

pub fn render_catalog(frame: &mut Frame, area: Rect, app: &mut CatalogApp) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(2), Constraint::Min(5)])
        .split(area);

    render_filter_bar(frame, chunks[0], app);

    app.list_hit = None;
    if app.catalog.visible_count() == 0 {
        if app.filters().is_active() {
            render_no_results_state(frame, chunks[1], &app.filters().active_filters());
        } else {
            render_empty_state(
                frame,
                chunks[1],
                "The dataset is empty",
                Some("Point --dataset at a vehicles JSON file"),
            );
        }
        return;
    }

    if app.grid_view {
        render_grid(frame, chunks[1], app);
    } else {
        render_list(frame, chunks[1], app);
    }
}

/// Search box, result count, active filters and sort.
fn render_filter_bar(frame: &mut Frame, area: Rect, app: &CatalogApp) {
    let scheme = colors();
    let mut first = Vec::new();
    if app.search.active {
        first.push(Span::styled("/ ", Style::default().fg(scheme.accent).bold()));
        first.push(Span::styled(app.search.query.clone(), Styles::text()));
        first.push(Span::styled("█", Style::default().fg(scheme.accent)));
    } else if app.filters().has_query() {
        first.push(Span::styled("Search: ", Styles::text_muted()));
        first.push(Span::styled(
            app.filters().query().to_string(),
            Style::default().fg(scheme.text).bold(),
        ));
    } else {
        first.push(Span::styled(
            "Press / to search by make, model or year",
            Styles::text_muted().italic(),
        ));
    }

    let count = app.catalog.visible_count();
    let mut second = vec![
        count_badge(count),
        Span::styled(
            format!(" {} ", result_label(count)),
            Style::default().fg(scheme.tone_color(app.catalog.tone())),
        ),
        Span::styled("│ ", Style::default().fg(scheme.muted)),
        Span::styled("Sort: ", Styles::text_muted()),
        Span::styled(app.catalog.sort.to_string(), Styles::value()),
    ];
    let chips = app.filters().active_filters();
    if !chips.is_empty() {
        second.push(Span::styled(" │ ", Style::default().fg(scheme.muted)));
        second.extend(filter_chip_spans(&chips));
    }

    frame.render_widget(
        Paragraph::new(vec![Line::from(first), Line::from(second)]),
        area,
    );
}

fn selection_marker(app: &CatalogApp, record: &VehicleRecord) -> Span<'static> {
    if !app.selection.compare_mode() {
        return Span::raw("");
    }
    if app.selection.contains(&record.name) {
        Span::styled("[✓]", Style::default().fg(colors().success).bold())
    } else {
        Span::styled("[ ]", Styles::text_muted())
    }
}

fn render_list(frame: &mut Frame, area: Rect, app: &mut CatalogApp) {
    let scheme = colors();
    let query = app.filters().query().to_string();
    let compare_mode = app.selection.compare_mode();

    let header = Row::new(["", "Name", "Make", "Model", "Years", "Support", "Video"])
        .style(Style::default().fg(scheme.accent).bold())
        .height(1);

    let rows: Vec<Row> = app
        .visible_records()
        .map(|record| {
            let name = Line::from(highlighted_spans(
                &record.name,
                &query,
                &record.year_list,
                Styles::text(),
            ));
            let video = if record.has_video() { "▶" } else { "" };
            Row::new(vec![
                Cell::from(selection_marker(app, record)),
                Cell::from(name),
                Cell::from(record.make.clone()),
                Cell::from(record.model.clone()),
                Cell::from(record.years.clone()),
                Cell::from(support_badge(&record.support_type)),
                Cell::from(Span::styled(video, Style::default().fg(scheme.secondary))),
            ])
        })
        .collect();

    let widths = [
        Constraint::Length(if compare_mode { 4 } else { 0 }),
        Constraint::Min(24),
        Constraint::Length(12),
        Constraint::Length(16),
        Constraint::Length(12),
        Constraint::Length(16),
        Constraint::Length(5),
    ];

    let title = if compare_mode {
        format!(
            " Vehicles · selected {}/{} ",
            app.selection.len(),
            crate::compare::MAX_SELECTED
        )
    } else {
        " Vehicles ".to_string()
    };

    let table = Table::new(rows, widths)
        .header(header)
        .block(
            Block::default()
                .title(title)
                .borders(Borders::ALL)
                .border_style(Styles::border_focused()),
        )
        .row_highlight_style(
            Style::default()
                .bg(scheme.selection)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("▶ ");

    let mut state = TableState::default()
        .with_offset(app.list.scroll_offset)
        .with_selected(Some(app.list.selected));
    frame.render_stateful_widget(table, area, &mut state);
    app.list.scroll_offset = state.offset();

    // Borders plus the header row
    let body = Rect {
        x: area.x + 1,
        y: area.y + 2,
        width: area.width.saturating_sub(2),
        height: area.height.saturating_sub(3),
    };
    app.list_hit = Some(ListHit {
        body,
        offset: app.list.scroll_offset,
        columns: 1,
        item_width: body.width,
        item_height: 1,
    });

    let total = app.list.total;
    if total > usize::from(body.height) {
        let scrollbar = Scrollbar::new(ScrollbarOrientation::VerticalRight)
            .begin_symbol(Some("▲"))
            .end_symbol(Some("▼"))
            .thumb_style(Style::default().fg(scheme.accent))
            .track_style(Style::default().fg(scheme.muted));
        let mut scrollbar_state = ScrollbarState::new(total).position(app.list.selected);
        frame.render_stateful_widget(
            scrollbar,
            area.inner(Margin {
                vertical: 1,
                horizontal: 0,
            }),
            &mut scrollbar_state,
        );
    }
}

/// First item index of the grid window that keeps `selected` visible.
fn grid_window_start(selected: usize, previous_start: usize, columns: usize, rows: usize) -> usize {
    let columns = columns.max(1);
    let rows = rows.max(1);
    let selected_row = selected / columns;
    let mut top = previous_start / columns;
    if selected_row < top {
        top = selected_row;
    } else if selected_row >= top + rows {
        top = selected_row + 1 - rows;
    }
    top * columns
}

fn render_grid(frame: &mut Frame, area: Rect, app: &mut CatalogApp) {
    let scheme = colors();
    let block = Block::default()
        .title(" Vehicles · grid ")
        .borders(Borders::ALL)
        .border_style(Styles::border_focused());
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let columns = usize::from((inner.width / GRID_CARD_WIDTH).max(1));
    let rows = usize::from((inner.height / GRID_CARD_HEIGHT).max(1));
    app.grid_columns = columns;

    let start = grid_window_start(app.list.selected, app.list.scroll_offset, columns, rows);
    app.list.scroll_offset = start;
    app.list_hit = Some(ListHit {
        body: inner,
        offset: start,
        columns,
        item_width: GRID_CARD_WIDTH,
        item_height: GRID_CARD_HEIGHT,
    });

    let query = app.filters().query().to_string();
    let visible: Vec<&VehicleRecord> = app
        .visible_records()
        .skip(start)
        .take(columns * rows)
        .collect();
    let card_width = usize::from(GRID_CARD_WIDTH.saturating_sub(4));

    for (i, record) in visible.iter().enumerate() {
        let index = start + i;
        let (row, col) = (i / columns, i % columns);
        let card = Rect {
            x: inner.x + col as u16 * GRID_CARD_WIDTH,
            y: inner.y + row as u16 * GRID_CARD_HEIGHT,
            width: GRID_CARD_WIDTH.min(inner.width),
            height: GRID_CARD_HEIGHT.min(inner.height),
        };

        let is_cursor = index == app.list.selected;
        let is_selected = app.selection.contains(&record.name);
        let border = if is_cursor {
            Styles::border_focused().bold()
        } else if is_selected {
            Style::default().fg(scheme.success)
        } else {
            Styles::border()
        };

        let name = truncate_to_width(&record.name, card_width);
        let mut title = highlighted_spans(&name, &query, &record.year_list, Styles::header_title());
        if app.selection.compare_mode() {
            title.insert(0, Span::raw(" "));
            title.insert(1, selection_marker(app, record));
        }

        let media = [
            (record.has_video(), "video"),
            (record.has_setup_video(), "setup"),
            (record.has_longitudinal_report(), "report"),
        ]
        .into_iter()
        .filter(|(present, _)| *present)
        .map(|(_, label)| label)
        .collect::<Vec<_>>()
        .join(" · ");

        let lines = vec![
            Line::from(title),
            Line::from(vec![
                Span::styled(
                    truncate_to_width(&format!("{} {}", record.make, record.model), card_width),
                    Styles::text(),
                ),
                Span::styled(format!("  {}", record.years), Styles::text_muted()),
            ]),
            Line::from(support_badge(&record.support_type)),
            Line::styled(media, Style::default().fg(scheme.secondary)),
        ];

        let mut style = Style::default();
        if is_cursor {
            style = style.bg(scheme.selection);
        }
        frame.render_widget(
            Paragraph::new(lines).style(style).block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(border),
            ),
            card,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grid_window_follows_selection() {
        // 3 columns, 2 visible rows
        assert_eq!(grid_window_start(0, 0, 3, 2), 0);
        assert_eq!(grid_window_start(5, 0, 3, 2), 0);
        assert_eq!(grid_window_start(6, 0, 3, 2), 3);
        assert_eq!(grid_window_start(1, 6, 3, 2), 0);
        assert_eq!(grid_window_start(7, 3, 3, 2), 3);
    }
}
