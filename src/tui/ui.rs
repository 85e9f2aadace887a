//! Terminal setup, the event loop and the top-level layout.

use super::app::{CatalogApp, CatalogView};
use super::events::{handle_key_event, handle_mouse_event, Event, EventHandler};
use super::theme::{colors, mode_badge, render_footer_hints, set_theme, FooterHints, Styles, Theme};
use super::viewmodel::{OverlayKind, StatusLevel};
use super::views;
use super::widgets::{check_terminal_size, render_size_warning, MIN_HEIGHT, MIN_WIDTH};
use crate::config::{TuiPreferences, DEFAULT_THEME};
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{prelude::*, widgets::Paragraph};
use std::io::{self, stdout};

/// Pick the starting theme: an explicitly configured theme wins over the
/// one saved by the `T` key.
fn initial_theme(configured: &str) -> Theme {
    if configured != DEFAULT_THEME {
        return Theme::from_name(configured);
    }
    Theme::from_name(&TuiPreferences::load().theme)
}

/// Run the catalog browser until the user quits.
pub fn run_catalog_tui(app: &mut CatalogApp, configured_theme: &str) -> io::Result<()> {
    set_theme(initial_theme(configured_theme));

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = stdout();
    if app.mouse_enabled {
        execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    } else {
        execute!(stdout, EnterAlternateScreen)?;
    }
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = event_loop(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    result
}

fn event_loop<B: Backend>(terminal: &mut Terminal<B>, app: &mut CatalogApp) -> io::Result<()> {
    let events = EventHandler::default();
    loop {
        terminal.draw(|frame| render(frame, app))?;

        match events.next()? {
            Event::Key(key) => handle_key_event(app, key),
            Event::Mouse(mouse) => handle_mouse_event(app, mouse),
            Event::Resize(width, height) => {
                tracing::debug!("Terminal resized to {width}x{height}");
                app.on_resize();
            }
            Event::Tick => app.on_tick(),
        }

        if app.should_quit {
            return Ok(());
        }
    }
}

/// Main render function.
pub(crate) fn render(frame: &mut Frame, app: &mut CatalogApp) {
    let area = frame.area();

    // Check minimum terminal size
    if check_terminal_size(area.width, area.height).is_err() {
        render_size_warning(frame, area, MIN_WIDTH, MIN_HEIGHT);
        return;
    }

    // Main layout: header, content, status bar, footer
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Header
            Constraint::Min(10),   // Content
            Constraint::Length(1), // Status bar
            Constraint::Length(1), // Footer
        ])
        .split(area);

    render_header(frame, chunks[0], app);

    match app.view {
        CatalogView::List => views::render_catalog(frame, chunks[1], app),
        CatalogView::Detail => views::render_detail(frame, chunks[1], app),
        CatalogView::Compare => views::render_compare(frame, chunks[1], app),
    }

    render_status_bar(frame, chunks[2], app);
    render_footer(frame, chunks[3], app);

    match app.overlay.current() {
        Some(OverlayKind::Help) => views::render_help(frame, area),
        Some(OverlayKind::Filters) => views::render_filter_drawer(frame, chunks[1], app),
        Some(OverlayKind::SupportInfo) => views::render_support_info(frame, area, app),
        Some(OverlayKind::QuickNav) => views::render_quick_nav(frame, chunks[1], app),
        None => {}
    }
}

fn render_header(frame: &mut Frame, area: Rect, app: &CatalogApp) {
    let scheme = colors();
    let mode = match app.view {
        CatalogView::List if app.selection.compare_mode() => "compare",
        CatalogView::List if app.grid_view => "grid",
        CatalogView::List => "catalog",
        CatalogView::Detail => "detail",
        CatalogView::Compare => "compare",
    };

    let mut spans = vec![
        Span::styled("vehicle-catalog", Style::default().fg(scheme.primary).bold()),
        Span::raw(" "),
        mode_badge(mode),
        Span::styled(" │ ", Style::default().fg(scheme.muted)),
        Span::styled(app.view.title(), Style::default().fg(scheme.text).bold()),
    ];
    match app.view {
        CatalogView::Detail => {
            if let Some(record) = app.detail_record() {
                spans.push(Span::styled(" │ ", Style::default().fg(scheme.muted)));
                spans.push(Span::styled(record.name.clone(), Styles::text_muted()));
            }
        }
        CatalogView::Compare => {
            spans.push(Span::styled(" │ ", Style::default().fg(scheme.muted)));
            spans.push(Span::styled(
                format!("cars={}", app.comparison.cars_param()),
                Styles::text_muted(),
            ));
        }
        CatalogView::List => {}
    }

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

fn render_status_bar(frame: &mut Frame, area: Rect, app: &CatalogApp) {
    let scheme = colors();
    let mut spans = vec![
        Span::styled(" Vehicles: ", Styles::text_muted()),
        Span::styled(
            app.dataset().len().to_string(),
            Style::default().fg(scheme.primary).bold(),
        ),
        Span::styled(" │ ", Style::default().fg(scheme.muted)),
        Span::styled("Shown: ", Styles::text_muted()),
        Span::styled(
            app.catalog.visible_count().to_string(),
            Style::default().fg(scheme.tone_color(app.catalog.tone())).bold(),
        ),
    ];
    if app.selection.compare_mode() || !app.selection.is_empty() {
        spans.push(Span::styled(" │ ", Style::default().fg(scheme.muted)));
        spans.push(Span::styled("Selected: ", Styles::text_muted()));
        spans.push(Span::styled(
            format!("{}/{}", app.selection.len(), crate::compare::MAX_SELECTED),
            Style::default().fg(scheme.accent).bold(),
        ));
    }
    if app.view == CatalogView::Compare && app.only_differences {
        spans.push(Span::styled(" │ ", Style::default().fg(scheme.muted)));
        spans.push(Span::styled("differences only", Styles::warning()));
    }

    frame.render_widget(
        Paragraph::new(Line::from(spans)).style(Styles::status_bar()),
        area,
    );
}

fn render_footer(frame: &mut Frame, area: Rect, app: &CatalogApp) {
    // Show status message if set, otherwise show view-specific hints
    if let Some(msg) = app.status.peek() {
        let scheme = colors();
        let (icon, color) = match app.status.level() {
            StatusLevel::Info => ("ℹ ", scheme.accent),
            StatusLevel::Warning => ("⚠ ", scheme.warning),
        };
        let line = Line::from(vec![
            Span::styled(icon, Style::default().fg(color)),
            Span::styled(msg.to_string(), Style::default().fg(color).bold()),
        ]);
        frame.render_widget(Paragraph::new(line).alignment(Alignment::Center), area);
        return;
    }

    let hints = match app.view {
        CatalogView::List => FooterHints::for_list(app.selection.compare_mode()),
        CatalogView::Detail => FooterHints::for_detail(),
        CatalogView::Compare => FooterHints::for_compare(),
    };
    frame.render_widget(Paragraph::new(Line::from(render_footer_hints(&hints))), area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AppConfig;
    use crate::model::Dataset;
    use ratatui::backend::TestBackend;

    fn app() -> CatalogApp {
        let dataset = Dataset::from_json_str(
            r#"[
                {"name": "Acura RDX 2019-21", "make": "Acura", "model": "RDX", "years": "2019-21",
                 "support_type": "Upstream", "wheelbase": 2.75},
                {"name": "Honda Civic 2022", "make": "Honda", "model": "Civic", "years": "2022",
                 "support_type": "Community", "wheelbase": 2.7}
            ]"#,
        )
        .expect("dataset");
        CatalogApp::new(dataset, &AppConfig::default())
    }

    fn draw(app: &mut CatalogApp, width: u16, height: u16) -> String {
        let mut terminal = Terminal::new(TestBackend::new(width, height)).expect("terminal");
        terminal.draw(|frame| render(frame, app)).expect("draw");
        let buffer = terminal.backend().buffer().clone();
        buffer
            .content()
            .chunks(usize::from(width))
            .map(|row| row.iter().map(|cell| cell.symbol()).collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[test]
    fn test_render_list_records_hit_area() {
        let mut app = app();
        let screen = draw(&mut app, 120, 30);
        assert!(screen.contains("Acura RDX 2019-21"));
        assert!(screen.contains("2 RESULTS"));
        assert!(app.list_hit.is_some());
    }

    #[test]
    fn test_render_too_small() {
        let mut app = app();
        let screen = draw(&mut app, 40, 10);
        assert!(screen.contains("Terminal too small"));
    }

    #[test]
    fn test_render_compare_and_detail() {
        let mut app = app();
        app.open_comparison(vec![
            "Acura RDX 2019-21".to_string(),
            "Honda Civic 2022".to_string(),
        ]);
        let screen = draw(&mut app, 120, 40);
        assert!(screen.contains("Wheelbase"));
        assert!(app.compare_hit.is_some());

        app.open_detail("honda-civic-2022");
        let screen = draw(&mut app, 120, 40);
        assert!(screen.contains("Honda Civic 2022"));
        assert!(screen.contains("General"));
    }

    #[test]
    fn test_render_unknown_detail() {
        let mut app = app();
        app.open_detail("honda-civic-2023");
        let screen = draw(&mut app, 120, 30);
        assert!(screen.contains("could not be found"));
    }
}
