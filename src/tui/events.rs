//! Event handling for the catalog browser.

use super::app::{CatalogApp, CatalogView};
use super::constants::TICK_RATE_MS;
use super::state::ListNavigation;
use super::viewmodel::{FilterRow, OverlayKind};
use crate::config::TuiPreferences;
use crate::tui::toggle_theme;
use crossterm::event::{
    self, Event as CrosstermEvent, KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent,
    MouseEventKind,
};
use std::io;
use std::sync::mpsc;
use std::thread;
use std::time::Duration;

/// Terminal events.
#[derive(Debug)]
pub enum Event {
    Key(KeyEvent),
    Mouse(MouseEvent),
    Resize(u16, u16),
    Tick,
}

/// Polls the terminal on a background thread and emits a tick whenever
/// nothing happened within the tick rate.
pub struct EventHandler {
    rx: mpsc::Receiver<Event>,
    _tx: mpsc::Sender<Event>,
}

impl Default for EventHandler {
    fn default() -> Self {
        Self::new(TICK_RATE_MS)
    }
}

impl EventHandler {
    pub fn new(tick_rate_ms: u64) -> Self {
        let (tx, rx) = mpsc::channel();
        let tick_rate = Duration::from_millis(tick_rate_ms);

        let event_tx = tx.clone();
        thread::spawn(move || loop {
            let event = if event::poll(tick_rate).unwrap_or(false) {
                match event::read() {
                    Ok(CrosstermEvent::Key(key)) => Event::Key(key),
                    Ok(CrosstermEvent::Mouse(mouse)) => Event::Mouse(mouse),
                    Ok(CrosstermEvent::Resize(w, h)) => Event::Resize(w, h),
                    _ => continue,
                }
            } else {
                Event::Tick
            };
            if event_tx.send(event).is_err() {
                break;
            }
        });

        Self { rx, _tx: tx }
    }

    pub fn next(&self) -> io::Result<Event> {
        self.rx.recv().map_err(io::Error::other)
    }
}

/// Handle a key press.
pub fn handle_key_event(app: &mut CatalogApp, key: KeyEvent) {
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        app.should_quit = true;
        return;
    }

    // Clear any status message on key press
    app.status.clear();

    if app.search.active {
        handle_search_key(app, key);
        return;
    }

    if let Some(kind) = app.overlay.current() {
        // The drawer is animating closed after a quick-nav choice.
        if !app.overlay.is_closing() {
            handle_overlay_key(app, kind, key);
        }
        return;
    }

    match key.code {
        KeyCode::Char('q') => {
            app.should_quit = true;
            return;
        }
        KeyCode::Esc => {
            if app.view == CatalogView::List && app.selection.compare_mode() {
                app.toggle_compare_mode();
            } else if !app.go_back() {
                app.should_quit = true;
            }
            return;
        }
        KeyCode::Char('?') => {
            app.overlay.toggle(OverlayKind::Help);
            return;
        }
        KeyCode::Char('T') => {
            // Toggle theme (dark -> light -> high-contrast) and save preference
            let theme_name = toggle_theme();
            let mut prefs = TuiPreferences::load();
            prefs.theme = theme_name.to_string();
            if let Err(e) = prefs.save() {
                tracing::debug!("Could not save TUI preferences: {e}");
            }
            app.status.set(format!("Theme: {theme_name}"));
            return;
        }
        KeyCode::Char('i') => {
            let support = match app.view {
                CatalogView::List => app.selected_record().map(|r| r.support_type.clone()),
                CatalogView::Detail => app.detail_record().map(|r| r.support_type.clone()),
                CatalogView::Compare => None,
            };
            app.show_support_info(support.as_ref());
            return;
        }
        _ => {}
    }

    match app.view {
        CatalogView::List => handle_list_key(app, key),
        CatalogView::Detail => handle_detail_key(app, key),
        CatalogView::Compare => handle_compare_key(app, key),
    }
}

fn handle_search_key(app: &mut CatalogApp, key: KeyEvent) {
    match key.code {
        KeyCode::Esc => app.cancel_search(),
        KeyCode::Enter => app.commit_search(),
        KeyCode::Char('w') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.search_pop_word();
        }
        KeyCode::Backspace if key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.search_pop_word();
        }
        KeyCode::Backspace => app.search_pop_char(),
        KeyCode::Up => app.move_cursor(0, -1),
        KeyCode::Down => app.move_cursor(0, 1),
        KeyCode::Char(c) => app.search_push_char(c),
        _ => {}
    }
}

fn handle_overlay_key(app: &mut CatalogApp, kind: OverlayKind, key: KeyEvent) {
    match (kind, key.code) {
        (_, KeyCode::Esc | KeyCode::Char('q')) => app.overlay.close(),
        (OverlayKind::Help, KeyCode::Char('?')) => app.overlay.close(),

        (OverlayKind::Filters, KeyCode::Char('f')) => app.overlay.close(),
        (OverlayKind::Filters, KeyCode::Up | KeyCode::Char('k')) => app.filter_drawer.select_prev(),
        (OverlayKind::Filters, KeyCode::Down | KeyCode::Char('j')) => {
            app.filter_drawer.select_next();
        }
        (OverlayKind::Filters, KeyCode::Left | KeyCode::Char('h')) => app.cycle_filter(false),
        (OverlayKind::Filters, KeyCode::Right | KeyCode::Char('l' | ' ') | KeyCode::Enter) => {
            app.cycle_filter(true);
        }
        (OverlayKind::Filters, KeyCode::Backspace | KeyCode::Delete) => app.clear_filter_row(),
        (OverlayKind::Filters, KeyCode::Char('C')) => app.clear_filters(),

        (OverlayKind::SupportInfo, KeyCode::Char('i')) => app.overlay.close(),
        (OverlayKind::SupportInfo, KeyCode::Left | KeyCode::Char('h')) => {
            app.cycle_support_info(false);
        }
        (OverlayKind::SupportInfo, KeyCode::Right | KeyCode::Char('l') | KeyCode::Tab) => {
            app.cycle_support_info(true);
        }
        (OverlayKind::SupportInfo, KeyCode::Enter | KeyCode::Char('e')) => {
            app.support_info.expanded = !app.support_info.expanded;
        }

        (OverlayKind::QuickNav, KeyCode::Char('n')) => app.overlay.close(),
        (OverlayKind::QuickNav, KeyCode::Up | KeyCode::Char('k')) => app.quick_nav.select_prev(),
        (OverlayKind::QuickNav, KeyCode::Down | KeyCode::Char('j')) => app.quick_nav.select_next(),
        (OverlayKind::QuickNav, KeyCode::PageUp) => app.quick_nav.page_up(),
        (OverlayKind::QuickNav, KeyCode::PageDown) => app.quick_nav.page_down(),
        (OverlayKind::QuickNav, KeyCode::Enter) => app.choose_quick_nav(),
        _ => {}
    }
}

fn handle_list_key(app: &mut CatalogApp, key: KeyEvent) {
    match key.code {
        KeyCode::Up | KeyCode::Char('k') => app.move_cursor(0, -1),
        KeyCode::Down | KeyCode::Char('j') => app.move_cursor(0, 1),
        KeyCode::Left | KeyCode::Char('h') if app.grid_view => app.move_cursor(-1, 0),
        KeyCode::Right | KeyCode::Char('l') if app.grid_view => app.move_cursor(1, 0),
        KeyCode::PageUp => app.list.page_up(),
        KeyCode::PageDown => app.list.page_down(),
        KeyCode::Home => app.list.go_first(),
        KeyCode::End | KeyCode::Char('G') => app.list.go_last(),
        KeyCode::Enter => app.open_selected_detail(),
        KeyCode::Char(' ') => {
            if !app.selection.compare_mode() {
                app.selection.enter_compare_mode();
            }
            app.toggle_selected_vehicle();
        }
        KeyCode::Char('x') => app.toggle_compare_mode(),
        KeyCode::Char('c') => app.compare_selection(),
        KeyCode::Char('/') => app.start_search(),
        KeyCode::Char('f') => {
            app.filter_drawer.resize(FilterRow::ALL.len());
            app.overlay.show(OverlayKind::Filters);
        }
        KeyCode::Char('s') => app.cycle_sort(),
        KeyCode::Char('r') => app.reverse_sort(),
        KeyCode::Char('g') => app.toggle_grid(),
        KeyCode::Char('C') => app.clear_filters(),
        _ => {}
    }
}

fn handle_detail_key(app: &mut CatalogApp, key: KeyEvent) {
    match key.code {
        KeyCode::Backspace | KeyCode::Char('b') => {
            app.go_back();
        }
        KeyCode::Enter | KeyCode::Char(' ' | 'd') => app.activate_detail_item(),
        KeyCode::Char('a') => app.toggle_all_sections(),
        KeyCode::Char('n') => app.overlay.show(OverlayKind::QuickNav),
        _ => {
            if let Some(page) = app.detail.as_mut() {
                match key.code {
                    KeyCode::Up | KeyCode::Char('k') => page.cursor.select_prev(),
                    KeyCode::Down | KeyCode::Char('j') => page.cursor.select_next(),
                    KeyCode::PageUp => page.cursor.page_up(),
                    KeyCode::PageDown => page.cursor.page_down(),
                    KeyCode::Home => page.cursor.go_first(),
                    KeyCode::End | KeyCode::Char('G') => page.cursor.go_last(),
                    _ => {}
                }
            }
        }
    }
}

fn handle_compare_key(app: &mut CatalogApp, key: KeyEvent) {
    match key.code {
        KeyCode::Backspace | KeyCode::Char('b') => {
            app.go_back();
        }
        KeyCode::Left | KeyCode::Char('h') => app.move_compare_cursor(-1, 0),
        KeyCode::Right | KeyCode::Char('l') => app.move_compare_cursor(1, 0),
        KeyCode::Up | KeyCode::Char('k') => app.move_compare_cursor(0, -1),
        KeyCode::Down | KeyCode::Char('j') => app.move_compare_cursor(0, 1),
        KeyCode::PageUp => app.move_compare_cursor(0, -(super::constants::PAGE_SIZE as isize)),
        KeyCode::PageDown => app.move_compare_cursor(0, super::constants::PAGE_SIZE as isize),
        KeyCode::Enter | KeyCode::Char(' ') => app.click_compare_cursor(),
        KeyCode::Delete | KeyCode::Char('X') => app.remove_compare_column(),
        KeyCode::Char('z') => app.toggle_fit(),
        KeyCode::Char('D') => app.toggle_only_differences(),
        _ => {}
    }
}

/// Handle a mouse event.
pub fn handle_mouse_event(app: &mut CatalogApp, mouse: MouseEvent) {
    if !app.mouse_enabled {
        return;
    }

    // A click anywhere dismisses an overlay.
    if app.overlay.has_overlay() {
        if let MouseEventKind::Down(_) = mouse.kind {
            if !app.overlay.is_closing() {
                app.overlay.close();
            }
        }
        return;
    }

    let (x, y) = (mouse.column, mouse.row);
    match mouse.kind {
        MouseEventKind::ScrollUp => scroll(app, -1),
        MouseEventKind::ScrollDown => scroll(app, 1),
        MouseEventKind::Moved if app.view == CatalogView::Compare => {
            if let Some(hit) = app.compare_hit.as_ref() {
                let target = hit.target(x, y);
                app.compare_pointer_moved(target);
            }
        }
        MouseEventKind::Down(MouseButton::Left) => {
            app.status.clear();
            match app.view {
                CatalogView::List => handle_list_click(app, x, y),
                CatalogView::Compare => {
                    if let Some(hit) = app.compare_hit.as_ref() {
                        let target = hit.target(x, y);
                        app.compare_pointer_clicked(target);
                    }
                }
                CatalogView::Detail => {}
            }
        }
        _ => {}
    }
}

fn scroll(app: &mut CatalogApp, delta: isize) {
    match app.view {
        CatalogView::List => app.move_cursor(0, delta),
        CatalogView::Compare => app.move_compare_cursor(0, delta),
        CatalogView::Detail => {
            if let Some(page) = app.detail.as_mut() {
                if delta < 0 {
                    page.cursor.select_prev();
                } else {
                    page.cursor.select_next();
                }
            }
        }
    }
}

/// Click on a row or card: the first click selects it, a second click on
/// the selected item opens it (or toggles it in compare mode).
fn handle_list_click(app: &mut CatalogApp, x: u16, y: u16) {
    let Some(index) = app.list_hit.and_then(|hit| hit.index_at(x, y)) else {
        return;
    };
    if index >= app.list.total {
        return;
    }
    if index != app.list.selected {
        app.list.selected = index;
    } else if app.selection.compare_mode() {
        app.toggle_selected_vehicle();
    } else {
        app.open_selected_detail();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AppConfig;
    use crate::model::Dataset;

    fn app() -> CatalogApp {
        let dataset = Dataset::from_json_str(
            r#"[
                {"name": "Acura RDX 2019-21", "make": "Acura", "model": "RDX", "years": "2019-21",
                 "support_type": "Upstream"},
                {"name": "Honda Civic 2022", "make": "Honda", "model": "Civic", "years": "2022",
                 "support_type": "Community"}
            ]"#,
        )
        .expect("dataset");
        CatalogApp::new(dataset, &AppConfig::default())
    }

    fn press(app: &mut CatalogApp, code: KeyCode) {
        handle_key_event(app, KeyEvent::new(code, KeyModifiers::NONE));
    }

    fn type_text(app: &mut CatalogApp, text: &str) {
        for c in text.chars() {
            press(app, KeyCode::Char(c));
        }
    }

    #[test]
    fn test_search_keys_edit_query() {
        let mut app = app();
        press(&mut app, KeyCode::Char('/'));
        type_text(&mut app, "honda q");
        assert!(app.search.active);
        assert!(!app.should_quit);
        assert_eq!(app.filters().query(), "honda q");

        handle_key_event(
            &mut app,
            KeyEvent::new(KeyCode::Char('w'), KeyModifiers::CONTROL),
        );
        assert_eq!(app.filters().query(), "honda ");
        press(&mut app, KeyCode::Enter);
        assert!(!app.search.active);
        assert_eq!(app.catalog.visible_count(), 1);
    }

    #[test]
    fn test_overlay_swallows_keys() {
        let mut app = app();
        press(&mut app, KeyCode::Char('?'));
        assert!(app.overlay.is_showing(OverlayKind::Help));
        press(&mut app, KeyCode::Char('j'));
        assert_eq!(app.list.selected, 0);
        press(&mut app, KeyCode::Char('q'));
        assert!(!app.overlay.has_overlay());
        assert!(!app.should_quit);
    }

    #[test]
    fn test_filter_drawer_keys() {
        let mut app = app();
        press(&mut app, KeyCode::Char('f'));
        assert!(app.overlay.is_showing(OverlayKind::Filters));
        // Support row: first choice is the first known level present
        press(&mut app, KeyCode::Right);
        assert_eq!(app.catalog.visible_count(), 1);
        press(&mut app, KeyCode::Backspace);
        assert_eq!(app.catalog.visible_count(), 2);
    }

    #[test]
    fn test_space_enters_compare_mode_and_selects() {
        let mut app = app();
        press(&mut app, KeyCode::Char(' '));
        press(&mut app, KeyCode::Char('j'));
        press(&mut app, KeyCode::Char(' '));
        assert!(app.selection.compare_mode());
        assert_eq!(app.selection.len(), 2);
        press(&mut app, KeyCode::Char('c'));
        assert_eq!(app.view, CatalogView::Compare);

        press(&mut app, KeyCode::Esc);
        assert_eq!(app.view, CatalogView::List);
        press(&mut app, KeyCode::Esc);
        assert!(!app.selection.compare_mode());
        press(&mut app, KeyCode::Esc);
        assert!(app.should_quit);
    }

    #[test]
    fn test_detail_keys() {
        let mut app = app();
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.view, CatalogView::Detail);
        press(&mut app, KeyCode::Char('n'));
        assert!(app.overlay.is_showing(OverlayKind::QuickNav));
        press(&mut app, KeyCode::Enter);
        assert!(app.overlay.is_closing());
        // Keys are ignored while the drawer closes
        press(&mut app, KeyCode::Char('b'));
        assert_eq!(app.view, CatalogView::Detail);
    }

    #[test]
    fn test_ctrl_c_quits_from_search() {
        let mut app = app();
        press(&mut app, KeyCode::Char('/'));
        handle_key_event(
            &mut app,
            KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL),
        );
        assert!(app.should_quit);
    }
}
