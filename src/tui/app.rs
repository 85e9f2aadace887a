//! `CatalogApp` - state of the interactive catalog browser.
//!
//! The app owns every piece of UI state and re-derives the visible list
//! after each mutation. Rendering reads it; the event handlers call the
//! methods here.

use super::constants::DRAWER_CLOSE_TICKS;
use super::state::{ListNavigation, ListState};
use super::viewmodel::{FilterRow, OverlayKind, OverlayState, SearchInput, StatusMessage};
use crate::catalog::{CatalogState, FacetOptions, FilterState};
use crate::compare::{
    specs_by_category, CellPosition, Comparison, ComparisonView, FitConfig, FitState,
    RemoveOutcome, SelectionSet, SpecDefinition, ToggleOutcome, MAX_SELECTED,
};
use crate::config::AppConfig;
use crate::detail::{quick_nav_groups, DetailState, QuickNavEntry, SectionToggles};
use crate::model::{Dataset, SupportType, VehicleRecord};
use crate::utils::slugify;
use ratatui::layout::Rect;

/// Top-level screens.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CatalogView {
    List,
    Detail,
    Compare,
}

impl CatalogView {
    pub const fn title(self) -> &'static str {
        match self {
            Self::List => "Catalog",
            Self::Detail => "Details",
            Self::Compare => "Compare",
        }
    }
}

/// Sections of a detail page in display order.
pub(crate) const DETAIL_SECTIONS: [(&str, &str); 10] = [
    ("general", "General"),
    ("compatibility-info", "Compatibility Info"),
    ("capabilities", "Capabilities"),
    ("vehicle-metrics", "Vehicle Metrics"),
    ("technical", "Technical Parameters"),
    ("system", "System Configuration"),
    ("parts", "Parts"),
    ("longitudinal-reports", "Longitudinal Reports"),
    ("user-video", "User Video"),
    ("user-install-video", "Setup Video"),
];

/// A focusable line of a detail page.
#[derive(Debug, Clone, Copy)]
pub(crate) enum DetailItem {
    Section {
        id: &'static str,
        title: &'static str,
    },
    Spec(&'static SpecDefinition),
}

impl DetailItem {
    pub(crate) fn spec_id(&self) -> Option<&'static str> {
        match self {
            Self::Spec(spec) => Some(spec.id),
            Self::Section { .. } => None,
        }
    }
}

/// Focusable items for the current section toggles. Specs appear only
/// inside open sections.
pub(crate) fn detail_items(toggles: &SectionToggles) -> Vec<DetailItem> {
    let groups = specs_by_category();
    let mut items = Vec::new();
    for (id, title) in DETAIL_SECTIONS {
        items.push(DetailItem::Section { id, title });
        if !toggles.is_open(id) {
            continue;
        }
        if let Some(group) = groups.iter().find(|g| g.category.section_id() == id) {
            items.extend(group.specs.iter().copied().map(DetailItem::Spec));
        }
    }
    items
}

/// One open detail page.
#[derive(Debug, Clone)]
pub struct DetailPage {
    /// Route slug; may not resolve
    pub slug: String,
    pub state: DetailState,
    pub cursor: ListState,
    /// First visible line, maintained by the renderer
    pub scroll: u16,
}

impl DetailPage {
    fn new(slug: String) -> Self {
        let state = DetailState::default();
        let cursor = ListState::with_total(detail_items(&state.toggles).len());
        Self {
            slug,
            state,
            cursor,
            scroll: 0,
        }
    }

    pub(crate) fn items(&self) -> Vec<DetailItem> {
        detail_items(&self.state.toggles)
    }

    fn sync_cursor(&mut self) {
        let total = self.items().len();
        self.cursor.resize(total);
    }

    fn focus_spec(&mut self, spec_id: &str) {
        if let Some(pos) = self
            .items()
            .iter()
            .position(|item| item.spec_id() == Some(spec_id))
        {
            self.cursor.selected = pos;
        }
    }
}

/// Cursor over the comparison table, in visible-row coordinates.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CompareCursor {
    pub column: usize,
    pub row: usize,
}

/// Support level explainer state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SupportInfoState {
    /// Index into [`SupportType::ALL`]
    pub selected: usize,
    /// Whether the extra sections are shown
    pub expanded: bool,
}

impl SupportInfoState {
    pub fn current(&self) -> SupportType {
        SupportType::ALL[self.selected % SupportType::ALL.len()].clone()
    }
}

impl ListNavigation for SupportInfoState {
    fn cursor(&self) -> usize {
        self.selected
    }

    fn item_count(&self) -> usize {
        SupportType::ALL.len()
    }

    fn place(&mut self, index: usize) {
        self.selected = index;
    }
}

/// What a pointer position on the comparison table refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum CompareTarget {
    Cell(CellPosition),
    /// A row label or category header; clicks here keep the selection
    Label,
    Outside,
}

/// Geometry of the last rendered comparison table, for mouse hit-testing.
#[derive(Debug, Clone, Default)]
pub(crate) struct CompareHit {
    pub body: Rect,
    pub label_width: u16,
    pub column_width: u16,
    pub first_column: usize,
    pub columns: usize,
    /// Spec id of each body line, `None` for category headers
    pub rows: Vec<Option<&'static str>>,
}

impl CompareHit {
    pub(crate) fn target(&self, x: u16, y: u16) -> CompareTarget {
        let body = self.body;
        if x < body.x || x >= body.x + body.width || y < body.y || y >= body.y + body.height {
            return CompareTarget::Outside;
        }
        let Some(Some(spec_key)) = self.rows.get(usize::from(y - body.y)).copied() else {
            return CompareTarget::Label;
        };
        let offset_x = x - body.x;
        if offset_x < self.label_width || self.column_width == 0 {
            return CompareTarget::Label;
        }
        let column = self.first_column + usize::from((offset_x - self.label_width) / self.column_width);
        if column >= self.first_column + self.columns {
            return CompareTarget::Outside;
        }
        CompareTarget::Cell(CellPosition::new(column, spec_key))
    }
}

/// Geometry of the last rendered list or grid, for mouse hit-testing.
#[derive(Debug, Clone, Copy, Default)]
pub(crate) struct ListHit {
    pub body: Rect,
    pub offset: usize,
    /// Cards per row in grid mode, 1 for the list
    pub columns: usize,
    pub item_width: u16,
    pub item_height: u16,
}

impl ListHit {
    pub(crate) fn index_at(&self, x: u16, y: u16) -> Option<usize> {
        let body = self.body;
        if x < body.x || x >= body.x + body.width || y < body.y || y >= body.y + body.height {
            return None;
        }
        let row = usize::from((y - body.y) / self.item_height.max(1));
        let col = usize::from((x - body.x) / self.item_width.max(1));
        if col >= self.columns.max(1) {
            return None;
        }
        Some(self.offset + row * self.columns.max(1) + col)
    }
}

/// Main application state for the catalog browser.
pub struct CatalogApp {
    pub(crate) dataset: Dataset,
    pub(crate) catalog: CatalogState,
    pub(crate) facets: FacetOptions,

    /// Cursor over the visible list
    pub(crate) list: ListState,
    pub(crate) grid_view: bool,
    /// Cards per grid row, maintained by the renderer
    pub(crate) grid_columns: usize,

    pub(crate) selection: SelectionSet,
    pub(crate) view: CatalogView,
    history: Vec<CatalogView>,

    pub(crate) detail: Option<DetailPage>,
    pub(crate) comparison: Comparison,
    pub(crate) compare_cursor: CompareCursor,
    pub(crate) only_differences: bool,

    pub(crate) overlay: OverlayState,
    pub(crate) filter_drawer: ListState,
    pub(crate) support_info: SupportInfoState,
    pub(crate) quick_nav: ListState,
    pending_jump: Option<&'static str>,

    pub(crate) search: SearchInput,
    pub(crate) status: StatusMessage,

    pub(crate) list_hit: Option<ListHit>,
    pub(crate) compare_hit: Option<CompareHit>,

    pub(crate) mouse_enabled: bool,
    pub(crate) should_quit: bool,
    pub(crate) tick: u64,
}

impl CatalogApp {
    /// Create the app over a loaded dataset with configured defaults.
    #[must_use]
    pub fn new(dataset: Dataset, config: &AppConfig) -> Self {
        let catalog = CatalogState::new(&dataset, config.catalog.sort);
        let facets = FacetOptions::from_dataset(&dataset);
        let list = ListState::with_total(catalog.visible_count());
        let quick_nav_total = quick_nav_entries().len();
        Self {
            dataset,
            catalog,
            facets,
            list,
            grid_view: config.tui.grid_view,
            grid_columns: 1,
            selection: SelectionSet::new(),
            view: CatalogView::List,
            history: Vec::new(),
            detail: None,
            comparison: terminal_comparison(Vec::new()),
            compare_cursor: CompareCursor::default(),
            only_differences: false,
            overlay: OverlayState::new(),
            filter_drawer: ListState::with_total(FilterRow::ALL.len()),
            support_info: SupportInfoState::default(),
            quick_nav: ListState::with_total(quick_nav_total),
            pending_jump: None,
            search: SearchInput::new(),
            status: StatusMessage::new(),
            list_hit: None,
            compare_hit: None,
            mouse_enabled: config.tui.mouse_enabled,
            should_quit: false,
            tick: 0,
        }
    }

    pub fn dataset(&self) -> &Dataset {
        &self.dataset
    }

    pub fn filters(&self) -> &FilterState {
        &self.catalog.filters
    }

    pub const fn view(&self) -> CatalogView {
        self.view
    }

    // ------------------------------------------------------------------
    // Catalog list
    // ------------------------------------------------------------------

    /// Recompute the visible list and keep the cursor in range.
    pub fn refresh(&mut self) {
        self.catalog.refresh(&self.dataset);
        self.list.resize(self.catalog.visible_count());
    }

    /// Replace every filter at once.
    pub fn set_filters(&mut self, filters: FilterState) {
        self.catalog.filters = filters;
        self.refresh();
    }

    /// Record under the list cursor.
    pub fn selected_record(&self) -> Option<&VehicleRecord> {
        self.catalog
            .visible_record(&self.dataset, self.list.selected)
    }

    pub fn visible_records(&self) -> impl Iterator<Item = &VehicleRecord> {
        self.catalog
            .visible()
            .iter()
            .filter_map(|&i| self.dataset.get(i))
    }

    pub fn cycle_sort(&mut self) {
        self.catalog.sort.cycle_field();
        self.refresh();
        self.status.set(format!("Sorted by {}", self.catalog.sort));
    }

    pub fn reverse_sort(&mut self) {
        self.catalog.sort.toggle_order();
        self.refresh();
        self.status.set(format!("Sorted by {}", self.catalog.sort));
    }

    pub fn clear_filters(&mut self) {
        self.catalog.filters.clear_all();
        self.refresh();
        self.status.set("Filters cleared");
    }

    pub fn toggle_grid(&mut self) {
        self.grid_view = !self.grid_view;
    }

    /// Move the cursor one step left or right in the grid, or one row up or
    /// down in either layout.
    pub fn move_cursor(&mut self, dx: isize, dy: isize) {
        let columns = if self.grid_view {
            self.grid_columns.max(1)
        } else {
            1
        };
        let delta = dy.saturating_mul(columns as isize).saturating_add(dx);
        self.list.step(delta);
    }

    // ------------------------------------------------------------------
    // Search
    // ------------------------------------------------------------------

    pub fn start_search(&mut self) {
        let current = self.catalog.filters.query().to_string();
        self.search.start(&current);
    }

    pub fn search_push_char(&mut self, c: char) {
        self.search.push_char(c);
        self.apply_search_text();
    }

    pub fn search_pop_char(&mut self) {
        self.search.pop_char();
        self.apply_search_text();
    }

    pub fn search_pop_word(&mut self) {
        self.search.pop_word();
        self.apply_search_text();
    }

    pub fn commit_search(&mut self) {
        self.search.commit();
    }

    pub fn cancel_search(&mut self) {
        let restored = self.search.cancel().to_string();
        self.catalog.filters.set_query(restored);
        self.refresh();
    }

    fn apply_search_text(&mut self) {
        self.catalog.filters.set_query(self.search.query.clone());
        self.refresh();
        self.list.go_first();
    }

    // ------------------------------------------------------------------
    // Filter drawer
    // ------------------------------------------------------------------

    pub fn selected_filter_row(&self) -> FilterRow {
        FilterRow::ALL[self.filter_drawer.selected.min(FilterRow::ALL.len() - 1)]
    }

    /// Step the value of the focused drawer row.
    pub fn cycle_filter(&mut self, forward: bool) {
        let row = self.selected_filter_row();
        row.cycle(&mut self.catalog.filters, &self.facets, forward);
        self.refresh();
    }

    /// Reset the focused drawer row.
    pub fn clear_filter_row(&mut self) {
        let row = self.selected_filter_row();
        self.catalog.filters.remove(row.key());
        if row == FilterRow::Make {
            self.catalog.filters.remove(FilterRow::Model.key());
        }
        self.refresh();
    }

    // ------------------------------------------------------------------
    // Selection and compare mode
    // ------------------------------------------------------------------

    pub fn toggle_compare_mode(&mut self) {
        self.selection.toggle_compare_mode();
        if self.selection.compare_mode() {
            self.status.set(format!("Compare mode: select up to {MAX_SELECTED} cars"));
        } else {
            self.status.set("Compare mode off");
        }
    }

    /// Add or remove the vehicle under the cursor.
    pub fn toggle_selected_vehicle(&mut self) {
        let Some(name) = self.selected_record().map(|r| r.name.clone()) else {
            return;
        };
        match self.selection.toggle(&name) {
            ToggleOutcome::Added => self
                .status
                .set(format!("Selected {name} ({}/{MAX_SELECTED})", self.selection.len())),
            ToggleOutcome::Removed => self.status.set(format!("Removed {name}")),
            ToggleOutcome::Full => self
                .status
                .warn(format!("You can compare up to {MAX_SELECTED} cars")),
        }
    }

    /// Open the comparison for the current selection.
    pub fn compare_selection(&mut self) {
        if !self.selection.can_compare() {
            let (heading, hint) = ComparisonView::empty_message(self.selection.len());
            self.status.warn(format!("{heading}. {hint}"));
            return;
        }
        self.open_comparison(self.selection.names().to_vec());
    }

    /// Show the comparison table for `names` in column order.
    pub fn open_comparison(&mut self, names: Vec<String>) {
        self.selection.clear();
        self.selection.enter_compare_mode();
        for name in names.iter().take(MAX_SELECTED) {
            self.selection.toggle(name);
        }
        self.comparison = terminal_comparison(self.selection.names().to_vec());
        self.compare_cursor = CompareCursor::default();
        self.navigate(CatalogView::Compare);
    }

    /// Spec ids of the visible comparison rows.
    pub fn compare_row_ids(&self) -> Vec<&'static str> {
        match self.comparison.view(&self.dataset) {
            ComparisonView::Ready(table) => table
                .rows()
                .filter(|row| !self.only_differences || row.differs())
                .map(|row| row.spec_id)
                .collect(),
            ComparisonView::NotEnoughSelected { .. } => Vec::new(),
        }
    }

    fn cursor_cell(&self) -> Option<CellPosition> {
        let rows = self.compare_row_ids();
        rows.get(self.compare_cursor.row)
            .map(|spec| CellPosition::new(self.compare_cursor.column, spec))
    }

    /// Move the table cursor; the cell under it becomes the hovered cell.
    pub fn move_compare_cursor(&mut self, dx: isize, dy: isize) {
        let columns = self.comparison.names().len();
        let rows = self.compare_row_ids().len();
        if columns == 0 || rows == 0 {
            return;
        }
        let cursor = &mut self.compare_cursor;
        cursor.column = cursor.column.saturating_add_signed(dx).min(columns - 1);
        cursor.row = cursor.row.saturating_add_signed(dy).min(rows - 1);
        if let Some(cell) = self.cursor_cell() {
            self.comparison.highlight.hover(cell);
        }
    }

    /// Click the cell under the cursor.
    pub fn click_compare_cursor(&mut self) {
        if let Some(cell) = self.cursor_cell() {
            self.comparison.highlight.click(cell);
        }
    }

    /// Pointer moved over the comparison table.
    pub(crate) fn compare_pointer_moved(&mut self, target: CompareTarget) {
        match target {
            CompareTarget::Cell(cell) => self.comparison.highlight.hover(cell),
            CompareTarget::Label => {}
            CompareTarget::Outside => self.comparison.highlight.leave(),
        }
    }

    /// Pointer clicked somewhere in the compare view.
    pub(crate) fn compare_pointer_clicked(&mut self, target: CompareTarget) {
        match target {
            CompareTarget::Cell(cell) => {
                self.comparison.highlight.click(cell);
                if let Some(row) = self.compare_row_ids().iter().position(|id| *id == cell.spec_key) {
                    self.compare_cursor = CompareCursor {
                        column: cell.column,
                        row,
                    };
                }
            }
            CompareTarget::Label => {}
            CompareTarget::Outside => self.comparison.highlight.click_outside(),
        }
    }

    /// Drop the column under the cursor.
    pub fn remove_compare_column(&mut self) {
        let Some(name) = self
            .comparison
            .names()
            .get(self.compare_cursor.column)
            .cloned()
        else {
            return;
        };
        self.selection.remove(&name);
        match self.comparison.remove(&name) {
            RemoveOutcome::Updated { cars } => {
                let last = self.comparison.names().len().saturating_sub(1);
                self.compare_cursor.column = self.compare_cursor.column.min(last);
                self.status.set(format!("Removed {name} (cars={cars})"));
            }
            RemoveOutcome::BackToSelection => {
                self.history.clear();
                self.view = CatalogView::List;
                self.selection.enter_compare_mode();
                self.status
                    .set("Select at least 2 cars to compare");
            }
            RemoveOutcome::NotInComparison => {}
        }
    }

    pub fn toggle_only_differences(&mut self) {
        self.only_differences = !self.only_differences;
        let rows = self.compare_row_ids().len();
        self.compare_cursor.row = self.compare_cursor.row.min(rows.saturating_sub(1));
        self.comparison.highlight.clear();
        if self.only_differences {
            self.status.set(format!("Showing {rows} differing specs"));
        } else {
            self.status.set("Showing all specs");
        }
    }

    pub fn toggle_fit(&mut self) {
        self.comparison.fit.toggle();
    }

    // ------------------------------------------------------------------
    // Detail pages
    // ------------------------------------------------------------------

    /// Open the detail page for a name or slug. Unknown vehicles still
    /// open, showing a not-found page.
    pub fn open_detail(&mut self, ident: &str) {
        let slug = self
            .dataset
            .resolve(ident)
            .map_or_else(|| slugify(ident), VehicleRecord::slug);
        self.detail = Some(DetailPage::new(slug));
        self.navigate(CatalogView::Detail);
    }

    pub fn open_selected_detail(&mut self) {
        if let Some(slug) = self.selected_record().map(VehicleRecord::slug) {
            self.open_detail(&slug);
        }
    }

    pub fn detail_record(&self) -> Option<&VehicleRecord> {
        self.detail
            .as_ref()
            .and_then(|page| self.dataset.find_by_slug(&page.slug))
    }

    /// Enter on a detail item: toggle its section or its description.
    pub fn activate_detail_item(&mut self) {
        let Some(page) = self.detail.as_mut() else {
            return;
        };
        match page.items().get(page.cursor.selected).copied() {
            Some(DetailItem::Section { id, .. }) => {
                page.state.toggles.toggle(id);
                page.sync_cursor();
            }
            Some(DetailItem::Spec(spec)) => page.state.toggle_description(spec.id),
            None => {}
        }
    }

    pub fn toggle_all_sections(&mut self) {
        if let Some(page) = self.detail.as_mut() {
            page.state.toggles.toggle_all();
            page.sync_cursor();
        }
    }

    /// Choose the focused quick-nav entry: the drawer closes, then the
    /// page jumps.
    pub fn choose_quick_nav(&mut self) {
        let entries = quick_nav_entries();
        let Some(entry) = entries.get(self.quick_nav.selected) else {
            return;
        };
        self.pending_jump = Some(entry.spec_id);
        self.overlay.close_after(DRAWER_CLOSE_TICKS);
    }

    // ------------------------------------------------------------------
    // Navigation
    // ------------------------------------------------------------------

    fn navigate(&mut self, view: CatalogView) {
        if self.view != view {
            self.history.push(self.view);
        }
        self.view = view;
        self.overlay.close();
    }

    /// Return to the previous screen. Returns `false` at the catalog root.
    pub fn go_back(&mut self) -> bool {
        match self.history.pop() {
            Some(previous) => {
                self.view = previous;
                if self.view != CatalogView::Compare {
                    self.comparison.highlight.clear();
                }
                true
            }
            None if self.view != CatalogView::List => {
                self.view = CatalogView::List;
                true
            }
            None => false,
        }
    }

    pub fn show_support_info(&mut self, support: Option<&SupportType>) {
        if let Some(pos) = support.and_then(|s| SupportType::ALL.iter().position(|t| t == s)) {
            self.support_info.selected = pos;
        }
        self.support_info.expanded = false;
        self.overlay.show(OverlayKind::SupportInfo);
    }

    pub fn cycle_support_info(&mut self, forward: bool) {
        self.support_info.cycle(forward);
        self.support_info.expanded = false;
    }

    /// Advance timers: status expiry, drawer close, and detail scrolling.
    pub fn on_tick(&mut self) {
        self.tick = self.tick.wrapping_add(1);
        self.status.tick();
        if self.overlay.tick() {
            if let (Some(spec), Some(page)) = (self.pending_jump.take(), self.detail.as_mut()) {
                page.state.jump_to(spec);
                page.sync_cursor();
            }
        }
        if let Some(page) = self.detail.as_mut() {
            if let Some(spec) = page.state.tick() {
                page.focus_spec(spec);
            }
        }
    }

    /// Viewport size changed; drops any fit-to-screen zoom.
    pub fn on_resize(&mut self) {
        self.comparison.fit.reset();
    }
}

/// A comparison measured in terminal cells.
fn terminal_comparison(names: Vec<String>) -> Comparison {
    let mut comparison = Comparison::new(names);
    comparison.fit = FitState::new(FitConfig::terminal());
    comparison
}

/// Quick-nav entries flattened in drawer order.
pub(crate) fn quick_nav_entries() -> Vec<QuickNavEntry> {
    quick_nav_groups()
        .into_iter()
        .flat_map(|(_, entries)| entries)
        .collect()
}
