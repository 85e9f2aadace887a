//! Cursor state shared by the catalog list and grid, the filter and
//! quick-nav drawers, the detail page and the support level explainer.

use super::constants::PAGE_SIZE;

/// A cursor over a list whose length changes as filters are applied.
///
/// Implementors expose the cursor and the item count; every movement is
/// derived from [`step`](Self::step), which stops at either end, or
/// [`cycle`](Self::cycle), which wraps around.
pub trait ListNavigation {
    fn cursor(&self) -> usize;

    fn item_count(&self) -> usize;

    /// Store a cursor position. Callers pass an in-range index.
    fn place(&mut self, index: usize);

    /// Move by `delta` items, clamped to the list. An empty list parks the
    /// cursor at 0.
    fn step(&mut self, delta: isize) {
        let count = self.item_count();
        if count == 0 {
            self.place(0);
            return;
        }
        let target = self.cursor().saturating_add_signed(delta);
        self.place(target.min(count - 1));
    }

    /// Move one item forward or back, wrapping at either end.
    fn cycle(&mut self, forward: bool) {
        let count = self.item_count();
        if count == 0 {
            return;
        }
        let current = self.cursor() % count;
        self.place(if forward {
            (current + 1) % count
        } else {
            (current + count - 1) % count
        });
    }

    fn select_next(&mut self) {
        self.step(1);
    }

    fn select_prev(&mut self) {
        self.step(-1);
    }

    fn page_down(&mut self) {
        self.step(PAGE_SIZE as isize);
    }

    fn page_up(&mut self) {
        self.step(-(PAGE_SIZE as isize));
    }

    fn go_first(&mut self) {
        self.place(0);
    }

    fn go_last(&mut self) {
        self.place(self.item_count().saturating_sub(1));
    }
}

/// Cursor plus scroll window for a rendered list.
#[derive(Debug, Clone, Default)]
pub struct ListState {
    pub selected: usize,
    pub total: usize,
    /// First visible row (or first visible grid cell)
    pub scroll_offset: usize,
}

impl ListState {
    pub fn with_total(total: usize) -> Self {
        Self {
            total,
            ..Self::default()
        }
    }

    /// Take the new item count after the visible list changed. The cursor
    /// stays on the same index when it can, otherwise on the last item, and
    /// the scroll window never starts below it.
    pub fn resize(&mut self, total: usize) {
        self.total = total;
        self.step(0);
        self.scroll_offset = self.scroll_offset.min(self.selected);
    }
}

impl ListNavigation for ListState {
    fn cursor(&self) -> usize {
        self.selected
    }

    fn item_count(&self) -> usize {
        self.total
    }

    fn place(&mut self, index: usize) {
        self.selected = index;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_step_stops_at_ends() {
        let mut state = ListState::with_total(7);
        state.select_prev();
        assert_eq!(state.selected, 0);

        // Grid rows of three
        state.step(3);
        state.step(3);
        assert_eq!(state.selected, 6);
        state.step(3);
        assert_eq!(state.selected, 6);
        state.step(-4);
        assert_eq!(state.selected, 2);
        state.step(-4);
        assert_eq!(state.selected, 0);
    }

    #[test]
    fn test_paging_and_jumps() {
        let mut state = ListState::with_total(25);
        state.page_down();
        assert_eq!(state.selected, PAGE_SIZE);
        state.page_down();
        state.page_down();
        assert_eq!(state.selected, 24);
        state.page_up();
        assert_eq!(state.selected, 24 - PAGE_SIZE);

        state.go_first();
        assert_eq!(state.selected, 0);
        state.go_last();
        assert_eq!(state.selected, 24);
    }

    #[test]
    fn test_empty_list_parks_cursor() {
        let mut state = ListState::with_total(0);
        state.select_next();
        state.page_down();
        state.go_last();
        assert_eq!(state.selected, 0);
        state.cycle(true);
        assert_eq!(state.selected, 0);
    }

    #[test]
    fn test_cycle_wraps() {
        let mut state = ListState::with_total(5);
        state.cycle(false);
        assert_eq!(state.selected, 4);
        state.cycle(true);
        assert_eq!(state.selected, 0);
        state.cycle(true);
        assert_eq!(state.selected, 1);
    }

    #[test]
    fn test_resize_after_filtering() {
        let mut state = ListState::with_total(40);
        state.selected = 30;
        state.scroll_offset = 25;
        state.resize(3);
        assert_eq!(state.selected, 2);
        assert_eq!(state.scroll_offset, 2);

        state.resize(40);
        assert_eq!(state.selected, 2);

        state.resize(0);
        assert_eq!(state.selected, 0);
        assert_eq!(state.scroll_offset, 0);
    }
}
