//! Hover and selection highlighting for the comparison table.

/// A cell addressed by column and spec key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CellPosition {
    pub column: usize,
    pub spec_key: &'static str,
}

impl CellPosition {
    pub const fn new(column: usize, spec_key: &'static str) -> Self {
        Self { column, spec_key }
    }
}

/// Style of a value cell, strongest first.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellStyle {
    Selected,
    ColumnSelected,
    ColumnHovered,
    Default,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowStyle {
    Selected,
    Hovered,
    Even,
    Odd,
}

/// Style of a column header card.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardStyle {
    Selected,
    Hovered,
    Default,
}

/// Two independent highlight slots.
///
/// `hovered` follows the pointer. `selected` is sticky and changes only on
/// clicks.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HighlightState {
    pub hovered: Option<CellPosition>,
    pub selected: Option<CellPosition>,
}

impl HighlightState {
    pub fn hover(&mut self, cell: CellPosition) {
        self.hovered = Some(cell);
    }

    /// Pointer left the table.
    pub fn leave(&mut self) {
        self.hovered = None;
    }

    /// Click a cell: select it, move the selection to it, or clear the
    /// selection when it is already selected.
    pub fn click(&mut self, cell: CellPosition) {
        if self.selected == Some(cell) {
            self.selected = None;
        } else {
            self.selected = Some(cell);
        }
    }

    /// Click somewhere that is not a cell, a row label or a control that
    /// preserves the selection.
    pub fn click_outside(&mut self) {
        self.selected = None;
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }

    pub fn is_column_selected(&self, column: usize) -> bool {
        self.selected.is_some_and(|c| c.column == column)
    }

    pub fn is_column_hovered(&self, column: usize) -> bool {
        self.hovered.is_some_and(|c| c.column == column)
    }

    pub fn is_row_selected(&self, spec_key: &str) -> bool {
        self.selected.is_some_and(|c| c.spec_key == spec_key)
    }

    pub fn is_row_hovered(&self, spec_key: &str) -> bool {
        self.hovered.is_some_and(|c| c.spec_key == spec_key)
    }

    pub fn cell_style(&self, column: usize, spec_key: &str) -> CellStyle {
        if self
            .selected
            .is_some_and(|c| c.column == column && c.spec_key == spec_key)
        {
            CellStyle::Selected
        } else if self.is_column_selected(column) {
            CellStyle::ColumnSelected
        } else if self.is_column_hovered(column) && !self.is_row_hovered(spec_key) {
            // The hovered row carries its own style.
            CellStyle::ColumnHovered
        } else {
            CellStyle::Default
        }
    }

    pub fn row_style(&self, spec_key: &str, row_index: usize) -> RowStyle {
        if self.is_row_selected(spec_key) {
            RowStyle::Selected
        } else if self.is_row_hovered(spec_key) {
            RowStyle::Hovered
        } else if row_index % 2 == 0 {
            RowStyle::Even
        } else {
            RowStyle::Odd
        }
    }

    pub fn card_style(&self, column: usize) -> CardStyle {
        if self.is_column_selected(column) {
            CardStyle::Selected
        } else if self.is_column_hovered(column) {
            CardStyle::Hovered
        } else {
            CardStyle::Default
        }
    }

    /// Row labels light up only for the selected row.
    pub fn label_highlighted(&self, spec_key: &str) -> bool {
        self.is_row_selected(spec_key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const WHEELBASE: &str = "wheelbase";
    const MASS: &str = "mass_curb_weight";

    #[test]
    fn test_click_selects_moves_and_clears() {
        let mut state = HighlightState::default();
        let a = CellPosition::new(0, WHEELBASE);
        let b = CellPosition::new(1, MASS);

        state.click(a);
        assert_eq!(state.selected, Some(a));
        state.click(b);
        assert_eq!(state.selected, Some(b));
        state.click(b);
        assert_eq!(state.selected, None);
    }

    #[test]
    fn test_click_outside_keeps_hover() {
        let mut state = HighlightState::default();
        state.hover(CellPosition::new(2, MASS));
        state.click(CellPosition::new(0, WHEELBASE));
        state.click_outside();
        assert_eq!(state.selected, None);
        assert!(state.hovered.is_some());
        state.leave();
        assert_eq!(state.hovered, None);
    }

    #[test]
    fn test_cell_precedence() {
        let mut state = HighlightState::default();
        state.click(CellPosition::new(1, WHEELBASE));
        state.hover(CellPosition::new(2, MASS));

        assert_eq!(state.cell_style(1, WHEELBASE), CellStyle::Selected);
        assert_eq!(state.cell_style(1, MASS), CellStyle::ColumnSelected);
        assert_eq!(state.cell_style(2, WHEELBASE), CellStyle::ColumnHovered);
        // Hover is suppressed on the hovered row itself.
        assert_eq!(state.cell_style(2, MASS), CellStyle::Default);
        assert_eq!(state.cell_style(0, WHEELBASE), CellStyle::Default);
    }

    #[test]
    fn test_row_card_label_styles() {
        let mut state = HighlightState::default();
        assert_eq!(state.row_style(WHEELBASE, 0), RowStyle::Even);
        assert_eq!(state.row_style(WHEELBASE, 3), RowStyle::Odd);

        state.hover(CellPosition::new(0, WHEELBASE));
        assert_eq!(state.row_style(WHEELBASE, 3), RowStyle::Hovered);
        assert_eq!(state.card_style(0), CardStyle::Hovered);

        state.click(CellPosition::new(0, WHEELBASE));
        assert_eq!(state.row_style(WHEELBASE, 3), RowStyle::Selected);
        assert_eq!(state.card_style(0), CardStyle::Selected);
        assert!(state.label_highlighted(WHEELBASE));
        assert!(!state.label_highlighted(MASS));
    }
}
