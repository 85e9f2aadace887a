//! Overlay state management for the catalog TUI.
//!
//! Overlays are the help screen, the filter drawer, the support level
//! explainer and the quick-nav drawer. At most one is open at a time.

/// Available overlay types.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OverlayKind {
    /// Help/shortcuts overlay
    Help,
    /// Filter drawer
    Filters,
    /// Explanation of the support levels
    SupportInfo,
    /// Quick navigation between detail specs
    QuickNav,
}

impl OverlayKind {
    pub const fn title(self) -> &'static str {
        match self {
            Self::Help => "Keyboard Shortcuts",
            Self::Filters => "Filters",
            Self::SupportInfo => "Support Types",
            Self::QuickNav => "Quick Navigation",
        }
    }
}

/// Manages overlay visibility with mutual exclusion.
///
/// Showing an overlay closes whichever one was open. A drawer can also be
/// closed with a delay so a follow-up action starts only after it is gone.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OverlayState {
    current: Option<OverlayKind>,
    pending_close: Option<u16>,
}

impl OverlayState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Check if any overlay is currently visible.
    pub fn has_overlay(&self) -> bool {
        self.current.is_some()
    }

    pub fn is_showing(&self, kind: OverlayKind) -> bool {
        self.current == Some(kind)
    }

    pub fn current(&self) -> Option<OverlayKind> {
        self.current
    }

    /// Show a specific overlay, closing any other.
    pub fn show(&mut self, kind: OverlayKind) {
        self.current = Some(kind);
        self.pending_close = None;
    }

    pub fn close(&mut self) {
        self.current = None;
        self.pending_close = None;
    }

    /// Toggle a specific overlay.
    pub fn toggle(&mut self, kind: OverlayKind) {
        if self.current == Some(kind) {
            self.close();
        } else {
            self.show(kind);
        }
    }

    /// Close the current overlay after `ticks` ticks.
    pub fn close_after(&mut self, ticks: u16) {
        if self.current.is_some() {
            self.pending_close = Some(ticks);
        }
    }

    pub fn is_closing(&self) -> bool {
        self.pending_close.is_some()
    }

    /// Advance one tick. Returns `true` on the tick a delayed close happens.
    pub fn tick(&mut self) -> bool {
        match self.pending_close {
            Some(0) => {
                self.close();
                true
            }
            Some(remaining) => {
                self.pending_close = Some(remaining - 1);
                false
            }
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_overlay_state_mutual_exclusion() {
        let mut state = OverlayState::new();
        assert!(!state.has_overlay());

        state.show(OverlayKind::Help);
        assert!(state.is_showing(OverlayKind::Help));

        state.show(OverlayKind::Filters);
        assert!(state.is_showing(OverlayKind::Filters));
        assert!(!state.is_showing(OverlayKind::Help));
    }

    #[test]
    fn test_overlay_state_toggle() {
        let mut state = OverlayState::new();

        state.toggle(OverlayKind::SupportInfo);
        assert_eq!(state.current(), Some(OverlayKind::SupportInfo));

        state.toggle(OverlayKind::SupportInfo);
        assert!(!state.has_overlay());

        state.toggle(OverlayKind::Help);
        state.toggle(OverlayKind::QuickNav);
        assert!(state.is_showing(OverlayKind::QuickNav));
    }

    #[test]
    fn test_delayed_close() {
        let mut state = OverlayState::new();
        state.show(OverlayKind::QuickNav);
        state.close_after(2);
        assert!(state.is_closing());
        assert!(!state.tick());
        assert!(!state.tick());
        assert!(state.is_showing(OverlayKind::QuickNav));
        assert!(state.tick());
        assert!(!state.has_overlay());
        assert!(!state.tick());
    }

    #[test]
    fn test_reopening_cancels_delayed_close() {
        let mut state = OverlayState::new();
        state.show(OverlayKind::QuickNav);
        state.close_after(1);
        state.show(OverlayKind::QuickNav);
        assert!(!state.is_closing());

        // Nothing to close when nothing is open.
        state.close();
        state.close_after(1);
        assert!(!state.is_closing());
    }
}
