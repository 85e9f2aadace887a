//! Status message shown in the status bar.
//!
//! Messages expire after a number of event loop ticks rather than wall
//! time, so they behave the same under test as in a terminal.

use crate::tui::constants::STATUS_TICKS;

/// How a status message is styled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StatusLevel {
    #[default]
    Info,
    Warning,
}

/// A temporary status message with tick-based expiry.
///
/// ```ignore
/// let mut status = StatusMessage::new();
/// status.set("Comparing 3 cars");
/// assert_eq!(status.peek(), Some("Comparing 3 cars"));
/// ```
#[derive(Debug, Clone, Default)]
pub struct StatusMessage {
    message: Option<String>,
    level: StatusLevel,
    remaining: u16,
}

impl StatusMessage {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set an informational message.
    pub fn set(&mut self, msg: impl Into<String>) {
        self.show(msg.into(), StatusLevel::Info);
    }

    /// Set a warning, for actions that were refused.
    pub fn warn(&mut self, msg: impl Into<String>) {
        self.show(msg.into(), StatusLevel::Warning);
    }

    fn show(&mut self, msg: String, level: StatusLevel) {
        self.message = Some(msg);
        self.level = level;
        self.remaining = STATUS_TICKS;
    }

    pub fn clear(&mut self) {
        self.message = None;
        self.remaining = 0;
    }

    /// Count down one tick, clearing the message when it expires.
    pub fn tick(&mut self) {
        if self.message.is_none() {
            return;
        }
        self.remaining = self.remaining.saturating_sub(1);
        if self.remaining == 0 {
            self.message = None;
        }
    }

    #[must_use]
    pub fn peek(&self) -> Option<&str> {
        self.message.as_deref()
    }

    #[must_use]
    pub const fn level(&self) -> StatusLevel {
        self.level
    }

    #[must_use]
    pub const fn has_message(&self) -> bool {
        self.message.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_message_set_clear() {
        let mut status = StatusMessage::new();
        assert!(!status.has_message());

        status.set("Sorted by year");
        assert_eq!(status.peek(), Some("Sorted by year"));
        assert_eq!(status.level(), StatusLevel::Info);

        status.clear();
        assert!(status.peek().is_none());
    }

    #[test]
    fn test_status_message_expires() {
        let mut status = StatusMessage::new();
        status.warn("Selection is full");
        assert_eq!(status.level(), StatusLevel::Warning);
        for _ in 1..STATUS_TICKS {
            status.tick();
        }
        assert!(status.has_message());
        status.tick();
        assert!(!status.has_message());
    }
}
