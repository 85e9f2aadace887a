//! Live search input.
//!
//! The query applies on every keystroke. Enter keeps it, Esc restores the
//! query that was in effect when editing started.

/// Editing state of the search box.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchInput {
    /// Whether the search box has focus
    pub active: bool,
    /// Current contents of the box
    pub query: String,
    /// Query to restore on cancel
    original: String,
}

impl SearchInput {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Focus the box, starting from the query currently applied.
    pub fn start(&mut self, current: &str) {
        self.active = true;
        self.query = current.to_string();
        self.original = current.to_string();
    }

    pub fn push_char(&mut self, c: char) {
        self.query.push(c);
    }

    pub fn pop_char(&mut self) {
        self.query.pop();
    }

    /// Delete the last word, like Ctrl+W in a shell.
    pub fn pop_word(&mut self) {
        let trimmed = self.query.trim_end().len();
        self.query.truncate(trimmed);
        let cut = self
            .query
            .rfind(char::is_whitespace)
            .map_or(0, |i| i + 1);
        self.query.truncate(cut);
    }

    /// Keep the edited query and leave the box.
    pub fn commit(&mut self) -> &str {
        self.active = false;
        self.original.clone_from(&self.query);
        &self.query
    }

    /// Leave the box and return the query to restore.
    pub fn cancel(&mut self) -> &str {
        self.active = false;
        self.query.clone_from(&self.original);
        &self.query
    }
}
