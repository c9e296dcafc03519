//! Search box state
//!
//! The listing page keeps two pieces of UI state: the query text and whether
//! the suggestion dropdown is open.

use serde::Serialize;

/// Query text plus suggestion-visibility flag
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SearchState {
    query: String,
    show_suggestions: bool,
}

impl SearchState {
    /// Empty query, dropdown closed
    pub fn new() -> Self {
        Self::default()
    }

    /// User typed into the box
    pub fn input(&mut self, text: impl Into<String>) {
        self.query = text.into();
        self.show_suggestions = true;
    }

    /// Box gained focus
    pub fn focus(&mut self) {
        self.show_suggestions = true;
    }

    /// Box lost focus
    pub fn blur(&mut self) {
        self.show_suggestions = false;
    }

    /// A suggestion was picked: its name becomes the query and the dropdown closes.
    pub fn select(&mut self, name: impl Into<String>) {
        self.query = name.into();
        self.show_suggestions = false;
    }

    /// Current query text
    pub fn query(&self) -> &str {
        &self.query
    }

    /// Whether the dropdown is open
    pub fn suggestions_visible(&self) -> bool {
        self.show_suggestions
    }
}
