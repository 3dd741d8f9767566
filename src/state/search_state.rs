//! Search box state.

/// Live query typed into the search box.
///
/// The grid is filtered against this query on every frame; nothing derived
/// from it is cached.
#[derive(Debug, Clone, Default)]
pub struct SearchState {
    query: String,
}

impl SearchState {
    /// Creates an empty search state.
    pub fn new() -> Self {
        Self {
            query: String::new(),
        }
    }

    /// Returns the current query.
    pub fn query(&self) -> &str {
        &self.query
    }

    /// True when a non-empty query is filtering the grid.
    pub fn is_filtering(&self) -> bool {
        !self.query.is_empty()
    }

    /// Clears the query.
    pub fn clear(&mut self) {
        self.query.clear();
    }

    /// Mutable access to the query buffer for the text field.
    pub(crate) fn query_mut(&mut self) -> &mut String {
        &mut self.query
    }
}
