//! Todos state.
//!
//! This module defines the state managed by the todos reducer. All types are
//! `Clone` to support the functional architecture pattern.
//!
//! The collection is the single source of truth for everything the UI shows:
//! the visible list and the summary counts are derived from it on demand
//! rather than stored.

use crate::view;
use todoo_api::{SortKey, StatusFilter, Todo, TodoStats};

/// Root todos state.
///
/// Holds the last known copy of the collection plus the view controls and
/// transient request status. Mutations are staged here optimistically and
/// rolled back by reconciliation events when the network disagrees.
///
/// # Examples
///
/// ```
/// # use todoo_todos::TodosState;
/// let state = TodosState::default();
/// assert!(state.todos.is_empty());
/// assert!(!state.loading);
/// assert!(state.error.is_none());
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TodosState {
    /// The collection, including provisional records with temporary ids.
    pub todos: Vec<Todo>,

    /// Raw search text as typed; whitespace-only means "no search".
    pub search_query: String,

    /// Completion filter applied to the visible list.
    pub filter_status: StatusFilter,

    /// Sort order of the visible list.
    pub sort_key: SortKey,

    /// Whether an initial or foreground load is in flight.
    pub loading: bool,

    /// Whether a pull-to-refresh load is in flight.
    pub refreshing: bool,

    /// One human-readable message for the most recent failure.
    ///
    /// Cleared when the next network command is staged.
    pub error: Option<String>,
}

impl TodosState {
    /// The todos visible under the current search, filter, and sort.
    #[must_use]
    pub fn visible(&self) -> Vec<Todo> {
        view::visible(
            &self.todos,
            &self.search_query,
            self.filter_status,
            self.sort_key,
        )
    }

    /// Summary counts over the whole collection.
    ///
    /// Ignores search and filter: the counts describe everything the client
    /// knows about, not what is currently on screen.
    #[must_use]
    pub fn stats(&self) -> TodoStats {
        view::stats(&self.todos)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_state_is_idle_and_empty() {
        let state = TodosState::default();
        assert!(state.todos.is_empty());
        assert_eq!(state.search_query, "");
        assert_eq!(state.filter_status, StatusFilter::All);
        assert_eq!(state.sort_key, SortKey::Created);
        assert!(!state.loading);
        assert!(!state.refreshing);
        assert!(state.error.is_none());
    }
}
