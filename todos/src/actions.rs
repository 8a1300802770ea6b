//! Todos actions.
//!
//! This module defines all possible inputs to the todos reducer.
//! Actions follow the CQRS pattern: Commands (user intent) and Events (what happened).

use chrono::{DateTime, Utc};
use todoo_api::{Priority, SortKey, StatusFilter, Todo, TodoId, TodoPatch};

/// Todos action.
///
/// This enum represents all possible inputs to the todos reducer:
/// - **Commands**: User requests (`Refresh`, `Add`, `Toggle`, ...)
/// - **Events**: Results of async operations (`TodosLoaded`, `AddFailed`, ...)
///
/// # Architecture Note
///
/// Actions are the **only** way to change todos state. Commands stage their
/// outcome optimistically and return a network effect; the effect feeds one
/// of the events back to commit or roll back the staged change.
#[derive(Debug, Clone, PartialEq)]
pub enum TodoAction {
    // ═══════════════════════════════════════════════════════════════════════
    // Commands
    // ═══════════════════════════════════════════════════════════════════════
    /// Load the collection from the server.
    ///
    /// The flag selects which busy indicator is shown; the request is the
    /// same either way.
    Refresh {
        /// `true` for pull-to-refresh, `false` for an initial or foreground load.
        pull_to_refresh: bool,
    },

    /// Create a todo.
    ///
    /// # Flow
    ///
    /// 1. Reducer trims the title; a blank title is dropped silently
    /// 2. A provisional record with a temporary id appears at the head of
    ///    the collection
    /// 3. The create request runs; `AddCommitted` or `AddFailed` reconciles
    Add {
        /// Title as typed; trimmed before use.
        title: String,

        /// Priority for the new record.
        priority: Priority,

        /// Optional deadline.
        due_date: Option<DateTime<Utc>>,

        /// Optional free-form label.
        category: Option<String>,
    },

    /// Flip a todo's completion flag.
    ///
    /// Carries the record as the caller saw it; the reducer flips the
    /// opposite of `todo.completed` and keeps the original flag for rollback.
    Toggle {
        /// The record to toggle.
        todo: Todo,
    },

    /// Apply a partial edit to a todo.
    ///
    /// An empty patch, a blank trimmed title, or an unknown id is dropped
    /// silently.
    Update {
        /// The record to edit.
        id: TodoId,

        /// Fields to change.
        patch: TodoPatch,
    },

    /// Delete a todo.
    ///
    /// The record disappears locally at once; the reducer remembers its
    /// position so a failed delete can put it back where it was.
    Delete {
        /// The record to delete.
        id: TodoId,
    },

    /// Change the search text.
    SetSearchQuery {
        /// Raw text as typed.
        query: String,
    },

    /// Change the completion filter.
    SetFilterStatus {
        /// Filter for the visible list.
        filter: StatusFilter,
    },

    /// Change the sort order.
    SetSortKey {
        /// Sort order for the visible list.
        sort_key: SortKey,
    },

    // ═══════════════════════════════════════════════════════════════════════
    // Events
    // ═══════════════════════════════════════════════════════════════════════
    /// The collection arrived from the server.
    ///
    /// This is an **event** produced by the load effect. The server copy
    /// replaces the local collection wholesale.
    TodosLoaded {
        /// Server's copy of the collection.
        todos: Vec<Todo>,
    },

    /// The load request failed.
    ///
    /// The stale collection is kept so the screen does not go blank.
    LoadFailed,

    /// The server accepted a create.
    ///
    /// This is an **event** produced by the add effect. The provisional
    /// record is replaced in place by the server's record.
    AddCommitted {
        /// Temporary id of the provisional record.
        temp_id: TodoId,

        /// The record as the server stored it.
        todo: Todo,
    },

    /// The create request failed.
    AddFailed {
        /// Temporary id of the provisional record to remove.
        temp_id: TodoId,
    },

    /// The toggle request failed.
    ToggleFailed {
        /// The record whose flag must be restored.
        id: TodoId,

        /// Completion flag to restore.
        completed: bool,
    },

    /// The update request failed.
    UpdateFailed {
        /// The record as it was before the staged edit.
        original: Todo,
    },

    /// The delete request failed.
    DeleteFailed {
        /// The removed record and its position, when it was present locally.
        restore: Option<(usize, Todo)>,
    },
}
