//! Derived views over the collection.
//!
//! Pure functions from the collection to what the UI renders. Nothing here
//! is cached or stored: callers re-derive after every change notification,
//! which is safe because both functions are deterministic and idempotent.

use std::cmp::Ordering;
use todoo_api::{Priority, SortKey, StatusFilter, Todo, TodoStats};

/// Summary counts over the whole collection.
///
/// `high_priority` counts only records that still need doing: high priority
/// and not completed.
#[must_use]
pub fn stats(todos: &[Todo]) -> TodoStats {
    let total = todos.len();
    let completed = todos.iter().filter(|todo| todo.completed).count();
    let high_priority = todos
        .iter()
        .filter(|todo| todo.priority == Priority::High && !todo.completed)
        .count();

    TodoStats {
        total,
        completed,
        pending: total - completed,
        high_priority,
    }
}

/// The todos visible under a search, filter, and sort.
///
/// Search is case-insensitive over title and category. A query that trims
/// to nothing matches everything; otherwise the query is matched as typed,
/// surrounding whitespace included. Sorting is stable, so records that
/// compare equal keep their relative order.
#[must_use]
pub fn visible(
    todos: &[Todo],
    search_query: &str,
    filter: StatusFilter,
    sort: SortKey,
) -> Vec<Todo> {
    let needle = if search_query.trim().is_empty() {
        None
    } else {
        Some(search_query.to_lowercase())
    };

    let mut rows: Vec<Todo> = todos
        .iter()
        .filter(|todo| filter.matches(todo.completed))
        .filter(|todo| {
            needle
                .as_ref()
                .is_none_or(|needle| matches_search(todo, needle))
        })
        .cloned()
        .collect();

    match sort {
        SortKey::Created => rows.sort_by(|a, b| b.created_at.cmp(&a.created_at)),
        SortKey::DueDate => rows.sort_by(|a, b| match (a.due_date, b.due_date) {
            (None, None) => Ordering::Equal,
            (None, Some(_)) => Ordering::Greater,
            (Some(_), None) => Ordering::Less,
            (Some(a), Some(b)) => a.cmp(&b),
        }),
        SortKey::Priority => rows.sort_by_key(|todo| todo.priority.rank()),
    }

    rows
}

fn matches_search(todo: &Todo, needle: &str) -> bool {
    todo.title.to_lowercase().contains(needle)
        || todo
            .category
            .as_ref()
            .is_some_and(|category| category.to_lowercase().contains(needle))
}
