//! Todos reducer.
//!
//! This reducer implements optimistic concurrency for every mutation of the
//! collection.
//!
//! # Flow
//!
//! 1. A command stages its outcome synchronously, capturing whatever is
//!    needed to undo it (the removed record, the previous flag, the record
//!    before an edit)
//! 2. A single network effect runs the matching API call
//! 3. On success the effect feeds a commit event back, or nothing when the
//!    staged record is already correct
//! 4. On failure the effect feeds a rollback event that restores the
//!    captured data and sets `state.error` to one fixed message per
//!    operation
//!
//! # Known races
//!
//! In-flight requests are not serialized per record. The windows this opens
//! are accepted; the next successful refresh converges on server state:
//!
//! - Two rapid toggles of one record race on the wire. The local flag shows
//!   the last staged value, the server keeps whichever write lands last,
//!   and a rollback of the first can clobber the second's staging.
//! - A refresh completing while an add is in flight replaces the collection
//!   and drops the provisional record. The later `AddCommitted` finds no
//!   temporary id and does nothing; the created record appears on the next
//!   refresh.
//! - A delete rollback reinserts at the remembered position, which may have
//!   shifted under interleaved mutations. The index is clamped to the
//!   current length.

use crate::actions::TodoAction;
use crate::environment::TodosEnvironment;
use crate::state::TodosState;
use std::marker::PhantomData;
use todoo_api::{ListQuery, NewTodo, Todo, TodoApi, TodoId};
use todoo_core::effect::Effect;
use todoo_core::environment::{Clock, IdGenerator};
use todoo_core::reducer::Reducer;
use todoo_core::{SmallVec, smallvec};

/// Error message shown when loading the collection fails.
const LOAD_FAILED: &str = "Failed to load todos. Please try again.";
/// Error message shown when a create fails.
const ADD_FAILED: &str = "Failed to add todo. Please try again.";
/// Error message shown when a toggle or edit fails.
const UPDATE_FAILED: &str = "Failed to update todo. Please try again.";
/// Error message shown when a delete fails.
const DELETE_FAILED: &str = "Failed to delete todo. Please try again.";

/// Todos reducer.
///
/// Handles loading, optimistic mutations with rollback, and the view
/// controls (search, filter, sort).
#[derive(Debug, Clone)]
pub struct TodosReducer<A> {
    /// Phantom data to hold the API type parameter.
    _phantom: PhantomData<A>,
}

impl<A> TodosReducer<A> {
    /// Create a new todos reducer.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            _phantom: PhantomData,
        }
    }
}

impl<A> Default for TodosReducer<A> {
    fn default() -> Self {
        Self::new()
    }
}

impl<A> Reducer for TodosReducer<A>
where
    A: TodoApi + Clone + 'static,
{
    type State = TodosState;
    type Action = TodoAction;
    type Environment = TodosEnvironment<A>;

    fn reduce(
        &self,
        state: &mut Self::State,
        action: Self::Action,
        env: &Self::Environment,
    ) -> SmallVec<[Effect<Self::Action>; 4]> {
        match action {
            // ═══════════════════════════════════════════════════════════════
            // Refresh: Load the collection from the server
            // ═══════════════════════════════════════════════════════════════
            TodoAction::Refresh { pull_to_refresh } => {
                if pull_to_refresh {
                    state.refreshing = true;
                } else {
                    state.loading = true;
                }
                state.error = None;

                let api = env.api.clone();
                smallvec![Effect::Future(Box::pin(async move {
                    match api.list(ListQuery::new()).await {
                        Ok(todos) => Some(TodoAction::TodosLoaded { todos }),
                        Err(error) => {
                            tracing::warn!(error = %error, "refresh failed");
                            Some(TodoAction::LoadFailed)
                        }
                    }
                }))]
            }

            // ═══════════════════════════════════════════════════════════════
            // Add: Stage a provisional record, then create on the server
            // ═══════════════════════════════════════════════════════════════
            TodoAction::Add {
                title,
                priority,
                due_date,
                category,
            } => {
                let title = title.trim().to_string();
                if title.is_empty() {
                    return smallvec![Effect::None];
                }

                state.error = None;

                let temp_id = TodoId::temporary(&env.ids.generate());
                let provisional = Todo {
                    id: temp_id.clone(),
                    title: title.clone(),
                    completed: false,
                    created_at: env.clock.now(),
                    priority,
                    due_date,
                    category: category.clone(),
                };
                state.todos.insert(0, provisional);

                let api = env.api.clone();
                smallvec![Effect::Future(Box::pin(async move {
                    let new_todo = NewTodo {
                        title,
                        priority,
                        due_date,
                        category,
                    };
                    match api.create(new_todo).await {
                        Ok(todo) => Some(TodoAction::AddCommitted { temp_id, todo }),
                        Err(error) => {
                            tracing::warn!(error = %error, "add failed, rolling back");
                            Some(TodoAction::AddFailed { temp_id })
                        }
                    }
                }))]
            }

            // ═══════════════════════════════════════════════════════════════
            // Toggle: Flip the flag locally, then persist it
            // ═══════════════════════════════════════════════════════════════
            TodoAction::Toggle { todo } => {
                let id = todo.id.clone();
                let previous = todo.completed;
                let completed = !previous;

                state.error = None;
                if let Some(existing) = state.todos.iter_mut().find(|t| t.id == id) {
                    existing.completed = completed;
                }

                let api = env.api.clone();
                smallvec![Effect::Future(Box::pin(async move {
                    match api.set_completed(id.clone(), completed).await {
                        // The staged flag already matches the server record.
                        Ok(_) => None,
                        Err(error) => {
                            tracing::warn!(todo_id = %id, error = %error, "toggle failed, rolling back");
                            Some(TodoAction::ToggleFailed {
                                id,
                                completed: previous,
                            })
                        }
                    }
                }))]
            }

            // ═══════════════════════════════════════════════════════════════
            // Update: Merge the patch locally, then persist it
            // ═══════════════════════════════════════════════════════════════
            TodoAction::Update { id, mut patch } => {
                if let Some(ref mut title) = patch.title {
                    let trimmed = title.trim();
                    // Blank titles never leave the client.
                    if trimmed.is_empty() {
                        return smallvec![Effect::None];
                    }
                    *title = trimmed.to_string();
                }
                if patch.is_empty() {
                    return smallvec![Effect::None];
                }

                let Some(existing) = state.todos.iter_mut().find(|t| t.id == id) else {
                    return smallvec![Effect::None];
                };

                let original = existing.clone();
                if let Some(ref title) = patch.title {
                    existing.title = title.clone();
                }
                if let Some(completed) = patch.completed {
                    existing.completed = completed;
                }
                if let Some(priority) = patch.priority {
                    existing.priority = priority;
                }
                if let Some(due_date) = patch.due_date {
                    existing.due_date = due_date;
                }
                if let Some(ref category) = patch.category {
                    existing.category = category.clone();
                }
                state.error = None;

                let api = env.api.clone();
                smallvec![Effect::Future(Box::pin(async move {
                    match api.update(id, patch).await {
                        // The staged merge already matches the server record.
                        Ok(_) => None,
                        Err(error) => {
                            tracing::warn!(
                                todo_id = %original.id,
                                error = %error,
                                "update failed, rolling back"
                            );
                            Some(TodoAction::UpdateFailed { original })
                        }
                    }
                }))]
            }

            // ═══════════════════════════════════════════════════════════════
            // Delete: Remove locally, then delete on the server
            // ═══════════════════════════════════════════════════════════════
            TodoAction::Delete { id } => {
                state.error = None;
                let restore = state
                    .todos
                    .iter()
                    .position(|t| t.id == id)
                    .map(|index| (index, state.todos.remove(index)));

                let api = env.api.clone();
                smallvec![Effect::Future(Box::pin(async move {
                    match api.delete(id.clone()).await {
                        Ok(()) => None,
                        Err(error) => {
                            tracing::warn!(todo_id = %id, error = %error, "delete failed, rolling back");
                            Some(TodoAction::DeleteFailed { restore })
                        }
                    }
                }))]
            }

            // ═══════════════════════════════════════════════════════════════
            // View controls: pure transitions, no network
            // ═══════════════════════════════════════════════════════════════
            TodoAction::SetSearchQuery { query } => {
                state.search_query = query;
                smallvec![Effect::None]
            }

            TodoAction::SetFilterStatus { filter } => {
                state.filter_status = filter;
                smallvec![Effect::None]
            }

            TodoAction::SetSortKey { sort_key } => {
                state.sort_key = sort_key;
                smallvec![Effect::None]
            }

            // ═══════════════════════════════════════════════════════════════
            // TodosLoaded: Server copy replaces the collection
            // ═══════════════════════════════════════════════════════════════
            TodoAction::TodosLoaded { todos } => {
                state.todos = todos;
                state.loading = false;
                state.refreshing = false;
                smallvec![Effect::None]
            }

            TodoAction::LoadFailed => {
                // Keep the stale collection so the screen does not go blank.
                state.loading = false;
                state.refreshing = false;
                state.error = Some(LOAD_FAILED.to_string());
                smallvec![Effect::None]
            }

            // ═══════════════════════════════════════════════════════════════
            // Add reconciliation
            // ═══════════════════════════════════════════════════════════════
            TodoAction::AddCommitted { temp_id, todo } => {
                if let Some(existing) = state.todos.iter_mut().find(|t| t.id == temp_id) {
                    *existing = todo;
                }
                smallvec![Effect::None]
            }

            TodoAction::AddFailed { temp_id } => {
                state.todos.retain(|t| t.id != temp_id);
                state.error = Some(ADD_FAILED.to_string());
                smallvec![Effect::None]
            }

            // ═══════════════════════════════════════════════════════════════
            // Toggle / Update / Delete rollbacks
            // ═══════════════════════════════════════════════════════════════
            TodoAction::ToggleFailed { id, completed } => {
                if let Some(existing) = state.todos.iter_mut().find(|t| t.id == id) {
                    existing.completed = completed;
                }
                state.error = Some(UPDATE_FAILED.to_string());
                smallvec![Effect::None]
            }

            TodoAction::UpdateFailed { original } => {
                if let Some(existing) = state.todos.iter_mut().find(|t| t.id == original.id) {
                    *existing = original;
                }
                state.error = Some(UPDATE_FAILED.to_string());
                smallvec![Effect::None]
            }

            TodoAction::DeleteFailed { restore } => {
                if let Some((index, todo)) = restore {
                    let index = index.min(state.todos.len());
                    state.todos.insert(index, todo);
                }
                state.error = Some(DELETE_FAILED.to_string());
                smallvec![Effect::None]
            }
        }
    }
}
