//! Typed store facade for the todos feature.
//!
//! [`TodoStore`] wires [`TodosState`], [`TodosReducer`] and
//! [`TodosEnvironment`] into a runtime store and exposes one method per
//! action, so callers never construct action values by hand. Command
//! methods return the [`EffectHandle`] for the dispatched action; awaiting
//! it observes the reconciled state after the network round trip.

use chrono::{DateTime, Utc};
use crate::actions::TodoAction;
use crate::environment::TodosEnvironment;
use crate::reducer::TodosReducer;
use crate::state::TodosState;
use todoo_api::{Priority, SortKey, StatusFilter, Todo, TodoApi, TodoId, TodoPatch, TodoStats};
use todoo_runtime::{EffectHandle, Store};
use tokio::sync::watch;

/// Store for the todos feature.
///
/// Cloning is cheap and every clone shares the same state, so one store can
/// serve the screen, background tasks, and tests alike.
pub struct TodoStore<A>
where
    A: TodoApi + Clone + 'static,
{
    store: Store<TodosState, TodoAction, TodosEnvironment<A>, TodosReducer<A>>,
}

impl<A> TodoStore<A>
where
    A: TodoApi + Clone + 'static,
{
    /// Create a store with an empty collection.
    #[must_use]
    pub fn new(environment: TodosEnvironment<A>) -> Self {
        Self {
            store: Store::new(TodosState::default(), TodosReducer::new(), environment),
        }
    }

    /// Load the collection from the server.
    ///
    /// `pull_to_refresh` selects which busy flag the load raises: `loading`
    /// for an initial load, `refreshing` for a user-initiated pull.
    pub async fn refresh(&self, pull_to_refresh: bool) -> EffectHandle {
        self.store
            .send(TodoAction::Refresh { pull_to_refresh })
            .await
    }

    /// Create a todo optimistically.
    ///
    /// The record appears at the head of the collection immediately under a
    /// temporary id and is swapped for the server record once the create
    /// commits. Blank titles are dropped without a request.
    pub async fn add(
        &self,
        title: impl Into<String>,
        priority: Priority,
        due_date: Option<DateTime<Utc>>,
        category: Option<String>,
    ) -> EffectHandle {
        self.store
            .send(TodoAction::Add {
                title: title.into(),
                priority,
                due_date,
                category,
            })
            .await
    }

    /// Flip a todo's completion flag optimistically.
    pub async fn toggle(&self, todo: Todo) -> EffectHandle {
        self.store.send(TodoAction::Toggle { todo }).await
    }

    /// Edit a todo's fields optimistically.
    ///
    /// Only the fields present in `patch` change. An empty patch, or one
    /// whose title is blank, is dropped without a request.
    pub async fn update(&self, id: TodoId, patch: TodoPatch) -> EffectHandle {
        self.store.send(TodoAction::Update { id, patch }).await
    }

    /// Delete a todo optimistically.
    pub async fn delete(&self, id: TodoId) -> EffectHandle {
        self.store.send(TodoAction::Delete { id }).await
    }

    /// Set the live search query.
    pub async fn set_search_query(&self, query: impl Into<String>) -> EffectHandle {
        self.store
            .send(TodoAction::SetSearchQuery {
                query: query.into(),
            })
            .await
    }

    /// Set the status filter.
    pub async fn set_filter_status(&self, filter: StatusFilter) -> EffectHandle {
        self.store.send(TodoAction::SetFilterStatus { filter }).await
    }

    /// Set the sort key.
    pub async fn set_sort_key(&self, sort_key: SortKey) -> EffectHandle {
        self.store.send(TodoAction::SetSortKey { sort_key }).await
    }

    /// Read the state through a closure without cloning it.
    pub async fn state<F, T>(&self, f: F) -> T
    where
        F: FnOnce(&TodosState) -> T,
    {
        self.store.state(f).await
    }

    /// Rows under the current search, filter, and sort, derived on demand.
    pub async fn visible(&self) -> Vec<Todo> {
        self.store.state(TodosState::visible).await
    }

    /// Live counts over the full collection, derived on demand.
    pub async fn stats(&self) -> TodoStats {
        self.store.state(TodosState::stats).await
    }

    /// Subscribe to state change notifications.
    ///
    /// The channel carries a revision counter rather than state clones.
    /// Await `changed()` and re-read whatever slice of state the caller
    /// needs; intermediate revisions coalesce under a slow consumer.
    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<u64> {
        self.store.subscribe()
    }

    /// Current revision counter.
    #[must_use]
    pub fn revision(&self) -> u64 {
        self.store.revision()
    }
}

impl<A> Clone for TodoStore<A>
where
    A: TodoApi + Clone + 'static,
{
    fn clone(&self) -> Self {
        Self {
            store: self.store.clone(),
        }
    }
}

impl<A> std::fmt::Debug for TodoStore<A>
where
    A: TodoApi + Clone + 'static,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TodoStore").finish_non_exhaustive()
    }
}
