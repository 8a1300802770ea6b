//! End-to-end flows for the todos store.
//!
//! Each test drives a [`TodoStore`] against the in-memory backend and
//! observes staged state before `wait()` and reconciled state after, the
//! same sequence a screen sees.

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

use std::sync::Arc;
use todoo_api::{InMemoryTodoApi, Priority, SortKey, StatusFilter, Todo, TodoApi, TodoId, TodoPatch};
use todoo_core::environment::Clock;
use todoo_testing::{SequentialIds, SteppingClock, stepping_clock, test_clock};
use todoo_todos::{TodoStore, TodosEnvironment};

// Successive records read later clock ticks, so seed order is oldest first.
fn record(clock: &SteppingClock, id: &str, title: &str) -> Todo {
    Todo {
        id: TodoId::new(id),
        title: title.to_string(),
        completed: false,
        created_at: clock.now(),
        priority: Priority::Medium,
        due_date: None,
        category: None,
    }
}

fn store_with(api: InMemoryTodoApi) -> TodoStore<InMemoryTodoApi> {
    TodoStore::new(TodosEnvironment::new(
        api,
        Arc::new(test_clock()),
        Arc::new(SequentialIds::new()),
    ))
}

#[tokio::test]
async fn refresh_loads_the_seeded_backend() {
    let clock = stepping_clock();
    let api = InMemoryTodoApi::with_todos(vec![
        record(&clock, "1", "Older"),
        record(&clock, "2", "Newer"),
    ]);
    let store = store_with(api);

    store.refresh(false).await.wait().await;

    let titles: Vec<String> = store
        .state(|s| s.todos.iter().map(|t| t.title.clone()).collect())
        .await;
    assert_eq!(titles, ["Newer", "Older"]);
    assert!(!store.state(|s| s.loading).await);
    assert!(store.state(|s| s.error.is_none()).await);
}

#[tokio::test]
async fn optimistic_add_shows_the_provisional_then_the_committed_record() {
    let clock = stepping_clock();
    let api = InMemoryTodoApi::with_todos(vec![record(&clock, "7", "Existing")]);
    let store = store_with(api.clone());
    store.refresh(false).await.wait().await;

    let mut handle = store.add("Buy milk", Priority::High, None, None).await;

    // Staged: provisional record at the head under a temporary id.
    let staged = store.state(|s| s.todos.clone()).await;
    assert_eq!(staged.len(), 2);
    assert!(staged[0].id.is_temporary());
    assert_eq!(staged[0].title, "Buy milk");

    handle.wait().await;

    // Committed: the server record replaced it in the same position.
    let committed = store.state(|s| s.todos.clone()).await;
    assert_eq!(committed.len(), 2);
    assert!(!committed[0].id.is_temporary());
    assert_eq!(committed[0].title, "Buy milk");
    assert_eq!(committed[1].id, TodoId::new("7"));
    assert_eq!(api.todos().unwrap().len(), 2);
}

#[tokio::test]
async fn failed_add_rolls_back_to_the_exact_prior_state() {
    let clock = stepping_clock();
    let api = InMemoryTodoApi::with_todos(vec![record(&clock, "1", "Existing")]);
    let store = store_with(api.clone());
    store.refresh(false).await.wait().await;

    let before = store.state(Clone::clone).await;
    api.fail_requests(true);

    store.add("Doomed", Priority::Medium, None, None).await.wait().await;

    let after = store.state(Clone::clone).await;
    assert_eq!(after.todos, before.todos);
    assert_eq!(
        after.error.as_deref(),
        Some("Failed to add todo. Please try again.")
    );
    assert_eq!(api.todos().unwrap().len(), 1);
}

#[tokio::test]
async fn failed_toggle_restores_the_previous_flag() {
    let clock = stepping_clock();
    let api = InMemoryTodoApi::with_todos(vec![record(&clock, "1", "Flaky")]);
    let store = store_with(api.clone());
    store.refresh(false).await.wait().await;

    api.fail_requests(true);
    let target = store.state(|s| s.todos[0].clone()).await;
    let mut handle = store.toggle(target).await;

    // Staged: the flag flips immediately.
    assert!(store.state(|s| s.todos[0].completed).await);

    handle.wait().await;

    assert!(!store.state(|s| s.todos[0].completed).await);
    assert_eq!(
        store.state(|s| s.error.clone()).await.as_deref(),
        Some("Failed to update todo. Please try again.")
    );
}

#[tokio::test]
async fn update_round_trips_to_the_backend() {
    let clock = stepping_clock();
    let api = InMemoryTodoApi::with_todos(vec![record(&clock, "1", "Draft")]);
    let store = store_with(api.clone());
    store.refresh(false).await.wait().await;

    let patch = TodoPatch::new().with_title("  Final  ").with_completed(true);
    store.update(TodoId::new("1"), patch).await.wait().await;

    let local = store.state(|s| s.todos[0].clone()).await;
    assert_eq!(local.title, "Final");
    assert!(local.completed);

    let remote = api.todos().unwrap();
    assert_eq!(remote[0].title, "Final");
    assert!(remote[0].completed);
}

#[tokio::test]
async fn successful_delete_is_permanent() {
    let clock = stepping_clock();
    let api = InMemoryTodoApi::with_todos(vec![
        record(&clock, "1", "Keep"),
        record(&clock, "2", "Drop"),
    ]);
    let store = store_with(api.clone());
    store.refresh(false).await.wait().await;

    store.delete(TodoId::new("2")).await.wait().await;

    let ids: Vec<String> = store
        .state(|s| s.todos.iter().map(|t| t.id.to_string()).collect())
        .await;
    assert_eq!(ids, ["1"]);
    assert_eq!(api.todos().unwrap().len(), 1);
    assert!(store.state(|s| s.error.is_none()).await);
}

#[tokio::test]
async fn failed_delete_reinserts_at_the_original_position() {
    let clock = stepping_clock();
    let api = InMemoryTodoApi::with_todos(vec![
        record(&clock, "1", "First"),
        record(&clock, "2", "Second"),
        record(&clock, "3", "Third"),
    ]);
    let store = store_with(api.clone());
    store.refresh(false).await.wait().await;

    // list() returns newest first: 3, 2, 1.
    api.fail_requests(true);
    let mut handle = store.delete(TodoId::new("2")).await;

    let staged: Vec<String> = store
        .state(|s| s.todos.iter().map(|t| t.id.to_string()).collect())
        .await;
    assert_eq!(staged, ["3", "1"]);

    handle.wait().await;

    let restored: Vec<String> = store
        .state(|s| s.todos.iter().map(|t| t.id.to_string()).collect())
        .await;
    assert_eq!(restored, ["3", "2", "1"]);
    assert_eq!(
        store.state(|s| s.error.clone()).await.as_deref(),
        Some("Failed to delete todo. Please try again.")
    );
}

#[tokio::test]
async fn revisions_bump_for_staging_and_reconciliation() {
    let store = store_with(InMemoryTodoApi::new());
    assert_eq!(store.revision(), 0);

    let mut handle = store.add("Buy milk", Priority::Medium, None, None).await;
    assert_eq!(store.revision(), 1);

    handle.wait().await;
    assert_eq!(store.revision(), 2);

    // A successful toggle feeds nothing back: one bump, not two.
    let target = store.state(|s| s.todos[0].clone()).await;
    let mut handle = store.toggle(target).await;
    assert_eq!(store.revision(), 3);
    handle.wait().await;
    assert_eq!(store.revision(), 3);
}

#[tokio::test]
async fn subscribers_coalesce_to_the_latest_revision() {
    let store = store_with(InMemoryTodoApi::new());
    let mut revisions = store.subscribe();

    store.set_search_query("a").await;
    store.set_search_query("ab").await;
    store.set_search_query("abc").await;

    // A slow consumer wakes once and reads only the newest revision.
    revisions.changed().await.unwrap();
    assert_eq!(*revisions.borrow_and_update(), 3);
    assert!(!revisions.has_changed().unwrap());

    let query = store.state(|s| s.search_query.clone()).await;
    assert_eq!(query, "abc");
}

#[tokio::test]
async fn stats_track_a_small_session() {
    let api = InMemoryTodoApi::new();
    let store = store_with(api.clone());

    store
        .add("Write report", Priority::High, None, None)
        .await
        .wait()
        .await;
    store
        .add("Buy milk", Priority::High, None, None)
        .await
        .wait()
        .await;

    let milk = store
        .state(|s| s.todos.iter().find(|t| t.title == "Buy milk").cloned())
        .await
        .unwrap();
    store.toggle(milk).await.wait().await;

    // Two high-priority records, but the completed one no longer counts.
    let stats = store.stats().await;
    assert_eq!(stats.total, 2);
    assert_eq!(stats.completed, 1);
    assert_eq!(stats.pending, 1);
    assert_eq!(stats.high_priority, 1);

    // The backend's aggregate route reports the same numbers.
    let remote = api.stats().await.unwrap();
    assert_eq!(remote, stats);
}

#[tokio::test]
async fn view_controls_shape_visible_rows() {
    let clock = stepping_clock();
    let api = InMemoryTodoApi::with_todos(vec![
        record(&clock, "1", "Water plants"),
        record(&clock, "2", "Buy plant food"),
        record(&clock, "3", "File taxes"),
    ]);
    let store = store_with(api);
    store.refresh(false).await.wait().await;

    store.set_search_query("plant").await;
    let matched: Vec<String> = store
        .visible()
        .await
        .into_iter()
        .map(|t| t.title)
        .collect();
    assert_eq!(matched, ["Buy plant food", "Water plants"]);

    store.set_search_query("").await;
    store
        .update(TodoId::new("3"), TodoPatch::new().with_completed(true))
        .await
        .wait()
        .await;
    store.set_filter_status(StatusFilter::Active).await;
    let active: Vec<String> = store
        .visible()
        .await
        .into_iter()
        .map(|t| t.title)
        .collect();
    assert_eq!(active, ["Buy plant food", "Water plants"]);

    store.set_filter_status(StatusFilter::All).await;
    store
        .update(TodoId::new("1"), TodoPatch::new().with_priority(Priority::High))
        .await
        .wait()
        .await;
    store.set_sort_key(SortKey::Priority).await;
    let by_priority: Vec<String> = store
        .visible()
        .await
        .into_iter()
        .map(|t| t.title)
        .collect();
    assert_eq!(by_priority, ["Water plants", "File taxes", "Buy plant food"]);
}
