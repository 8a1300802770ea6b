//! CLI walkthrough of the todoo architecture.
//!
//! Drives a [`TodoStore`] against the in-memory backend through the full
//! feature set: optimistic create, toggle, edit and delete, the derived
//! views, revision subscriptions, and a forced failure with rollback.

use chrono::{Duration, Utc};
use std::sync::Arc;
use todoo_api::{InMemoryTodoApi, Priority, Todo, TodoApi, TodoPatch};
use todoo_core::environment::{SystemClock, UuidIds};
use todoo_todos::{TodoStore, TodosEnvironment};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn render(rows: &[Todo]) {
    for todo in rows {
        let status = if todo.completed { "✓" } else { " " };
        let syncing = if todo.id.is_temporary() {
            " (syncing)"
        } else {
            ""
        };
        let due = todo
            .due_date
            .map_or_else(String::new, |d| format!(" - due {}", d.format("%Y-%m-%d")));
        println!("  [{status}] {} ({}){due}{syncing}", todo.title, todo.priority);
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                "todoo_todos=info,todoo_runtime=info,todoo_api=info".into()
            }),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    println!("=== Todoo Demo: Optimistic Todos ===\n");

    // Production wiring, in-memory backend
    let api = InMemoryTodoApi::new();
    let environment =
        TodosEnvironment::new(api.clone(), Arc::new(SystemClock), Arc::new(UuidIds));
    let store = TodoStore::new(environment);

    println!(">>> Refresh against an empty backend");
    store.refresh(false).await.wait().await;
    println!("Loaded {} todos", store.stats().await.total);

    // Create three todos; the third stays un-awaited for a moment so the
    // provisional record is observable.
    println!("\n>>> Adding todos");
    store
        .add("Write demo", Priority::High, Some(Utc::now() + Duration::days(1)), None)
        .await
        .wait()
        .await;
    store
        .add("Buy milk", Priority::Medium, None, Some("errands".to_string()))
        .await
        .wait()
        .await;
    let mut pending_add = store.add("Water plants", Priority::Low, None, None).await;

    println!("Before the create commits:");
    render(&store.visible().await);

    pending_add.wait().await;
    println!("After the create commits:");
    render(&store.visible().await);

    println!("\n>>> Completing 'Buy milk'");
    let milk = store
        .state(|s| s.todos.iter().find(|t| t.title == "Buy milk").cloned())
        .await
        .ok_or("Buy milk vanished")?;
    store.toggle(milk).await.wait().await;

    let stats = store.stats().await;
    render(&store.visible().await);
    println!("Completed: {}/{}", stats.completed, stats.total);

    println!("\n>>> Renaming 'Write demo' and dropping its priority");
    let demo_id = store
        .state(|s| s.todos.iter().find(|t| t.title == "Write demo").map(|t| t.id.clone()))
        .await
        .ok_or("Write demo vanished")?;
    let patch = TodoPatch::new()
        .with_title("Write better demo")
        .with_priority(Priority::Medium);
    store.update(demo_id, patch).await.wait().await;
    render(&store.visible().await);

    println!("\n>>> Searching for 'plant'");
    store.set_search_query("plant").await;
    render(&store.visible().await);
    store.set_search_query("").await;

    // Observers coalesce: three rapid changes, one wakeup, latest revision.
    println!("\n>>> Subscriptions");
    let mut revisions = store.subscribe();
    store.set_search_query("w").await;
    store.set_search_query("wa").await;
    store.set_search_query("").await;
    revisions.changed().await?;
    println!(
        "Three changes, one wakeup, now at revision {}",
        *revisions.borrow_and_update()
    );

    println!("\n>>> Deleting 'Water plants' while the backend is down");
    api.fail_requests(true);
    let plants_id = store
        .state(|s| s.todos.iter().find(|t| t.title == "Water plants").map(|t| t.id.clone()))
        .await
        .ok_or("Water plants vanished")?;
    let mut doomed = store.delete(plants_id).await;
    println!("Staged ({} todos shown):", store.stats().await.total);
    render(&store.visible().await);

    doomed.wait().await;
    println!("Rolled back ({} todos shown):", store.stats().await.total);
    render(&store.visible().await);
    if let Some(error) = store.state(|s| s.error.clone()).await {
        println!("Error surface: {error}");
    }
    api.fail_requests(false);

    println!("\n>>> Reconciling with the backend");
    let local = store.stats().await;
    let remote = api.stats().await?;
    println!(
        "Local {}/{} done matches backend {}/{} done: {}",
        local.completed,
        local.total,
        remote.completed,
        remote.total,
        local == remote
    );

    println!("\n=== Demo Complete ===");
    Ok(())
}
