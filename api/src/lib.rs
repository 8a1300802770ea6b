//! # Todoo API Client
//!
//! Domain types and REST client for the todoo backend.
//!
//! The backend is a small JSON-over-HTTP store: one `todos` collection with
//! list/create/patch/put/delete routes plus an aggregate stats route. This
//! crate provides the wire types, the error taxonomy, an HTTP implementation
//! backed by `reqwest`, and an in-memory implementation with the same
//! observable behavior for tests and demos.
//!
//! State management lives elsewhere; everything here is one round-trip per
//! call with no retries and no caching.
//!
//! ## Example
//!
//! ```no_run
//! use todoo_api::{HttpTodoApi, NewTodo, TodoApi};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     // Create client from the TODOO_API_URL environment variable
//!     let api = HttpTodoApi::from_env()?;
//!
//!     let todo = api.create(NewTodo::new("Buy milk")).await?;
//!     println!("Created: {} ({})", todo.title, todo.id);
//!
//!     let todos = api.list(Default::default()).await?;
//!     println!("{} todos", todos.len());
//!     Ok(())
//! }
//! ```

use std::future::Future;

pub mod client;
pub mod config;
pub mod error;
pub mod memory;
pub mod types;

// Re-export main types for convenience
pub use client::HttpTodoApi;
pub use config::ApiConfig;
pub use error::{ApiError, Result};
pub use memory::InMemoryTodoApi;
pub use types::{
    ListQuery, NewTodo, Priority, SortKey, StatusFilter, Todo, TodoId, TodoPatch, TodoStats,
};

/// Backend operations for the todos collection
///
/// The seam between the state manager and any backend. Methods return
/// `impl Future` so implementations stay free of boxing and the reducer can
/// be generic over the backend; consequently the trait is not object-safe.
///
/// Every call is a single round-trip: implementations must not retry, and a
/// call that was dispatched always runs to completion on the backend even if
/// the caller stops waiting.
pub trait TodoApi: Send + Sync {
    /// Fetch todos matching `query`, newest first
    fn list(&self, query: ListQuery) -> impl Future<Output = Result<Vec<Todo>>> + Send;

    /// Create a todo; the backend assigns `id` and `created_at`
    ///
    /// Fails with [`ApiError::Validation`] when the title is blank after
    /// trimming.
    fn create(&self, new_todo: NewTodo) -> impl Future<Output = Result<Todo>> + Send;

    /// Set the completion flag of one todo, returning the updated record
    fn set_completed(
        &self,
        id: TodoId,
        completed: bool,
    ) -> impl Future<Output = Result<Todo>> + Send;

    /// Apply a partial update to one todo, returning the updated record
    fn update(&self, id: TodoId, patch: TodoPatch) -> impl Future<Output = Result<Todo>> + Send;

    /// Delete one todo
    fn delete(&self, id: TodoId) -> impl Future<Output = Result<()>> + Send;

    /// Fetch backend-computed aggregate counts
    ///
    /// Convenience route; clients that hold the collection derive the same
    /// numbers locally and never need this.
    fn stats(&self) -> impl Future<Output = Result<TodoStats>> + Send;
}
