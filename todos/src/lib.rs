//! # Todoo Todos Feature
//!
//! The todos screen as a composable feature: unidirectional state, a
//! reducer with optimistic mutations, pure derived views, and a typed
//! store facade.
//!
//! ## Architecture
//!
//! ```text
//! TodoStore method → TodoAction → TodosReducer → (TodosState, Effects)
//!        ↑                                              │
//!        └── commit / rollback events ← network effects ┘
//! ```
//!
//! Every mutation applies to [`TodosState`] synchronously and reconciles
//! with the backend in a single effect: a success commits (or is already
//! correct), a failure rolls the staged change back and sets
//! `state.error`. Derived data ([`TodosState::visible`],
//! [`TodosState::stats`]) is recomputed from the collection on demand and
//! never stored.
//!
//! ## Example
//!
//! ```no_run
//! use std::sync::Arc;
//! use todoo_api::{InMemoryTodoApi, Priority};
//! use todoo_core::environment::{SystemClock, UuidIds};
//! use todoo_todos::{TodoStore, TodosEnvironment};
//!
//! #[tokio::main]
//! async fn main() {
//!     let environment = TodosEnvironment::new(
//!         InMemoryTodoApi::new(),
//!         Arc::new(SystemClock),
//!         Arc::new(UuidIds),
//!     );
//!     let store = TodoStore::new(environment);
//!
//!     store.refresh(false).await.wait().await;
//!
//!     // The provisional record is visible before wait(), the committed
//!     // one after.
//!     let mut handle = store.add("Buy milk", Priority::High, None, None).await;
//!     handle.wait().await;
//!
//!     let stats = store.stats().await;
//!     println!("{} todos, {} pending", stats.total, stats.pending);
//! }
//! ```

pub mod actions;
pub mod environment;
pub mod reducer;
pub mod state;
pub mod store;
pub mod view;

// Re-export main types for convenience
pub use actions::TodoAction;
pub use environment::TodosEnvironment;
pub use reducer::TodosReducer;
pub use state::TodosState;
pub use store::TodoStore;
