//! Todos environment.
//!
//! This module defines the environment type for dependency injection
//! in the todos reducer.

use std::sync::Arc;
use todoo_api::TodoApi;
use todoo_core::environment::{Clock, IdGenerator};

/// Todos environment.
///
/// Contains all external dependencies the todos reducer needs.
///
/// # Type Parameters
///
/// - `A`: Todo API backend (HTTP in production, in-memory in tests)
#[derive(Clone)]
pub struct TodosEnvironment<A>
where
    A: TodoApi + Clone,
{
    /// Todo API backend.
    pub api: A,

    /// Clock, used to timestamp provisional records.
    pub clock: Arc<dyn Clock>,

    /// Id source for temporary ids while a create is in flight.
    pub ids: Arc<dyn IdGenerator>,
}

impl<A> TodosEnvironment<A>
where
    A: TodoApi + Clone,
{
    /// Create a new todos environment.
    #[must_use]
    pub fn new(api: A, clock: Arc<dyn Clock>, ids: Arc<dyn IdGenerator>) -> Self {
        Self { api, clock, ids }
    }
}

impl<A> std::fmt::Debug for TodosEnvironment<A>
where
    A: TodoApi + Clone + std::fmt::Debug,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TodosEnvironment")
            .field("api", &self.api)
            .finish_non_exhaustive()
    }
}
