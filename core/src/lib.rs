//! # Todoo Core
//!
//! Core traits and types for the todoo composable architecture.
//!
//! This crate provides the fundamental abstractions the rest of the workspace
//! is built on: pure reducers over domain state, side effects as values, and
//! dependency injection through an environment.
//!
//! ## Core Concepts
//!
//! - **State**: Domain state for a feature
//! - **Action**: All possible inputs to a reducer (commands and reconciliation events)
//! - **Reducer**: Pure function `(State, Action, Environment) → (State, Effects)`
//! - **Effect**: Side effect descriptions (not execution)
//! - **Environment**: Injected dependencies via traits
//!
//! ## Architecture Principles
//!
//! - Functional Core, Imperative Shell
//! - Unidirectional Data Flow
//! - Explicit Effects (no hidden I/O)
//! - Dependency Injection via Environment
//!
//! ## Example
//!
//! ```ignore
//! use todoo_core::{Effect, Reducer, SmallVec, smallvec};
//!
//! struct NotesReducer;
//!
//! impl Reducer for NotesReducer {
//!     type State = NotesState;
//!     type Action = NoteAction;
//!     type Environment = NotesEnvironment;
//!
//!     fn reduce(
//!         &self,
//!         state: &mut NotesState,
//!         action: NoteAction,
//!         env: &NotesEnvironment,
//!     ) -> SmallVec<[Effect<NoteAction>; 4]> {
//!         match action {
//!             NoteAction::Pin { id } => {
//!                 state.pin(id);
//!                 SmallVec::new()
//!             }
//!             // Network work is returned as a value for the runtime to execute
//!             NoteAction::Save { note } => smallvec![Effect::Future(Box::pin(async move {
//!                 Some(NoteAction::Saved { note })
//!             }))],
//!         }
//!     }
//! }
//! ```

// Re-export commonly used types so reducer crates need a single import
pub use chrono::{DateTime, Utc};
pub use smallvec::{SmallVec, smallvec};

pub use effect::Effect;
pub use reducer::Reducer;

/// Reducer module - the core trait for business logic
///
/// Reducers are pure functions: `(State, Action, Environment) → (State, Effects)`.
/// They contain all business logic and are deterministic and testable without
/// a runtime.
pub mod reducer {
    use super::effect::Effect;
    use smallvec::SmallVec;

    /// The Reducer trait - core abstraction for business logic
    ///
    /// # Type Parameters
    ///
    /// - `State`: The domain state this reducer operates on
    /// - `Action`: The action type this reducer processes
    /// - `Environment`: The injected dependencies this reducer needs
    ///
    /// # Example
    ///
    /// ```ignore
    /// impl Reducer for TodosReducer {
    ///     type State = TodosState;
    ///     type Action = TodoAction;
    ///     type Environment = TodosEnvironment<Api>;
    ///
    ///     fn reduce(
    ///         &self,
    ///         state: &mut TodosState,
    ///         action: TodoAction,
    ///         env: &Self::Environment,
    ///     ) -> SmallVec<[Effect<TodoAction>; 4]> {
    ///         // Business logic here
    ///         SmallVec::new()
    ///     }
    /// }
    /// ```
    pub trait Reducer {
        /// The state type this reducer operates on
        type State;

        /// The action type this reducer processes
        type Action;

        /// The environment type with injected dependencies
        type Environment;

        /// Reduce an action into state changes and effects
        ///
        /// This is a pure function that:
        /// 1. Validates the action
        /// 2. Updates state in place
        /// 3. Returns effect descriptions to be executed
        ///
        /// # Arguments
        ///
        /// - `state`: Mutable reference to current state
        /// - `action`: The action to process
        /// - `env`: Reference to injected dependencies
        ///
        /// # Returns
        ///
        /// Effects to be executed by the runtime. Most actions produce zero or
        /// one, so the list is inline up to four.
        fn reduce(
            &self,
            state: &mut Self::State,
            action: Self::Action,
            env: &Self::Environment,
        ) -> SmallVec<[Effect<Self::Action>; 4]>;
    }
}

/// Effect module - side effect descriptions
///
/// Effects describe side effects to be performed by the runtime. They are
/// values (not execution): returned from reducers, executed by the Store.
pub mod effect {
    use std::future::Future;
    use std::pin::Pin;

    /// Effect type - describes a side effect to be executed
    ///
    /// Effects are NOT executed immediately. They are descriptions of what
    /// should happen, returned from reducers and executed by the Store runtime.
    ///
    /// # Type Parameters
    ///
    /// - `Action`: The action type that effects can produce (feedback loop)
    pub enum Effect<Action> {
        /// No-op effect
        None,

        /// Arbitrary async computation
        ///
        /// Returns `Option<Action>` - if `Some`, the action is fed back into
        /// the reducer; `None` means fire-and-forget.
        Future(Pin<Box<dyn Future<Output = Option<Action>> + Send>>),
    }

    // Manual Debug implementation since Future doesn't implement Debug
    impl<Action> std::fmt::Debug for Effect<Action>
    where
        Action: std::fmt::Debug,
    {
        fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
            match self {
                Effect::None => write!(f, "Effect::None"),
                Effect::Future(_) => write!(f, "Effect::Future(<future>)"),
            }
        }
    }

    impl<Action> Effect<Action> {
        /// Whether this effect performs no work
        #[must_use]
        pub const fn is_none(&self) -> bool {
            matches!(self, Effect::None)
        }
    }
}

/// Environment module - dependency injection traits
///
/// All external dependencies are abstracted behind traits and injected via
/// the Environment parameter, so reducers stay deterministic under test.
pub mod environment {
    use chrono::{DateTime, Utc};

    /// Clock trait - abstracts time operations for testability
    ///
    /// # Examples
    ///
    /// ```
    /// use todoo_core::environment::{Clock, SystemClock};
    ///
    /// let clock = SystemClock;
    /// let now = clock.now();
    /// assert!(now.timestamp() > 0);
    /// ```
    pub trait Clock: Send + Sync {
        /// Get the current time
        fn now(&self) -> DateTime<Utc>;
    }

    /// Production clock backed by the system time
    #[derive(Debug, Clone, Copy, Default)]
    pub struct SystemClock;

    impl Clock for SystemClock {
        fn now(&self) -> DateTime<Utc> {
            Utc::now()
        }
    }

    /// IdGenerator trait - abstracts id creation for testability
    ///
    /// Used wherever the client has to mint an identifier itself, such as the
    /// suffix of a temporary id while an optimistic create is in flight.
    /// Production wiring uses [`UuidIds`]; tests use a sequential generator
    /// so staged ids are predictable.
    pub trait IdGenerator: Send + Sync {
        /// Generate a fresh identifier
        fn generate(&self) -> String;
    }

    /// Production id source generating random v4 UUIDs
    #[derive(Debug, Clone, Copy, Default)]
    pub struct UuidIds;

    impl IdGenerator for UuidIds {
        fn generate(&self) -> String {
            uuid::Uuid::new_v4().to_string()
        }
    }
}
