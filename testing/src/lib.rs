//! # Todoo Testing
//!
//! Testing utilities for todoo reducers and stores.
//!
//! This crate provides:
//! - Deterministic implementations of the environment traits (clocks, ids)
//! - A fluent Given-When-Then harness for reducer tests
//! - Assertion helpers for effects
//!
//! ## Example
//!
//! ```ignore
//! use todoo_testing::{ReducerTest, assertions, mocks};
//!
//! ReducerTest::new(TodosReducer::new())
//!     .with_env(test_environment())
//!     .given_state(TodosState::default())
//!     .when_action(TodoAction::SetSearchQuery {
//!         query: "plants".to_string(),
//!     })
//!     .then_state(|state| {
//!         assert_eq!(state.search_query, "plants");
//!     })
//!     .then_effects(assertions::assert_no_effects)
//!     .run();
//! ```


use chrono::{DateTime, Utc};
use todoo_core::environment::{Clock, IdGenerator};

/// Deterministic implementations of the environment traits.
pub mod mocks {
    use super::{Clock, DateTime, IdGenerator, Utc};
    use std::sync::atomic::{AtomicI64, AtomicU64, Ordering};

    /// Fixed clock for deterministic tests
    ///
    /// Always returns the same time, making tests reproducible.
    ///
    /// # Example
    ///
    /// ```
    /// use todoo_testing::mocks::FixedClock;
    /// use todoo_core::environment::Clock;
    /// use chrono::Utc;
    ///
    /// let clock = FixedClock::new(Utc::now());
    /// let time1 = clock.now();
    /// let time2 = clock.now();
    /// assert_eq!(time1, time2); // Always the same!
    /// ```
    #[derive(Debug, Clone)]
    pub struct FixedClock {
        time: DateTime<Utc>,
    }

    impl FixedClock {
        /// Create a new fixed clock with the given time
        #[must_use]
        pub const fn new(time: DateTime<Utc>) -> Self {
            Self { time }
        }
    }

    impl Clock for FixedClock {
        fn now(&self) -> DateTime<Utc> {
            self.time
        }
    }

    /// Clock that advances one second per reading
    ///
    /// Useful when a test needs distinct, ordered timestamps without
    /// touching the wall clock.
    #[derive(Debug)]
    pub struct SteppingClock {
        start: DateTime<Utc>,
        ticks: AtomicI64,
    }

    impl SteppingClock {
        /// Create a stepping clock with the given first reading
        #[must_use]
        pub const fn new(start: DateTime<Utc>) -> Self {
            Self {
                start,
                ticks: AtomicI64::new(0),
            }
        }
    }

    impl Clock for SteppingClock {
        fn now(&self) -> DateTime<Utc> {
            let tick = self.ticks.fetch_add(1, Ordering::SeqCst);
            self.start + chrono::Duration::seconds(tick)
        }
    }

    /// Id generator that counts up from one
    ///
    /// Yields `"1"`, `"2"`, `"3"`, ... so generated ids (and the temporary
    /// todo ids minted from them) are predictable in assertions.
    #[derive(Debug)]
    pub struct SequentialIds {
        next: AtomicU64,
    }

    impl SequentialIds {
        /// Create a generator starting at one
        #[must_use]
        pub const fn new() -> Self {
            Self {
                next: AtomicU64::new(1),
            }
        }
    }

    impl Default for SequentialIds {
        fn default() -> Self {
            Self::new()
        }
    }

    impl IdGenerator for SequentialIds {
        fn generate(&self) -> String {
            self.next.fetch_add(1, Ordering::SeqCst).to_string()
        }
    }

    /// Create a default fixed clock for tests (2025-01-01 00:00:00 UTC)
    ///
    /// # Panics
    ///
    /// This function will panic if the hardcoded timestamp fails to parse,
    /// which should never happen in practice.
    #[must_use]
    #[allow(clippy::expect_used)]
    pub fn test_clock() -> FixedClock {
        FixedClock::new(
            DateTime::parse_from_rfc3339("2025-01-01T00:00:00Z")
                .expect("hardcoded timestamp should always parse")
                .with_timezone(&Utc),
        )
    }

    /// Create a stepping clock starting at the [`test_clock`] time
    #[must_use]
    pub fn stepping_clock() -> SteppingClock {
        SteppingClock::new(test_clock().now())
    }
}

// Re-export commonly used items
pub use mocks::{FixedClock, SequentialIds, SteppingClock, stepping_clock, test_clock};
pub use reducer_test::{ReducerTest, assertions};
