//! # Shopgrid Testing
//!
//! Test support for shopgrid reducers: mock implementations of the shared
//! environment traits, the [`ReducerTest`] given/when/then harness, and
//! effect-list assertion helpers.
//!
//! ## Example
//!
//! ```ignore
//! use shopgrid_testing::{ReducerTest, assertions, test_clock};
//!
//! ReducerTest::new(CatalogReducer::new())
//!     .with_env(test_environment())
//!     .given_state(CatalogState::new())
//!     .when_action(CatalogAction::FiltersSubmitted)
//!     .then_state(|state| assert_eq!(state.pagination.current_page, 1))
//!     .then_effects(assertions::assert_has_future_effect)
//!     .run();
//! ```

use chrono::{DateTime, Utc};
use shopgrid_core::environment::Clock;


/// Mock implementations of shared Environment traits
pub mod mocks {
    use super::{Clock, DateTime, Utc};

    /// Clock pinned to a single instant.
    ///
    /// Time-dependent state (load timestamps) becomes reproducible when the
    /// clock never moves.
    ///
    /// # Example
    ///
    /// ```
    /// use shopgrid_testing::mocks::FixedClock;
    /// use shopgrid_core::environment::Clock;
    /// use chrono::Utc;
    ///
    /// let clock = FixedClock::new(Utc::now());
    /// assert_eq!(clock.now(), clock.now());
    /// ```
    #[derive(Debug, Clone)]
    pub struct FixedClock {
        time: DateTime<Utc>,
    }

    impl FixedClock {
        /// Pin the clock to `time`
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

    /// The fixed clock most tests share (2025-01-01 00:00:00 UTC)
    ///
    /// # Panics
    ///
    /// Panics if the hardcoded timestamp fails to parse, which cannot happen
    /// in practice.
    #[must_use]
    #[allow(clippy::expect_used)]
    pub fn test_clock() -> FixedClock {
        FixedClock::new(
            DateTime::parse_from_rfc3339("2025-01-01T00:00:00Z")
                .expect("hardcoded timestamp should always parse")
                .with_timezone(&Utc),
        )
    }
}

// Re-export commonly used items
pub use mocks::{FixedClock, test_clock};
pub use reducer_test::{ReducerTest, assertions};
