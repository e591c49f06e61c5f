//! Reference-time injection
//!
//! Several validation rules compare candidate dates against "now". Reading
//! the wall clock inside the rules makes tests flaky near date boundaries,
//! so the current moment is supplied through the narrow [`Clock`] trait
//! and pinned in tests.

use chrono::{DateTime, NaiveDate, Utc};

/// Source of the current moment for time-sensitive validation rules
pub trait Clock {
    /// Returns the current instant in UTC
    fn now(&self) -> DateTime<Utc>;

    /// Returns the current calendar date in UTC
    fn today(&self) -> NaiveDate {
        self.now().date_naive()
    }
}

/// Production clock backed by the system wall clock
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Clock pinned to a fixed instant, for deterministic tests
#[cfg(any(test, feature = "mock"))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock(DateTime<Utc>);

#[cfg(any(test, feature = "mock"))]
impl FixedClock {
    /// Creates a clock pinned to the given instant
    pub fn at(instant: DateTime<Utc>) -> Self {
        Self(instant)
    }

    /// Creates a clock pinned to midnight UTC on the given date
    pub fn on(date: NaiveDate) -> Self {
        Self(date.and_hms_opt(0, 0, 0).unwrap().and_utc())
    }
}

#[cfg(any(test, feature = "mock"))]
impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}
