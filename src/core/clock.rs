//! Clock implementations
//!
//! - [`SystemClock`] reads the local date from the operating system.
//! - [`FixedClock`] returns a date chosen by the caller and can be moved
//!   through a shared reference, which is what tests and the replay engine use.

use crate::core::traits::Clock;
use chrono::{Days, Local, NaiveDate};
use std::cell::Cell;

/// Wall-clock local date
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        Local::now().date_naive()
    }
}

/// Clock pinned to a caller-supplied date
///
/// The date is held in a `Cell`, so an account that owns the clock can still
/// have its date moved by whoever holds a reference to it. Not `Sync`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FixedClock {
    date: Cell<NaiveDate>,
}

impl FixedClock {
    /// Create a clock that reports `date` until told otherwise
    pub fn new(date: NaiveDate) -> Self {
        FixedClock {
            date: Cell::new(date),
        }
    }

    /// Move the clock to `date` (backwards is allowed)
    pub fn set(&self, date: NaiveDate) {
        self.date.set(date);
    }

    /// Move the clock forward by `days`
    ///
    /// Saturates at the latest representable date.
    pub fn advance_days(&self, days: u64) {
        let current = self.date.get();
        let next = current
            .checked_add_days(Days::new(days))
            .unwrap_or(NaiveDate::MAX);
        self.date.set(next);
    }
}

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.date.get()
    }
}
