//! Core traits
//!
//! The account never reads the wall clock directly. It asks a [`Clock`] for
//! the current date, so tests and the replay engine can supply their own.

use chrono::NaiveDate;

/// Source of the current calendar date
pub trait Clock {
    /// The date movements recorded now should carry
    fn today(&self) -> NaiveDate;
}

impl<C: Clock + ?Sized> Clock for &C {
    fn today(&self) -> NaiveDate {
        (**self).today()
    }
}
