//! Clock port
//!
//! Open-ended jobs are drawn through "today", so the current date is an
//! input rather than a global.

use chrono::NaiveDate;

/// Source of the current calendar date
pub trait Clock: Send + Sync {
    /// Today's date
    fn today(&self) -> NaiveDate;
}

/// The local system clock
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        chrono::Local::now().date_naive()
    }
}

/// A clock frozen on one date
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock(pub NaiveDate);

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.0
    }
}
