//! Outbound port for toll-free date lookups
//!
//! The calculator never decides on its own whether a date is a weekend or a
//! holiday. It asks a [`HolidayOracle`], which the host supplies.

use chrono::NaiveDate;

/// Answers whether tolls are charged on a given calendar date.
///
/// Implementations must be read-only: the calculator may call them any
/// number of times, from any thread.
pub trait HolidayOracle: Send + Sync {
    /// `true` when no toll is charged on `date` (weekend or public holiday).
    fn is_toll_free_date(&self, date: NaiveDate) -> bool;
}

impl<F> HolidayOracle for F
where
    F: Fn(NaiveDate) -> bool + Send + Sync,
{
    fn is_toll_free_date(&self, date: NaiveDate) -> bool {
        self(date)
    }
}
