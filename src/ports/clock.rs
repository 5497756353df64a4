//! Clock port - where "today" comes from.
//!
//! Cycle computations are pure functions of a profile and a date. The clock
//! is the one place the local calendar date is read, so tests can pin it.

use crate::domain::foundation::CalendarDate;

/// Source of the current local calendar date.
pub trait Clock: Send + Sync {
    /// Today's date in the user's local calendar.
    fn today(&self) -> CalendarDate;
}
