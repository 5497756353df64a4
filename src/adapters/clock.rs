//! Clock adapters.

use std::sync::{PoisonError, RwLock};

use crate::domain::foundation::CalendarDate;
use crate::ports::Clock;

/// Reads the host's local date on every call.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> CalendarDate {
        CalendarDate::today_local()
    }
}

/// A clock pinned to a settable date.
#[derive(Debug)]
pub struct FixedClock {
    today: RwLock<CalendarDate>,
}

impl FixedClock {
    pub fn new(today: CalendarDate) -> Self {
        Self {
            today: RwLock::new(today),
        }
    }

    pub fn set(&self, today: CalendarDate) {
        *self.today.write().unwrap_or_else(PoisonError::into_inner) = today;
    }

    /// Moves the clock forward (or back, for negative `days`).
    pub fn advance_days(&self, days: i64) {
        let mut today = self.today.write().unwrap_or_else(PoisonError::into_inner);
        *today = today.add_days(days);
    }
}

impl Clock for FixedClock {
    fn today(&self) -> CalendarDate {
        *self.today.read().unwrap_or_else(PoisonError::into_inner)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixed_clock_can_be_moved() {
        let clock = FixedClock::new("2024-04-01".parse().unwrap());
        clock.advance_days(30);
        assert_eq!(clock.today().to_string(), "2024-05-01");

        clock.set("2024-01-15".parse().unwrap());
        assert_eq!(clock.today().to_string(), "2024-01-15");
    }

    #[test]
    fn system_clock_matches_local_date() {
        let before = CalendarDate::today_local();
        let today = SystemClock.today();
        let after = CalendarDate::today_local();
        assert!(before <= today && today <= after);
    }
}
