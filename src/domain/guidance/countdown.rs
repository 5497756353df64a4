use serde::Serialize;

use crate::domain::cycle::{CycleComputation, CycleLength};
use crate::domain::foundation::{CalendarDate, Percentage};

/// Days remaining until the next period and ovulation, plus progress
/// through the current cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CycleCountdown {
    pub days_until_period: Option<i64>,
    pub days_until_ovulation: Option<i64>,
    pub progress: Percentage,
}

impl CycleCountdown {
    pub fn from_computation(
        computation: &CycleComputation,
        cycle_length: CycleLength,
        today: CalendarDate,
    ) -> Self {
        if !computation.is_initialized() {
            return Self {
                days_until_period: None,
                days_until_ovulation: None,
                progress: Percentage::ZERO,
            };
        }

        let days_until_period = computation
            .next_period_start
            .map(|date| date.days_since(today));

        // Once ovulation has passed, count down to the next one still ahead.
        // Cycles shorter than the luteal offset can be several cycles behind.
        let days_until_ovulation = computation.next_ovulation.map(|date| {
            let days = date.days_since(today);
            if days < 0 {
                days.rem_euclid(cycle_length.as_i64())
            } else {
                days
            }
        });

        Self {
            days_until_period,
            days_until_ovulation,
            progress: Percentage::from_ratio(computation.current_cycle_day, cycle_length.days()),
        }
    }
}
