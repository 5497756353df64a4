//! Cycle Calculator - maps a profile and a date onto cycle day and phase.
//!
//! All functions are pure: the caller supplies "today", so results are
//! deterministic and the calculator can run per request without shared state.

use serde::{Deserialize, Serialize};

use super::{CyclePhase, CycleProfile};
use crate::domain::foundation::CalendarDate;

/// Ovulation is predicted this many days before the next period.
pub const LUTEAL_PHASE_DAYS: i64 = 14;

/// Phase reported for dates before the reference period, and for profiles
/// with no reference period at all.
pub const PRE_REFERENCE_PHASE: CyclePhase = CyclePhase::Follicular;

/// Derived view of the cycle at a given day. Never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CycleComputation {
    /// Day within the current cycle, in `[1, cycle_length]`.
    pub current_cycle_day: u32,
    pub current_phase: CyclePhase,
    pub next_period_start: Option<CalendarDate>,
    pub next_ovulation: Option<CalendarDate>,
}

impl CycleComputation {
    /// Projection for a profile with no recorded period.
    pub fn uninitialized() -> Self {
        Self {
            current_cycle_day: 1,
            current_phase: PRE_REFERENCE_PHASE,
            next_period_start: None,
            next_ovulation: None,
        }
    }

    /// False for the uninitialized projection.
    pub fn is_initialized(&self) -> bool {
        self.next_period_start.is_some()
    }
}

impl Default for CycleComputation {
    fn default() -> Self {
        Self::uninitialized()
    }
}

/// Stateless cycle calculator.
pub struct CycleCalculator;

impl CycleCalculator {
    /// Computes cycle day, phase and predictions as of `today`.
    ///
    /// # Edge Cases
    /// - No reference period: the uninitialized projection
    /// - `today` before the reference start: day 1, next period is the
    ///   reference start, phase is [`PRE_REFERENCE_PHASE`]. Day 1 is not
    ///   classified here (it would read as menstruation); the fixed phase
    ///   keeps this in agreement with [`Self::compute_phase_for_date`] for
    ///   dates before the reference
    /// - Any distance into the past or future wraps with modulo arithmetic
    pub fn compute_for_today(profile: &CycleProfile, today: CalendarDate) -> CycleComputation {
        let Some(start) = profile.last_period_start() else {
            return CycleComputation::uninitialized();
        };

        let cycle_length = profile.cycle_length().as_i64();
        let elapsed = today.days_since(start);

        let (current_cycle_day, next_period_start, current_phase) = if elapsed < 0 {
            (1, start, PRE_REFERENCE_PHASE)
        } else {
            let completed_cycles = elapsed.div_euclid(cycle_length);
            let day = Self::day_from_elapsed(elapsed, cycle_length);
            let next = start.add_days(completed_cycles.saturating_add(1).saturating_mul(cycle_length));
            (day, next, profile.boundaries().classify(day))
        };

        CycleComputation {
            current_cycle_day,
            current_phase,
            next_period_start: Some(next_period_start),
            next_ovulation: Some(next_period_start.minus_days(LUTEAL_PHASE_DAYS)),
        }
    }

    /// Phase on an arbitrary date.
    ///
    /// Dates before the reference start, or any date on a profile without one,
    /// fall back to [`PRE_REFERENCE_PHASE`]; there is nothing to anchor them to.
    pub fn compute_phase_for_date(profile: &CycleProfile, date: CalendarDate) -> CyclePhase {
        match Self::cycle_day_for(profile, date) {
            Some(day) => profile.boundaries().classify(day),
            None => PRE_REFERENCE_PHASE,
        }
    }

    /// Cycle day on `date`, or `None` when it cannot be anchored.
    pub fn cycle_day_for(profile: &CycleProfile, date: CalendarDate) -> Option<u32> {
        let start = profile.last_period_start()?;
        let elapsed = date.days_since(start);
        if elapsed < 0 {
            return None;
        }
        Some(Self::day_from_elapsed(elapsed, profile.cycle_length().as_i64()))
    }

    fn day_from_elapsed(elapsed: i64, cycle_length: i64) -> u32 {
        // rem_euclid keeps the result in [0, cycle_length), which fits u32.
        u32::try_from(elapsed.rem_euclid(cycle_length) + 1).unwrap_or(1)
    }
}
