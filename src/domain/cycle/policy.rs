//! Input policy applied at the onboarding/settings boundary.
//!
//! The profile itself only refuses inverted ranges and zero-length cycles.
//! What counts as a plausible entry from a user (no future periods, nothing
//! before the earliest supported date, a sane cycle length) lives here so
//! it can be configured per deployment.

use std::ops::RangeInclusive;

use super::{CycleError, CycleLength};
use crate::domain::foundation::{CalendarDate, ValidationError};

/// Validation rules for user-entered cycle data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CyclePolicy {
    /// Earliest accepted period start, if any.
    pub earliest_period_start: Option<CalendarDate>,
    /// Whether a period start after "today" is accepted.
    pub allow_future_start: bool,
    /// Accepted cycle lengths in days.
    pub cycle_length_days: RangeInclusive<u32>,
    /// Cycle length for profiles created by the first recording.
    pub default_cycle_length: CycleLength,
}

impl CyclePolicy {
    /// Rules that accept anything the profile itself accepts.
    pub fn permissive() -> Self {
        Self {
            earliest_period_start: None,
            allow_future_start: true,
            cycle_length_days: 1..=u32::MAX,
            default_cycle_length: CycleLength::default(),
        }
    }

    /// Checks a period start/end pair entered on `today`.
    ///
    /// # Errors
    ///
    /// - `InvalidRange` if `end` is before `start`
    /// - `Validation` if `start` is before the earliest date or in the future
    pub fn validate_period_dates(
        &self,
        start: CalendarDate,
        end: CalendarDate,
        today: CalendarDate,
    ) -> Result<(), CycleError> {
        if end < start {
            return Err(CycleError::invalid_range(start, end));
        }
        if let Some(earliest) = self.earliest_period_start {
            if start < earliest {
                return Err(ValidationError::invalid_format(
                    "period_start",
                    format!("start date cannot be earlier than {}", earliest),
                )
                .into());
            }
        }
        if !self.allow_future_start && start > today {
            return Err(ValidationError::invalid_format(
                "period_start",
                format!("start date {} is in the future", start),
            )
            .into());
        }
        Ok(())
    }

    /// Checks and converts a user-entered cycle length.
    ///
    /// # Errors
    ///
    /// - `Validation` if `days` is outside the accepted range or zero
    pub fn validate_cycle_length(&self, days: u32) -> Result<CycleLength, CycleError> {
        if !self.cycle_length_days.contains(&days) {
            return Err(ValidationError::out_of_range(
                "cycle_length",
                i64::from(*self.cycle_length_days.start()),
                i64::from(*self.cycle_length_days.end()),
                i64::from(days),
            )
            .into());
        }
        Ok(CycleLength::new(days)?)
    }
}

impl Default for CyclePolicy {
    fn default() -> Self {
        Self::permissive()
    }
}
