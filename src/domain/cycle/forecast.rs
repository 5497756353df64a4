//! Cycle Forecast - multi-cycle predictions and per-day phase calendars.

use serde::{Deserialize, Serialize};

use super::{CycleCalculator, CycleError, CyclePhase, CycleProfile, LUTEAL_PHASE_DAYS};
use crate::domain::foundation::CalendarDate;

/// One predicted future cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CyclePrediction {
    pub period_start: CalendarDate,
    /// Last day of the predicted period, using the recorded period length.
    pub period_end: CalendarDate,
    /// Predicted ovulation, [`LUTEAL_PHASE_DAYS`] before `period_start`.
    pub ovulation: CalendarDate,
}

/// Phase information for a single calendar day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PhaseDay {
    pub date: CalendarDate,
    pub phase: CyclePhase,
    /// `None` before the reference period.
    pub cycle_day: Option<u32>,
    pub is_period_start: bool,
    pub is_ovulation_day: bool,
}

/// Stateless forecasting over a cycle profile.
pub struct CycleForecast;

impl CycleForecast {
    /// Predicts the next `cycles` cycles, starting from the next period after `today`.
    ///
    /// Returns an empty list for an uninitialized profile.
    pub fn predict_cycles(
        profile: &CycleProfile,
        today: CalendarDate,
        cycles: usize,
    ) -> Vec<CyclePrediction> {
        let Some(first_start) = CycleCalculator::compute_for_today(profile, today).next_period_start
        else {
            return Vec::new();
        };

        let cycle_length = profile.cycle_length().as_i64();
        let period_days = i64::from(profile.period_length().max(1)) - 1;

        (0..cycles)
            .map(|index| {
                let offset = i64::try_from(index)
                    .unwrap_or(i64::MAX)
                    .saturating_mul(cycle_length);
                let period_start = first_start.add_days(offset);
                CyclePrediction {
                    period_start,
                    period_end: period_start.add_days(period_days),
                    ovulation: period_start.minus_days(LUTEAL_PHASE_DAYS),
                }
            })
            .collect()
    }

    /// Phase for every day from `from` to `to` inclusive.
    ///
    /// A day is a period start when it is day 1 of a cycle, and an ovulation
    /// day when it falls [`LUTEAL_PHASE_DAYS`] before the following cycle's
    /// day 1.
    ///
    /// # Errors
    ///
    /// - `InvalidRange` if `to` is before `from`
    pub fn phase_calendar(
        profile: &CycleProfile,
        from: CalendarDate,
        to: CalendarDate,
    ) -> Result<Vec<PhaseDay>, CycleError> {
        if to < from {
            return Err(CycleError::invalid_range(from, to));
        }

        let ovulation_day = Self::ovulation_cycle_day(profile);
        Ok(from
            .days_through(to)
            .map(|date| {
                let cycle_day = CycleCalculator::cycle_day_for(profile, date);
                PhaseDay {
                    date,
                    phase: CycleCalculator::compute_phase_for_date(profile, date),
                    cycle_day,
                    is_period_start: cycle_day == Some(1),
                    is_ovulation_day: cycle_day.is_some() && cycle_day == ovulation_day,
                }
            })
            .collect())
    }

    /// Phase calendar for a whole month.
    ///
    /// # Errors
    ///
    /// - `Validation` if `year`/`month` do not name a month
    pub fn month_calendar(
        profile: &CycleProfile,
        year: i32,
        month: u32,
    ) -> Result<Vec<PhaseDay>, CycleError> {
        let first = CalendarDate::from_ymd(year, month, 1)?;
        Self::phase_calendar(profile, first, first.last_of_month())
    }

    /// Cycle day on which ovulation is predicted.
    ///
    /// For cycles shorter than the luteal phase the prediction lands in an
    /// earlier cycle; wrapping keeps it on a valid day of the current one.
    fn ovulation_cycle_day(profile: &CycleProfile) -> Option<u32> {
        profile.last_period_start()?;
        let cycle_length = profile.cycle_length().as_i64();
        let offset = (cycle_length - LUTEAL_PHASE_DAYS).rem_euclid(cycle_length);
        u32::try_from(offset + 1).ok()
    }
}
