//! CycleProvider - a single user's cycle state plus the clock it reads.
//!
//! Holds the profile and recomputes everything else on read, so there is no
//! cached derived value to go stale when dates or lengths change.

use tracing::{debug, warn};

use crate::domain::cycle::{
    CycleCalculator, CycleComputation, CycleError, CycleLength, CyclePhase, CycleProfile,
};
use crate::domain::foundation::CalendarDate;
use crate::ports::Clock;

pub struct CycleProvider<C: Clock> {
    profile: CycleProfile,
    clock: C,
}

impl<C: Clock> CycleProvider<C> {
    /// Provider with an empty profile.
    pub fn new(clock: C) -> Self {
        Self::with_profile(CycleProfile::new(), clock)
    }

    pub fn with_profile(profile: CycleProfile, clock: C) -> Self {
        Self { profile, clock }
    }

    /// Records the last period. Accepts dates or date-times.
    ///
    /// # Errors
    ///
    /// - `InvalidRange` if `end` is before `start`; state is unchanged
    pub fn set_last_period_dates(
        &mut self,
        start: impl Into<CalendarDate>,
        end: impl Into<CalendarDate>,
    ) -> Result<(), CycleError> {
        let (start, end) = (start.into(), end.into());
        self.profile.set_reference_dates(start, end)?;
        debug!(
            %start,
            %end,
            period_length = self.profile.period_length(),
            "period dates recorded"
        );
        self.warn_if_degenerate();
        Ok(())
    }

    /// # Errors
    ///
    /// - `Validation` if `days` is zero
    pub fn set_cycle_length(&mut self, days: u32) -> Result<(), CycleError> {
        let length = CycleLength::new(days)?;
        if self.profile.set_cycle_length(length) {
            debug!(cycle_length = days, "cycle length updated");
            self.warn_if_degenerate();
        }
        Ok(())
    }

    /// Cycle day, phase and predictions as of the clock's today.
    pub fn current(&self) -> CycleComputation {
        CycleCalculator::compute_for_today(&self.profile, self.clock.today())
    }

    pub fn phase_for_date(&self, date: impl Into<CalendarDate>) -> CyclePhase {
        CycleCalculator::compute_phase_for_date(&self.profile, date.into())
    }

    pub fn profile(&self) -> &CycleProfile {
        &self.profile
    }

    pub fn clock(&self) -> &C {
        &self.clock
    }

    fn warn_if_degenerate(&self) {
        let boundaries = self.profile.boundaries();
        if self.profile.is_initialized() && !boundaries.is_well_formed() {
            warn!(
                cycle_length = self.profile.cycle_length().days(),
                period_length = self.profile.period_length(),
                "phase boundaries overlap, some phases cover no days"
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::FixedClock;
    use chrono::{TimeZone, Utc};

    fn date(s: &str) -> CalendarDate {
        s.parse().unwrap()
    }

    fn provider_on(today: &str) -> CycleProvider<FixedClock> {
        CycleProvider::new(FixedClock::new(date(today)))
    }

    #[test]
    fn fresh_provider_reports_uninitialized_cycle() {
        let provider = provider_on("2024-04-10");
        assert_eq!(provider.current(), CycleComputation::uninitialized());
        assert_eq!(provider.profile().cycle_length().days(), 28);
        assert_eq!(provider.profile().period_length(), 5);
    }

    #[test]
    fn recording_dates_updates_derived_values_on_read() {
        let mut provider = provider_on("2024-04-10");
        provider
            .set_last_period_dates(date("2024-04-01"), date("2024-04-03"))
            .unwrap();

        let current = provider.current();
        assert_eq!(provider.profile().period_length(), 3);
        assert_eq!(current.current_cycle_day, 10);
        assert_eq!(current.current_phase, CyclePhase::Follicular);
        assert_eq!(current.next_period_start, Some(date("2024-04-29")));
    }

    #[test]
    fn accepts_date_times() {
        let mut provider = provider_on("2024-04-10");
        let start = Utc.with_ymd_and_hms(2024, 4, 1, 23, 30, 0).unwrap();
        let end = Utc.with_ymd_and_hms(2024, 4, 5, 6, 0, 0).unwrap();

        provider.set_last_period_dates(start, end).unwrap();

        assert_eq!(provider.profile().last_period_start(), Some(date("2024-04-01")));
        assert_eq!(provider.profile().period_length(), 5);
    }

    #[test]
    fn inverted_dates_leave_state_untouched() {
        let mut provider = provider_on("2024-04-10");
        provider
            .set_last_period_dates(date("2024-04-01"), date("2024-04-05"))
            .unwrap();
        let before = provider.profile().clone();

        let result = provider.set_last_period_dates(date("2024-04-05"), date("2024-04-02"));

        assert!(matches!(result, Err(CycleError::InvalidRange { .. })));
        assert_eq!(provider.profile(), &before);
    }

    #[test]
    fn cycle_length_change_is_seen_by_next_read() {
        let mut provider = provider_on("2024-04-10");
        provider
            .set_last_period_dates(date("2024-04-01"), date("2024-04-05"))
            .unwrap();

        provider.set_cycle_length(35).unwrap();

        assert_eq!(provider.current().next_period_start, Some(date("2024-05-06")));
    }

    #[test]
    fn setting_same_cycle_length_twice_is_idempotent() {
        let mut provider = provider_on("2024-04-10");
        provider.set_cycle_length(30).unwrap();
        let once = provider.profile().clone();

        provider.set_cycle_length(30).unwrap();

        assert_eq!(provider.profile(), &once);
    }

    #[test]
    fn zero_cycle_length_is_rejected() {
        let mut provider = provider_on("2024-04-10");
        assert!(matches!(
            provider.set_cycle_length(0),
            Err(CycleError::Validation(_))
        ));
        assert_eq!(provider.profile().cycle_length().days(), 28);
    }

    #[test]
    fn current_follows_the_clock() {
        let mut provider = provider_on("2024-04-01");
        provider
            .set_last_period_dates(date("2024-04-01"), date("2024-04-05"))
            .unwrap();
        assert_eq!(provider.current().current_phase, CyclePhase::Menstruation);

        provider.clock().advance_days(20);
        assert_eq!(provider.current().current_phase, CyclePhase::Luteal);
        assert_eq!(provider.current().current_phase, provider.phase_for_date(date("2024-04-21")));
    }

    #[test]
    fn phase_for_date_before_reference_uses_fallback() {
        let mut provider = provider_on("2024-04-10");
        provider
            .set_last_period_dates(date("2024-04-01"), date("2024-04-05"))
            .unwrap();
        assert_eq!(provider.phase_for_date(date("2024-03-20")), CyclePhase::Follicular);
    }
}
