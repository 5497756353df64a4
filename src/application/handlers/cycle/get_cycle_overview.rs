//! GetCycleOverviewHandler - Query handler for the user's cycle dashboard.
//!
//! Combines the derived cycle state with the guide for the current phase,
//! countdowns and upcoming reminders.

use std::sync::Arc;

use serde::Serialize;
use tracing::debug;

use crate::domain::cycle::{CycleCalculator, CycleComputation, CycleError, CycleProfile};
use crate::domain::foundation::{CalendarDate, UserId};
use crate::domain::guidance::{upcoming_reminders, CycleCountdown, PhaseGuide, Reminder};
use crate::ports::{Clock, CycleProfileRepository};

/// Query for a user's cycle overview.
#[derive(Debug, Clone)]
pub struct GetCycleOverviewQuery {
    pub user_id: UserId,
}

/// Everything the dashboard shows about the current cycle.
#[derive(Debug, Clone, Serialize)]
pub struct CycleOverview {
    pub today: CalendarDate,
    pub profile: CycleProfile,
    pub computation: CycleComputation,
    pub guide: &'static PhaseGuide,
    pub countdown: CycleCountdown,
    pub reminders: Vec<Reminder>,
}

/// Handler for the cycle overview.
pub struct GetCycleOverviewHandler {
    repository: Arc<dyn CycleProfileRepository>,
    clock: Arc<dyn Clock>,
}

impl GetCycleOverviewHandler {
    pub fn new(repository: Arc<dyn CycleProfileRepository>, clock: Arc<dyn Clock>) -> Self {
        Self { repository, clock }
    }

    /// # Errors
    ///
    /// - `ProfileNotFound` if the user has no profile
    pub async fn handle(&self, query: GetCycleOverviewQuery) -> Result<CycleOverview, CycleError> {
        let profile = self
            .repository
            .find(&query.user_id)
            .await?
            .ok_or_else(|| CycleError::ProfileNotFound(query.user_id.clone()))?;

        let today = self.clock.today();
        let computation = CycleCalculator::compute_for_today(&profile, today);
        let cycle_length = profile.cycle_length();

        debug!(
            user_id = %query.user_id,
            cycle_day = computation.current_cycle_day,
            phase = %computation.current_phase.as_str(),
            "cycle overview computed"
        );

        Ok(CycleOverview {
            today,
            guide: PhaseGuide::for_phase(computation.current_phase),
            countdown: CycleCountdown::from_computation(&computation, cycle_length, today),
            reminders: upcoming_reminders(&computation, cycle_length, today),
            computation,
            profile,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::{FixedClock, InMemoryCycleProfileRepository};
    use crate::domain::cycle::CyclePhase;

    fn date(s: &str) -> CalendarDate {
        s.parse().unwrap()
    }

    fn test_user_id() -> UserId {
        UserId::new("test-user-123").unwrap()
    }

    async fn handler_on(today: &str, profile: Option<CycleProfile>) -> GetCycleOverviewHandler {
        let repo = Arc::new(InMemoryCycleProfileRepository::new());
        if let Some(profile) = profile {
            repo.insert(&test_user_id(), &profile).await.unwrap();
        }
        GetCycleOverviewHandler::new(repo, Arc::new(FixedClock::new(date(today))))
    }

    fn recorded_profile() -> CycleProfile {
        let mut profile = CycleProfile::new();
        profile
            .set_reference_dates(date("2024-04-01"), date("2024-04-05"))
            .unwrap();
        profile
    }

    fn query() -> GetCycleOverviewQuery {
        GetCycleOverviewQuery {
            user_id: test_user_id(),
        }
    }

    #[tokio::test]
    async fn overview_matches_current_phase() {
        let handler = handler_on("2024-04-14", Some(recorded_profile())).await;

        let overview = handler.handle(query()).await.unwrap();

        assert_eq!(overview.computation.current_cycle_day, 14);
        assert_eq!(overview.computation.current_phase, CyclePhase::Ovulation);
        assert_eq!(overview.guide.phase, CyclePhase::Ovulation);
        assert_eq!(overview.countdown.days_until_ovulation, Some(1));
        assert_eq!(overview.reminders[0].id, "next-ovulation");
    }

    #[tokio::test]
    async fn unknown_user_is_not_found() {
        let handler = handler_on("2024-04-14", None).await;

        let result = handler.handle(query()).await;

        assert_eq!(result.unwrap_err(), CycleError::ProfileNotFound(test_user_id()));
    }

    #[tokio::test]
    async fn profile_without_dates_yields_empty_guidance() {
        let handler = handler_on("2024-04-14", Some(CycleProfile::new())).await;

        let overview = handler.handle(query()).await.unwrap();

        assert!(!overview.computation.is_initialized());
        assert!(overview.reminders.is_empty());
        assert_eq!(overview.countdown.days_until_period, None);
    }

    #[tokio::test]
    async fn overview_serializes_for_clients() {
        let handler = handler_on("2024-04-20", Some(recorded_profile())).await;

        let json = serde_json::to_value(handler.handle(query()).await.unwrap()).unwrap();

        assert_eq!(json["computation"]["current_phase"], "luteal");
        assert_eq!(json["guide"]["title"], "Luteal Phase");
        assert_eq!(json["today"], "2024-04-20");
    }
}
