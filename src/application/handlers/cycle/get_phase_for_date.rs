//! GetPhaseForDateHandler - Query handler for the phase on an arbitrary date.

use std::sync::Arc;

use serde::Serialize;

use crate::domain::cycle::{CycleCalculator, CycleError, CyclePhase};
use crate::domain::foundation::{CalendarDate, UserId};
use crate::ports::CycleProfileRepository;

/// Query for the phase on a specific date.
#[derive(Debug, Clone)]
pub struct GetPhaseForDateQuery {
    pub user_id: UserId,
    pub date: CalendarDate,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PhaseForDate {
    pub date: CalendarDate,
    pub phase: CyclePhase,
    /// `None` when the date precedes the recorded period.
    pub cycle_day: Option<u32>,
}

/// Handler for date phase lookups.
pub struct GetPhaseForDateHandler {
    repository: Arc<dyn CycleProfileRepository>,
}

impl GetPhaseForDateHandler {
    pub fn new(repository: Arc<dyn CycleProfileRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(&self, query: GetPhaseForDateQuery) -> Result<PhaseForDate, CycleError> {
        let profile = self
            .repository
            .find(&query.user_id)
            .await?
            .ok_or_else(|| CycleError::ProfileNotFound(query.user_id.clone()))?;

        Ok(PhaseForDate {
            date: query.date,
            phase: CycleCalculator::compute_phase_for_date(&profile, query.date),
            cycle_day: CycleCalculator::cycle_day_for(&profile, query.date),
        })
    }
}
