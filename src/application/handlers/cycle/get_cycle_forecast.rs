//! GetCycleForecastHandler - Query handler for predicted cycles and calendars.

use std::sync::Arc;

use serde::Serialize;
use tracing::debug;

use crate::domain::cycle::{CycleError, CycleForecast, CyclePrediction, PhaseDay};
use crate::domain::foundation::{UserId, ValidationError};
use crate::ports::{Clock, CycleProfileRepository};

/// Query for a user's forecast.
#[derive(Debug, Clone)]
pub struct GetCycleForecastQuery {
    pub user_id: UserId,
    /// Number of cycles to predict; the handler default when `None`.
    /// Must be between 1 and the handler maximum.
    pub cycles: Option<usize>,
    /// `(year, month)` to include a phase calendar for.
    pub month: Option<(i32, u32)>,
}

#[derive(Debug, Clone, Serialize)]
pub struct CycleForecastView {
    pub predictions: Vec<CyclePrediction>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub calendar: Option<Vec<PhaseDay>>,
}

/// Handler for cycle forecasts.
pub struct GetCycleForecastHandler {
    repository: Arc<dyn CycleProfileRepository>,
    clock: Arc<dyn Clock>,
    default_cycles: usize,
    max_cycles: usize,
}

impl GetCycleForecastHandler {
    pub fn new(
        repository: Arc<dyn CycleProfileRepository>,
        clock: Arc<dyn Clock>,
        default_cycles: usize,
        max_cycles: usize,
    ) -> Self {
        Self {
            repository,
            clock,
            default_cycles,
            max_cycles,
        }
    }

    /// # Errors
    ///
    /// - `ProfileNotFound` if the user has no profile
    /// - `Validation` if the cycle count is zero or above the maximum
    /// - `Validation` if the requested month does not exist
    pub async fn handle(&self, query: GetCycleForecastQuery) -> Result<CycleForecastView, CycleError> {
        let cycles = query.cycles.unwrap_or(self.default_cycles);
        if cycles == 0 || cycles > self.max_cycles {
            return Err(ValidationError::out_of_range(
                "cycles",
                1,
                i64::try_from(self.max_cycles).unwrap_or(i64::MAX),
                i64::try_from(cycles).unwrap_or(i64::MAX),
            )
            .into());
        }

        let profile = self
            .repository
            .find(&query.user_id)
            .await?
            .ok_or_else(|| CycleError::ProfileNotFound(query.user_id.clone()))?;

        let predictions = CycleForecast::predict_cycles(&profile, self.clock.today(), cycles);

        let calendar = query
            .month
            .map(|(year, month)| CycleForecast::month_calendar(&profile, year, month))
            .transpose()?;

        debug!(
            user_id = %query.user_id,
            cycles = predictions.len(),
            with_calendar = calendar.is_some(),
            "cycle forecast computed"
        );

        Ok(CycleForecastView {
            predictions,
            calendar,
        })
    }
}
