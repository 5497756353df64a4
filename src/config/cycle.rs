//! Cycle tracking configuration

use chrono::NaiveDate;
use serde::Deserialize;

use super::error::ValidationError;
use crate::domain::cycle::{CycleLength, CyclePolicy};
use crate::domain::foundation::CalendarDate;

/// Cycle tracking configuration
#[derive(Debug, Clone, Deserialize)]
pub struct CycleConfig {
    /// Cycle length for new profiles, in days
    #[serde(default = "default_cycle_length")]
    pub default_cycle_length: u32,

    /// Shortest cycle length a user may enter
    #[serde(default = "default_min_cycle_length")]
    pub min_cycle_length: u32,

    /// Longest cycle length a user may enter
    #[serde(default = "default_max_cycle_length")]
    pub max_cycle_length: u32,

    /// Earliest accepted period start (ISO date)
    #[serde(default = "default_earliest_period_start")]
    pub earliest_period_start: Option<CalendarDate>,

    /// Whether a period may be recorded as starting after today
    #[serde(default)]
    pub allow_future_start: bool,

    /// Cycles returned by a forecast when the caller does not ask for a count
    #[serde(default = "default_forecast_cycles")]
    pub forecast_cycles: usize,

    /// Most cycles a single forecast may cover
    #[serde(default = "default_max_forecast_cycles")]
    pub max_forecast_cycles: usize,
}

impl CycleConfig {
    /// Validate cycle configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.min_cycle_length == 0 || self.min_cycle_length > self.max_cycle_length {
            return Err(ValidationError::InvalidCycleLengthBounds);
        }
        if !(self.min_cycle_length..=self.max_cycle_length).contains(&self.default_cycle_length) {
            return Err(ValidationError::DefaultCycleLengthOutOfBounds(
                self.default_cycle_length,
            ));
        }
        if self.forecast_cycles == 0 {
            return Err(ValidationError::ZeroForecastCycles);
        }
        if self.forecast_cycles > self.max_forecast_cycles {
            return Err(ValidationError::ForecastCyclesAboveMaximum {
                cycles: self.forecast_cycles,
                max: self.max_forecast_cycles,
            });
        }
        Ok(())
    }

    /// Input policy for the command handlers.
    ///
    /// # Errors
    ///
    /// Fails with `InvalidCycleLengthBounds` when the default length is zero.
    pub fn to_policy(&self) -> Result<CyclePolicy, ValidationError> {
        let default_cycle_length = CycleLength::new(self.default_cycle_length)
            .map_err(|_| ValidationError::InvalidCycleLengthBounds)?;
        Ok(CyclePolicy {
            earliest_period_start: self.earliest_period_start,
            allow_future_start: self.allow_future_start,
            cycle_length_days: self.min_cycle_length..=self.max_cycle_length,
            default_cycle_length,
        })
    }
}

impl Default for CycleConfig {
    fn default() -> Self {
        Self {
            default_cycle_length: default_cycle_length(),
            min_cycle_length: default_min_cycle_length(),
            max_cycle_length: default_max_cycle_length(),
            earliest_period_start: default_earliest_period_start(),
            allow_future_start: false,
            forecast_cycles: default_forecast_cycles(),
            max_forecast_cycles: default_max_forecast_cycles(),
        }
    }
}

fn default_cycle_length() -> u32 {
    CycleLength::DEFAULT_DAYS
}

fn default_min_cycle_length() -> u32 {
    15
}

fn default_max_cycle_length() -> u32 {
    60
}

fn default_earliest_period_start() -> Option<CalendarDate> {
    NaiveDate::from_ymd_opt(2024, 3, 16).map(CalendarDate::from)
}

fn default_forecast_cycles() -> usize {
    6
}

fn default_max_forecast_cycles() -> usize {
    24
}
