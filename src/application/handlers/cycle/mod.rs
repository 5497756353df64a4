//! Cycle command and query handlers.

// Command handlers
mod record_period_dates;
mod update_cycle_length;

// Query handlers
mod get_cycle_forecast;
mod get_cycle_overview;
mod get_phase_for_date;

pub use record_period_dates::{
    RecordPeriodDatesCommand, RecordPeriodDatesHandler, RecordPeriodDatesResult,
};
pub use update_cycle_length::{
    UpdateCycleLengthCommand, UpdateCycleLengthHandler, UpdateCycleLengthResult,
};

pub use get_cycle_forecast::{CycleForecastView, GetCycleForecastHandler, GetCycleForecastQuery};
pub use get_cycle_overview::{CycleOverview, GetCycleOverviewHandler, GetCycleOverviewQuery};
pub use get_phase_for_date::{GetPhaseForDateHandler, GetPhaseForDateQuery, PhaseForDate};
