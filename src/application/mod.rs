//! Application layer - Commands, Queries, and Handlers.
//!
//! This layer orchestrates domain operations and coordinates between ports.
//! Command handlers record changes to a profile; query handlers derive views
//! from it. [`CycleProvider`] is the single-user, in-process counterpart.

pub mod handlers;
mod provider;

pub use handlers::{
    CycleForecastView, CycleOverview, GetCycleForecastHandler, GetCycleForecastQuery,
    GetCycleOverviewHandler, GetCycleOverviewQuery, GetPhaseForDateHandler, GetPhaseForDateQuery,
    PhaseForDate, RecordPeriodDatesCommand, RecordPeriodDatesHandler, RecordPeriodDatesResult,
    UpdateCycleLengthCommand, UpdateCycleLengthHandler, UpdateCycleLengthResult,
};
pub use provider::CycleProvider;
