//! Cycle domain module.
//!
//! Holds the user's cycle profile and the pure calculator that maps a
//! profile and a query date onto a cycle day, a phase and the predicted
//! next period and ovulation.
//!
//! # Phases
//!
//! Phases follow the fixed cyclic order
//! `Menstruation -> Follicular -> Ovulation -> Luteal -> Menstruation`.
//! Boundaries are relative to the cycle length: the ovulation window is the
//! four days ending twelve days before the cycle ends.
//!
//! # Events
//!
//! - `PeriodDatesRecorded` - Published when the reference period is set
//! - `CycleLengthChanged` - Published when the cycle length changes

mod boundaries;
mod calculator;
mod cycle_length;
mod errors;
mod events;
mod forecast;
mod phase;
mod policy;
mod profile;

pub use boundaries::{PhaseBoundaries, OVULATION_WINDOW_END_OFFSET, OVULATION_WINDOW_START_OFFSET};
pub use calculator::{CycleCalculator, CycleComputation, LUTEAL_PHASE_DAYS, PRE_REFERENCE_PHASE};
pub use cycle_length::CycleLength;
pub use errors::CycleError;
pub use events::{CycleLengthChanged, PeriodDatesRecorded};
pub use forecast::{CycleForecast, CyclePrediction, PhaseDay};
pub use phase::CyclePhase;
pub use policy::CyclePolicy;
pub use profile::{CycleProfile, DEFAULT_PERIOD_LENGTH};
