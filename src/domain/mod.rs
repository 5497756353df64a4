//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (value objects, IDs, errors, events)
//! - `cycle` - Cycle profile, phase calculator and forecasts
//! - `guidance` - Phase guides, reminders and countdowns derived from a computation

pub mod cycle;
pub mod foundation;
pub mod guidance;
