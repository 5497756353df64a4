//! Guidance domain module.
//!
//! Turns a [`CycleComputation`](crate::domain::cycle::CycleComputation) into
//! what the user reads: the skincare guide for the current phase, upcoming
//! reminders and countdowns to the next period and ovulation.

mod countdown;
mod phase_guide;
mod reminders;

pub use countdown::CycleCountdown;
pub use phase_guide::PhaseGuide;
pub use reminders::{upcoming_reminders, Reminder, ReminderKind, MAX_REMINDERS};
