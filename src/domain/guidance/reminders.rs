//! Upcoming reminders derived from the current cycle computation.

use serde::Serialize;

use crate::domain::cycle::{CycleComputation, CycleLength, CyclePhase};
use crate::domain::foundation::CalendarDate;

/// At most this many reminders are returned.
pub const MAX_REMINDERS: usize = 3;

/// Category badge for a reminder.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ReminderKind {
    Cycle,
    Skincare,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Reminder {
    pub id: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub date: CalendarDate,
    pub kind: ReminderKind,
}

/// Reminders due on or after `today`, soonest first.
///
/// The predicted ovulation belongs to the upcoming cycle, so once the
/// current cycle is past it the reminder moves whole cycles ahead until it
/// no longer points at a day that already happened.
pub fn upcoming_reminders(
    computation: &CycleComputation,
    cycle_length: CycleLength,
    today: CalendarDate,
) -> Vec<Reminder> {
    let Some(next_period_start) = computation.next_period_start else {
        return Vec::new();
    };

    let mut reminders = vec![Reminder {
        id: "next-period",
        title: "Next Period Starts",
        description: "Prepare with your essential supplies and self-care items.",
        date: next_period_start,
        kind: ReminderKind::Cycle,
    }];

    if let Some(mut ovulation) = computation.next_ovulation {
        let behind = today.days_since(ovulation);
        if behind > 0 {
            let cycles_behind = (behind + cycle_length.as_i64() - 1) / cycle_length.as_i64();
            ovulation = ovulation.add_days(cycles_behind * cycle_length.as_i64());
        }
        reminders.push(Reminder {
            id: "next-ovulation",
            title: "Ovulation Day",
            description: "Your skin will be at its clearest. Great day for photos!",
            date: ovulation,
            kind: ReminderKind::Cycle,
        });
    }

    match computation.current_phase {
        CyclePhase::Luteal => reminders.push(Reminder {
            id: "luteal-reminder",
            title: "Start Acne Prevention",
            description: "Begin using salicylic acid treatments to prevent PMS breakouts.",
            date: today.add_days(1),
            kind: ReminderKind::Skincare,
        }),
        CyclePhase::Follicular => reminders.push(Reminder {
            id: "follicular-reminder",
            title: "Exfoliation Day",
            description: "Great time to use your gentle exfoliant for glowing skin.",
            date: today.add_days(2),
            kind: ReminderKind::Skincare,
        }),
        CyclePhase::Menstruation | CyclePhase::Ovulation => {}
    }

    reminders.retain(|r| r.date >= today);
    reminders.sort_by_key(|r| r.date);
    reminders.truncate(MAX_REMINDERS);
    reminders
}
