//! Cycle domain events.
//!
//! - `PeriodDatesRecorded` - Reference period set (onboarding or correction)
//! - `CycleLengthChanged` - Cycle length updated

use serde::{Deserialize, Serialize};

use super::CycleLength;
use crate::domain::foundation::{domain_event, CalendarDate, EventId, Timestamp, UserId};

// ════════════════════════════════════════════════════════════════════════════
// PeriodDatesRecorded
// ════════════════════════════════════════════════════════════════════════════

/// Published when a user records their last period.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PeriodDatesRecorded {
    pub event_id: EventId,
    pub user_id: UserId,
    pub period_start: CalendarDate,
    pub period_end: CalendarDate,
    /// Inclusive day count of the recorded period.
    pub period_length: u32,
    /// Profile version after the change.
    pub version: u64,
    pub recorded_at: Timestamp,
}

domain_event!(
    PeriodDatesRecorded,
    event_type = "cycle.period_recorded.v1",
    schema_version = 1,
    aggregate_id = user_id,
    aggregate_type = "CycleProfile",
    occurred_at = recorded_at,
    event_id = event_id
);

// ════════════════════════════════════════════════════════════════════════════
// CycleLengthChanged
// ════════════════════════════════════════════════════════════════════════════

/// Published when the cycle length changes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CycleLengthChanged {
    pub event_id: EventId,
    pub user_id: UserId,
    pub old_length: CycleLength,
    pub new_length: CycleLength,
    pub version: u64,
    pub changed_at: Timestamp,
}

domain_event!(
    CycleLengthChanged,
    event_type = "cycle.length_changed.v1",
    schema_version = 1,
    aggregate_id = user_id,
    aggregate_type = "CycleProfile",
    occurred_at = changed_at,
    event_id = event_id
);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::{DomainEvent, SerializableDomainEvent};

    fn user() -> UserId {
        UserId::new("user-7").unwrap()
    }

    #[test]
    fn period_recorded_envelope_is_routed_by_user() {
        let event = PeriodDatesRecorded {
            event_id: EventId::new(),
            user_id: user(),
            period_start: "2024-04-01".parse().unwrap(),
            period_end: "2024-04-05".parse().unwrap(),
            period_length: 5,
            version: 1,
            recorded_at: Timestamp::now(),
        };

        let envelope = event.to_envelope();
        assert_eq!(envelope.event_type, "cycle.period_recorded.v1");
        assert_eq!(envelope.aggregate_id, "user-7");
        assert_eq!(envelope.aggregate_type, "CycleProfile");
        assert_eq!(envelope.payload["period_start"], "2024-04-01");
        assert_eq!(envelope.payload["period_length"], 5);
    }

    #[test]
    fn length_changed_carries_old_and_new_length() {
        let event = CycleLengthChanged {
            event_id: EventId::new(),
            user_id: user(),
            old_length: CycleLength::default(),
            new_length: CycleLength::new(32).unwrap(),
            version: 4,
            changed_at: Timestamp::now(),
        };

        assert_eq!(event.schema_version(), 1);
        let back: CycleLengthChanged = event.to_envelope().payload_as().unwrap();
        assert_eq!(back, event);
    }
}
