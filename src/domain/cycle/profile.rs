//! CycleProfile aggregate - the user's recorded reference period.
//!
//! The profile is the only mutable cycle state. Everything the application
//! shows about the current cycle is derived from it on read by
//! [`super::CycleCalculator`].

use serde::{Deserialize, Serialize};

use super::{CycleError, CycleLength, PhaseBoundaries};
use crate::domain::foundation::{CalendarDate, ValidationError};

/// Period length assumed until reference dates are recorded.
pub const DEFAULT_PERIOD_LENGTH: u32 = 5;

/// Cycle profile aggregate.
///
/// # Invariants
///
/// - `last_period_start` and `last_period_end` are both set or both unset
/// - `last_period_end >= last_period_start` whenever set
/// - `period_length == days_between(start, end) + 1` once dates are recorded
/// - `version` increases on every effective mutation
///
/// Deserialization goes through [`CycleProfile::reconstitute`], so a stored
/// profile that breaks these invariants is rejected.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "CycleProfileRecord")]
pub struct CycleProfile {
    last_period_start: Option<CalendarDate>,
    last_period_end: Option<CalendarDate>,
    cycle_length: CycleLength,
    period_length: u32,
    version: u64,
}

impl CycleProfile {
    /// Creates an empty profile with default cycle and period lengths.
    pub fn new() -> Self {
        Self::with_cycle_length(CycleLength::default())
    }

    /// Creates an empty profile with a specific cycle length.
    pub fn with_cycle_length(cycle_length: CycleLength) -> Self {
        Self {
            last_period_start: None,
            last_period_end: None,
            cycle_length,
            period_length: DEFAULT_PERIOD_LENGTH,
            version: 0,
        }
    }

    /// Reconstitute a profile from storage.
    ///
    /// # Errors
    ///
    /// - `InvalidRange` if the stored end precedes the stored start
    /// - `Validation` if only one of the dates is stored, or if the period
    ///   length disagrees with the stored range
    pub fn reconstitute(
        last_period_start: Option<CalendarDate>,
        last_period_end: Option<CalendarDate>,
        cycle_length: CycleLength,
        period_length: u32,
        version: u64,
    ) -> Result<Self, CycleError> {
        match (last_period_start, last_period_end) {
            (Some(start), Some(end)) => {
                if end < start {
                    return Err(CycleError::invalid_range(start, end));
                }
                let expected = inclusive_span(start, end);
                if period_length != expected {
                    return Err(ValidationError::out_of_range(
                        "period_length",
                        i64::from(expected),
                        i64::from(expected),
                        i64::from(period_length),
                    )
                    .into());
                }
            }
            (None, None) => {}
            _ => {
                return Err(ValidationError::invalid_format(
                    "last_period_end",
                    "start and end must be stored together",
                )
                .into());
            }
        }
        Ok(Self {
            last_period_start,
            last_period_end,
            cycle_length,
            period_length,
            version,
        })
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Accessors
    // ─────────────────────────────────────────────────────────────────────────

    pub fn last_period_start(&self) -> Option<CalendarDate> {
        self.last_period_start
    }

    pub fn last_period_end(&self) -> Option<CalendarDate> {
        self.last_period_end
    }

    pub fn cycle_length(&self) -> CycleLength {
        self.cycle_length
    }

    pub fn period_length(&self) -> u32 {
        self.period_length
    }

    pub fn version(&self) -> u64 {
        self.version
    }

    /// True once reference dates have been recorded.
    pub fn is_initialized(&self) -> bool {
        self.last_period_start.is_some()
    }

    /// Phase boundaries for the current period and cycle length.
    pub fn boundaries(&self) -> PhaseBoundaries {
        PhaseBoundaries::new(self.period_length, self.cycle_length)
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Mutations
    // ─────────────────────────────────────────────────────────────────────────

    /// Records the last period's start and end dates.
    ///
    /// Date-times are reduced to their calendar day first. The period length
    /// becomes the inclusive day count of the range.
    ///
    /// # Errors
    ///
    /// - `InvalidRange` if `end` is before `start`; the profile is unchanged
    pub fn set_reference_dates(
        &mut self,
        start: impl Into<CalendarDate>,
        end: impl Into<CalendarDate>,
    ) -> Result<(), CycleError> {
        let start = start.into();
        let end = end.into();
        if end < start {
            return Err(CycleError::invalid_range(start, end));
        }

        self.last_period_start = Some(start);
        self.last_period_end = Some(end);
        self.period_length = inclusive_span(start, end);
        self.version += 1;
        Ok(())
    }

    /// Replaces the cycle length.
    ///
    /// The period length is not re-checked against the new length. Setting
    /// the current length again is a no-op.
    ///
    /// Returns `true` when the length actually changed.
    pub fn set_cycle_length(&mut self, length: CycleLength) -> bool {
        if self.cycle_length == length {
            return false;
        }
        self.cycle_length = length;
        self.version += 1;
        true
    }
}

impl Default for CycleProfile {
    fn default() -> Self {
        Self::new()
    }
}

/// Inclusive day count of `start..=end`.
fn inclusive_span(start: CalendarDate, end: CalendarDate) -> u32 {
    u32::try_from(end.days_since(start) + 1).unwrap_or(u32::MAX)
}

/// Stored shape of a profile, checked by `reconstitute` on the way in.
#[derive(Deserialize)]
struct CycleProfileRecord {
    last_period_start: Option<CalendarDate>,
    last_period_end: Option<CalendarDate>,
    cycle_length: CycleLength,
    period_length: u32,
    version: u64,
}

impl TryFrom<CycleProfileRecord> for CycleProfile {
    type Error = CycleError;

    fn try_from(record: CycleProfileRecord) -> Result<Self, Self::Error> {
        Self::reconstitute(
            record.last_period_start,
            record.last_period_end,
            record.cycle_length,
            record.period_length,
            record.version,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn date(s: &str) -> CalendarDate {
        s.parse().unwrap()
    }

    fn length(days: u32) -> CycleLength {
        CycleLength::new(days).unwrap()
    }

    #[test]
    fn new_profile_uses_defaults() {
        let profile = CycleProfile::new();
        assert!(!profile.is_initialized());
        assert_eq!(profile.cycle_length().days(), 28);
        assert_eq!(profile.period_length(), DEFAULT_PERIOD_LENGTH);
        assert_eq!(profile.version(), 0);
    }

    #[test]
    fn set_reference_dates_derives_inclusive_period_length() {
        let mut profile = CycleProfile::new();
        profile
            .set_reference_dates(date("2024-04-01"), date("2024-04-04"))
            .unwrap();

        assert_eq!(profile.last_period_start(), Some(date("2024-04-01")));
        assert_eq!(profile.last_period_end(), Some(date("2024-04-04")));
        assert_eq!(profile.period_length(), 4);
        assert_eq!(profile.version(), 1);
    }

    #[test]
    fn single_day_period_has_length_one() {
        let mut profile = CycleProfile::new();
        profile
            .set_reference_dates(date("2024-04-01"), date("2024-04-01"))
            .unwrap();
        assert_eq!(profile.period_length(), 1);
    }

    #[test]
    fn inverted_range_is_rejected_without_mutation() {
        let mut profile = CycleProfile::new();
        let before = profile.clone();

        let result = profile.set_reference_dates(date("2024-04-05"), date("2024-04-02"));

        assert_eq!(
            result,
            Err(CycleError::InvalidRange {
                start: date("2024-04-05"),
                end: date("2024-04-02"),
            })
        );
        assert_eq!(profile, before);
    }

    #[test]
    fn date_times_are_normalized_to_days() {
        let mut profile = CycleProfile::new();
        let start = Utc.with_ymd_and_hms(2024, 4, 1, 22, 0, 0).unwrap();
        let end = Utc.with_ymd_and_hms(2024, 4, 5, 1, 0, 0).unwrap();
        profile.set_reference_dates(start, end).unwrap();

        assert_eq!(profile.last_period_start(), Some(date("2024-04-01")));
        assert_eq!(profile.period_length(), 5);
    }

    #[test]
    fn set_cycle_length_is_idempotent() {
        let mut once = CycleProfile::new();
        once.set_cycle_length(length(30));

        let mut twice = CycleProfile::new();
        assert!(twice.set_cycle_length(length(30)));
        assert!(!twice.set_cycle_length(length(30)));

        assert_eq!(once, twice);
    }

    #[test]
    fn set_cycle_length_does_not_check_period_length() {
        let mut profile = CycleProfile::new();
        profile
            .set_reference_dates(date("2024-04-01"), date("2024-04-10"))
            .unwrap();
        assert!(profile.set_cycle_length(length(7)));
        assert_eq!(profile.period_length(), 10);
        assert_eq!(profile.cycle_length().days(), 7);
    }

    #[test]
    fn reconstitute_rejects_inverted_dates() {
        let result = CycleProfile::reconstitute(
            Some(date("2024-04-05")),
            Some(date("2024-04-01")),
            length(28),
            5,
            3,
        );
        assert!(matches!(result, Err(CycleError::InvalidRange { .. })));
    }

    #[test]
    fn profile_serializes_with_iso_dates() {
        let mut profile = CycleProfile::new();
        profile
            .set_reference_dates(date("2024-04-01"), date("2024-04-05"))
            .unwrap();
        let json = serde_json::to_value(&profile).unwrap();
        assert_eq!(json["last_period_start"], "2024-04-01");
        assert_eq!(json["cycle_length"], 28);
        assert_eq!(json["period_length"], 5);
    }

    #[test]
    fn reconstitute_rejects_mismatched_period_length() {
        let result = CycleProfile::reconstitute(
            Some(date("2024-04-01")),
            Some(date("2024-04-05")),
            length(28),
            3,
            1,
        );
        assert!(matches!(
            result,
            Err(CycleError::Validation(ValidationError::OutOfRange { actual: 3, .. }))
        ));
    }

    #[test]
    fn reconstitute_rejects_half_recorded_dates() {
        let result =
            CycleProfile::reconstitute(Some(date("2024-04-01")), None, length(28), 5, 1);
        assert!(matches!(
            result,
            Err(CycleError::Validation(ValidationError::InvalidFormat { .. }))
        ));
    }

    #[test]
    fn stored_profile_round_trips() {
        let mut profile = CycleProfile::new();
        profile
            .set_reference_dates(date("2024-04-01"), date("2024-04-05"))
            .unwrap();
        let json = serde_json::to_string(&profile).unwrap();
        let restored: CycleProfile = serde_json::from_str(&json).unwrap();
        assert_eq!(restored, profile);
    }

    #[test]
    fn inverted_stored_profile_fails_to_deserialize() {
        let json = r#"{
            "last_period_start": "2024-04-10",
            "last_period_end": "2024-04-01",
            "cycle_length": 28,
            "period_length": 0,
            "version": 1
        }"#;
        let result = serde_json::from_str::<CycleProfile>(json);
        assert!(result.is_err());
    }

    #[test]
    fn stored_profile_with_wrong_period_length_fails_to_deserialize() {
        let json = r#"{
            "last_period_start": "2024-04-01",
            "last_period_end": "2024-04-05",
            "cycle_length": 28,
            "period_length": 9,
            "version": 1
        }"#;
        assert!(serde_json::from_str::<CycleProfile>(json).is_err());
    }
}
