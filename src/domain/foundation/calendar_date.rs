//! CalendarDate value object - a local calendar day with no time component.

use chrono::{DateTime, Datelike, Duration, Local, NaiveDate, NaiveDateTime, TimeZone};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::ValidationError;

/// A calendar date at day granularity.
///
/// Every conversion from a date-time keeps only the date in that value's own
/// time zone, so two instants on the same local day compare equal.
/// Serializes as ISO `YYYY-MM-DD`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CalendarDate(NaiveDate);

impl CalendarDate {
    /// Wraps a naive date.
    pub fn new(date: NaiveDate) -> Self {
        Self(date)
    }

    /// Creates a date from year, month and day.
    ///
    /// # Errors
    ///
    /// - `InvalidFormat` if the components do not name a real day
    pub fn from_ymd(year: i32, month: u32, day: u32) -> Result<Self, ValidationError> {
        NaiveDate::from_ymd_opt(year, month, day)
            .map(Self)
            .ok_or_else(|| {
                ValidationError::invalid_format(
                    "date",
                    format!("{:04}-{:02}-{:02} is not a calendar date", year, month, day),
                )
            })
    }

    /// Returns today's date in the local time zone.
    pub fn today_local() -> Self {
        Self(Local::now().date_naive())
    }

    /// Returns the inner naive date.
    pub fn as_naive(&self) -> &NaiveDate {
        &self.0
    }

    pub fn year(&self) -> i32 {
        self.0.year()
    }

    pub fn month(&self) -> u32 {
        self.0.month()
    }

    pub fn day(&self) -> u32 {
        self.0.day()
    }

    /// Signed number of whole days from `earlier` to `self`.
    ///
    /// Negative when `earlier` is actually after `self`.
    pub fn days_since(&self, earlier: CalendarDate) -> i64 {
        self.0.signed_duration_since(earlier.0).num_days()
    }

    /// Adds (or with a negative value, subtracts) whole days.
    ///
    /// Saturates at the representable date range instead of panicking.
    pub fn add_days(&self, days: i64) -> Self {
        Duration::try_days(days)
            .and_then(|delta| self.0.checked_add_signed(delta))
            .map(Self)
            .unwrap_or(if days < 0 { Self(NaiveDate::MIN) } else { Self(NaiveDate::MAX) })
    }

    /// Subtracts whole days.
    pub fn minus_days(&self, days: i64) -> Self {
        self.add_days(days.saturating_neg())
    }

    /// First day of this date's month.
    pub fn first_of_month(&self) -> Self {
        Self(self.0.with_day(1).unwrap_or(self.0))
    }

    /// Last day of this date's month.
    pub fn last_of_month(&self) -> Self {
        let (year, month) = if self.month() == 12 {
            (self.year() + 1, 1)
        } else {
            (self.year(), self.month() + 1)
        };
        NaiveDate::from_ymd_opt(year, month, 1)
            .and_then(|next| next.pred_opt())
            .map(Self)
            .unwrap_or(*self)
    }

    /// Iterates every day from `self` to `end`, inclusive.
    ///
    /// Yields nothing when `end` is before `self`.
    pub fn days_through(self, end: CalendarDate) -> impl Iterator<Item = CalendarDate> {
        let span = end.days_since(self);
        (0..=span).map(move |offset| self.add_days(offset))
    }
}

impl From<NaiveDate> for CalendarDate {
    fn from(date: NaiveDate) -> Self {
        Self(date)
    }
}

impl From<NaiveDateTime> for CalendarDate {
    fn from(dt: NaiveDateTime) -> Self {
        Self(dt.date())
    }
}

impl<Tz: TimeZone> From<DateTime<Tz>> for CalendarDate {
    fn from(dt: DateTime<Tz>) -> Self {
        Self(dt.date_naive())
    }
}

impl fmt::Display for CalendarDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format("%Y-%m-%d"))
    }
}

impl FromStr for CalendarDate {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d")
            .map(Self)
            .map_err(|e| ValidationError::invalid_format("date", e.to_string()))
    }
}
