//! CycleLength value object.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::foundation::ValidationError;

/// Length of a full cycle in days. Always at least one day.
///
/// Deserialization goes through [`CycleLength::new`] so a stored zero is
/// rejected rather than landing in the modulo arithmetic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub struct CycleLength(u32);

impl CycleLength {
    /// Cycle length assumed until the user says otherwise.
    pub const DEFAULT_DAYS: u32 = 28;

    /// Creates a cycle length.
    ///
    /// # Errors
    ///
    /// - `OutOfRange` if `days` is zero
    pub fn new(days: u32) -> Result<Self, ValidationError> {
        if days == 0 {
            return Err(ValidationError::out_of_range(
                "cycle_length",
                1,
                i64::from(u32::MAX),
                0,
            ));
        }
        Ok(Self(days))
    }

    pub fn days(&self) -> u32 {
        self.0
    }

    /// Day count widened for date arithmetic.
    pub fn as_i64(&self) -> i64 {
        i64::from(self.0)
    }
}

impl Default for CycleLength {
    fn default() -> Self {
        Self(Self::DEFAULT_DAYS)
    }
}

impl TryFrom<u32> for CycleLength {
    type Error = ValidationError;

    fn try_from(days: u32) -> Result<Self, Self::Error> {
        Self::new(days)
    }
}

impl From<CycleLength> for u32 {
    fn from(length: CycleLength) -> Self {
        length.0
    }
}

impl fmt::Display for CycleLength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} days", self.0)
    }
}
