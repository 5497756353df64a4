//! CyclePhase enum - the four recurring phases of a menstrual cycle.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::domain::foundation::ValidationError;

/// Phase of the menstrual cycle.
///
/// The set is closed: consumers branch on it with exhaustive `match`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CyclePhase {
    Menstruation,
    Follicular,
    Ovulation,
    Luteal,
}

impl CyclePhase {
    /// All phases in cycle order.
    pub const ALL: [CyclePhase; 4] = [
        CyclePhase::Menstruation,
        CyclePhase::Follicular,
        CyclePhase::Ovulation,
        CyclePhase::Luteal,
    ];

    /// The phase that follows this one; luteal wraps back to menstruation.
    pub fn next(&self) -> CyclePhase {
        match self {
            CyclePhase::Menstruation => CyclePhase::Follicular,
            CyclePhase::Follicular => CyclePhase::Ovulation,
            CyclePhase::Ovulation => CyclePhase::Luteal,
            CyclePhase::Luteal => CyclePhase::Menstruation,
        }
    }

    /// Wire name (lowercase).
    pub fn as_str(&self) -> &'static str {
        match self {
            CyclePhase::Menstruation => "menstruation",
            CyclePhase::Follicular => "follicular",
            CyclePhase::Ovulation => "ovulation",
            CyclePhase::Luteal => "luteal",
        }
    }

    /// Human-readable label.
    pub fn label(&self) -> &'static str {
        match self {
            CyclePhase::Menstruation => "Menstruation",
            CyclePhase::Follicular => "Follicular",
            CyclePhase::Ovulation => "Ovulation",
            CyclePhase::Luteal => "Luteal",
        }
    }
}

impl fmt::Display for CyclePhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl FromStr for CyclePhase {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        CyclePhase::ALL
            .into_iter()
            .find(|phase| phase.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ValidationError::invalid_format("phase", format!("unknown phase '{}'", s)))
    }
}
