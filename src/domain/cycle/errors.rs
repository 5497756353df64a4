//! Cycle-specific error types.

use thiserror::Error;

use crate::domain::foundation::{CalendarDate, DomainError, ErrorCode, UserId, ValidationError};

/// Errors raised while recording or querying a cycle profile.
///
/// A profile without reference dates is not an error; queries on it return
/// the uninitialized projection.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CycleError {
    /// End date precedes start date.
    #[error("Range end {end} is before range start {start}")]
    InvalidRange {
        start: CalendarDate,
        end: CalendarDate,
    },

    /// A value failed validation (cycle length, onboarding policy).
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// No profile has been recorded for this user.
    #[error("No cycle profile recorded for user {0}")]
    ProfileNotFound(UserId),

    /// The stored profile changed since it was read.
    #[error("Cycle profile version conflict: expected {expected}, found {actual}")]
    Conflict { expected: u64, actual: u64 },

    /// A port or adapter failed.
    #[error("Infrastructure error: {0}")]
    Infrastructure(String),
}

impl CycleError {
    pub fn invalid_range(start: CalendarDate, end: CalendarDate) -> Self {
        CycleError::InvalidRange { start, end }
    }

    pub fn infrastructure(message: impl Into<String>) -> Self {
        CycleError::Infrastructure(message.into())
    }

    pub fn code(&self) -> ErrorCode {
        match self {
            CycleError::InvalidRange { .. } => ErrorCode::InvalidRange,
            CycleError::Validation(err) => ErrorCode::from(err),
            CycleError::ProfileNotFound(_) => ErrorCode::ProfileNotFound,
            CycleError::Conflict { .. } => ErrorCode::VersionConflict,
            CycleError::Infrastructure(_) => ErrorCode::StorageError,
        }
    }
}

impl From<DomainError> for CycleError {
    fn from(err: DomainError) -> Self {
        match err.code {
            ErrorCode::ValidationFailed
            | ErrorCode::EmptyField
            | ErrorCode::OutOfRange
            | ErrorCode::InvalidFormat => CycleError::Validation(ValidationError::invalid_format(
                err.details
                    .get("field")
                    .cloned()
                    .unwrap_or_else(|| "unknown".to_string()),
                err.message,
            )),
            _ => CycleError::Infrastructure(err.to_string()),
        }
    }
}

impl From<CycleError> for DomainError {
    fn from(err: CycleError) -> Self {
        DomainError::new(err.code(), err.to_string())
    }
}
