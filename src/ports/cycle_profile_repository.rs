//! Cycle profile repository port.
//!
//! One profile per user. Updates carry the version the caller read so that
//! two concurrent settings changes cannot silently overwrite each other.

use async_trait::async_trait;

use crate::domain::cycle::{CycleError, CycleProfile};
use crate::domain::foundation::UserId;

/// Errors that can occur during profile persistence.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ProfileRepositoryError {
    #[error("Cycle profile not found for user: {0}")]
    NotFound(UserId),

    /// Another writer stored the first profile; `version` is what it stored.
    #[error("Cycle profile already exists for user: {user_id} (version {version})")]
    AlreadyExists { user_id: UserId, version: u64 },

    #[error("Version conflict: expected {expected}, found {actual}")]
    VersionConflict { expected: u64, actual: u64 },

    #[error("Storage error: {0}")]
    Storage(String),
}

impl From<ProfileRepositoryError> for CycleError {
    fn from(err: ProfileRepositoryError) -> Self {
        match err {
            ProfileRepositoryError::NotFound(user_id) => CycleError::ProfileNotFound(user_id),
            ProfileRepositoryError::VersionConflict { expected, actual } => {
                CycleError::Conflict { expected, actual }
            }
            // An insert expects no stored profile, which is version 0.
            ProfileRepositoryError::AlreadyExists { version, .. } => CycleError::Conflict {
                expected: 0,
                actual: version,
            },
            other => CycleError::infrastructure(other.to_string()),
        }
    }
}

/// Port for persisting cycle profiles.
#[async_trait]
pub trait CycleProfileRepository: Send + Sync {
    /// Find the profile for a user.
    ///
    /// Returns `None` if the user has never recorded a period.
    async fn find(&self, user_id: &UserId) -> Result<Option<CycleProfile>, ProfileRepositoryError>;

    /// Store a new profile.
    ///
    /// # Errors
    ///
    /// - `AlreadyExists` if the user already has a profile
    /// - `Storage` on persistence failure
    async fn insert(
        &self,
        user_id: &UserId,
        profile: &CycleProfile,
    ) -> Result<(), ProfileRepositoryError>;

    /// Replace a stored profile if its version still equals `expected_version`.
    ///
    /// # Errors
    ///
    /// - `NotFound` if the user has no profile
    /// - `VersionConflict` if the stored version moved on
    /// - `Storage` on persistence failure
    async fn update(
        &self,
        user_id: &UserId,
        profile: &CycleProfile,
        expected_version: u64,
    ) -> Result<(), ProfileRepositoryError>;

    /// Delete a profile (account removal).
    ///
    /// # Errors
    ///
    /// - `NotFound` if the user has no profile
    async fn delete(&self, user_id: &UserId) -> Result<(), ProfileRepositoryError>;
}
