//! In-Memory Cycle Profile Repository
//!
//! Keeps profiles in a map keyed by user. Useful for tests and for
//! embedding the tracker in a single-process app.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::cycle::CycleProfile;
use crate::domain::foundation::UserId;
use crate::ports::{CycleProfileRepository, ProfileRepositoryError};

#[derive(Debug, Clone, Default)]
pub struct InMemoryCycleProfileRepository {
    profiles: Arc<RwLock<HashMap<UserId, CycleProfile>>>,
}

impl InMemoryCycleProfileRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the number of stored profiles
    pub async fn profile_count(&self) -> usize {
        self.profiles.read().await.len()
    }

    /// Clear all stored profiles (useful for tests)
    pub async fn clear(&self) {
        self.profiles.write().await.clear();
    }
}

#[async_trait]
impl CycleProfileRepository for InMemoryCycleProfileRepository {
    async fn find(&self, user_id: &UserId) -> Result<Option<CycleProfile>, ProfileRepositoryError> {
        Ok(self.profiles.read().await.get(user_id).cloned())
    }

    async fn insert(
        &self,
        user_id: &UserId,
        profile: &CycleProfile,
    ) -> Result<(), ProfileRepositoryError> {
        let mut profiles = self.profiles.write().await;
        if let Some(existing) = profiles.get(user_id) {
            return Err(ProfileRepositoryError::AlreadyExists {
                user_id: user_id.clone(),
                version: existing.version(),
            });
        }
        profiles.insert(user_id.clone(), profile.clone());
        Ok(())
    }

    async fn update(
        &self,
        user_id: &UserId,
        profile: &CycleProfile,
        expected_version: u64,
    ) -> Result<(), ProfileRepositoryError> {
        let mut profiles = self.profiles.write().await;
        let stored = profiles
            .get_mut(user_id)
            .ok_or_else(|| ProfileRepositoryError::NotFound(user_id.clone()))?;

        if stored.version() != expected_version {
            return Err(ProfileRepositoryError::VersionConflict {
                expected: expected_version,
                actual: stored.version(),
            });
        }

        *stored = profile.clone();
        Ok(())
    }

    async fn delete(&self, user_id: &UserId) -> Result<(), ProfileRepositoryError> {
        self.profiles
            .write()
            .await
            .remove(user_id)
            .map(|_| ())
            .ok_or_else(|| ProfileRepositoryError::NotFound(user_id.clone()))
    }
}
