//! UpdateCycleLengthHandler - Command handler for changing the cycle length.

use std::sync::Arc;

use tracing::{debug, info, warn};

use crate::domain::cycle::{CycleError, CycleLengthChanged, CyclePolicy, CycleProfile};
use crate::domain::foundation::{
    CommandMetadata, EventId, SerializableDomainEvent, Timestamp, UserId,
};
use crate::ports::{CycleProfileRepository, EventPublisher};

/// Command to change a user's cycle length.
#[derive(Debug, Clone)]
pub struct UpdateCycleLengthCommand {
    pub user_id: UserId,
    /// Requested length in days.
    pub cycle_length: u32,
}

/// Result of a cycle length update.
///
/// `event` is `None` when the requested length was already in effect.
#[derive(Debug, Clone)]
pub struct UpdateCycleLengthResult {
    pub profile: CycleProfile,
    pub event: Option<CycleLengthChanged>,
}

/// Handler for cycle length updates.
///
/// A user may set their cycle length before recording any period; the
/// profile is created on demand in that case.
pub struct UpdateCycleLengthHandler {
    repository: Arc<dyn CycleProfileRepository>,
    event_publisher: Arc<dyn EventPublisher>,
    policy: CyclePolicy,
}

impl UpdateCycleLengthHandler {
    pub fn new(
        repository: Arc<dyn CycleProfileRepository>,
        event_publisher: Arc<dyn EventPublisher>,
        policy: CyclePolicy,
    ) -> Self {
        Self {
            repository,
            event_publisher,
            policy,
        }
    }

    pub async fn handle(
        &self,
        cmd: UpdateCycleLengthCommand,
        metadata: CommandMetadata,
    ) -> Result<UpdateCycleLengthResult, CycleError> {
        // 1. Validate requested length
        let new_length = self.policy.validate_cycle_length(cmd.cycle_length)?;

        // 2. Load or create profile
        let existing = self.repository.find(&cmd.user_id).await?;
        let mut profile = existing
            .clone()
            .unwrap_or_else(|| CycleProfile::with_cycle_length(self.policy.default_cycle_length));
        let old_length = profile.cycle_length();

        if !profile.set_cycle_length(new_length) {
            debug!(user_id = %cmd.user_id, cycle_length = cmd.cycle_length, "cycle length unchanged");
            return Ok(UpdateCycleLengthResult {
                profile,
                event: None,
            });
        }

        // 3. Persist
        match &existing {
            Some(stored) => {
                self.repository
                    .update(&cmd.user_id, &profile, stored.version())
                    .await?
            }
            None => self.repository.insert(&cmd.user_id, &profile).await?,
        }

        // 4. Publish
        let event = CycleLengthChanged {
            event_id: EventId::new(),
            user_id: cmd.user_id.clone(),
            old_length,
            new_length,
            version: profile.version(),
            changed_at: Timestamp::now(),
        };

        let envelope = event
            .to_envelope()
            .with_correlation_id(metadata.correlation_id())
            .with_user_id(metadata.user_id.to_string());

        self.event_publisher.publish(envelope).await?;

        info!(
            user_id = %cmd.user_id,
            old_length = old_length.days(),
            new_length = new_length.days(),
            "cycle length changed"
        );
        if profile.is_initialized() && !profile.boundaries().is_well_formed() {
            warn!(
                user_id = %cmd.user_id,
                period_length = profile.period_length(),
                cycle_length = new_length.days(),
                "phase boundaries overlap, some phases cover no days"
            );
        }

        Ok(UpdateCycleLengthResult {
            profile,
            event: Some(event),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::{InMemoryCycleProfileRepository, InMemoryEventBus};
    use crate::domain::cycle::CycleLength;
    use crate::domain::foundation::{CalendarDate, ValidationError};
    use crate::ports::ProfileRepositoryError;
    use async_trait::async_trait;

    /// Simulates another writer bumping the version between read and write.
    struct RacingRepository {
        inner: InMemoryCycleProfileRepository,
    }

    #[async_trait]
    impl CycleProfileRepository for RacingRepository {
        async fn find(&self, user_id: &UserId) -> Result<Option<CycleProfile>, ProfileRepositoryError> {
            self.inner.find(user_id).await
        }

        async fn insert(
            &self,
            user_id: &UserId,
            profile: &CycleProfile,
        ) -> Result<(), ProfileRepositoryError> {
            self.inner.insert(user_id, profile).await
        }

        async fn update(
            &self,
            _user_id: &UserId,
            _profile: &CycleProfile,
            expected_version: u64,
        ) -> Result<(), ProfileRepositoryError> {
            Err(ProfileRepositoryError::VersionConflict {
                expected: expected_version,
                actual: expected_version + 1,
            })
        }

        async fn delete(&self, user_id: &UserId) -> Result<(), ProfileRepositoryError> {
            self.inner.delete(user_id).await
        }
    }

    fn test_user_id() -> UserId {
        UserId::new("test-user-123").unwrap()
    }

    fn test_metadata() -> CommandMetadata {
        CommandMetadata::new(test_user_id()).with_correlation_id("test-correlation")
    }

    fn policy() -> CyclePolicy {
        CyclePolicy {
            cycle_length_days: 15..=60,
            ..CyclePolicy::permissive()
        }
    }

    fn command(days: u32) -> UpdateCycleLengthCommand {
        UpdateCycleLengthCommand {
            user_id: test_user_id(),
            cycle_length: days,
        }
    }

    async fn seeded_repo() -> Arc<InMemoryCycleProfileRepository> {
        let repo = Arc::new(InMemoryCycleProfileRepository::new());
        let mut profile = CycleProfile::new();
        profile
            .set_reference_dates(
                "2024-04-01".parse::<CalendarDate>().unwrap(),
                "2024-04-05".parse::<CalendarDate>().unwrap(),
            )
            .unwrap();
        repo.insert(&test_user_id(), &profile).await.unwrap();
        repo
    }

    #[tokio::test]
    async fn updates_length_and_publishes_event() {
        let repo = seeded_repo().await;
        let bus = Arc::new(InMemoryEventBus::new());
        let handler = UpdateCycleLengthHandler::new(repo.clone(), bus.clone(), policy());

        let result = handler.handle(command(32), test_metadata()).await.unwrap();

        let event = result.event.unwrap();
        assert_eq!(event.old_length, CycleLength::default());
        assert_eq!(event.new_length.days(), 32);

        let stored = repo.find(&test_user_id()).await.unwrap().unwrap();
        assert_eq!(stored.cycle_length().days(), 32);
        assert_eq!(bus.events_of_type("cycle.length_changed.v1").len(), 1);
    }

    #[tokio::test]
    async fn same_length_is_a_no_op() {
        let repo = seeded_repo().await;
        let bus = Arc::new(InMemoryEventBus::new());
        let handler = UpdateCycleLengthHandler::new(repo.clone(), bus.clone(), policy());

        let first = handler.handle(command(30), test_metadata()).await.unwrap();
        let second = handler.handle(command(30), test_metadata()).await.unwrap();

        assert!(second.event.is_none());
        assert_eq!(first.profile, second.profile);
        assert_eq!(bus.event_count(), 1);
    }

    #[tokio::test]
    async fn creates_profile_when_missing() {
        let repo = Arc::new(InMemoryCycleProfileRepository::new());
        let handler =
            UpdateCycleLengthHandler::new(repo.clone(), Arc::new(InMemoryEventBus::new()), policy());

        let result = handler.handle(command(26), test_metadata()).await.unwrap();

        assert!(!result.profile.is_initialized());
        assert_eq!(repo.profile_count().await, 1);
    }

    #[tokio::test]
    async fn rejects_length_outside_policy() {
        let repo = seeded_repo().await;
        let bus = Arc::new(InMemoryEventBus::new());
        let handler = UpdateCycleLengthHandler::new(repo, bus.clone(), policy());

        let result = handler.handle(command(90), test_metadata()).await;

        assert!(matches!(
            result,
            Err(CycleError::Validation(ValidationError::OutOfRange { actual: 90, .. }))
        ));
        assert_eq!(bus.event_count(), 0);
    }

    #[tokio::test]
    async fn concurrent_write_surfaces_as_conflict() {
        let inner = InMemoryCycleProfileRepository::new();
        let mut profile = CycleProfile::new();
        profile.set_cycle_length(CycleLength::new(29).unwrap());
        inner.insert(&test_user_id(), &profile).await.unwrap();

        let bus = Arc::new(InMemoryEventBus::new());
        let handler =
            UpdateCycleLengthHandler::new(Arc::new(RacingRepository { inner }), bus.clone(), policy());

        let result = handler.handle(command(31), test_metadata()).await;

        assert!(matches!(result, Err(CycleError::Conflict { expected: 1, .. })));
        assert_eq!(bus.event_count(), 0);
    }
}
