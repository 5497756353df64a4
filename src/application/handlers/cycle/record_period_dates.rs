//! RecordPeriodDatesHandler - Command handler for recording the last period.
//!
//! Used at onboarding and whenever the user corrects their dates. Creates the
//! profile on first use.

use std::sync::Arc;

use tracing::{info, warn};

use crate::domain::cycle::{
    CycleCalculator, CycleComputation, CycleError, CyclePolicy, CycleProfile, PeriodDatesRecorded,
};
use crate::domain::foundation::{
    CalendarDate, CommandMetadata, EventId, SerializableDomainEvent, Timestamp, UserId,
};
use crate::ports::{Clock, CycleProfileRepository, EventPublisher};

/// Command to record the last period's start and end dates.
#[derive(Debug, Clone)]
pub struct RecordPeriodDatesCommand {
    pub user_id: UserId,
    pub period_start: CalendarDate,
    pub period_end: CalendarDate,
}

/// Result of a successful recording.
#[derive(Debug, Clone)]
pub struct RecordPeriodDatesResult {
    pub profile: CycleProfile,
    pub computation: CycleComputation,
    pub event: PeriodDatesRecorded,
}

/// Handler for recording period dates.
pub struct RecordPeriodDatesHandler {
    repository: Arc<dyn CycleProfileRepository>,
    event_publisher: Arc<dyn EventPublisher>,
    clock: Arc<dyn Clock>,
    policy: CyclePolicy,
}

impl RecordPeriodDatesHandler {
    pub fn new(
        repository: Arc<dyn CycleProfileRepository>,
        event_publisher: Arc<dyn EventPublisher>,
        clock: Arc<dyn Clock>,
        policy: CyclePolicy,
    ) -> Self {
        Self {
            repository,
            event_publisher,
            clock,
            policy,
        }
    }

    pub async fn handle(
        &self,
        cmd: RecordPeriodDatesCommand,
        metadata: CommandMetadata,
    ) -> Result<RecordPeriodDatesResult, CycleError> {
        let today = self.clock.today();

        // 1. Apply onboarding policy
        if let Err(err) = self
            .policy
            .validate_period_dates(cmd.period_start, cmd.period_end, today)
        {
            warn!(user_id = %cmd.user_id, error = %err, "period dates rejected");
            return Err(err);
        }

        // 2. Load or create the profile and record the dates
        let existing = self.repository.find(&cmd.user_id).await?;
        let mut profile = existing
            .clone()
            .unwrap_or_else(|| CycleProfile::with_cycle_length(self.policy.default_cycle_length));
        profile.set_reference_dates(cmd.period_start, cmd.period_end)?;

        // 3. Persist
        match &existing {
            Some(stored) => {
                self.repository
                    .update(&cmd.user_id, &profile, stored.version())
                    .await?
            }
            None => self.repository.insert(&cmd.user_id, &profile).await?,
        }

        // 4. Create and publish event
        let event = PeriodDatesRecorded {
            event_id: EventId::new(),
            user_id: cmd.user_id.clone(),
            period_start: cmd.period_start,
            period_end: cmd.period_end,
            period_length: profile.period_length(),
            version: profile.version(),
            recorded_at: Timestamp::now(),
        };

        let envelope = event
            .to_envelope()
            .with_correlation_id(metadata.correlation_id())
            .with_user_id(metadata.user_id.to_string());

        self.event_publisher.publish(envelope).await?;

        info!(
            user_id = %cmd.user_id,
            period_start = %cmd.period_start,
            period_length = profile.period_length(),
            first_recording = existing.is_none(),
            "period dates recorded"
        );
        if !profile.boundaries().is_well_formed() {
            warn!(
                user_id = %cmd.user_id,
                period_length = profile.period_length(),
                cycle_length = profile.cycle_length().days(),
                "phase boundaries overlap, some phases cover no days"
            );
        }

        let computation = CycleCalculator::compute_for_today(&profile, today);
        Ok(RecordPeriodDatesResult {
            profile,
            computation,
            event,
        })
    }
}
