use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use chrono::Utc;
use tracing::{info, warn};

use super::document;
use super::domain::{ApplicantProfile, IntakeId, IntakeSubmission, SubmissionStatus};
use super::repository::{
    IntakeFilter, IntakeNotification, IntakeRecord, IntakeRepository, NotificationPublisher,
    RepositoryError,
};
use super::scoring::{self, Qualification};
use super::validation::{IntakeGuard, IntakeViolation};
use crate::config::NotificationConfig;

pub const SUBMITTED_TEMPLATE: &str = "intake_submitted";

/// Service composing the intake guard, repository, scoring engine and notifier.
pub struct PartnerIntakeService<R, N> {
    guard: IntakeGuard,
    repository: Arc<R>,
    notifier: Arc<N>,
    notification: NotificationConfig,
}

static INTAKE_SEQUENCE: AtomicU64 = AtomicU64::new(1);

fn next_intake_id() -> IntakeId {
    let id = INTAKE_SEQUENCE.fetch_add(1, Ordering::Relaxed);
    IntakeId(format!("intake-{id:06}"))
}

impl<R, N> PartnerIntakeService<R, N>
where
    R: IntakeRepository + 'static,
    N: NotificationPublisher + 'static,
{
    pub fn new(repository: Arc<R>, notifier: Arc<N>, notification: NotificationConfig) -> Self {
        Self::with_guard(IntakeGuard::new(), repository, notifier, notification)
    }

    pub fn with_guard(
        guard: IntakeGuard,
        repository: Arc<R>,
        notifier: Arc<N>,
        notification: NotificationConfig,
    ) -> Self {
        Self {
            guard,
            repository,
            notifier,
            notification,
        }
    }

    /// Live feedback while the form is being filled in. Nothing is stored.
    pub fn preview(&self, profile: &ApplicantProfile) -> Qualification {
        scoring::assess(profile)
    }

    /// Validate, score and store a submission, then notify the partnerships
    /// inbox. A failed notification does not undo the stored record.
    pub fn submit(
        &self,
        mut submission: IntakeSubmission,
    ) -> Result<IntakeRecord, IntakeServiceError> {
        self.guard.validate(&submission)?;

        let score = scoring::score(&submission.profile);
        submission.submission_status = SubmissionStatus::Final;

        let record = IntakeRecord {
            id: next_intake_id(),
            submission,
            score,
            tier: scoring::classify(score),
            submitted_at: Utc::now(),
        };

        let stored = self.repository.insert(record)?;
        info!(
            intake_id = %stored.id.0,
            score = stored.score.value(),
            tier = stored.tier.label(),
            "partner intake accepted"
        );

        if let Err(error) = self.notifier.publish(self.notification_for(&stored)) {
            warn!(intake_id = %stored.id.0, %error, "intake notification failed");
        }

        Ok(stored)
    }

    pub fn get(&self, intake_id: &IntakeId) -> Result<IntakeRecord, IntakeServiceError> {
        let record = self
            .repository
            .fetch(intake_id)?
            .ok_or(RepositoryError::NotFound)?;
        Ok(record)
    }

    /// Matching intakes, newest first.
    pub fn list(&self, filter: &IntakeFilter) -> Result<Vec<IntakeRecord>, IntakeServiceError> {
        let mut records = self.repository.list(filter)?;
        records.sort_by(|left, right| {
            right
                .submitted_at
                .cmp(&left.submitted_at)
                .then_with(|| right.id.cmp(&left.id))
        });
        Ok(records)
    }

    fn notification_for(&self, record: &IntakeRecord) -> IntakeNotification {
        IntakeNotification {
            template: SUBMITTED_TEMPLATE.to_string(),
            intake_id: record.id.clone(),
            sender: self.notification.from_email.clone(),
            recipients: vec![self.notification.admin_email.clone()],
            subject: document::subject(&record.submission),
            document: document::render_summary(record),
        }
    }
}

/// Error raised by the intake service.
#[derive(Debug, thiserror::Error)]
pub enum IntakeServiceError {
    #[error(transparent)]
    Validation(#[from] IntakeViolation),
    #[error(transparent)]
    Repository(#[from] RepositoryError),
}
