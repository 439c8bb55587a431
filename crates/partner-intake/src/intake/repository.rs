use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::domain::{Country, IntakeId, IntakeSubmission, PartnerRole};
use super::scoring::{Score, Tier};

/// Stored intake: the submitted form plus the score and tier computed once at
/// submission time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IntakeRecord {
    pub id: IntakeId,
    pub submission: IntakeSubmission,
    pub score: Score,
    pub tier: Tier,
    pub submitted_at: DateTime<Utc>,
}

impl IntakeRecord {
    pub fn status_view(&self) -> IntakeStatusView {
        IntakeStatusView {
            intake_id: self.id.clone(),
            company: self.submission.company.clone(),
            role: self.submission.profile.role,
            score: self.score,
            tier: self.tier,
            submitted_at: self.submitted_at,
        }
    }
}

/// Storage abstraction so the service module can be exercised in isolation.
pub trait IntakeRepository: Send + Sync {
    fn insert(&self, record: IntakeRecord) -> Result<IntakeRecord, RepositoryError>;
    fn fetch(&self, id: &IntakeId) -> Result<Option<IntakeRecord>, RepositoryError>;
    fn list(&self, filter: &IntakeFilter) -> Result<Vec<IntakeRecord>, RepositoryError>;
}

/// Optional listing constraints; an empty filter matches every record.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct IntakeFilter {
    pub role: Option<PartnerRole>,
    pub country: Option<Country>,
    pub min_score: Option<u8>,
}

impl IntakeFilter {
    pub fn matches(&self, record: &IntakeRecord) -> bool {
        let profile = &record.submission.profile;

        if let Some(role) = self.role {
            if profile.role != Some(role) {
                return false;
            }
        }

        if let Some(country) = self.country {
            if profile.geography.country != country {
                return false;
            }
        }

        self.min_score
            .map_or(true, |floor| record.score.value() >= floor)
    }
}

/// Error enumeration for repository failures.
#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    #[error("record already exists")]
    Conflict,
    #[error("record not found")]
    NotFound,
    #[error("repository unavailable: {0}")]
    Unavailable(String),
}

/// Outbound hook that hands a finished intake to e-mail or CRM adapters.
pub trait NotificationPublisher: Send + Sync {
    fn publish(&self, notification: IntakeNotification) -> Result<(), NotificationError>;
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IntakeNotification {
    pub template: String,
    pub intake_id: IntakeId,
    pub sender: String,
    pub recipients: Vec<String>,
    pub subject: String,
    pub document: String,
}

#[derive(Debug, thiserror::Error)]
pub enum NotificationError {
    #[error("notification transport unavailable: {0}")]
    Transport(String),
}

/// Summary of a stored intake exposed over HTTP.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct IntakeStatusView {
    pub intake_id: IntakeId,
    pub company: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<PartnerRole>,
    pub score: Score,
    pub tier: Tier,
    pub submitted_at: DateTime<Utc>,
}
