use metrics_exporter_prometheus::PrometheusHandle;
use partner_intake::intake::{
    IntakeFilter, IntakeId, IntakeNotification, IntakeRecord, IntakeRepository,
    NotificationError, NotificationPublisher, RepositoryError,
};
use std::collections::HashMap;
use std::sync::atomic::AtomicBool;
use std::sync::{Arc, Mutex, MutexGuard};
use tracing::info;

type Records = HashMap<IntakeId, IntakeRecord>;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

#[derive(Default, Clone)]
pub(crate) struct InMemoryIntakeRepository {
    records: Arc<Mutex<Records>>,
}

impl InMemoryIntakeRepository {
    fn lock(&self) -> Result<MutexGuard<'_, Records>, RepositoryError> {
        self.records
            .lock()
            .map_err(|_| RepositoryError::Unavailable("repository mutex poisoned".to_string()))
    }
}

impl IntakeRepository for InMemoryIntakeRepository {
    fn insert(&self, record: IntakeRecord) -> Result<IntakeRecord, RepositoryError> {
        let mut guard = self.lock()?;
        if guard.contains_key(&record.id) {
            return Err(RepositoryError::Conflict);
        }
        guard.insert(record.id.clone(), record.clone());
        Ok(record)
    }

    fn fetch(&self, id: &IntakeId) -> Result<Option<IntakeRecord>, RepositoryError> {
        let guard = self.lock()?;
        Ok(guard.get(id).cloned())
    }

    fn list(&self, filter: &IntakeFilter) -> Result<Vec<IntakeRecord>, RepositoryError> {
        let guard = self.lock()?;
        Ok(guard
            .values()
            .filter(|record| filter.matches(record))
            .cloned()
            .collect())
    }
}

/// Keeps dispatched notifications in memory and logs each one. Stands in for
/// the e-mail relay until one is configured.
#[derive(Default, Clone)]
pub(crate) struct OutboxNotificationPublisher {
    events: Arc<Mutex<Vec<IntakeNotification>>>,
}

impl NotificationPublisher for OutboxNotificationPublisher {
    fn publish(&self, notification: IntakeNotification) -> Result<(), NotificationError> {
        info!(
            template = %notification.template,
            intake_id = %notification.intake_id.0,
            recipients = ?notification.recipients,
            subject = %notification.subject,
            "intake notification queued"
        );
        let mut guard = self
            .events
            .lock()
            .map_err(|_| NotificationError::Transport("outbox mutex poisoned".to_string()))?;
        guard.push(notification);
        Ok(())
    }
}

impl OutboxNotificationPublisher {
    pub(crate) fn events(&self) -> Vec<IntakeNotification> {
        self.events
            .lock()
            .map(|guard| guard.clone())
            .unwrap_or_default()
    }
}
