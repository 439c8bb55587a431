use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use axum::response::Response;
use serde_json::Value;

use crate::config::NotificationConfig;
use crate::intake::domain::{
    ActivityMetrics, ApplicantProfile, ChainAccess, ComplianceCertifications, Country, Geography,
    IntakeId, IntakeSubmission, Languages, Logistics, NetworkCounts, PartnerRole,
    ProductCategories, ProofReferences, RequestedServices,
};
use crate::intake::repository::{
    IntakeFilter, IntakeNotification, IntakeRecord, IntakeRepository, NotificationError,
    NotificationPublisher, RepositoryError,
};
use crate::intake::{intake_router, PartnerIntakeService};

pub(super) const NORTHWIND_SCORE: u8 = 76;

pub(super) fn notification_config() -> NotificationConfig {
    NotificationConfig {
        admin_email: "partners@oneshop.test".to_string(),
        from_email: "intake@oneshop.test".to_string(),
    }
}

/// Mid-sized Ontario/Quebec distributor; scores 76 (Strong) without clamping.
pub(super) fn northwind_profile() -> ApplicantProfile {
    ApplicantProfile {
        role: Some(PartnerRole::Distributor),
        geography: Geography {
            country: Country::Canada,
            coverage_provinces: vec!["ON".to_string(), "QC".to_string(), "BC".to_string()],
            coverage_states: Vec::new(),
        },
        languages: Languages {
            english: true,
            french: true,
            spanish: false,
            other: String::new(),
        },
        network_counts: NetworkCounts {
            independents: 40,
            chains: 15,
            ..NetworkCounts::default()
        },
        activity: ActivityMetrics {
            monthly_doors_serviced: 30.0,
            decision_makers: 8.0,
            avg_monthly_sell_in_cad: 12_500.0,
            deals_last_12mo: 4.0,
        },
        chain_access: ChainAccess {
            loblaws: true,
            ..ChainAccess::default()
        },
        logistics: Logistics {
            warehouse_sq_ft: 2_500.0,
            cold_chain: false,
            trucks_owned: 1,
            third_party_logistics: true,
        },
        compliance: ComplianceCertifications {
            cfia_importer: true,
            ..ComplianceCertifications::default()
        },
        categories: ProductCategories {
            afro_grocery: true,
            beverages: true,
            ..ProductCategories::default()
        },
        proof: ProofReferences {
            linkedin: "https://www.linkedin.com/company/northwind-foods".to_string(),
            ..ProofReferences::default()
        },
    }
}

/// Every signal at or past its top step; the raw total is far above the cap.
pub(super) fn maximal_profile() -> ApplicantProfile {
    ApplicantProfile {
        role: Some(PartnerRole::Both),
        geography: Geography {
            country: Country::UnitedStates,
            coverage_provinces: Vec::new(),
            coverage_states: ["NY", "NJ", "PA", "MA", "CT", "IL", "TX"]
                .iter()
                .map(|code| code.to_string())
                .collect(),
        },
        languages: Languages {
            english: true,
            french: true,
            spanish: true,
            other: "Twi".to_string(),
        },
        network_counts: NetworkCounts {
            independents: 120,
            chains: 60,
            ..NetworkCounts::default()
        },
        activity: ActivityMetrics {
            monthly_doors_serviced: 400.0,
            decision_makers: 90.0,
            avg_monthly_sell_in_cad: 350_000.0,
            deals_last_12mo: 40.0,
        },
        chain_access: ChainAccess {
            walmart: true,
            costco: true,
            loblaws: true,
            sobeys: true,
            metro: true,
            kroger: true,
            amazon: true,
            other: String::new(),
        },
        logistics: Logistics {
            warehouse_sq_ft: 45_000.0,
            cold_chain: true,
            trucks_owned: 12,
            third_party_logistics: false,
        },
        compliance: ComplianceCertifications {
            cfia_importer: true,
            fda_registered: true,
            gs1: true,
            coi_insurance: true,
        },
        categories: ProductCategories {
            afro_grocery: true,
            beauty: true,
            skincare: true,
            ..ProductCategories::default()
        },
        proof: ProofReferences {
            linkedin: "https://www.linkedin.com/company/atlas-distribution".to_string(),
            reference1: "Kroger category manager".to_string(),
            reference2: "Costco regional buyer".to_string(),
        },
    }
}

pub(super) fn submission() -> IntakeSubmission {
    IntakeSubmission {
        company: "Northwind Foods".to_string(),
        website: "https://northwind.example".to_string(),
        first_name: "Ada".to_string(),
        last_name: "Mensah".to_string(),
        email: "ada@northwind.example".to_string(),
        phone: "+1 416 555 0188".to_string(),
        city: "Toronto".to_string(),
        province_state: "ON".to_string(),
        postal_zip: "M5V 2T6".to_string(),
        coverage_description: "GTA, Montreal and Lower Mainland independents".to_string(),
        profile: northwind_profile(),
        moq_capacity_units: 500,
        requested_services: RequestedServices {
            retail_ready: true,
            ..RequestedServices::default()
        },
        heard_from: "Trade show".to_string(),
        agree_contact: true,
        agree_privacy: true,
        ..IntakeSubmission::default()
    }
}

pub(super) fn submission_for(company: &str, profile: ApplicantProfile) -> IntakeSubmission {
    IntakeSubmission {
        company: company.to_string(),
        profile,
        ..submission()
    }
}

pub(super) fn build_service() -> (
    PartnerIntakeService<MemoryRepository, MemoryNotifier>,
    Arc<MemoryRepository>,
    Arc<MemoryNotifier>,
) {
    let repository = Arc::new(MemoryRepository::default());
    let notifier = Arc::new(MemoryNotifier::default());
    let service =
        PartnerIntakeService::new(repository.clone(), notifier.clone(), notification_config());
    (service, repository, notifier)
}

pub(super) fn intake_router_with_service(
    service: PartnerIntakeService<MemoryRepository, MemoryNotifier>,
) -> axum::Router {
    intake_router(Arc::new(service))
}

#[derive(Default, Clone)]
pub(super) struct MemoryRepository {
    pub(super) records: Arc<Mutex<HashMap<IntakeId, IntakeRecord>>>,
}

impl IntakeRepository for MemoryRepository {
    fn insert(&self, record: IntakeRecord) -> Result<IntakeRecord, RepositoryError> {
        let mut guard = self.records.lock().expect("repository mutex poisoned");
        if guard.contains_key(&record.id) {
            return Err(RepositoryError::Conflict);
        }
        guard.insert(record.id.clone(), record.clone());
        Ok(record)
    }

    fn fetch(&self, id: &IntakeId) -> Result<Option<IntakeRecord>, RepositoryError> {
        let guard = self.records.lock().expect("repository mutex poisoned");
        Ok(guard.get(id).cloned())
    }

    fn list(&self, filter: &IntakeFilter) -> Result<Vec<IntakeRecord>, RepositoryError> {
        let guard = self.records.lock().expect("repository mutex poisoned");
        Ok(guard
            .values()
            .filter(|record| filter.matches(record))
            .cloned()
            .collect())
    }
}

#[derive(Default, Clone)]
pub(super) struct MemoryNotifier {
    events: Arc<Mutex<Vec<IntakeNotification>>>,
}

impl MemoryNotifier {
    pub(super) fn events(&self) -> Vec<IntakeNotification> {
        self.events.lock().expect("notifier mutex poisoned").clone()
    }
}

impl NotificationPublisher for MemoryNotifier {
    fn publish(&self, notification: IntakeNotification) -> Result<(), NotificationError> {
        self.events
            .lock()
            .expect("notifier mutex poisoned")
            .push(notification);
        Ok(())
    }
}

pub(super) struct OfflineNotifier;

impl NotificationPublisher for OfflineNotifier {
    fn publish(&self, _notification: IntakeNotification) -> Result<(), NotificationError> {
        Err(NotificationError::Transport("smtp relay offline".to_string()))
    }
}

pub(super) struct ConflictRepository;

impl IntakeRepository for ConflictRepository {
    fn insert(&self, _record: IntakeRecord) -> Result<IntakeRecord, RepositoryError> {
        Err(RepositoryError::Conflict)
    }

    fn fetch(&self, _id: &IntakeId) -> Result<Option<IntakeRecord>, RepositoryError> {
        Ok(None)
    }

    fn list(&self, _filter: &IntakeFilter) -> Result<Vec<IntakeRecord>, RepositoryError> {
        Ok(Vec::new())
    }
}

pub(super) struct UnavailableRepository;

impl IntakeRepository for UnavailableRepository {
    fn insert(&self, _record: IntakeRecord) -> Result<IntakeRecord, RepositoryError> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }

    fn fetch(&self, _id: &IntakeId) -> Result<Option<IntakeRecord>, RepositoryError> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }

    fn list(&self, _filter: &IntakeFilter) -> Result<Vec<IntakeRecord>, RepositoryError> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 64 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}
