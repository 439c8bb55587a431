//! Partner intake: boundary validation, qualification scoring, storage and
//! notification of distributor/referral applications.
//!
//! [`scoring`] is pure and never fails. Everything with side effects lives in
//! [`service::PartnerIntakeService`], which talks to storage and notification
//! adapters through the traits in [`repository`].

pub mod document;
pub mod domain;
pub mod repository;
pub mod router;
pub mod scoring;
pub mod service;
pub(crate) mod validation;

#[cfg(test)]
mod tests;

pub use domain::{
    ActivityMetrics, ApplicantProfile, ChainAccess, ComplianceCertifications, Country,
    ExclusivityInterest, Geography, IntakeId, IntakeSubmission, Languages, Logistics,
    NetworkCounts, PartnerRole, ProductCategories, ProofReferences, RequestedServices,
    SubmissionStatus,
};
pub use repository::{
    IntakeFilter, IntakeNotification, IntakeRecord, IntakeRepository, IntakeStatusView,
    NotificationError, NotificationPublisher, RepositoryError,
};
pub use router::{intake_router, AssessmentView};
pub use scoring::{assess, classify, score, Qualification, Score, ScoreComponent, Signal, Tier};
pub use service::{IntakeServiceError, PartnerIntakeService};
pub use validation::{IntakeGuard, IntakeViolation};
