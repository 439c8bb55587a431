use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Router,
};
use serde::Serialize;
use serde_json::json;

use super::domain::{ApplicantProfile, IntakeId, IntakeSubmission};
use super::repository::{IntakeFilter, IntakeRepository, NotificationPublisher, RepositoryError};
use super::scoring::{Qualification, Score, Signal, Tier};
use super::service::{IntakeServiceError, PartnerIntakeService};

/// Router builder exposing live scoring, submission and lookup endpoints.
pub fn intake_router<R, N>(service: Arc<PartnerIntakeService<R, N>>) -> Router
where
    R: IntakeRepository + 'static,
    N: NotificationPublisher + 'static,
{
    Router::new()
        .route("/api/v1/intakes/score", post(score_handler::<R, N>))
        .route(
            "/api/v1/intakes",
            get(list_handler::<R, N>).post(submit_handler::<R, N>),
        )
        .route("/api/v1/intakes/:intake_id", get(status_handler::<R, N>))
        .with_state(service)
}

/// Response body for the live scoring endpoint.
#[derive(Debug, Clone, Serialize)]
pub struct AssessmentView {
    pub score: Score,
    pub tier: Tier,
    pub tier_label: &'static str,
    pub follow_up: &'static str,
    pub components: Vec<ComponentView>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ComponentView {
    pub signal: Signal,
    pub label: &'static str,
    pub points: u32,
}

impl From<Qualification> for AssessmentView {
    fn from(qualification: Qualification) -> Self {
        Self {
            score: qualification.score,
            tier: qualification.tier,
            tier_label: qualification.tier.label(),
            follow_up: qualification.follow_up(),
            components: qualification
                .components
                .iter()
                .map(|component| ComponentView {
                    signal: component.signal,
                    label: component.label(),
                    points: component.points,
                })
                .collect(),
        }
    }
}

pub(crate) async fn score_handler<R, N>(
    State(service): State<Arc<PartnerIntakeService<R, N>>>,
    axum::Json(profile): axum::Json<ApplicantProfile>,
) -> Response
where
    R: IntakeRepository + 'static,
    N: NotificationPublisher + 'static,
{
    let view = AssessmentView::from(service.preview(&profile));
    (StatusCode::OK, axum::Json(view)).into_response()
}

pub(crate) async fn submit_handler<R, N>(
    State(service): State<Arc<PartnerIntakeService<R, N>>>,
    axum::Json(submission): axum::Json<IntakeSubmission>,
) -> Response
where
    R: IntakeRepository + 'static,
    N: NotificationPublisher + 'static,
{
    match service.submit(submission) {
        Ok(record) => {
            let view = record.status_view();
            (StatusCode::ACCEPTED, axum::Json(view)).into_response()
        }
        Err(error) => error_response(error),
    }
}

pub(crate) async fn status_handler<R, N>(
    State(service): State<Arc<PartnerIntakeService<R, N>>>,
    Path(intake_id): Path<String>,
) -> Response
where
    R: IntakeRepository + 'static,
    N: NotificationPublisher + 'static,
{
    match service.get(&IntakeId(intake_id)) {
        Ok(record) => {
            let view = record.status_view();
            (StatusCode::OK, axum::Json(view)).into_response()
        }
        Err(error) => error_response(error),
    }
}

pub(crate) async fn list_handler<R, N>(
    State(service): State<Arc<PartnerIntakeService<R, N>>>,
    Query(filter): Query<IntakeFilter>,
) -> Response
where
    R: IntakeRepository + 'static,
    N: NotificationPublisher + 'static,
{
    match service.list(&filter) {
        Ok(records) => {
            let views: Vec<_> = records.iter().map(|record| record.status_view()).collect();
            (StatusCode::OK, axum::Json(views)).into_response()
        }
        Err(error) => error_response(error),
    }
}

impl IntakeServiceError {
    /// HTTP status reported for this failure.
    pub fn status_code(&self) -> StatusCode {
        match self {
            IntakeServiceError::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
            IntakeServiceError::Repository(RepositoryError::Conflict) => StatusCode::CONFLICT,
            IntakeServiceError::Repository(RepositoryError::NotFound) => StatusCode::NOT_FOUND,
            IntakeServiceError::Repository(RepositoryError::Unavailable(_)) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

fn error_response(error: IntakeServiceError) -> Response {
    let payload = json!({
        "error": error.to_string(),
    });
    (error.status_code(), axum::Json(payload)).into_response()
}
