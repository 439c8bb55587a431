use super::common::*;
use axum::extract::State;
use axum::http::StatusCode;
use serde_json::{json, Value};
use std::sync::Arc;
use tower::ServiceExt;

use crate::intake::PartnerIntakeService;

fn json_request(method: &str, uri: &str, body: &Value) -> axum::http::Request<axum::body::Body> {
    axum::http::Request::builder()
        .method(method)
        .uri(uri)
        .header(axum::http::header::CONTENT_TYPE, "application/json")
        .body(axum::body::Body::from(
            serde_json::to_vec(body).expect("serialize body"),
        ))
        .expect("request builds")
}

fn get_request(uri: &str) -> axum::http::Request<axum::body::Body> {
    axum::http::Request::get(uri)
        .body(axum::body::Body::empty())
        .expect("request builds")
}

#[tokio::test]
async fn score_route_returns_assessment() {
    let (service, _, _) = build_service();
    let router = intake_router_with_service(service);

    let body = serde_json::to_value(northwind_profile()).expect("profile json");
    let response = router
        .oneshot(json_request("POST", "/api/v1/intakes/score", &body))
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::OK);
    let payload = read_json_body(response).await;
    assert_eq!(payload["score"], json!(NORTHWIND_SCORE));
    assert_eq!(payload["tier"], json!("Strong"));
    assert_eq!(payload["tier_label"], json!("Strong"));
    assert_eq!(
        payload["follow_up"],
        json!("Schedule capabilities deep-dive and brand alignment.")
    );
    let components = payload["components"].as_array().expect("components array");
    assert_eq!(components[0]["signal"], json!("role"));
    assert_eq!(components[0]["points"], json!(8));
}

#[tokio::test]
async fn score_route_accepts_fractional_metrics() {
    let (service, _, _) = build_service();
    let router = intake_router_with_service(service);

    let response = router
        .oneshot(json_request(
            "POST",
            "/api/v1/intakes/score",
            &json!({ "monthlyDoorsServiced": 12.5 }),
        ))
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::OK);
    let payload = read_json_body(response).await;
    assert_eq!(payload["score"], json!(4));
}

#[tokio::test]
async fn score_route_accepts_empty_profile() {
    let (service, _, _) = build_service();
    let router = intake_router_with_service(service);

    let response = router
        .oneshot(json_request("POST", "/api/v1/intakes/score", &json!({})))
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::OK);
    let payload = read_json_body(response).await;
    assert_eq!(payload["score"], json!(0));
    assert_eq!(payload["tier"], json!("Emerging"));
    assert_eq!(payload["components"], json!([]));
}

#[tokio::test]
async fn submit_route_accepts_payloads() {
    let (service, _, notifier) = build_service();
    let router = intake_router_with_service(service);

    let body = serde_json::to_value(submission()).expect("submission json");
    let response = router
        .oneshot(json_request("POST", "/api/v1/intakes", &body))
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::ACCEPTED);
    let payload = read_json_body(response).await;
    assert!(payload["intake_id"]
        .as_str()
        .expect("intake id")
        .starts_with("intake-"));
    assert_eq!(payload["company"], json!("Northwind Foods"));
    assert_eq!(payload["role"], json!("distributor"));
    assert_eq!(payload["score"], json!(NORTHWIND_SCORE));
    assert_eq!(payload["tier"], json!("Strong"));
    assert!(payload.get("submitted_at").is_some());
    assert_eq!(notifier.events().len(), 1);
}

#[tokio::test]
async fn submit_handler_returns_unprocessable_for_invalid_submission() {
    let (service, _, _) = build_service();
    let mut submission = submission();
    submission.email = "not-an-email".to_string();

    let response = crate::intake::router::submit_handler::<MemoryRepository, MemoryNotifier>(
        State(Arc::new(service)),
        axum::Json(submission),
    )
    .await;

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let payload = read_json_body(response).await;
    assert_eq!(
        payload["error"],
        json!("'not-an-email' is not a valid email address")
    );
}

#[tokio::test]
async fn submit_handler_returns_conflict_on_duplicate() {
    let service = Arc::new(PartnerIntakeService::new(
        Arc::new(ConflictRepository),
        Arc::new(MemoryNotifier::default()),
        notification_config(),
    ));

    let response = crate::intake::router::submit_handler::<ConflictRepository, MemoryNotifier>(
        State(service),
        axum::Json(submission()),
    )
    .await;

    assert_eq!(response.status(), StatusCode::CONFLICT);
}

#[tokio::test]
async fn submit_handler_returns_internal_error_on_repository_failure() {
    let service = Arc::new(PartnerIntakeService::new(
        Arc::new(UnavailableRepository),
        Arc::new(MemoryNotifier::default()),
        notification_config(),
    ));

    let response = crate::intake::router::submit_handler::<UnavailableRepository, MemoryNotifier>(
        State(service),
        axum::Json(submission()),
    )
    .await;

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
}

#[tokio::test]
async fn status_route_returns_stored_record() {
    let (service, _, _) = build_service();
    let record = service.submit(submission()).expect("submission succeeds");
    let router = intake_router_with_service(service);

    let response = router
        .oneshot(get_request(&format!("/api/v1/intakes/{}", record.id.0)))
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::OK);
    let payload = read_json_body(response).await;
    assert_eq!(payload["intake_id"], json!(record.id.0));
    assert_eq!(payload["score"], json!(record.score.value()));
}

#[tokio::test]
async fn status_route_returns_not_found_for_unknown_id() {
    let (service, _, _) = build_service();
    let router = intake_router_with_service(service);

    let response = router
        .oneshot(get_request("/api/v1/intakes/intake-424242"))
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let payload = read_json_body(response).await;
    assert_eq!(payload["error"], json!("record not found"));
}

#[tokio::test]
async fn list_route_applies_query_filters() {
    let (service, _, _) = build_service();
    service.submit(submission()).expect("northwind");
    let atlas = service
        .submit(submission_for("Atlas Distribution", maximal_profile()))
        .expect("atlas");
    let router = intake_router_with_service(service);

    let response = router
        .clone()
        .oneshot(get_request("/api/v1/intakes?min_score=90"))
        .await
        .expect("route executes");
    assert_eq!(response.status(), StatusCode::OK);
    let payload = read_json_body(response).await;
    let listed = payload.as_array().expect("list payload");
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0]["intake_id"], json!(atlas.id.0));

    let response = router
        .oneshot(get_request("/api/v1/intakes?role=distributor"))
        .await
        .expect("route executes");
    let payload = read_json_body(response).await;
    let listed = payload.as_array().expect("list payload");
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0]["company"], json!("Northwind Foods"));
}
