//! Router tests for requests answered before any database access
//!
//! The pool is created lazily and never connects, so these run without a
//! database.

use axum::{
    body::{to_bytes, Body},
    http::{header, Method, Request, StatusCode},
    Router,
};
use serde_json::{json, Value};
use sqlx::postgres::PgPoolOptions;
use tower::ServiceExt;

use gestepi_server::{api, AppConfig, AppState};

fn app() -> Router {
    let config = AppConfig::default();
    let pool = PgPoolOptions::new()
        .connect_lazy(&config.database.url)
        .expect("Invalid database URL");
    api::router(AppState::new(config, pool))
}

async fn send(request: Request<Body>) -> (StatusCode, Value) {
    let response = app().oneshot(request).await.expect("Request failed");
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("Failed to read body");
    let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, body)
}

fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

fn json_request(method: Method, uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

#[tokio::test]
async fn test_health_check() {
    let (status, body) = send(get("/api/v1/health")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "healthy");
}

#[tokio::test]
async fn test_non_numeric_id_is_not_found() {
    for uri in [
        "/api/v1/equipment/abc",
        "/api/v1/equipment-types/1x",
        "/api/v1/managers/-3",
        "/api/v1/inspections/0",
        "/api/v1/inspection-statuses/99999999999",
        "/api/v1/equipment/abc/schedule",
    ] {
        let (status, body) = send(get(uri)).await;
        assert_eq!(status, StatusCode::NOT_FOUND, "{}", uri);
        assert_eq!(body["error"], "NoSuchData", "{}", uri);
    }
}

#[tokio::test]
async fn test_delete_with_malformed_id_is_not_found() {
    let request = Request::builder()
        .method(Method::DELETE)
        .uri("/api/v1/equipment/not-a-number")
        .body(Body::empty())
        .unwrap();
    let (status, _) = send(request).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_equipment_type_with_zero_interval_is_rejected() {
    let (status, body) = send(json_request(
        Method::POST,
        "/api/v1/equipment-types",
        json!({ "label": "Harness", "inspection_interval_days": 0, "is_textile": true }),
    ))
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "BadValue");
}

#[tokio::test]
async fn test_missing_required_field_is_rejected() {
    let (status, body) = send(json_request(
        Method::POST,
        "/api/v1/equipment",
        json!({ "internal_id": "HAR-001", "brand": "Petzl" }),
    ))
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], 18);
}

#[tokio::test]
async fn test_malformed_json_is_rejected() {
    let request = Request::builder()
        .method(Method::PUT)
        .uri("/api/v1/inspections/4")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from("{ not json"))
        .unwrap();
    let (status, _) = send(request).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_manager_with_invalid_email_is_rejected() {
    let (status, body) = send(json_request(
        Method::POST,
        "/api/v1/managers",
        json!({
            "surname": "Martin",
            "first_name": "Claire",
            "email": "claire-at-example",
            "password": "long enough password"
        }),
    ))
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["message"].as_str().unwrap_or_default().contains("email"));
}

#[tokio::test]
async fn test_negative_due_threshold_is_rejected() {
    let (status, _) = send(get("/api/v1/equipment/due?days_threshold=-1")).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, _) = send(get("/api/v1/equipment/due/summary?days_threshold=soon")).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_openapi_document_is_served() {
    let (status, body) = send(get("/api-docs/openapi.json")).await;
    assert_eq!(status, StatusCode::OK);
    assert!(body["paths"]["/equipment/due"].is_object());
}

#[tokio::test]
async fn test_unknown_route() {
    let response = app()
        .oneshot(get("/api/v1/gloves"))
        .await
        .expect("Request failed");
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
