//! HTTP-level tests for the `/resumes/status` endpoint.

mod common;

use axum::body::Body;
use axum::http::header::{AUTHORIZATION, CONTENT_TYPE};
use axum::http::{Request, StatusCode};
use common::{bearer_token, build_test_app, seed_resume};
use http_body_util::BodyExt;
use jobhunter_core::roles::{ROLE_ADMIN, ROLE_HR};
use sqlx::PgPool;
use tower::ServiceExt;

/// Build a `PUT /api/v1/resumes/status` request.
fn put_status(token: Option<&str>, body: serde_json::Value) -> Request<Body> {
    let mut builder = Request::builder()
        .method("PUT")
        .uri("/api/v1/resumes/status")
        .header(CONTENT_TYPE, "application/json");
    if let Some(token) = token {
        builder = builder.header(AUTHORIZATION, token);
    }
    builder.body(Body::from(body.to_string())).unwrap()
}

async fn response_json(response: axum::response::Response) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

// ---------------------------------------------------------------------------
// Test: missing Authorization header yields 401
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn missing_auth_is_unauthorized(pool: PgPool) {
    let t = build_test_app(pool);

    let response = t
        .app
        .oneshot(put_status(None, serde_json::json!({"id": 1, "status": "APPROVED"})))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    let json = response_json(response).await;
    assert_eq!(json["code"], "UNAUTHORIZED");
}

// ---------------------------------------------------------------------------
// Test: unknown status string yields 400
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn unknown_status_is_bad_request(pool: PgPool) {
    let t = build_test_app(pool.clone());
    let seeded = seed_resume(&pool, "PENDING").await;
    let token = bearer_token(1000, "admin@jobhunter.vn", ROLE_ADMIN, None);

    let response = t
        .app
        .oneshot(put_status(
            Some(&token),
            serde_json::json!({"id": seeded.resume_id, "status": "SHORTLISTED"}),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = response_json(response).await;
    assert_eq!(json["code"], "VALIDATION_ERROR");
}

// ---------------------------------------------------------------------------
// Test: unknown resume id yields 404
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn unknown_resume_is_not_found(pool: PgPool) {
    let t = build_test_app(pool);
    let token = bearer_token(1000, "admin@jobhunter.vn", ROLE_ADMIN, None);

    let response = t
        .app
        .oneshot(put_status(
            Some(&token),
            serde_json::json!({"id": 424242, "status": "APPROVED"}),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let json = response_json(response).await;
    assert_eq!(json["code"], "NOT_FOUND");
}

// ---------------------------------------------------------------------------
// Test: HR of another company yields 403
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn foreign_hr_is_forbidden(pool: PgPool) {
    let t = build_test_app(pool.clone());
    let seeded = seed_resume(&pool, "PENDING").await;
    let token = bearer_token(
        1001,
        "hr@jobhunter.vn",
        ROLE_HR,
        Some(seeded.company_id + 1),
    );

    let response = t
        .app
        .oneshot(put_status(
            Some(&token),
            serde_json::json!({"id": seeded.resume_id, "status": "APPROVED"}),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::FORBIDDEN);
}

// ---------------------------------------------------------------------------
// Test: successful transition returns the audit metadata
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn successful_transition_returns_update_meta(pool: PgPool) {
    let t = build_test_app(pool.clone());
    let seeded = seed_resume(&pool, "PENDING").await;
    let token = bearer_token(1000, "admin@jobhunter.vn", ROLE_ADMIN, None);

    let response = t
        .app
        .oneshot(put_status(
            Some(&token),
            serde_json::json!({
                "id": seeded.resume_id,
                "status": "APPROVED",
                "interviewAt": "2025-05-01T10:00:00Z",
                "interviewLocation": "Room 1",
            }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let json = response_json(response).await;
    assert_eq!(json["data"]["updatedBy"], "admin@jobhunter.vn");
    assert!(json["data"]["updatedAt"].is_string());
}
