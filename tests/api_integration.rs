//! Integration tests for the HTTP API
//!
//! Tests endpoint structure and the session flow via tower's oneshot

use axum::{
    body::Body,
    http::{Request, StatusCode},
};
use serde_json::Value;
use tamago::core::create_router;
use tower::ServiceExt;

#[tokio::test]
async fn test_health_endpoint() {
    let app = create_router();

    let response = app
        .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let body = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let json: Value = serde_json::from_slice(&body).unwrap();

    assert_eq!(json["status"], "ok");
    assert!(json["version"].is_string());
}

#[tokio::test]
async fn test_create_session() {
    let app = create_router();

    let response = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/session/new")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let body = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let json: Value = serde_json::from_slice(&body).unwrap();

    assert!(json["session_id"].is_string());
    assert!(json["websocket_url"].is_string());
}

#[tokio::test]
async fn test_session_not_found() {
    let app = create_router();

    let response = app
        .oneshot(
            Request::builder()
                .uri("/session/nonexistent")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

/// Create a session and return its id (router clones share state)
async fn create_session(app: &axum::Router) -> String {
    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/session/new")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let json: Value = serde_json::from_slice(&body).unwrap();
    json["session_id"].as_str().unwrap().to_string()
}

#[tokio::test]
async fn test_report_steps_hatches_egg() {
    let app = create_router();
    let session_id = create_session(&app).await;

    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri(format!("/session/{}/steps", session_id))
                .header("content-type", "application/json")
                .body(Body::from(r#"{"steps": 10000}"#))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let body = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let json: Value = serde_json::from_slice(&body).unwrap();

    assert_eq!(json["state"], "CHICK");
    assert_eq!(json["reason"], "R005_TRANSITION_HATCHED");
    assert_eq!(json["alive"], true);

    // Status endpoint sees the same engine
    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .uri(format!("/session/{}", session_id))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let json: Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(json["state"], "CHICK");
    assert_eq!(json["steps"], 10000);
    assert!(json["last_transition"].is_string());
}

#[tokio::test]
async fn test_restart_rejected_while_alive() {
    let app = create_router();
    let session_id = create_session(&app).await;

    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri(format!("/session/{}/restart", session_id))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::CONFLICT);
}

#[tokio::test]
async fn test_death_and_restart_flow() {
    let app = create_router();
    let session_id = create_session(&app).await;

    // Hatch a week ago via an explicit timestamp
    let week_ago = (chrono::Utc::now() - chrono::Duration::days(7)).to_rfc3339();
    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri(format!("/session/{}/steps", session_id))
                .header("content-type", "application/json")
                .body(Body::from(format!(
                    r#"{{"steps": 10000, "timestamp": "{}"}}"#,
                    week_ago
                )))
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    // Miss the goal today: the chick dies
    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri(format!("/session/{}/steps", session_id))
                .header("content-type", "application/json")
                .body(Body::from(r#"{"steps": 500}"#))
                .unwrap(),
        )
        .await
        .unwrap();

    let body = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let json: Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(json["state"], "DEAD");
    assert_eq!(json["alive"], false);

    // Restart now succeeds and returns a fresh egg
    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri(format!("/session/{}/restart", session_id))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let body = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let json: Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(json["state"], "EGG");
    assert_eq!(json["steps"], 0);
    assert!(json["last_transition"].is_null());
}
