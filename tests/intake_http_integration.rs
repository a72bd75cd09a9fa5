//! Integration tests for intake HTTP endpoints.
//!
//! These drive the assembled router with `tower::ServiceExt::oneshot`:
//! 1. Status codes for create, turn, fetch and discard
//! 2. JSON shapes of session and turn responses
//! 3. Error mapping for unknown and malformed session ids

use std::sync::Arc;
use std::time::Duration;

use axum::body::Body;
use axum::http::{Method, Request, StatusCode};
use axum::Router;
use serde_json::{json, Value};
use tower::ServiceExt;

use talent_scout::adapters::{
    build_router, InMemorySessionStore, IntakeHandlers, LlmQuestionGenerator, MockAIProvider,
};
use talent_scout::domain::intake::{prompts, IntakeEngine};
use talent_scout::ports::SessionStore;

// =============================================================================
// Test Infrastructure
// =============================================================================

fn app() -> Router {
    let generator = LlmQuestionGenerator::new(Arc::new(
        MockAIProvider::new().with_response("1. What is ownership?"),
    ));
    let engine = Arc::new(IntakeEngine::canonical(Arc::new(generator)));
    let store: Arc<dyn SessionStore> = Arc::new(InMemorySessionStore::new());

    build_router(
        IntakeHandlers::from_parts(engine, store),
        Duration::from_secs(30),
        &[],
    )
}

async fn send(app: &Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(body) => builder
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let json = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, json)
}

async fn create_session(app: &Router) -> String {
    let (status, body) = send(app, Method::POST, "/api/intake/sessions", None).await;
    assert_eq!(status, StatusCode::CREATED);
    body["id"].as_str().unwrap().to_string()
}

async fn submit(app: &Router, id: &str, text: &str) -> (StatusCode, Value) {
    send(
        app,
        Method::POST,
        &format!("/api/intake/sessions/{id}/turns"),
        Some(json!({ "text": text })),
    )
    .await
}

// =============================================================================
// Endpoints
// =============================================================================

#[tokio::test]
async fn health_reports_ok() {
    let (status, body) = send(&app(), Method::GET, "/health", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "status": "ok" }));
}

#[tokio::test]
async fn create_returns_session_with_greeting() {
    let (status, body) = send(&app(), Method::POST, "/api/intake/sessions", None).await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["status"], "in_progress");
    assert_eq!(body["current_stage_index"], 0);
    assert_eq!(body["record"], json!({}));
    assert_eq!(body["transcript"][0]["role"], "assistant");
    assert_eq!(body["transcript"][0]["content"], prompts::GREETING);
    assert!(body.get("question_sets").is_none());
}

#[tokio::test]
async fn accepted_turn_advances_session() {
    let app = app();
    let id = create_session(&app).await;

    let (status, body) = submit(&app, &id, "Jane Doe").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["outcome"], "advanced");
    assert_eq!(body["replies"][0]["content"], prompts::EMAIL_PROMPT);
    assert_eq!(body["session"]["current_stage_index"], 1);
    assert_eq!(body["session"]["record"]["name"], "Jane Doe");
}

#[tokio::test]
async fn rejected_turn_is_still_ok() {
    let app = app();
    let id = create_session(&app).await;
    submit(&app, &id, "Jane Doe").await;

    let (status, body) = submit(&app, &id, "nope").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["outcome"], "rejected");
    assert_eq!(body["replies"][0]["content"], prompts::EMAIL_REJECTION);
    assert_eq!(body["session"]["current_stage_index"], 1);
}

#[tokio::test]
async fn full_flow_over_http_completes() {
    let app = app();
    let id = create_session(&app).await;

    for text in ["Jane Doe", "jane@x.com", "9876543210", "4", "Engineer", "Remote"] {
        let (status, body) = submit(&app, &id, text).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["outcome"], "advanced");
    }
    let (status, body) = submit(&app, &id, "Rust").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["outcome"], "completed");
    assert_eq!(body["replies"][0]["content"], "1. What is ownership?");
    assert_eq!(body["session"]["status"], "completed");
    assert_eq!(body["session"]["record"]["tech_stack"], json!(["Rust"]));
    assert_eq!(body["session"]["question_sets"][0]["technology"], "Rust");
    assert_eq!(
        body["session"]["question_sets"][0]["outcome"]["status"],
        "generated"
    );

    let (_, body) = submit(&app, &id, "hello?").await;
    assert_eq!(body["outcome"], "already_ended");
}

#[tokio::test]
async fn missing_text_is_treated_as_empty_answer() {
    let app = app();
    let id = create_session(&app).await;

    let (status, body) = send(
        &app,
        Method::POST,
        &format!("/api/intake/sessions/{id}/turns"),
        Some(json!({})),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["outcome"], "advanced");
}

#[tokio::test]
async fn get_returns_current_session() {
    let app = app();
    let id = create_session(&app).await;
    submit(&app, &id, "Jane Doe").await;

    let (status, body) = send(
        &app,
        Method::GET,
        &format!("/api/intake/sessions/{id}"),
        None,
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["id"], id.as_str());
    assert_eq!(body["transcript"].as_array().unwrap().len(), 3);
}

#[tokio::test]
async fn delete_discards_session() {
    let app = app();
    let id = create_session(&app).await;
    let uri = format!("/api/intake/sessions/{id}");

    let (status, _) = send(&app, Method::DELETE, &uri, None).await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let (status, body) = send(&app, Method::GET, &uri, None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["code"], "NOT_FOUND");
}

// =============================================================================
// Errors
// =============================================================================

#[tokio::test]
async fn unknown_session_is_not_found() {
    let app = app();
    let id = uuid::Uuid::new_v4();

    let (status, body) = submit(&app, &id.to_string(), "hello").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["code"], "NOT_FOUND");
}

#[tokio::test]
async fn malformed_session_id_is_bad_request() {
    let (status, body) = send(
        &app(),
        Method::GET,
        "/api/intake/sessions/not-a-uuid",
        None,
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "BAD_REQUEST");
}

#[tokio::test]
async fn delete_unknown_session_is_not_found() {
    let id = uuid::Uuid::new_v4();
    let (status, _) = send(
        &app(),
        Method::DELETE,
        &format!("/api/intake/sessions/{id}"),
        None,
    )
    .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
}
