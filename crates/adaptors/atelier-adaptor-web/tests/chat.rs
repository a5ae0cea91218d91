//! Chat endpoint, health and static file tests

mod common;

use atelier_core::ApiMode;
use atelier_provider_gemini::SAFETY_APOLOGY;
use axum::http::StatusCode;
use common::*;
use serde_json::{json, Value};

const IMAGE: &str = "data:image/png;base64,aGVsbG8=";

async fn chat(router: axum::Router, body: Value) -> (StatusCode, Value) {
    let (status, bytes) = send(router, post_json("/api/chat", body.to_string())).await;
    (status, serde_json::from_slice(&bytes).unwrap())
}

#[tokio::test]
async fn test_text_message_uses_keyword_advice() {
    let dir = tempfile::tempdir().unwrap();
    let router = build_router(
        test_config("http://127.0.0.1:1/generate", None, dir.path()),
        ApiMode::Disabled,
    );

    let (status, json) = chat(router, json!({"text": "jeans and top"})).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["success"], true);
    assert_eq!(json["source"], "offline");
    assert_eq!(json["message"]["sender"], "bot");
    let text = json["message"]["text"].as_str().unwrap();
    assert!(text.contains("For this bottom, here are my recommendations"));
    let html = json["html"].as_str().unwrap();
    assert!(html.starts_with("<strong>Fashion Analysis:</strong><br><br>"));
}

#[tokio::test]
async fn test_images_use_upstream_when_enabled() {
    let upstream = start_mock_upstream(StubReply::ok(
        r#"{"candidates":[{"content":{"parts":[{"text":"**Verdict:** love it"}]}}]}"#,
    ))
    .await;
    let dir = tempfile::tempdir().unwrap();
    let router = build_router(
        test_config(&upstream.url(), Some(TEST_API_KEY), dir.path()),
        ApiMode::Enabled,
    );

    let (status, json) = chat(router, json!({"text": "", "images": [IMAGE]})).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["source"], "upstream");
    assert_eq!(json["message"]["text"], "**Verdict:** love it");
    assert_eq!(json["html"], "<strong>Verdict:</strong> love it");

    let sent: Value = serde_json::from_slice(&upstream.state.last_body().unwrap()).unwrap();
    let parts = &sent["contents"][0]["parts"];
    assert!(parts[0]["text"]
        .as_str()
        .unwrap()
        .contains("Does this look good together?"));
    assert_eq!(parts[1]["inline_data"]["data"], "aGVsbG8=");
}

#[tokio::test]
async fn test_safety_block_yields_apology() {
    let upstream =
        start_mock_upstream(StubReply::ok(r#"{"candidates":[{"finishReason":"SAFETY"}]}"#)).await;
    let dir = tempfile::tempdir().unwrap();
    let router = build_router(
        test_config(&upstream.url(), Some(TEST_API_KEY), dir.path()),
        ApiMode::Enabled,
    );

    let (_, json) = chat(router, json!({"images": [IMAGE]})).await;

    assert_eq!(json["source"], "upstream");
    assert_eq!(json["message"]["text"], SAFETY_APOLOGY);
}

#[tokio::test]
async fn test_upstream_failure_falls_back_offline() {
    let upstream = start_mock_upstream(StubReply::with_status(
        StatusCode::INTERNAL_SERVER_ERROR,
        r#"{"error":{"message":"backend error"}}"#,
    ))
    .await;
    let dir = tempfile::tempdir().unwrap();
    let router = build_router(
        test_config(&upstream.url(), Some(TEST_API_KEY), dir.path()),
        ApiMode::Enabled,
    );

    let (status, json) = chat(router, json!({"text": "these jeans", "images": [IMAGE]})).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["source"], "offline");
    assert!(json["message"]["text"]
        .as_str()
        .unwrap()
        .contains("What Tops to Wear"));
    assert_eq!(upstream.state.hit_count(), 1);
}

#[tokio::test]
async fn test_disabled_mode_never_calls_upstream() {
    let upstream = start_mock_upstream(StubReply::ok(r#"{"candidates":[]}"#)).await;
    let dir = tempfile::tempdir().unwrap();
    let router = build_router(
        test_config(&upstream.url(), Some(TEST_API_KEY), dir.path()),
        ApiMode::Disabled,
    );

    let (_, json) = chat(router, json!({"images": [IMAGE, IMAGE]})).await;

    assert_eq!(json["source"], "offline");
    assert!(json["message"]["text"]
        .as_str()
        .unwrap()
        .contains("your 2 items"));
    assert_eq!(upstream.state.hit_count(), 0);
}

#[tokio::test]
async fn test_empty_message_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let router = build_router(
        test_config("http://127.0.0.1:1/generate", None, dir.path()),
        ApiMode::Disabled,
    );

    let (status, json) = chat(router, json!({"text": "   "})).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(json["error"].is_string());
}

#[tokio::test]
async fn test_malformed_image_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let router = build_router(
        test_config("http://127.0.0.1:1/generate", None, dir.path()),
        ApiMode::Disabled,
    );

    let (status, json) = chat(router, json!({"images": ["https://example.com/a.png"]})).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(json["error"].as_str().unwrap().contains("data URL"));
}

#[tokio::test]
async fn test_health_reports_api_mode() {
    let dir = tempfile::tempdir().unwrap();
    let router = build_router(
        test_config("http://127.0.0.1:1/generate", None, dir.path()),
        ApiMode::Disabled,
    );

    let (status, bytes) = send(router, get("/health")).await;

    assert_eq!(status, StatusCode::OK);
    let json: Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(json["status"], "ok");
    assert_eq!(json["api_mode"], "disabled");
}

#[tokio::test]
async fn test_static_files() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("index.html"), "<h1>Atelier</h1>").unwrap();
    std::fs::write(dir.path().join("app.js"), "console.log('hi');").unwrap();
    let config = test_config("http://127.0.0.1:1/generate", None, dir.path());

    let (status, body) = send(build_router(config.clone(), ApiMode::Disabled), get("/")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.as_ref(), b"<h1>Atelier</h1>");

    let (status, body) = send(build_router(config.clone(), ApiMode::Disabled), get("/app.js")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.as_ref(), b"console.log('hi');");

    let (status, _) = send(build_router(config, ApiMode::Disabled), get("/missing.css")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_missing_index_is_404() {
    let dir = tempfile::tempdir().unwrap();
    let router = build_router(
        test_config("http://127.0.0.1:1/generate", None, dir.path()),
        ApiMode::Disabled,
    );

    let (status, _) = send(router, get("/")).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
}
