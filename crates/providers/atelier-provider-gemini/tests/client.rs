//! Client tests against a stub upstream

use atelier_core::{AtelierError, ImageRef};
use atelier_provider_gemini::{GeminiClient, StylistPrompt, SAFETY_APOLOGY};
use axum::{
    body::Bytes,
    extract::{Query, State},
    http::StatusCode,
    routing::post,
    Router,
};
use std::collections::HashMap;
use std::net::SocketAddr;
use std::sync::{Arc, Mutex};

#[derive(Default)]
struct Recorded {
    keys: Mutex<Vec<String>>,
    bodies: Mutex<Vec<serde_json::Value>>,
}

async fn start_stub(status: StatusCode, reply: &'static str) -> (SocketAddr, Arc<Recorded>) {
    let recorded = Arc::new(Recorded::default());

    let handler = move |State(rec): State<Arc<Recorded>>,
                        Query(query): Query<HashMap<String, String>>,
                        body: Bytes| async move {
        if let Some(key) = query.get("key") {
            rec.keys.lock().unwrap().push(key.clone());
        }
        if let Ok(json) = serde_json::from_slice(&body) {
            rec.bodies.lock().unwrap().push(json);
        }
        (status, [("content-type", "application/json")], reply)
    };

    let app = Router::new()
        .route("/v1beta/models/gemini/generate", post(handler))
        .with_state(recorded.clone());

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    (addr, recorded)
}

fn endpoint(addr: SocketAddr) -> String {
    format!("http://{}/v1beta/models/gemini/generate", addr)
}

fn sample_image() -> ImageRef {
    ImageRef::parse("data:image/jpeg;base64,aGVsbG8=").unwrap()
}

#[tokio::test]
async fn test_analyze_images_sends_prompt_and_inline_data() {
    let (addr, recorded) = start_stub(
        StatusCode::OK,
        r#"{"candidates":[{"content":{"parts":[{"text":"Gorgeous combo!"}]},"finishReason":"STOP"}]}"#,
    )
    .await;
    let client = GeminiClient::new("secret-key", &endpoint(addr)).unwrap();
    let prompt = StylistPrompt::new().unwrap();

    let answer = client
        .analyze_images(&prompt, &[sample_image()], "")
        .await
        .unwrap();
    assert_eq!(answer, "Gorgeous combo!");

    assert_eq!(recorded.keys.lock().unwrap().as_slice(), ["secret-key"]);
    let bodies = recorded.bodies.lock().unwrap();
    let parts = &bodies[0]["contents"][0]["parts"];
    assert!(parts[0]["text"]
        .as_str()
        .unwrap()
        .contains("User's question: Does this look good together?"));
    assert_eq!(parts[1]["inline_data"]["mime_type"], "image/jpeg");
    assert_eq!(parts[1]["inline_data"]["data"], "aGVsbG8=");
}

#[tokio::test]
async fn test_analyze_images_safety_apology() {
    let (addr, _) = start_stub(StatusCode::OK, r#"{"candidates":[{"finishReason":"SAFETY"}]}"#).await;
    let client = GeminiClient::new("secret-key", &endpoint(addr)).unwrap();
    let prompt = StylistPrompt::new().unwrap();

    let answer = client
        .analyze_images(&prompt, &[sample_image()], "is this ok?")
        .await
        .unwrap();
    assert_eq!(answer, SAFETY_APOLOGY);
}

#[tokio::test]
async fn test_analyze_images_upstream_error() {
    let (addr, _) = start_stub(
        StatusCode::FORBIDDEN,
        r#"{"error":{"code":403,"message":"API key not valid","status":"PERMISSION_DENIED"}}"#,
    )
    .await;
    let client = GeminiClient::new("secret-key", &endpoint(addr)).unwrap();
    let prompt = StylistPrompt::new().unwrap();

    let err = client
        .analyze_images(&prompt, &[sample_image()], "")
        .await
        .unwrap_err();
    match err {
        AtelierError::Upstream { status, message } => {
            assert_eq!(status, 403);
            assert_eq!(message, "API key not valid");
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[tokio::test]
async fn test_upstream_error_without_message_reports_status_name() {
    let (addr, _) = start_stub(
        StatusCode::TOO_MANY_REQUESTS,
        r#"{"error":{"code":429,"status":"RESOURCE_EXHAUSTED"}}"#,
    )
    .await;
    let client = GeminiClient::new("secret-key", &endpoint(addr)).unwrap();
    let prompt = StylistPrompt::new().unwrap();

    let err = client
        .analyze_images(&prompt, &[sample_image()], "")
        .await
        .unwrap_err();
    assert!(matches!(
        err,
        AtelierError::Upstream { status: 429, ref message } if message == "RESOURCE_EXHAUSTED"
    ));
}

#[tokio::test]
async fn test_forward_passes_status_and_bytes() {
    let reply = r#"{"error":{"code":429,"message":"quota"}}"#;
    let (addr, recorded) = start_stub(StatusCode::TOO_MANY_REQUESTS, reply).await;
    let client = GeminiClient::new("secret-key", &endpoint(addr)).unwrap();

    let forwarded = client
        .forward(Bytes::from_static(br#"{"contents":[]}"#))
        .await
        .unwrap();
    assert_eq!(forwarded.status, 429);
    assert_eq!(forwarded.body.as_ref(), reply.as_bytes());
    assert_eq!(recorded.bodies.lock().unwrap()[0], serde_json::json!({"contents": []}));
}

#[tokio::test]
async fn test_forward_rejects_non_json_reply() {
    let (addr, _) = start_stub(StatusCode::BAD_GATEWAY, "<html>bad gateway</html>").await;
    let client = GeminiClient::new("secret-key", &endpoint(addr)).unwrap();

    let err = client.forward(Bytes::from_static(b"{}")).await.unwrap_err();
    assert!(matches!(err, AtelierError::Upstream { status: 502, .. }));
}

#[tokio::test]
async fn test_probe() {
    let (ok_addr, recorded) = start_stub(StatusCode::OK, r#"{"candidates":[]}"#).await;
    let client = GeminiClient::new("secret-key", &endpoint(ok_addr)).unwrap();
    assert!(client.probe().await);
    assert_eq!(
        recorded.bodies.lock().unwrap()[0],
        serde_json::json!({"contents": [{"parts": [{"text": "test"}]}]})
    );

    let (denied_addr, _) = start_stub(StatusCode::FORBIDDEN, r#"{"error":{"message":"no"}}"#).await;
    let client = GeminiClient::new("secret-key", &endpoint(denied_addr)).unwrap();
    assert!(!client.probe().await);
}
