//! Common test utilities and a mock upstream server

#![allow(dead_code)]

use atelier_adaptor_web::AtelierServer;
use atelier_core::{ApiMode, ServerConfig};
use atelier_plugin_advice::KeywordResponder;
use axum::{
    body::{Body, Bytes},
    extract::{Query, State},
    http::{Request, StatusCode},
    response::{IntoResponse, Response},
    routing::post,
    Router,
};
use std::collections::HashMap;
use std::net::SocketAddr;
use std::path::Path;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use tower::ServiceExt;

/// Test API key
pub const TEST_API_KEY: &str = "AIzaTestKey0123456789abcdef";

/// Canned upstream reply
#[derive(Clone)]
pub struct StubReply {
    pub status: StatusCode,
    pub body: &'static str,
}

impl StubReply {
    pub fn ok(body: &'static str) -> Self {
        Self {
            status: StatusCode::OK,
            body,
        }
    }

    pub fn with_status(status: StatusCode, body: &'static str) -> Self {
        Self { status, body }
    }
}

/// What the mock upstream saw
#[derive(Default)]
pub struct MockUpstreamState {
    pub hits: AtomicUsize,
    pub keys: Mutex<Vec<String>>,
    pub bodies: Mutex<Vec<Vec<u8>>>,
}

impl MockUpstreamState {
    pub fn hit_count(&self) -> usize {
        self.hits.load(Ordering::SeqCst)
    }

    pub fn last_key(&self) -> Option<String> {
        self.keys.lock().unwrap().last().cloned()
    }

    pub fn last_body(&self) -> Option<Vec<u8>> {
        self.bodies.lock().unwrap().last().cloned()
    }
}

/// Mock upstream bound to an ephemeral port
pub struct MockUpstream {
    pub addr: SocketAddr,
    pub state: Arc<MockUpstreamState>,
}

impl MockUpstream {
    pub fn url(&self) -> String {
        format!("http://{}/v1beta/models/gemini/generate", self.addr)
    }
}

async fn mock_generate(
    State((state, reply)): State<(Arc<MockUpstreamState>, StubReply)>,
    Query(query): Query<HashMap<String, String>>,
    body: Bytes,
) -> impl IntoResponse {
    state.hits.fetch_add(1, Ordering::SeqCst);
    if let Some(key) = query.get("key") {
        state.keys.lock().unwrap().push(key.clone());
    }
    state.bodies.lock().unwrap().push(body.to_vec());
    (
        reply.status,
        [("content-type", "application/json")],
        reply.body,
    )
}

/// Start a mock upstream that always answers with `reply`
pub async fn start_mock_upstream(reply: StubReply) -> MockUpstream {
    let state = Arc::new(MockUpstreamState::default());
    let app = Router::new()
        .route("/v1beta/models/gemini/generate", post(mock_generate))
        .with_state((state.clone(), reply));

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    MockUpstream { addr, state }
}

/// Configuration pointing at `upstream_url`, with or without a key
pub fn test_config(upstream_url: &str, api_key: Option<&str>, static_dir: &Path) -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        api_key: api_key.map(str::to_string),
        upstream_url: upstream_url.to_string(),
        static_dir: static_dir.to_path_buf(),
        probe_upstream: false,
        ..ServerConfig::default()
    }
}

/// Router for `config` with the keyword responder
pub fn build_router(config: ServerConfig, api_mode: ApiMode) -> Router {
    let server = AtelierServer::new(config, Arc::new(KeywordResponder::new())).unwrap();
    server.router(api_mode).unwrap()
}

/// Send one request through the router
pub async fn send(router: Router, request: Request<Body>) -> (StatusCode, Bytes) {
    let response: Response = router.oneshot(request).await.unwrap();
    let status = response.status();
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    (status, body)
}

/// JSON POST request
pub fn post_json(uri: &str, body: impl Into<Body>) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(body.into())
        .unwrap()
}

/// GET request
pub fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}
