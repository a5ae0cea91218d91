//! Atelier web adaptor
//!
//! Serves the chat widget and its two JSON endpoints:
//!
//! - `POST /api/generate`: credential-injecting passthrough to the upstream
//! - `POST /api/chat`: hybrid stylist (upstream for images, keyword advice otherwise)
//! - `GET /health`
//!
//! Everything else is served from the static directory.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod chat;
pub mod error;
pub mod proxy;
pub mod render;

use atelier_core::{ApiMode, AtelierError, Responder, Result, ServerConfig};
use atelier_provider_gemini::GeminiClient;
use axum::{
    extract::{DefaultBodyLimit, State},
    routing::{get, post},
    Json, Router,
};
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::{
    cors::{Any, CorsLayer},
    services::ServeDir,
    trace::TraceLayer,
};
use tracing::{error, info, warn};

pub use chat::{ChatRequest, ChatResponse, ReplySource, Stylist};
pub use error::ApiError;
pub use render::format_message;

/// Shared, immutable request state
#[derive(Clone)]
pub struct AppState {
    /// Resolved configuration
    pub config: Arc<ServerConfig>,
    /// Upstream client, present when a key is configured
    pub upstream: Option<GeminiClient>,
    /// Chat reply selection
    pub stylist: Arc<Stylist>,
}

/// HTTP server for the styling service
pub struct AtelierServer {
    config: Arc<ServerConfig>,
    responder: Arc<dyn Responder>,
    upstream: Option<GeminiClient>,
}

impl AtelierServer {
    /// Create a server; builds the upstream client when a key is configured
    pub fn new(config: ServerConfig, responder: Arc<dyn Responder>) -> Result<Self> {
        let upstream = match &config.api_key {
            Some(key) => {
                let client = GeminiClient::new(key.as_str(), &config.upstream_url)?;
                info!(endpoint = client.endpoint(), "Upstream client configured");
                Some(client)
            }
            None => {
                warn!("No upstream API key configured; proxy disabled, chat runs offline");
                None
            }
        };

        Ok(Self {
            config: Arc::new(config),
            responder,
            upstream,
        })
    }

    /// Configuration in use
    pub fn config(&self) -> &ServerConfig {
        &self.config
    }

    /// Decide once whether chat may use the upstream
    ///
    /// No key means offline. With a key, the upstream is probed unless
    /// probing is turned off, in which case it is trusted.
    pub async fn resolve_api_mode(&self) -> ApiMode {
        let Some(client) = &self.upstream else {
            return ApiMode::Disabled;
        };
        if !self.config.probe_upstream {
            info!("Upstream probe skipped; using upstream for image questions");
            return ApiMode::Enabled;
        }
        if client.probe().await {
            info!("✅ Upstream available - image questions use the generative API");
            ApiMode::Enabled
        } else {
            info!("📊 Upstream unavailable - using offline advice");
            ApiMode::Disabled
        }
    }

    /// Build the router for a fixed API mode
    pub fn router(&self, api_mode: ApiMode) -> Result<Router> {
        let stylist = Stylist::new(self.responder.clone(), self.upstream.clone(), api_mode)?;
        let state = AppState {
            config: self.config.clone(),
            upstream: self.upstream.clone(),
            stylist: Arc::new(stylist),
        };

        let mut router = Router::new()
            .route("/api/generate", post(proxy::generate_proxy))
            .route("/api/chat", post(chat::chat_handler))
            .route("/health", get(health))
            .fallback_service(ServeDir::new(&self.config.static_dir))
            .layer(DefaultBodyLimit::max(self.config.body_limit))
            .with_state(state);

        if self.config.enable_cors {
            let cors = CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any);
            router = router.layer(cors);
        }

        Ok(router.layer(TraceLayer::new_for_http()))
    }

    /// Bind the configured address
    pub async fn bind(&self) -> Result<TcpListener> {
        let addr = self.config.bind_addr();
        let listener = TcpListener::bind(&addr).await?;
        info!("Listening on http://{}", addr);
        Ok(listener)
    }

    /// Serve until Ctrl-C
    pub async fn serve(&self, listener: TcpListener, api_mode: ApiMode) -> Result<()> {
        let router = self.router(api_mode)?;
        axum::serve(listener, router)
            .with_graceful_shutdown(async {
                let _ = tokio::signal::ctrl_c().await;
                info!("Shutting down");
            })
            .await
            .map_err(|e| {
                error!("Server error: {}", e);
                AtelierError::Io(e)
            })
    }
}

async fn health(State(state): State<AppState>) -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "status": "ok",
        "api_mode": state.stylist.api_mode(),
        "proxy": state.upstream.is_some(),
    }))
}
