//! Chat endpoint: upstream stylist for images when enabled, keyword advice otherwise

use crate::{error::ApiError, render::format_message, AppState};
use atelier_core::{ApiMode, ChatMessage, ImageRef, Responder, Result};
use atelier_provider_gemini::{GeminiClient, StylistPrompt};
use axum::{body::Bytes, extract::State, Json};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::{info, warn};

/// Chat request body
#[derive(Debug, Default, Deserialize)]
pub struct ChatRequest {
    /// Free-text question
    #[serde(default)]
    pub text: String,

    /// Attached images as data URLs
    #[serde(default)]
    pub images: Vec<String>,
}

/// Where a reply came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ReplySource {
    /// Generated by the upstream API
    Upstream,
    /// Picked by the keyword responder
    Offline,
}

/// Chat response body
#[derive(Debug, Serialize)]
pub struct ChatResponse {
    /// Always true; failures use the error shape
    pub success: bool,
    /// Bot message
    pub message: ChatMessage,
    /// Message rendered for the widget
    pub html: String,
    /// Where the reply came from
    pub source: ReplySource,
}

/// Picks the reply for a chat message
pub struct Stylist {
    responder: Arc<dyn Responder>,
    upstream: Option<GeminiClient>,
    prompt: StylistPrompt,
    mode: ApiMode,
}

impl Stylist {
    /// Create a stylist; `upstream` is only consulted when `mode` is enabled
    pub fn new(
        responder: Arc<dyn Responder>,
        upstream: Option<GeminiClient>,
        mode: ApiMode,
    ) -> Result<Self> {
        Ok(Self {
            responder,
            upstream,
            prompt: StylistPrompt::new()?,
            mode,
        })
    }

    /// Whether chat requests use the upstream
    pub fn api_mode(&self) -> ApiMode {
        self.mode
    }

    /// Reply to `text` with the given images
    ///
    /// Upstream failures fall back to offline advice.
    pub async fn reply(&self, text: &str, images: &[ImageRef]) -> (String, ReplySource) {
        if self.mode.is_enabled() && !images.is_empty() {
            if let Some(client) = &self.upstream {
                match client.analyze_images(&self.prompt, images, text).await {
                    Ok(answer) => return (answer, ReplySource::Upstream),
                    Err(e) => warn!(error = %e, "Upstream analysis failed, using offline advice"),
                }
            }
        }
        (
            self.responder.respond(text, images.len()),
            ReplySource::Offline,
        )
    }
}

/// Answer one chat message
pub async fn chat_handler(
    State(state): State<AppState>,
    body: Bytes,
) -> std::result::Result<Json<ChatResponse>, ApiError> {
    let request: ChatRequest = serde_json::from_slice(&body)
        .map_err(|e| ApiError::BadRequest(format!("invalid chat request: {}", e)))?;

    if request.text.trim().is_empty() && request.images.is_empty() {
        return Err(ApiError::BadRequest(
            "message must contain text or at least one image".to_string(),
        ));
    }

    let images = request
        .images
        .iter()
        .map(|url| ImageRef::parse(url))
        .collect::<Result<Vec<_>>>()?;

    let (text, source) = state.stylist.reply(&request.text, &images).await;
    info!(images = images.len(), source = ?source, "Chat reply sent");

    Ok(Json(ChatResponse {
        success: true,
        html: format_message(&text),
        message: ChatMessage::bot(text),
        source,
    }))
}
