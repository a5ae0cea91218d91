//! Gemini provider for Atelier
//!
//! A thin client around a single `generateContent` endpoint. The API key is
//! sent as the `key` query parameter and never appears in errors or logs.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod prompt;
pub mod types;

use atelier_core::{scrub_message, AtelierError, ImageRef, Result};
use bytes::Bytes;
use reqwest::{header::CONTENT_TYPE, Client, Url};
use serde::de::IgnoredAny;
use tracing::{debug, info, warn};

pub use prompt::{StylistPrompt, DEFAULT_QUESTION};
pub use types::{
    Candidate, Content, GenerateContentRequest, GenerateContentResponse, InlineData, Part,
};

/// Reply used when the upstream refused an image on safety grounds
pub const SAFETY_APOLOGY: &str = "I apologize, but I couldn't analyze this image due to safety filters. Please try uploading a different clothing image.";

/// Raw upstream reply, passed through untouched
#[derive(Debug, Clone)]
pub struct Forwarded {
    /// Upstream HTTP status
    pub status: u16,
    /// Upstream body, known to be valid JSON
    pub body: Bytes,
}

/// Gemini API client
#[derive(Clone)]
pub struct GeminiClient {
    client: Client,
    api_key: String,
    endpoint: Url,
}

impl std::fmt::Debug for GeminiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GeminiClient")
            .field("api_key", &"[REDACTED]")
            .field("endpoint", &self.endpoint.as_str())
            .finish()
    }
}

impl GeminiClient {
    /// Create a client for `endpoint` using transport defaults
    pub fn new(api_key: impl Into<String>, endpoint: &str) -> Result<Self> {
        let client = Client::builder().build().map_err(AtelierError::network)?;
        Self::with_client(client, api_key, endpoint)
    }

    /// Create a client that shares an existing connection pool
    pub fn with_client(client: Client, api_key: impl Into<String>, endpoint: &str) -> Result<Self> {
        let api_key = api_key.into();
        if api_key.trim().is_empty() {
            return Err(AtelierError::config("API key must not be empty"));
        }
        let endpoint = Url::parse(endpoint)
            .map_err(|e| AtelierError::config(format!("invalid upstream URL: {}", e)))?;

        Ok(Self {
            client,
            api_key,
            endpoint,
        })
    }

    /// Upstream endpoint (without credential)
    pub fn endpoint(&self) -> &str {
        self.endpoint.as_str()
    }

    async fn post(&self, body: Bytes) -> Result<(u16, Bytes)> {
        let response = self
            .client
            .post(self.endpoint.clone())
            .query(&[("key", self.api_key.as_str())])
            .header(CONTENT_TYPE, "application/json")
            .body(body)
            .send()
            .await
            .map_err(AtelierError::network)?;

        let status = response.status().as_u16();
        let bytes = response.bytes().await.map_err(AtelierError::network)?;
        debug!(status, len = bytes.len(), "Upstream responded");
        Ok((status, bytes))
    }

    /// Forward a raw JSON body and return the upstream status and body as-is
    ///
    /// The inbound body must be valid JSON, and so must the upstream reply.
    pub async fn forward(&self, body: Bytes) -> Result<Forwarded> {
        serde_json::from_slice::<IgnoredAny>(&body)
            .map_err(|e| AtelierError::validation(format!("request body is not valid JSON: {}", e)))?;

        let (status, body) = self.post(body).await?;
        if serde_json::from_slice::<IgnoredAny>(&body).is_err() {
            let preview = String::from_utf8_lossy(&body[..body.len().min(200)]).into_owned();
            return Err(AtelierError::upstream(
                status,
                scrub_message(format!("upstream returned a non-JSON body: {}", preview)),
            ));
        }
        Ok(Forwarded { status, body })
    }

    /// Send a typed request and decode the typed response
    pub async fn generate(
        &self,
        request: &GenerateContentRequest,
    ) -> Result<GenerateContentResponse> {
        let body = Bytes::from(serde_json::to_vec(request)?);
        let (status, bytes) = self.post(body).await?;
        let response: GenerateContentResponse = serde_json::from_slice(&bytes)?;

        if !(200..300).contains(&status) {
            let message = response
                .error
                .and_then(|e| {
                    if e.message.is_empty() {
                        e.status
                    } else {
                        Some(e.message)
                    }
                })
                .unwrap_or_else(|| "request failed".to_string());
            return Err(AtelierError::upstream(status, scrub_message(message)));
        }
        Ok(response)
    }

    /// Ask the upstream stylist about one or more images
    ///
    /// A safety refusal yields [`SAFETY_APOLOGY`]; a reply without text is an
    /// error so that callers can fall back to offline advice.
    pub async fn analyze_images(
        &self,
        prompt: &StylistPrompt,
        images: &[ImageRef],
        question: &str,
    ) -> Result<String> {
        let mut parts = Vec::with_capacity(images.len() + 1);
        parts.push(Part::text(prompt.render(question)?));
        parts.extend(
            images
                .iter()
                .map(|image| Part::inline(image.mime_type.as_str(), image.data.as_str())),
        );

        let response = self.generate(&GenerateContentRequest::single(parts)).await?;
        if let Some(text) = response.first_text() {
            return Ok(text.to_string());
        }
        if response.blocked_by_safety() {
            warn!("Upstream blocked image analysis on safety grounds");
            return Ok(SAFETY_APOLOGY.to_string());
        }
        Err(AtelierError::upstream(200, "response carried no candidate text"))
    }

    /// Check that the upstream answers a trivial prompt with candidates
    pub async fn probe(&self) -> bool {
        match self.generate(&GenerateContentRequest::text("test")).await {
            Ok(response) if response.has_candidates() => {
                info!("Upstream probe succeeded");
                true
            }
            Ok(_) => {
                warn!("Upstream probe returned no candidates");
                false
            }
            Err(e) => {
                warn!(error = %scrub_message(e.to_string()), "Upstream probe failed");
                false
            }
        }
    }
}
