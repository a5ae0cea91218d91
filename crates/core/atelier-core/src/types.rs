//! Shared types: chat messages, image references and the responder seam

use crate::{AtelierError, Result};
use base64::{engine::general_purpose::STANDARD as BASE64, Engine as _};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Who sent a chat message
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sender {
    /// The person using the widget
    User,
    /// The stylist
    Bot,
}

/// A single chat message as shown in the widget
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatMessage {
    /// Message ID
    pub id: Uuid,

    /// Sender
    pub sender: Sender,

    /// Message text (markdown-ish)
    pub text: String,

    /// Attached image references (data URLs)
    #[serde(default)]
    pub images: Vec<String>,

    /// Creation time
    pub timestamp: DateTime<Utc>,
}

impl ChatMessage {
    /// Create a bot message
    pub fn bot(text: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            sender: Sender::Bot,
            text: text.into(),
            images: Vec::new(),
            timestamp: Utc::now(),
        }
    }
}

/// A decoded `data:<mime>;base64,<payload>` image reference
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageRef {
    /// MIME type, e.g. `image/png`
    pub mime_type: String,

    /// Base64 payload, exactly as received
    pub data: String,
}

impl ImageRef {
    /// Parse a data URL
    pub fn parse(url: &str) -> Result<Self> {
        let rest = url
            .strip_prefix("data:")
            .ok_or_else(|| AtelierError::validation("image reference is not a data URL"))?;
        let (header, data) = rest
            .split_once(',')
            .ok_or_else(|| AtelierError::validation("image data URL has no payload"))?;
        let mime_type = header
            .strip_suffix(";base64")
            .ok_or_else(|| AtelierError::validation("image data URL must be base64 encoded"))?;
        if mime_type.is_empty() || !mime_type.contains('/') {
            return Err(AtelierError::validation(format!(
                "invalid image MIME type '{}'",
                mime_type
            )));
        }
        BASE64
            .decode(data)
            .map_err(|e| AtelierError::validation(format!("invalid base64 image payload: {}", e)))?;

        Ok(Self {
            mime_type: mime_type.to_string(),
            data: data.to_string(),
        })
    }
}

/// Whether chat requests may use the upstream generative API
///
/// Resolved once at startup and never mutated afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ApiMode {
    /// Upstream reachable with a working credential
    Enabled,
    /// Offline advice only
    Disabled,
}

impl ApiMode {
    /// Whether the upstream should be used
    pub fn is_enabled(self) -> bool {
        matches!(self, ApiMode::Enabled)
    }
}

/// Produces advice text for a message and its attached image count
///
/// Implementations must be deterministic and total: every input yields a
/// non-empty answer.
pub trait Responder: Send + Sync {
    /// Select the answer for `text` with `image_count` attached images
    fn respond(&self, text: &str, image_count: usize) -> String;
}
