//! Wire types for the `generateContent` call

use serde::{Deserialize, Serialize};

/// Finish reason reported when a candidate was blocked by safety filters
pub const SAFETY_FINISH_REASON: &str = "SAFETY";

/// Request body
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GenerateContentRequest {
    /// Conversation turns; Atelier always sends exactly one
    pub contents: Vec<Content>,
}

impl GenerateContentRequest {
    /// Single-turn request from a list of parts
    pub fn single(parts: Vec<Part>) -> Self {
        Self {
            contents: vec![Content { role: None, parts }],
        }
    }

    /// Single text prompt
    pub fn text(prompt: impl Into<String>) -> Self {
        Self::single(vec![Part::text(prompt)])
    }
}

/// One turn of content
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Content {
    /// Role (`user` / `model`), absent on requests
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,

    /// Content parts
    #[serde(default)]
    pub parts: Vec<Part>,
}

/// A text or inline-image part
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Part {
    /// Text payload
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,

    /// Inline binary payload
    #[serde(
        default,
        rename = "inline_data",
        alias = "inlineData",
        skip_serializing_if = "Option::is_none"
    )]
    pub inline_data: Option<InlineData>,
}

impl Part {
    /// Text part
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            text: Some(text.into()),
            inline_data: None,
        }
    }

    /// Inline image part
    pub fn inline(mime_type: impl Into<String>, data: impl Into<String>) -> Self {
        Self {
            text: None,
            inline_data: Some(InlineData {
                mime_type: mime_type.into(),
                data: data.into(),
            }),
        }
    }
}

/// Base64 payload with its MIME type
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InlineData {
    /// MIME type
    #[serde(rename = "mime_type", alias = "mimeType")]
    pub mime_type: String,

    /// Base64 data
    pub data: String,
}

/// Response body
#[derive(Debug, Clone, Default, Deserialize)]
pub struct GenerateContentResponse {
    /// Candidates, absent when the request failed
    #[serde(default)]
    pub candidates: Option<Vec<Candidate>>,

    /// Error object, present when the request failed
    #[serde(default)]
    pub error: Option<ErrorBody>,
}

/// A generated candidate
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Candidate {
    /// Generated content
    #[serde(default)]
    pub content: Option<Content>,

    /// Why generation stopped
    #[serde(default, rename = "finishReason")]
    pub finish_reason: Option<String>,
}

/// Upstream error object
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ErrorBody {
    /// Human-readable message
    #[serde(default)]
    pub message: String,

    /// Status name, e.g. `PERMISSION_DENIED`
    #[serde(default)]
    pub status: Option<String>,
}

impl GenerateContentResponse {
    /// Whether a `candidates` field was present at all
    pub fn has_candidates(&self) -> bool {
        self.candidates.is_some()
    }

    fn first_candidate(&self) -> Option<&Candidate> {
        self.candidates.as_ref().and_then(|c| c.first())
    }

    /// Text of the first part of the first candidate
    pub fn first_text(&self) -> Option<&str> {
        self.first_candidate()?
            .content
            .as_ref()?
            .parts
            .first()?
            .text
            .as_deref()
            .filter(|t| !t.is_empty())
    }

    /// Whether the first candidate was stopped by safety filters
    pub fn blocked_by_safety(&self) -> bool {
        self.first_candidate()
            .and_then(|c| c.finish_reason.as_deref())
            == Some(SAFETY_FINISH_REASON)
    }
}
