//! Atelier Advice Plugin
//!
//! Offline styling advice. Answers are picked from fixed text blocks by
//! keyword matching, so the service stays useful without an upstream API.

#![warn(missing_docs)]
#![warn(clippy::all)]

mod blocks;
mod images;
pub mod knowledge;
pub mod rules;

use atelier_core::Responder;
use tracing::debug;

pub use knowledge::BodyType;
pub use rules::{MatchRule, TEXT_RULES};

/// Name reported when no text rule fires
pub const FALLBACK_RULE: &str = "fallback";

/// Name reported for messages that carry images
pub const IMAGE_RULE: &str = "image_analysis";

/// Keyword-driven responder
///
/// Stateless and deterministic: the same message and image count always
/// produce the same answer.
#[derive(Debug, Clone, Copy, Default)]
pub struct KeywordResponder;

impl KeywordResponder {
    /// Create a responder
    pub fn new() -> Self {
        Self
    }

    /// Name of the rule that answers `text` with `image_count` images
    pub fn matching_rule(&self, text: &str, image_count: usize) -> &'static str {
        if image_count > 0 {
            return IMAGE_RULE;
        }
        rules::first_match(&text.to_lowercase())
            .map(|rule| rule.name)
            .unwrap_or(FALLBACK_RULE)
    }
}

impl Responder for KeywordResponder {
    fn respond(&self, text: &str, image_count: usize) -> String {
        let msg = text.to_lowercase();
        if image_count > 0 {
            debug!(image_count, "Answering image message offline");
            return images::analyze(&msg, image_count);
        }

        match rules::first_match(&msg) {
            Some(rule) => {
                debug!(rule = rule.name, "Keyword rule matched");
                rule.render(&msg)
            }
            None => {
                debug!("No keyword rule matched, using fallback");
                rules::fallback()
            }
        }
    }
}
