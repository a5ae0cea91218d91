//! Atelier Core
//!
//! Shared building blocks for the Atelier styling service:
//!
//! - Error type and `Result` alias
//! - Environment configuration resolved once at startup
//! - Logging initialisation and credential redaction
//! - Prompt templates
//! - Chat data model and the `Responder` trait implemented by advice plugins

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod config;
pub mod error;
pub mod templates;
pub mod types;
pub mod utils;

// Re-export main types
pub use config::{load_env, load_env_from_path, ServerConfig};
pub use error::{AtelierError, Result};
pub use templates::TemplateEngine;
pub use types::{ApiMode, ChatMessage, ImageRef, Responder, Sender};
pub use utils::{init_logging, scrub_message};
