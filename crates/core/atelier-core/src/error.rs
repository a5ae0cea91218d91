//! Error types for Atelier

use thiserror::Error;

/// Main error type for Atelier operations
#[derive(Debug, Error)]
pub enum AtelierError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Validation error
    #[error("Validation error: {0}")]
    Validation(String),

    /// Network/HTTP error
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// Serialization/deserialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Template rendering error
    #[error("Template error: {0}")]
    Template(String),

    /// Upstream generative API returned something unusable
    #[error("Upstream error ({status}): {message}")]
    Upstream {
        /// HTTP status reported by the upstream
        status: u16,
        /// Error message
        message: String,
    },
}

/// Convenient Result type using AtelierError
pub type Result<T> = std::result::Result<T, AtelierError>;

impl AtelierError {
    /// Create a config error
    pub fn config(msg: impl Into<String>) -> Self {
        AtelierError::Config(msg.into())
    }

    /// Create a validation error
    pub fn validation(msg: impl Into<String>) -> Self {
        AtelierError::Validation(msg.into())
    }

    /// Create a template error
    pub fn template(msg: impl Into<String>) -> Self {
        AtelierError::Template(msg.into())
    }

    /// Create an upstream error
    pub fn upstream(status: u16, message: impl Into<String>) -> Self {
        AtelierError::Upstream {
            status,
            message: message.into(),
        }
    }

    /// Network errors carry the request URL, which includes the API key as a
    /// query parameter. Strip it before the error is displayed anywhere.
    pub fn network(err: reqwest::Error) -> Self {
        AtelierError::Network(err.without_url())
    }
}
