//! HTTP error responses

use atelier_core::{scrub_message, AtelierError};
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use tracing::error;

/// Error returned by handlers as `{"error": message}`
#[derive(Debug)]
pub enum ApiError {
    /// Malformed request
    BadRequest(String),
    /// Anything the server could not complete
    Internal(String),
}

impl ApiError {
    /// Status code for this error
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let message = match self {
            ApiError::BadRequest(msg) | ApiError::Internal(msg) => msg,
        };
        (status, Json(serde_json::json!({ "error": message }))).into_response()
    }
}

impl From<AtelierError> for ApiError {
    fn from(err: AtelierError) -> Self {
        match err {
            AtelierError::Validation(msg) => ApiError::BadRequest(msg),
            other => {
                let message = scrub_message(other.to_string());
                error!("Request failed: {}", message);
                ApiError::Internal(message)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_error_response() {
        let response = ApiError::BadRequest("test error".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_from_atelier_error() {
        let err: ApiError = AtelierError::validation("bad image").into();
        assert!(matches!(err, ApiError::BadRequest(ref m) if m == "bad image"));

        let err: ApiError = AtelierError::upstream(502, "url ?key=AIzaSecret123").into();
        match err {
            ApiError::Internal(msg) => assert!(!msg.contains("AIzaSecret123")),
            other => panic!("unexpected: {:?}", other),
        }
    }
}
