//! Same-origin passthrough to the upstream `generateContent` endpoint

use crate::{error::ApiError, AppState};
use atelier_core::config::API_KEY_VAR;
use axum::{
    body::{Body, Bytes},
    extract::State,
    http::{header, StatusCode},
    response::Response,
};
use tracing::{debug, error};

/// Forward the request body upstream with the server-held key attached
///
/// The upstream status and body come back untouched. Without a key no
/// upstream call is made.
pub async fn generate_proxy(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Response, ApiError> {
    let Some(client) = state.upstream.as_ref() else {
        error!("Proxy request refused: {} is not set", API_KEY_VAR);
        return Err(ApiError::Internal(format!(
            "Server missing {} in environment",
            API_KEY_VAR
        )));
    };

    debug!(len = body.len(), "Forwarding generate request");
    let forwarded = client.forward(body).await?;

    let status = StatusCode::from_u16(forwarded.status).unwrap_or(StatusCode::BAD_GATEWAY);
    Response::builder()
        .status(status)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(forwarded.body))
        .map_err(|e| ApiError::Internal(e.to_string()))
}
