use axum::{
    body::{Body, Bytes},
    extract::State,
    http::{header, Response},
    response::IntoResponse,
};

use crate::shared::state::AppState;
use crate::shared::upstream::{Relayed, UpstreamError};
use crate::system::auth::extractor::{CurrentSession, ForwardedAuth};

/// POST /graphql
///
/// Body and status are relayed as is, 401/409 from the upstream included.
pub async fn relay(
    State(state): State<AppState>,
    CurrentSession(claims): CurrentSession,
    ForwardedAuth(authorization): ForwardedAuth,
    body: Bytes,
) -> Result<impl IntoResponse, UpstreamError> {
    tracing::debug!("GraphQL request from {} ({} bytes)", claims.username, body.len());
    let relayed = state
        .upstream
        .relay_graphql(body, authorization.as_deref())
        .await?;
    if !relayed.status.is_success() {
        tracing::warn!("Upstream GraphQL answered {} for {}", relayed.status, claims.username);
    }
    into_response(relayed, "application/json")
}

pub(crate) fn into_response(
    relayed: Relayed,
    default_content_type: &str,
) -> Result<Response<Body>, UpstreamError> {
    let content_type = relayed
        .content_type
        .unwrap_or_else(|| default_content_type.to_string());
    Response::builder()
        .status(relayed.status)
        .header(header::CONTENT_TYPE, content_type)
        .body(Body::from(relayed.body))
        .map_err(|e| UpstreamError::InvalidResponse(e.to_string()))
}
