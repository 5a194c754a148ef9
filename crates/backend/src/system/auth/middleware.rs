use axum::{
    body::Body,
    extract::Request,
    http::{header, StatusCode},
    middleware::Next,
    response::Response,
};
use chrono::Utc;

/// Middleware that requires a well-formed, unexpired `JWT` token
pub async fn require_session(mut req: Request<Body>, next: Next) -> Result<Response, StatusCode> {
    let auth_header = req
        .headers()
        .get(header::AUTHORIZATION)
        .and_then(|h| h.to_str().ok());

    let claims = super::jwt::validate_header(auth_header, Utc::now().timestamp()).map_err(|e| {
        tracing::info!("Rejected {} {}: {:?}", req.method(), req.uri().path(), e);
        StatusCode::UNAUTHORIZED
    })?;

    // Add claims to request extensions for use in handlers
    req.extensions_mut().insert(claims);

    Ok(next.run(req).await)
}
