use axum::{
    async_trait,
    extract::FromRequestParts,
    http::{header, request::Parts, StatusCode},
};
use contracts::system::auth::TokenClaims;

/// Claims of the caller, set by `require_session`.
/// Usage in handlers: `async fn handler(CurrentSession(claims): CurrentSession) -> Response`
pub struct CurrentSession(pub TokenClaims);

#[async_trait]
impl<S> FromRequestParts<S> for CurrentSession
where
    S: Send + Sync,
{
    type Rejection = StatusCode;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<TokenClaims>()
            .cloned()
            .map(CurrentSession)
            .ok_or(StatusCode::UNAUTHORIZED)
    }
}

/// Raw `Authorization` header, forwarded untouched to the upstream API.
pub struct ForwardedAuth(pub Option<String>);

#[async_trait]
impl<S> FromRequestParts<S> for ForwardedAuth
where
    S: Send + Sync,
{
    type Rejection = StatusCode;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let value = parts
            .headers
            .get(header::AUTHORIZATION)
            .and_then(|h| h.to_str().ok())
            .map(str::to_string);
        Ok(ForwardedAuth(value))
    }
}
