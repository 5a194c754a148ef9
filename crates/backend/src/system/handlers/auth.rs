use axum::{
    extract::{Json, State},
    http::StatusCode,
};
use chrono::Utc;
use contracts::system::auth::{LoginRequest, LoginResponse, SessionInfo};

use crate::shared::state::AppState;
use crate::system::auth::{extractor::ForwardedAuth, jwt};

/// Login handler: exchanges credentials for an upstream token
pub async fn login(
    State(state): State<AppState>,
    Json(request): Json<LoginRequest>,
) -> Result<Json<LoginResponse>, StatusCode> {
    let email = request.email.trim();
    if email.is_empty() || request.password.is_empty() {
        return Err(StatusCode::BAD_REQUEST);
    }

    let (token, user) = state
        .upstream
        .token_auth(email, &request.password)
        .await
        .map_err(|e| {
            tracing::error!("Login for {} failed: {}", email, e);
            e.status()
        })?
        .ok_or(StatusCode::UNAUTHORIZED)?;

    tracing::info!("User {} signed in", user.email);
    Ok(Json(LoginResponse { token, user }))
}

/// Session check: never fails, the error marker tells the client to sign out
pub async fn session(ForwardedAuth(header): ForwardedAuth) -> Json<SessionInfo> {
    let info = match jwt::validate_header(header.as_deref(), Utc::now().timestamp()) {
        Ok(claims) => SessionInfo::valid(&claims),
        Err(e) => SessionInfo::failed(e),
    };
    Json(info)
}

/// Logout handler. Tokens are stateless, the client drops its copy.
pub async fn logout() -> StatusCode {
    StatusCode::NO_CONTENT
}
