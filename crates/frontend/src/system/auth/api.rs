use contracts::shared::graphql::authorization_value;
use contracts::system::auth::{LoginRequest, LoginResponse, SessionInfo};
use gloo_net::http::Request;

use crate::shared::api_utils::api_url;

/// Exchange email and password for a token
pub async fn login(email: String, password: String) -> Result<LoginResponse, String> {
    let request = LoginRequest { email, password };

    let response = Request::post(&api_url("/api/auth/login"))
        .json(&request)
        .map_err(|e| format!("Failed to serialize request: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    match response.status() {
        200 => response
            .json::<LoginResponse>()
            .await
            .map_err(|e| format!("Failed to parse response: {}", e)),
        400 | 401 => Err("Email o contraseña incorrectos".to_string()),
        status => Err(format!("Login failed: {}", status)),
    }
}

/// Ask the gateway whether the stored token is still usable
pub async fn check_session(token: &str) -> Result<SessionInfo, String> {
    let response = Request::get(&api_url("/api/auth/session"))
        .header("Authorization", &authorization_value(token))
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(format!("Session check failed: {}", response.status()));
    }

    response
        .json::<SessionInfo>()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}

pub async fn logout() -> Result<(), String> {
    let response = Request::post(&api_url("/api/auth/logout"))
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(format!("Logout failed: {}", response.status()));
    }

    Ok(())
}
