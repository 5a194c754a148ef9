//! API utilities for frontend-gateway communication

use contracts::shared::api_error::ApiError;

/// Base URL of the gateway
///
/// Built from the current window location with the gateway port (3000),
/// e.g. "http://localhost:3000". Empty if window is not available.
pub fn api_base() -> String {
    let window = match web_sys::window() {
        Some(w) => w,
        None => return String::new(),
    };
    let location = window.location();
    let protocol = location.protocol().unwrap_or_else(|_| "http:".to_string());
    let hostname = location
        .hostname()
        .unwrap_or_else(|_| "127.0.0.1".to_string());
    format!("{}//{}:3000", protocol, hostname)
}

/// Full gateway URL for a path such as "/graphql"
pub fn api_url(path: &str) -> String {
    format!("{}{}", api_base(), path)
}

/// Hard navigation, used outside of the router (fetch layer).
pub fn redirect_to(route: &str) {
    if let Some(window) = web_sys::window() {
        let _ = window.location().set_href(route);
    }
}

/// Apply the fixed 401/409 redirects for a failed call.
///
/// 401 also drops the stored session so the login page starts clean.
pub fn handle_redirect(error: &ApiError) {
    if let Some(route) = error.redirect_route() {
        if matches!(error, ApiError::Unauthorized) {
            crate::system::auth::storage::clear_session();
        }
        log::warn!("Redirecting to {} after: {}", route, error);
        redirect_to(route);
    }
}
