use thiserror::Error;

pub const LOGIN_ROUTE: &str = "/login";
pub const VERIFY_EMAIL_ROUTE: &str = "/verify-email";

/// Generic message shown by pages when a fetch fails.
pub const GENERIC_FETCH_ERROR: &str = "Ocurrió un error, intente nuevamente más tarde.";

/// Errors a GraphQL call can end with, as seen by the front end.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    #[error("network error: {0}")]
    Network(String),
    #[error("session expired or missing")]
    Unauthorized,
    #[error("email address not verified")]
    EmailNotVerified,
    #[error("server responded with status {0}")]
    Http(u16),
    #[error("graphql error: {}", .0.join("; "))]
    GraphQl(Vec<String>),
    #[error("could not decode response: {0}")]
    Decode(String),
    #[error("response carried no data")]
    MissingData,
}

impl ApiError {
    /// Classify a non-success HTTP status.
    pub fn from_status(status: u16) -> Self {
        match status {
            401 => ApiError::Unauthorized,
            409 => ApiError::EmailNotVerified,
            other => ApiError::Http(other),
        }
    }

    /// Route the app must move to when this error happens, if any.
    pub fn redirect_route(&self) -> Option<&'static str> {
        match self {
            ApiError::Unauthorized => Some(LOGIN_ROUTE),
            ApiError::EmailNotVerified => Some(VERIFY_EMAIL_ROUTE),
            _ => None,
        }
    }
}

/// Fixed status → route mapping of the data-fetch layer.
pub fn route_for_status(status: u16) -> Option<&'static str> {
    ApiError::from_status(status).redirect_route()
}

/// Text for a failed mutation toast: the server's own message when it sent a
/// semantic error, `fallback` otherwise.
pub fn mutation_error_message(error: &ApiError, fallback: &str) -> String {
    match error {
        ApiError::GraphQl(messages) => messages
            .iter()
            .find(|m| !m.trim().is_empty())
            .cloned()
            .unwrap_or_else(|| fallback.to_string()),
        _ => fallback.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_routes() {
        assert_eq!(route_for_status(401), Some("/login"));
        assert_eq!(route_for_status(409), Some("/verify-email"));
        assert_eq!(route_for_status(500), None);
        assert_eq!(route_for_status(404), None);
    }

    #[test]
    fn test_mutation_message_prefers_server_text() {
        let err = ApiError::GraphQl(vec!["No se puede eliminar el cliente".into()]);
        assert_eq!(
            mutation_error_message(&err, "Error al eliminar"),
            "No se puede eliminar el cliente"
        );
        assert_eq!(
            mutation_error_message(&ApiError::Http(500), "Error al eliminar"),
            "Error al eliminar"
        );
        assert_eq!(
            mutation_error_message(&ApiError::GraphQl(vec![" ".into()]), "Error"),
            "Error"
        );
    }
}
