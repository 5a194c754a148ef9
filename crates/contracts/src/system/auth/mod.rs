use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResponse {
    pub token: String,
    pub user: UserInfo,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserInfo {
    pub id: String,
    pub email: String,
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    #[serde(default)]
    pub is_staff: bool,
}

impl UserInfo {
    pub fn display_name(&self) -> String {
        let full = format!("{} {}", self.first_name, self.last_name);
        let full = full.trim();
        if full.is_empty() {
            self.email.clone()
        } else {
            full.to_string()
        }
    }
}

/// Claims carried by tokens issued by the API
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TokenClaims {
    /// Login name (the user's email)
    pub username: String,
    /// Expiration timestamp (seconds)
    pub exp: i64,
    /// Original issue time, kept across refreshes
    #[serde(rename = "origIat", default)]
    pub orig_iat: Option<i64>,
}

/// Why a session can no longer be used
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SessionError {
    MissingToken,
    InvalidToken,
    TokenExpired,
}

/// Answer of the session check endpoint
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionInfo {
    pub email: Option<String>,
    pub expires_at: Option<i64>,
    pub error: Option<SessionError>,
}

impl SessionInfo {
    pub fn valid(claims: &TokenClaims) -> Self {
        Self {
            email: Some(claims.username.clone()),
            expires_at: Some(claims.exp),
            error: None,
        }
    }

    pub fn failed(error: SessionError) -> Self {
        Self {
            email: None,
            expires_at: None,
            error: Some(error),
        }
    }

    /// A session carrying an error marker forces sign-out.
    pub fn requires_sign_out(&self) -> bool {
        self.error.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_claims_decoding() {
        let claims: TokenClaims = serde_json::from_str(
            r#"{"username":"admin@empresa.com","exp":1700000300,"origIat":1700000000}"#,
        )
        .unwrap();
        assert_eq!(claims.orig_iat, Some(1700000000));
        let session = SessionInfo::valid(&claims);
        assert!(!session.requires_sign_out());
        assert_eq!(session.email.as_deref(), Some("admin@empresa.com"));
    }

    #[test]
    fn test_failed_session_signs_out() {
        assert!(SessionInfo::failed(SessionError::TokenExpired).requires_sign_out());
    }

    #[test]
    fn test_display_name() {
        let user = UserInfo {
            id: "1".into(),
            email: "a@b.com".into(),
            first_name: "Ana".into(),
            last_name: String::new(),
            is_staff: true,
        };
        assert_eq!(user.display_name(), "Ana");
    }
}
