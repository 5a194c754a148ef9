//! HTTP client for the upstream API (GraphQL endpoint and CSV exports).

use axum::body::Bytes;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use contracts::shared::graphql::{GraphQlRequest, GraphQlResponse};
use contracts::system::auth::UserInfo;
use serde::Deserialize;
use serde_json::json;

use crate::shared::config::UpstreamConfig;

const TOKEN_AUTH_MUTATION: &str = r#"
mutation TokenAuth($email: String!, $password: String!) {
  tokenAuth(email: $email, password: $password) {
    token
    user { id email firstName lastName isStaff }
  }
}
"#;

#[derive(Debug, thiserror::Error)]
pub enum UpstreamError {
    #[error("upstream unreachable: {0}")]
    Unreachable(String),
    #[error("upstream timed out")]
    Timeout,
    #[error("invalid upstream response: {0}")]
    InvalidResponse(String),
}

impl From<reqwest::Error> for UpstreamError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_timeout() {
            UpstreamError::Timeout
        } else if e.is_decode() {
            UpstreamError::InvalidResponse(e.to_string())
        } else {
            UpstreamError::Unreachable(e.to_string())
        }
    }
}

impl UpstreamError {
    pub fn status(&self) -> StatusCode {
        match self {
            UpstreamError::Timeout => StatusCode::GATEWAY_TIMEOUT,
            UpstreamError::Unreachable(_) | UpstreamError::InvalidResponse(_) => {
                StatusCode::BAD_GATEWAY
            }
        }
    }
}

impl IntoResponse for UpstreamError {
    fn into_response(self) -> Response {
        tracing::error!("{}", self);
        (self.status(), Json(json!({ "error": self.to_string() }))).into_response()
    }
}

/// Raw upstream answer relayed back to the browser
pub struct Relayed {
    pub status: StatusCode,
    pub content_type: Option<String>,
    pub body: Bytes,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct TokenAuthData {
    token_auth: Option<TokenAuthPayload>,
}

#[derive(Debug, Deserialize)]
struct TokenAuthPayload {
    token: String,
    user: UserInfo,
}

#[derive(Clone)]
pub struct UpstreamClient {
    http: reqwest::Client,
    graphql_url: String,
    export_url: String,
}

impl UpstreamClient {
    pub fn new(config: &UpstreamConfig) -> anyhow::Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(config.timeout())
            .build()?;
        Ok(Self {
            http,
            graphql_url: config.graphql_url.clone(),
            export_url: config.export_url.clone(),
        })
    }

    /// POST a GraphQL body as is, forwarding the caller's Authorization header.
    pub async fn relay_graphql(
        &self,
        body: Bytes,
        authorization: Option<&str>,
    ) -> Result<Relayed, UpstreamError> {
        let mut request = self
            .http
            .post(&self.graphql_url)
            .header(reqwest::header::CONTENT_TYPE, "application/json")
            .body(body);
        if let Some(value) = authorization {
            request = request.header(reqwest::header::AUTHORIZATION, value);
        }
        relay(request).await
    }

    /// GET a CSV export for one collection with the list filters as query string.
    pub async fn relay_export(
        &self,
        entity: &str,
        query: Option<&str>,
        authorization: Option<&str>,
    ) -> Result<Relayed, UpstreamError> {
        let url = export_url(&self.export_url, entity, query);
        tracing::debug!("Export request: {}", url);
        let mut request = self.http.get(url);
        if let Some(value) = authorization {
            request = request.header(reqwest::header::AUTHORIZATION, value);
        }
        relay(request).await
    }

    /// Run the `tokenAuth` mutation. `Ok(None)` means the credentials were rejected.
    pub async fn token_auth(
        &self,
        email: &str,
        password: &str,
    ) -> Result<Option<(String, UserInfo)>, UpstreamError> {
        let request = GraphQlRequest::new(
            TOKEN_AUTH_MUTATION,
            json!({ "email": email, "password": password }),
        );
        let response = self.http.post(&self.graphql_url).json(&request).send().await?;
        if !response.status().is_success() {
            tracing::warn!("tokenAuth answered with status {}", response.status());
            return Ok(None);
        }
        let body = response.text().await?;
        Ok(parse_token_auth(&body)?)
    }
}

async fn relay(request: reqwest::RequestBuilder) -> Result<Relayed, UpstreamError> {
    let response = request.send().await?;
    let status = StatusCode::from_u16(response.status().as_u16())
        .map_err(|e| UpstreamError::InvalidResponse(e.to_string()))?;
    let content_type = response
        .headers()
        .get(reqwest::header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .map(str::to_string);
    let body = response.bytes().await?;
    Ok(Relayed {
        status,
        content_type,
        body,
    })
}

fn export_url(base: &str, entity: &str, query: Option<&str>) -> String {
    let base = base.trim_end_matches('/');
    match query.filter(|q| !q.is_empty()) {
        Some(q) => format!("{}/{}/?{}", base, entity, q),
        None => format!("{}/{}/", base, entity),
    }
}

/// GraphQL errors or a null payload both mean rejected credentials.
fn parse_token_auth(body: &str) -> Result<Option<(String, UserInfo)>, UpstreamError> {
    let envelope: GraphQlResponse<TokenAuthData> =
        serde_json::from_str(body).map_err(|e| UpstreamError::InvalidResponse(e.to_string()))?;
    match envelope.into_result() {
        Ok(data) => Ok(data.token_auth.map(|p| (p.token, p.user))),
        Err(e) => {
            tracing::warn!("tokenAuth rejected: {}", e);
            Ok(None)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_export_url() {
        assert_eq!(
            export_url("http://api/export/", "clients", Some("search=ana&page=2")),
            "http://api/export/clients/?search=ana&page=2"
        );
        assert_eq!(export_url("http://api/export", "sales", Some("")), "http://api/export/sales/");
        assert_eq!(export_url("http://api/export", "sales", None), "http://api/export/sales/");
    }

    #[test]
    fn test_parse_token_auth_success() {
        let body = r#"{"data":{"tokenAuth":{"token":"abc","user":{"id":"1","email":"a@b.com","firstName":"Ana","lastName":"Pérez","isStaff":true}}}}"#;
        let (token, user) = parse_token_auth(body).unwrap().unwrap();
        assert_eq!(token, "abc");
        assert_eq!(user.display_name(), "Ana Pérez");
    }

    #[test]
    fn test_parse_token_auth_rejected() {
        let body = r#"{"data":{"tokenAuth":null},"errors":[{"message":"Please enter valid credentials"}]}"#;
        assert!(parse_token_auth(body).unwrap().is_none());
    }

    #[test]
    fn test_parse_token_auth_garbage() {
        assert!(matches!(
            parse_token_auth("<html>"),
            Err(UpstreamError::InvalidResponse(_))
        ));
    }

    #[test]
    fn test_error_status() {
        assert_eq!(UpstreamError::Timeout.status(), StatusCode::GATEWAY_TIMEOUT);
        assert_eq!(
            UpstreamError::Unreachable("refused".into()).status(),
            StatusCode::BAD_GATEWAY
        );
    }
}
