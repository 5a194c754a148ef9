//! GraphQL client: every query and mutation goes through [`execute`].

use contracts::shared::api_error::ApiError;
use contracts::shared::graphql::{authorization_value, decode_response, GraphQlRequest};
use gloo_net::http::Request;
use serde::de::DeserializeOwned;
use serde_json::Value;

use super::api_utils::{api_url, handle_redirect};
use crate::system::auth::storage;

/// POST `{query, variables}` to the gateway and decode `data` into `T`.
///
/// 401 and 409 redirect (login / email verification) before the error is
/// returned to the caller.
pub async fn execute<T: DeserializeOwned>(query: &str, variables: Value) -> Result<T, ApiError> {
    let body = GraphQlRequest::new(query, variables);

    let mut request = Request::post(&api_url("/graphql"));
    if let Some(token) = storage::get_token() {
        request = request.header("Authorization", &authorization_value(&token));
    }

    let response = request
        .json(&body)
        .map_err(|e| ApiError::Network(format!("Failed to serialize request: {}", e)))?
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;

    if !response.ok() {
        let error = ApiError::from_status(response.status());
        handle_redirect(&error);
        return Err(error);
    }

    let text = response
        .text()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;

    decode_response(&text).inspect_err(|e| log::warn!("GraphQL call failed: {}", e))
}
