//! GraphQL wire envelope: `{query, variables}` in, `{data, errors}` out.

use super::api_error::ApiError;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

/// Header prefix the API expects in front of the token.
pub const AUTH_SCHEME: &str = "JWT";

pub fn authorization_value(token: &str) -> String {
    format!("{} {}", AUTH_SCHEME, token)
}

#[derive(Debug, Clone, Serialize)]
pub struct GraphQlRequest<'a> {
    pub query: &'a str,
    pub variables: serde_json::Value,
}

impl<'a> GraphQlRequest<'a> {
    pub fn new(query: &'a str, variables: serde_json::Value) -> Self {
        Self { query, variables }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct GraphQlErrorMessage {
    pub message: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct GraphQlResponse<T> {
    pub data: Option<T>,
    #[serde(default)]
    pub errors: Vec<GraphQlErrorMessage>,
}

impl<T> GraphQlResponse<T> {
    /// Errors win over partial data.
    pub fn into_result(self) -> Result<T, ApiError> {
        if !self.errors.is_empty() {
            return Err(ApiError::GraphQl(
                self.errors.into_iter().map(|e| e.message).collect(),
            ));
        }
        self.data.ok_or(ApiError::MissingData)
    }
}

/// Decode a raw response body.
pub fn decode_response<T: DeserializeOwned>(body: &str) -> Result<T, ApiError> {
    let envelope: GraphQlResponse<T> =
        serde_json::from_str(body).map_err(|e| ApiError::Decode(e.to_string()))?;
    envelope.into_result()
}

/// Mutation payload shape shared by delete/update mutations: `{ ok, errors }`.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct MutationResult {
    #[serde(default)]
    pub ok: bool,
    #[serde(default)]
    pub errors: Vec<String>,
}

impl MutationResult {
    pub fn into_result(self) -> Result<(), ApiError> {
        if self.ok && self.errors.is_empty() {
            Ok(())
        } else {
            Err(ApiError::GraphQl(self.errors))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[derive(Debug, Deserialize, PartialEq)]
    struct Hello {
        hello: String,
    }

    #[test]
    fn test_request_shape() {
        let req = GraphQlRequest::new("query { hello }", json!({ "page": 1 }));
        let value = serde_json::to_value(&req).unwrap();
        assert_eq!(value, json!({ "query": "query { hello }", "variables": { "page": 1 } }));
    }

    #[test]
    fn test_decode_data() {
        let data: Hello = decode_response(r#"{"data":{"hello":"hola"}}"#).unwrap();
        assert_eq!(data, Hello { hello: "hola".into() });
    }

    #[test]
    fn test_decode_errors() {
        let err = decode_response::<Hello>(
            r#"{"data":null,"errors":[{"message":"No autorizado"},{"message":"x"}]}"#,
        )
        .unwrap_err();
        assert_eq!(err, ApiError::GraphQl(vec!["No autorizado".into(), "x".into()]));
    }

    #[test]
    fn test_decode_missing_data_and_garbage() {
        assert_eq!(
            decode_response::<Hello>(r#"{"data":null}"#).unwrap_err(),
            ApiError::MissingData
        );
        assert!(matches!(
            decode_response::<Hello>("<html>").unwrap_err(),
            ApiError::Decode(_)
        ));
    }

    #[test]
    fn test_mutation_result() {
        let ok: MutationResult = serde_json::from_value(json!({ "ok": true })).unwrap();
        assert!(ok.into_result().is_ok());
        let failed: MutationResult =
            serde_json::from_value(json!({ "ok": false, "errors": ["Tiene contratos"] })).unwrap();
        assert_eq!(
            failed.into_result().unwrap_err(),
            ApiError::GraphQl(vec!["Tiene contratos".into()])
        );
    }

    #[test]
    fn test_authorization_value() {
        assert_eq!(authorization_value("abc"), "JWT abc");
    }
}
