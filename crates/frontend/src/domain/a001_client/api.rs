use contracts::domain::a001_client::{Client, ClientInput};
use contracts::domain::common::LocalityRef;
use contracts::shared::api_error::ApiError;
use contracts::shared::graphql::MutationResult;
use contracts::shared::pagination::Paginated;
use contracts::shared::url_filters::{FilterConfig, FilterField, FilterKind};
use serde::Deserialize;
use serde_json::{json, Value};

use crate::shared::graphql::execute;

pub const CLIENT_FILTERS: FilterConfig = FilterConfig::new(&[
    FilterField::new("search", FilterKind::Text),
    FilterField::new("locality", FilterKind::Text),
]);

const CLIENT_FIELDS: &str = "id firstName lastName email dni phone locality { id name state } createdOn";

fn clients_query() -> String {
    format!(
        "query Clients($search: String, $locality: ID, $page: Int, $limit: Int) {{
            clients(search: $search, locality: $locality, page: $page, limit: $limit) {{
                results {{ {CLIENT_FIELDS} }}
                count
                noPages
            }}
        }}"
    )
}

fn client_query() -> String {
    format!("query Client($id: ID!) {{ client(id: $id) {{ {CLIENT_FIELDS} }} }}")
}

const LOCALITIES_QUERY: &str = "query Localities { localities { id name state } }";

const CREATE_CLIENT: &str = "mutation CreateClient($input: ClientInput!) {
    createClient(input: $input) { ok errors client { id } }
}";

const UPDATE_CLIENT: &str = "mutation UpdateClient($id: ID!, $input: ClientInput!) {
    updateClient(id: $id, input: $input) { ok errors client { id } }
}";

const DELETE_CLIENT: &str = "mutation DeleteClient($id: ID!) {
    deleteClient(id: $id) { ok errors }
}";

#[derive(Deserialize)]
struct ClientsData {
    clients: Paginated<Client>,
}

#[derive(Deserialize)]
struct ClientData {
    client: Option<Client>,
}

#[derive(Deserialize)]
struct LocalitiesData {
    #[serde(default)]
    localities: Vec<LocalityRef>,
}

#[derive(Deserialize)]
struct SavedId {
    id: String,
}

#[derive(Deserialize)]
struct SavePayload {
    #[serde(flatten)]
    result: MutationResult,
    client: Option<SavedId>,
}

impl SavePayload {
    fn into_id(self) -> Result<String, ApiError> {
        self.result.into_result()?;
        self.client.map(|c| c.id).ok_or(ApiError::MissingData)
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct CreateData {
    create_client: SavePayload,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct UpdateData {
    update_client: SavePayload,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct DeleteData {
    delete_client: MutationResult,
}

pub async fn fetch_clients(variables: Value) -> Result<Paginated<Client>, ApiError> {
    execute::<ClientsData>(&clients_query(), variables)
        .await
        .map(|d| d.clients)
}

pub async fn fetch_client(id: String) -> Result<Client, ApiError> {
    execute::<ClientData>(&client_query(), json!({ "id": id }))
        .await?
        .client
        .ok_or(ApiError::MissingData)
}

pub async fn fetch_localities() -> Result<Vec<LocalityRef>, ApiError> {
    execute::<LocalitiesData>(LOCALITIES_QUERY, json!({}))
        .await
        .map(|d| d.localities)
}

/// Create a client; returns the new id
pub async fn create_client(input: ClientInput) -> Result<String, ApiError> {
    execute::<CreateData>(CREATE_CLIENT, json!({ "input": input }))
        .await?
        .create_client
        .into_id()
}

pub async fn update_client(id: String, input: ClientInput) -> Result<String, ApiError> {
    execute::<UpdateData>(UPDATE_CLIENT, json!({ "id": id, "input": input }))
        .await?
        .update_client
        .into_id()
}

pub async fn delete_client(id: String) -> Result<(), ApiError> {
    execute::<DeleteData>(DELETE_CLIENT, json!({ "id": id }))
        .await?
        .delete_client
        .into_result()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_save_payload() {
        let ok: SavePayload =
            serde_json::from_str(r#"{"ok":true,"errors":[],"client":{"id":"12"}}"#).unwrap();
        assert_eq!(ok.into_id(), Ok("12".to_string()));

        let rejected: SavePayload = serde_json::from_str(
            r#"{"ok":false,"errors":["Ya existe un cliente con ese email"],"client":null}"#,
        )
        .unwrap();
        assert_eq!(
            rejected.into_id(),
            Err(ApiError::GraphQl(vec!["Ya existe un cliente con ese email".to_string()]))
        );
    }

    #[test]
    fn test_clients_page_decodes() {
        let data: ClientsData = serde_json::from_str(
            r#"{"clients":{"results":[{"id":"1","firstName":"Ana","lastName":"Pérez",
                "email":"ana@correo.com","dni":null,"phone":null,"locality":null,
                "createdOn":"2024-05-02T10:00:00Z"}],"count":1,"noPages":1}}"#,
        )
        .unwrap();
        assert_eq!(data.clients.totals(), (1, 1));
        assert_eq!(data.clients.results[0].full_name(), "Ana Pérez");
    }
}
