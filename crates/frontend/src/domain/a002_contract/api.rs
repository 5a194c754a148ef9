use contracts::domain::a002_contract::{ContractDetails, ContractListItem, ContractStatus};
use contracts::shared::api_error::ApiError;
use contracts::shared::graphql::MutationResult;
use contracts::shared::pagination::Paginated;
use contracts::shared::url_filters::{FilterConfig, FilterField, FilterKind};
use serde::Deserialize;
use serde_json::{json, Value};

use crate::shared::graphql::execute;

pub const CONTRACT_FILTERS: FilterConfig = FilterConfig::new(&[
    FilterField::new("search", FilterKind::Text),
    FilterField::new("number", FilterKind::Int),
    FilterField::new("status", FilterKind::MultipleText),
]);

/// Newest contracts first unless the caller asks otherwise
pub fn list_defaults() -> Value {
    json!({ "ordering": "-contract_start" })
}

const CONTRACTS_QUERY: &str = "query Contracts(
    $search: String, $number: Int, $status: [ContractStatus], $ordering: String,
    $page: Int, $limit: Int
) {
    contracts(
        search: $search, number: $number, status: $status, ordering: $ordering,
        page: $page, limit: $limit
    ) {
        results {
            id number
            client { id firstName lastName }
            office { id name }
            contractStart contractEnd total status
        }
        count
        noPages
    }
}";

const CONTRACT_QUERY: &str = "query Contract($id: ID!) {
    contract(id: $id) {
        id number
        client { id firstName lastName }
        office { id name }
        contractStart contractEnd total deposit status
        items { id product { id sku name } quantity price }
        history { id status note createdOn user { id email firstName lastName } }
        createdOn
    }
}";

const CHANGE_STATUS: &str = "mutation ChangeContractStatus($id: ID!, $status: ContractStatus!, $note: String) {
    changeContractStatus(id: $id, status: $status, note: $note) { ok errors }
}";

#[derive(Deserialize)]
struct ContractsData {
    contracts: Paginated<ContractListItem>,
}

#[derive(Deserialize)]
struct ContractData {
    contract: Option<ContractDetails>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct ChangeStatusData {
    change_contract_status: MutationResult,
}

pub async fn fetch_contracts(variables: Value) -> Result<Paginated<ContractListItem>, ApiError> {
    execute::<ContractsData>(CONTRACTS_QUERY, variables)
        .await
        .map(|d| d.contracts)
}

pub async fn fetch_contract(id: String) -> Result<ContractDetails, ApiError> {
    execute::<ContractData>(CONTRACT_QUERY, json!({ "id": id }))
        .await?
        .contract
        .ok_or(ApiError::MissingData)
}

/// Move a contract to `status`; the API appends the history entry
pub async fn change_status(
    id: String,
    status: ContractStatus,
    note: Option<String>,
) -> Result<(), ApiError> {
    execute::<ChangeStatusData>(
        CHANGE_STATUS,
        json!({ "id": id, "status": status, "note": note }),
    )
    .await?
    .change_contract_status
    .into_result()
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::shared::pagination::build_variables;
    use contracts::shared::url_filters::{parse, QueryParams};

    #[test]
    fn test_list_variables_from_url() {
        let state = parse(
            &CONTRACT_FILTERS,
            &QueryParams::parse("?status=PENDING,PAID&number=abc&page=3"),
        );
        let vars = build_variables(&list_defaults(), &state, 3);
        assert_eq!(
            vars,
            json!({
                "ordering": "-contract_start",
                "status": ["PENDING", "PAID"],
                "limit": 20,
                "page": 3
            })
        );
    }

    #[test]
    fn test_details_decode() {
        let data: ContractData = serde_json::from_str(
            r#"{"contract":{"id":"7","number":42,
                "client":{"id":"1","firstName":"Ana","lastName":"Pérez"},
                "office":{"id":"1","name":"Centro"},
                "contractStart":"2024-05-01","contractEnd":"2024-05-10",
                "total":"15000.00","deposit":5000,"status":"WITH_DEPOSIT",
                "items":[],"history":[{"id":"h1","status":"PENDING","note":null,
                "createdOn":"2024-04-30T12:00:00Z","user":null}],
                "createdOn":"2024-04-30T12:00:00Z"}}"#,
        )
        .unwrap();
        let contract = data.contract.unwrap();
        assert_eq!(contract.status, ContractStatus::WithDeposit);
        assert_eq!(contract.history.len(), 1);
    }
}
