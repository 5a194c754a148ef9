use contracts::domain::a004_supplier::Supplier;
use contracts::shared::api_error::ApiError;
use contracts::shared::graphql::MutationResult;
use contracts::shared::pagination::Paginated;
use contracts::shared::url_filters::{FilterConfig, FilterField, FilterKind};
use serde::Deserialize;
use serde_json::{json, Value};

use crate::shared::graphql::execute;

pub const SUPPLIER_FILTERS: FilterConfig =
    FilterConfig::new(&[FilterField::new("search", FilterKind::Text)]);

const SUPPLIERS_QUERY: &str = "query Suppliers($search: String, $page: Int, $limit: Int) {
    suppliers(search: $search, page: $page, limit: $limit) {
        results { id name taxId email phone locality { id name state } }
        count
        noPages
    }
}";

const DELETE_SUPPLIER: &str = "mutation DeleteSupplier($id: ID!) {
    deleteSupplier(id: $id) { ok errors }
}";

#[derive(Deserialize)]
struct SuppliersData {
    suppliers: Paginated<Supplier>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct DeleteData {
    delete_supplier: MutationResult,
}

pub async fn fetch_suppliers(variables: Value) -> Result<Paginated<Supplier>, ApiError> {
    execute::<SuppliersData>(SUPPLIERS_QUERY, variables)
        .await
        .map(|d| d.suppliers)
}

pub async fn delete_supplier(id: String) -> Result<(), ApiError> {
    execute::<DeleteData>(DELETE_SUPPLIER, json!({ "id": id }))
        .await?
        .delete_supplier
        .into_result()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejected_delete_keeps_server_message() {
        let data: DeleteData = serde_json::from_str(
            r#"{"deleteSupplier":{"ok":false,"errors":["El proveedor tiene pedidos asociados"]}}"#,
        )
        .unwrap();
        assert_eq!(
            data.delete_supplier.into_result(),
            Err(ApiError::GraphQl(vec!["El proveedor tiene pedidos asociados".to_string()]))
        );
    }
}
