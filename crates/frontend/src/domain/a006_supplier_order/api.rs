use contracts::domain::a006_supplier_order::{
    SupplierOrderDetails, SupplierOrderListItem, SupplierOrderStatus,
};
use contracts::shared::api_error::ApiError;
use contracts::shared::graphql::MutationResult;
use contracts::shared::pagination::Paginated;
use contracts::shared::url_filters::{FilterConfig, FilterField, FilterKind};
use serde::Deserialize;
use serde_json::{json, Value};

use crate::shared::graphql::execute;

pub const SUPPLIER_ORDER_FILTERS: FilterConfig = FilterConfig::new(&[
    FilterField::new("search", FilterKind::Text),
    FilterField::new("status", FilterKind::MultipleText),
]);

const SUPPLIER_ORDERS_QUERY: &str = "query SupplierOrders(
    $search: String, $status: [SupplierOrderStatus], $page: Int, $limit: Int
) {
    supplierOrders(search: $search, status: $status, page: $page, limit: $limit) {
        results {
            id
            supplier { id name }
            officeDestination { id name }
            total status createdOn
        }
        count
        noPages
    }
}";

const SUPPLIER_ORDER_QUERY: &str = "query SupplierOrder($id: ID!) {
    supplierOrder(id: $id) {
        id
        supplier { id name }
        officeDestination { id name }
        total status note
        items { id product { id sku name } quantity price }
        history { id status note createdOn user { id email firstName lastName } }
        createdOn
    }
}";

const CHANGE_STATUS: &str = "mutation ChangeSupplierOrderStatus($id: ID!, $status: SupplierOrderStatus!, $note: String) {
    changeSupplierOrderStatus(id: $id, status: $status, note: $note) { ok errors }
}";

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct SupplierOrdersData {
    supplier_orders: Paginated<SupplierOrderListItem>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct SupplierOrderData {
    supplier_order: Option<SupplierOrderDetails>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct ChangeStatusData {
    change_supplier_order_status: MutationResult,
}

pub async fn fetch_supplier_orders(
    variables: Value,
) -> Result<Paginated<SupplierOrderListItem>, ApiError> {
    execute::<SupplierOrdersData>(SUPPLIER_ORDERS_QUERY, variables)
        .await
        .map(|d| d.supplier_orders)
}

pub async fn fetch_supplier_order(id: String) -> Result<SupplierOrderDetails, ApiError> {
    execute::<SupplierOrderData>(SUPPLIER_ORDER_QUERY, json!({ "id": id }))
        .await?
        .supplier_order
        .ok_or(ApiError::MissingData)
}

pub async fn change_status(
    id: String,
    status: SupplierOrderStatus,
    note: Option<String>,
) -> Result<(), ApiError> {
    execute::<ChangeStatusData>(
        CHANGE_STATUS,
        json!({ "id": id, "status": status, "note": note }),
    )
    .await?
    .change_supplier_order_status
    .into_result()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_order_decodes_to_none() {
        let data: SupplierOrderData = serde_json::from_str(r#"{"supplierOrder":null}"#).unwrap();
        assert!(data.supplier_order.is_none());
    }

    #[test]
    fn test_received_order_has_no_pending_stage() {
        use contracts::shared::progress::project_stages;

        let data: SupplierOrderData = serde_json::from_str(
            r#"{"supplierOrder":{"id":"3",
                "supplier":{"id":"1","name":"Herramientas del Sur"},
                "officeDestination":{"id":"1","name":"Central"},
                "total":"1200.50","status":"RECEIVED","note":null,"items":[],
                "history":[
                    {"id":"h1","status":"PENDING","note":null,"createdOn":"2024-05-01T09:00:00Z","user":null},
                    {"id":"h2","status":"RECEIVED","note":null,"createdOn":"2024-05-03T09:00:00Z","user":null}
                ],
                "createdOn":"2024-05-01T09:00:00Z"}}"#,
        )
        .unwrap();
        let order = data.supplier_order.unwrap();
        let stages = project_stages(order.status, &order.history);
        assert_eq!(stages.len(), 2);
        assert!(stages.iter().all(|s| !s.synthetic));
    }
}
