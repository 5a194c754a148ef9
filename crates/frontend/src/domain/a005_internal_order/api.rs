use contracts::domain::a005_internal_order::{
    InternalOrderDetails, InternalOrderListItem, InternalOrderStatus,
};
use contracts::shared::api_error::ApiError;
use contracts::shared::graphql::MutationResult;
use contracts::shared::pagination::Paginated;
use contracts::shared::url_filters::{FilterConfig, FilterField, FilterKind};
use serde::Deserialize;
use serde_json::{json, Value};

use crate::shared::graphql::execute;

pub const INTERNAL_ORDER_FILTERS: FilterConfig = FilterConfig::new(&[
    FilterField::new("search", FilterKind::Text),
    FilterField::new("status", FilterKind::MultipleText),
]);

const INTERNAL_ORDERS_QUERY: &str = "query InternalOrders(
    $search: String, $status: [InternalOrderStatus], $page: Int, $limit: Int
) {
    internalOrders(search: $search, status: $status, page: $page, limit: $limit) {
        results {
            id
            officeSource { id name }
            officeDestination { id name }
            status itemsCount createdOn
        }
        count
        noPages
    }
}";

const INTERNAL_ORDER_QUERY: &str = "query InternalOrder($id: ID!) {
    internalOrder(id: $id) {
        id
        officeSource { id name }
        officeDestination { id name }
        status note
        items { id product { id sku name } quantity }
        history { id status note createdOn user { id email firstName lastName } }
        createdOn
    }
}";

const CHANGE_STATUS: &str = "mutation ChangeInternalOrderStatus($id: ID!, $status: InternalOrderStatus!, $note: String) {
    changeInternalOrderStatus(id: $id, status: $status, note: $note) { ok errors }
}";

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct InternalOrdersData {
    internal_orders: Paginated<InternalOrderListItem>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct InternalOrderData {
    internal_order: Option<InternalOrderDetails>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct ChangeStatusData {
    change_internal_order_status: MutationResult,
}

pub async fn fetch_internal_orders(
    variables: Value,
) -> Result<Paginated<InternalOrderListItem>, ApiError> {
    execute::<InternalOrdersData>(INTERNAL_ORDERS_QUERY, variables)
        .await
        .map(|d| d.internal_orders)
}

pub async fn fetch_internal_order(id: String) -> Result<InternalOrderDetails, ApiError> {
    execute::<InternalOrderData>(INTERNAL_ORDER_QUERY, json!({ "id": id }))
        .await?
        .internal_order
        .ok_or(ApiError::MissingData)
}

pub async fn change_status(
    id: String,
    status: InternalOrderStatus,
    note: Option<String>,
) -> Result<(), ApiError> {
    execute::<ChangeStatusData>(
        CHANGE_STATUS,
        json!({ "id": id, "status": status, "note": note }),
    )
    .await?
    .change_internal_order_status
    .into_result()
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::shared::progress::{project_stages, StageStatus};

    #[test]
    fn test_details_project_into_stages() {
        let data: InternalOrderData = serde_json::from_str(
            r#"{"internalOrder":{"id":"5",
                "officeSource":{"id":"1","name":"Central"},
                "officeDestination":{"id":"2","name":"Norte"},
                "status":"IN_PROGRESS","note":null,
                "items":[{"id":"i1","product":{"id":"p1","sku":"AND-01","name":"Andamio"},"quantity":4}],
                "history":[
                    {"id":"h1","status":"PENDING","note":null,"createdOn":"2024-05-01T09:00:00Z","user":null},
                    {"id":"h2","status":"IN_PROGRESS","note":"Sale en camión","createdOn":"2024-05-02T09:00:00Z",
                     "user":{"id":"u1","email":"deposito@empresa.com","firstName":"Laura","lastName":"Gómez"}}
                ],
                "createdOn":"2024-05-01T09:00:00Z"}}"#,
        )
        .unwrap();
        let order = data.internal_order.unwrap();
        assert_eq!(order.total_units(), 4);

        let stages = project_stages(order.status, &order.history);
        let statuses: Vec<StageStatus> = stages.iter().map(|s| s.status).collect();
        assert_eq!(
            statuses,
            vec![StageStatus::Completed, StageStatus::InProgress, StageStatus::Upcoming]
        );
        assert_eq!(stages[1].user.as_deref(), Some("Laura Gómez"));
        assert!(stages[2].synthetic);
    }
}
