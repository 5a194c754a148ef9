use axum::{
    extract::{Path, RawQuery, State},
    http::{header, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
};
use chrono::Utc;

use super::graphql_proxy::into_response;
use crate::shared::state::AppState;
use crate::system::auth::extractor::ForwardedAuth;

/// Collections the upstream API can export
pub const EXPORTABLE: &[&str] = &[
    "clients",
    "contracts",
    "products",
    "suppliers",
    "internal-orders",
    "supplier-orders",
    "sales",
];

pub fn attachment_name(entity: &str, date: chrono::NaiveDate) -> String {
    format!("{}-{}.csv", entity, date.format("%Y-%m-%d"))
}

/// GET /api/export/:entity?<list filters>
pub async fn relay(
    State(state): State<AppState>,
    Path(entity): Path<String>,
    RawQuery(query): RawQuery,
    ForwardedAuth(authorization): ForwardedAuth,
) -> Response {
    if !EXPORTABLE.contains(&entity.as_str()) {
        return StatusCode::NOT_FOUND.into_response();
    }

    let relayed = match state
        .upstream
        .relay_export(&entity, query.as_deref(), authorization.as_deref())
        .await
    {
        Ok(r) => r,
        Err(e) => return e.into_response(),
    };

    let success = relayed.status.is_success();
    let mut response = match into_response(relayed, "text/csv; charset=utf-8") {
        Ok(r) => r,
        Err(e) => return e.into_response(),
    };

    if success {
        let disposition = format!(
            "attachment; filename=\"{}\"",
            attachment_name(&entity, Utc::now().date_naive())
        );
        if let Ok(value) = HeaderValue::from_str(&disposition) {
            response
                .headers_mut()
                .insert(header::CONTENT_DISPOSITION, value);
        }
    }
    response
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn test_attachment_name() {
        let date = NaiveDate::from_ymd_opt(2024, 5, 2).unwrap();
        assert_eq!(attachment_name("internal-orders", date), "internal-orders-2024-05-02.csv");
    }

    #[test]
    fn test_every_list_is_exportable() {
        use contracts::domain::a001_client::Client;
        use contracts::domain::a002_contract::ContractListItem;
        use contracts::domain::a003_product::Product;
        use contracts::domain::a004_supplier::Supplier;
        use contracts::domain::a005_internal_order::InternalOrderListItem;
        use contracts::domain::a006_supplier_order::SupplierOrderListItem;
        use contracts::domain::a007_sale::Sale;
        use contracts::domain::common::EntityRecord;

        for name in [
            Client::collection_name(),
            ContractListItem::collection_name(),
            Product::collection_name(),
            Supplier::collection_name(),
            InternalOrderListItem::collection_name(),
            SupplierOrderListItem::collection_name(),
            Sale::collection_name(),
        ] {
            assert!(EXPORTABLE.contains(&name), "{} not exportable", name);
        }
    }

    #[test]
    fn test_exportable_collections() {
        assert!(EXPORTABLE.contains(&"supplier-orders"));
        assert!(!EXPORTABLE.contains(&"users"));
    }
}
