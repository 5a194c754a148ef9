use contracts::domain::a007_sale::Sale;
use contracts::shared::api_error::ApiError;
use contracts::shared::pagination::Paginated;
use contracts::shared::url_filters::{FilterConfig, FilterField, FilterKind};
use serde::Deserialize;
use serde_json::Value;

use crate::shared::graphql::execute;

pub const SALE_FILTERS: FilterConfig = FilterConfig::new(&[
    FilterField::new("search", FilterKind::Text),
    FilterField::new("paid", FilterKind::Bool),
]);

const SALES_QUERY: &str = "query Sales($search: String, $paid: Boolean, $page: Int, $limit: Int) {
    sales(search: $search, paid: $paid, page: $page, limit: $limit) {
        results {
            id
            client { id firstName lastName }
            office { id name }
            total itemsCount paid createdOn
        }
        count
        noPages
    }
}";

#[derive(Deserialize)]
struct SalesData {
    sales: Paginated<Sale>,
}

pub async fn fetch_sales(variables: Value) -> Result<Paginated<Sale>, ApiError> {
    execute::<SalesData>(SALES_QUERY, variables)
        .await
        .map(|d| d.sales)
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::shared::pagination::build_variables;
    use contracts::shared::url_filters::{parse, QueryParams};
    use serde_json::json;

    #[test]
    fn test_unpaid_filter_reaches_variables() {
        let params = QueryParams::parse("?paid=false&search=central");
        let vars = build_variables(&json!({}), &parse(&SALE_FILTERS, &params), 1);
        assert_eq!(vars["paid"], json!(false));
        assert_eq!(vars["search"], json!("central"));
    }

    #[test]
    fn test_sales_page_decodes() {
        let data: SalesData = serde_json::from_value(json!({
            "sales": {
                "results": [{
                    "id": "4",
                    "client": null,
                    "office": { "id": "1", "name": "Central" },
                    "total": 2300.5,
                    "itemsCount": 3,
                    "paid": false,
                    "createdOn": "2024-06-01T10:00:00Z"
                }],
                "count": 1,
                "noPages": 1
            }
        }))
        .unwrap();
        assert_eq!(data.sales.results[0].client_name(), "Consumidor final");
        assert_eq!(data.sales.totals(), (1, 1));
    }
}
