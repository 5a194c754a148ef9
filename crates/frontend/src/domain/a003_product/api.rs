use contracts::domain::a003_product::Product;
use contracts::domain::common::BrandRef;
use contracts::shared::api_error::ApiError;
use contracts::shared::graphql::MutationResult;
use contracts::shared::pagination::Paginated;
use contracts::shared::url_filters::{FilterConfig, FilterField, FilterKind};
use serde::Deserialize;
use serde_json::{json, Value};

use crate::shared::graphql::execute;

pub const PRODUCT_FILTERS: FilterConfig = FilterConfig::new(&[
    FilterField::new("search", FilterKind::Text),
    FilterField::new("type", FilterKind::MultipleText),
    FilterField::new("brands", FilterKind::MultipleInt),
    FilterField::new("inStock", FilterKind::Bool),
]);

const PRODUCTS_QUERY: &str = "query Products(
    $search: String, $type: [ProductType], $brands: [Int], $inStock: Boolean,
    $page: Int, $limit: Int
) {
    products(
        search: $search, type: $type, brands: $brands, inStock: $inStock,
        page: $page, limit: $limit
    ) {
        results { id sku name brand { id name } type price stock }
        count
        noPages
    }
}";

const BRANDS_QUERY: &str = "query Brands { brands { id name } }";

const DELETE_PRODUCT: &str = "mutation DeleteProduct($id: ID!) {
    deleteProduct(id: $id) { ok errors }
}";

#[derive(Deserialize)]
struct ProductsData {
    products: Paginated<Product>,
}

#[derive(Deserialize)]
struct BrandsData {
    #[serde(default)]
    brands: Vec<BrandRef>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct DeleteData {
    delete_product: MutationResult,
}

pub async fn fetch_products(variables: Value) -> Result<Paginated<Product>, ApiError> {
    execute::<ProductsData>(PRODUCTS_QUERY, variables)
        .await
        .map(|d| d.products)
}

/// Brand options for the filter panel; ids that are not numeric are skipped
pub async fn fetch_brand_options() -> Result<Vec<(i64, String)>, ApiError> {
    let data = execute::<BrandsData>(BRANDS_QUERY, json!({})).await?;
    Ok(brand_options(data.brands))
}

fn brand_options(brands: Vec<BrandRef>) -> Vec<(i64, String)> {
    brands
        .into_iter()
        .filter_map(|b| b.id.parse::<i64>().ok().map(|id| (id, b.name)))
        .collect()
}

pub async fn delete_product(id: String) -> Result<(), ApiError> {
    execute::<DeleteData>(DELETE_PRODUCT, json!({ "id": id }))
        .await?
        .delete_product
        .into_result()
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::shared::pagination::build_variables;
    use contracts::shared::url_filters::{parse, QueryParams};

    #[test]
    fn test_brand_options_skip_non_numeric_ids() {
        let brands = vec![
            BrandRef { id: "3".into(), name: "Bosch".into() },
            BrandRef { id: "QnJhbmQ6NA==".into(), name: "Makita".into() },
        ];
        assert_eq!(brand_options(brands), vec![(3, "Bosch".to_string())]);
    }

    #[test]
    fn test_false_stock_filter_is_sent() {
        let state = parse(&PRODUCT_FILTERS, &QueryParams::parse("?inStock=false&brands=3,4"));
        let vars = build_variables(&json!({}), &state, 1);
        assert_eq!(vars["inStock"], json!(false));
        assert_eq!(vars["brands"], json!([3, 4]));
    }
}
