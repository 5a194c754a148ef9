use crate::domain::common::{Amount, BrandRef, EntityRecord};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ProductType {
    Rental,
    Sale,
    Service,
}

impl ProductType {
    pub const ALL: [ProductType; 3] = [ProductType::Rental, ProductType::Sale, ProductType::Service];

    pub fn as_str(&self) -> &'static str {
        match self {
            ProductType::Rental => "RENTAL",
            ProductType::Sale => "SALE",
            ProductType::Service => "SERVICE",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ProductType::Rental => "Alquiler",
            ProductType::Sale => "Venta",
            ProductType::Service => "Servicio",
        }
    }
}

/// Product (a003)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: String,
    pub sku: String,
    pub name: String,
    #[serde(default)]
    pub brand: Option<BrandRef>,
    #[serde(rename = "type")]
    pub product_type: ProductType,
    pub price: Amount,
    /// Units across all offices; services carry no stock
    #[serde(default)]
    pub stock: Option<i64>,
}

impl Product {
    pub fn stock_label(&self) -> String {
        match (self.product_type, self.stock) {
            (ProductType::Service, _) => "—".to_string(),
            (_, Some(units)) => units.to_string(),
            (_, None) => "0".to_string(),
        }
    }
}

impl EntityRecord for Product {
    fn id(&self) -> &str {
        &self.id
    }
    fn code(&self) -> String {
        format!("{} - {}", self.sku, self.name)
    }
    fn entity_index() -> &'static str {
        "a003"
    }
    fn collection_name() -> &'static str {
        "products"
    }
    fn element_name() -> &'static str {
        "Producto"
    }
    fn list_name() -> &'static str {
        "Productos"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_decode_with_type_field() {
        let product: Product = serde_json::from_value(json!({
            "id": "5",
            "sku": "MEZ-300",
            "name": "Mezcladora 300L",
            "brand": { "id": "2", "name": "Bosch" },
            "type": "RENTAL",
            "price": "15000.00",
            "stock": 4
        }))
        .unwrap();
        assert_eq!(product.product_type, ProductType::Rental);
        assert_eq!(product.stock_label(), "4");
        assert_eq!(product.code(), "MEZ-300 - Mezcladora 300L");
    }

    #[test]
    fn test_service_has_no_stock() {
        let product = Product {
            id: "1".into(),
            sku: "FLETE".into(),
            name: "Flete".into(),
            brand: None,
            product_type: ProductType::Service,
            price: Amount(100.0),
            stock: Some(3),
        };
        assert_eq!(product.stock_label(), "—");
    }
}
