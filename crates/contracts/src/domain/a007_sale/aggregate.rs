use crate::domain::common::{Amount, ClientRef, EntityRecord, OfficeRef};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Sale (a007)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Sale {
    pub id: String,
    #[serde(default)]
    pub client: Option<ClientRef>,
    pub office: OfficeRef,
    pub total: Amount,
    #[serde(default)]
    pub items_count: u32,
    pub paid: bool,
    pub created_on: DateTime<Utc>,
}

impl Sale {
    /// Walk-in sales carry no client
    pub fn client_name(&self) -> String {
        self.client
            .as_ref()
            .map(ClientRef::full_name)
            .unwrap_or_else(|| "Consumidor final".to_string())
    }
}

impl EntityRecord for Sale {
    fn id(&self) -> &str {
        &self.id
    }
    fn code(&self) -> String {
        format!("Venta #{}", self.id)
    }
    fn entity_index() -> &'static str {
        "a007"
    }
    fn collection_name() -> &'static str {
        "sales"
    }
    fn element_name() -> &'static str {
        "Venta"
    }
    fn list_name() -> &'static str {
        "Ventas"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_walk_in_client_name() {
        let sale: Sale = serde_json::from_value(serde_json::json!({
            "id": "9",
            "office": { "id": "1", "name": "Central" },
            "total": 1500,
            "paid": true,
            "createdOn": "2024-06-01T10:00:00Z"
        }))
        .unwrap();
        assert_eq!(sale.client_name(), "Consumidor final");
        assert_eq!(sale.items_count, 0);
    }
}
