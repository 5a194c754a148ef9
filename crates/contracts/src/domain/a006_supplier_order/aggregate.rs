use crate::domain::common::{Amount, EntityRecord, OfficeRef, ProductRef, SupplierRef};
use crate::shared::progress::{HistoryEntry, StageStatus, TrackedStatus};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Status of a purchase order sent to a supplier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SupplierOrderStatus {
    Pending,
    Received,
    Canceled,
}

impl SupplierOrderStatus {
    pub const ALL: [SupplierOrderStatus; 3] = [
        SupplierOrderStatus::Pending,
        SupplierOrderStatus::Received,
        SupplierOrderStatus::Canceled,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SupplierOrderStatus::Pending => "PENDING",
            SupplierOrderStatus::Received => "RECEIVED",
            SupplierOrderStatus::Canceled => "CANCELED",
        }
    }

    pub fn from_wire(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.as_str() == value)
    }

    pub fn allowed_transitions(&self) -> &'static [SupplierOrderStatus] {
        match self {
            SupplierOrderStatus::Pending => {
                &[SupplierOrderStatus::Received, SupplierOrderStatus::Canceled]
            }
            SupplierOrderStatus::Received | SupplierOrderStatus::Canceled => &[],
        }
    }

    pub fn badge_variant(&self) -> &'static str {
        match self {
            SupplierOrderStatus::Pending => "warning",
            SupplierOrderStatus::Received => "success",
            SupplierOrderStatus::Canceled => "error",
        }
    }
}

impl TrackedStatus for SupplierOrderStatus {
    fn label(&self) -> &'static str {
        match self {
            SupplierOrderStatus::Pending => "Pendiente",
            SupplierOrderStatus::Received => "Recibido",
            SupplierOrderStatus::Canceled => "Cancelado",
        }
    }

    fn current_stage(&self) -> StageStatus {
        match self {
            SupplierOrderStatus::Pending => StageStatus::Upcoming,
            SupplierOrderStatus::Received | SupplierOrderStatus::Canceled => StageStatus::Completed,
        }
    }

    fn next_stage_message(&self) -> Option<&'static str> {
        match self {
            SupplierOrderStatus::Pending => Some("Esperando recepción"),
            SupplierOrderStatus::Received | SupplierOrderStatus::Canceled => None,
        }
    }
}

/// Supplier order row in the list (a006)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SupplierOrderListItem {
    pub id: String,
    pub supplier: SupplierRef,
    pub office_destination: OfficeRef,
    pub total: Amount,
    pub status: SupplierOrderStatus,
    pub created_on: DateTime<Utc>,
}

impl EntityRecord for SupplierOrderListItem {
    fn id(&self) -> &str {
        &self.id
    }
    fn code(&self) -> String {
        format!("Pedido a proveedor #{}", self.id)
    }
    fn entity_index() -> &'static str {
        "a006"
    }
    fn collection_name() -> &'static str {
        "supplier-orders"
    }
    fn element_name() -> &'static str {
        "Pedido a proveedor"
    }
    fn list_name() -> &'static str {
        "Pedidos a proveedores"
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SupplierOrderItem {
    pub id: String,
    pub product: ProductRef,
    pub quantity: u32,
    pub price: Amount,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SupplierOrderDetails {
    pub id: String,
    pub supplier: SupplierRef,
    pub office_destination: OfficeRef,
    pub total: Amount,
    pub status: SupplierOrderStatus,
    #[serde(default)]
    pub note: Option<String>,
    #[serde(default)]
    pub items: Vec<SupplierOrderItem>,
    #[serde(default)]
    pub history: Vec<HistoryEntry<SupplierOrderStatus>>,
    pub created_on: DateTime<Utc>,
}

impl SupplierOrderDetails {
    /// Sum of item lines; may differ from `total` when the API adds taxes
    pub fn items_total(&self) -> Amount {
        Amount(
            self.items
                .iter()
                .map(|i| i.price.0 * i.quantity as f64)
                .sum(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::progress::project_stages;
    use chrono::TimeZone;

    #[test]
    fn test_received_order_has_no_trailing_stage() {
        let history = vec![
            HistoryEntry {
                id: "1".into(),
                status: SupplierOrderStatus::Pending,
                user: None,
                note: None,
                created_on: Utc.with_ymd_and_hms(2024, 1, 1, 9, 0, 0).unwrap(),
            },
            HistoryEntry {
                id: "2".into(),
                status: SupplierOrderStatus::Received,
                user: None,
                note: Some("Faltó 1 unidad".into()),
                created_on: Utc.with_ymd_and_hms(2024, 1, 5, 9, 0, 0).unwrap(),
            },
        ];
        let stages = project_stages(SupplierOrderStatus::Received, &history);
        assert_eq!(stages.len(), 2);
        assert!(stages.iter().all(|s| s.status == StageStatus::Completed));
        assert_eq!(stages[1].note.as_deref(), Some("Faltó 1 unidad"));
    }

    #[test]
    fn test_pending_message() {
        assert_eq!(
            SupplierOrderStatus::Pending.next_stage_message(),
            Some("Esperando recepción")
        );
    }
}
