use crate::domain::common::{EntityRecord, OfficeRef, ProductRef};
use crate::shared::progress::{HistoryEntry, StageStatus, TrackedStatus};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Status of an internal stock transfer between offices
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum InternalOrderStatus {
    Pending,
    InProgress,
    Completed,
    Canceled,
}

impl InternalOrderStatus {
    pub const ALL: [InternalOrderStatus; 4] = [
        InternalOrderStatus::Pending,
        InternalOrderStatus::InProgress,
        InternalOrderStatus::Completed,
        InternalOrderStatus::Canceled,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            InternalOrderStatus::Pending => "PENDING",
            InternalOrderStatus::InProgress => "IN_PROGRESS",
            InternalOrderStatus::Completed => "COMPLETED",
            InternalOrderStatus::Canceled => "CANCELED",
        }
    }

    pub fn from_wire(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.as_str() == value)
    }

    pub fn allowed_transitions(&self) -> &'static [InternalOrderStatus] {
        match self {
            InternalOrderStatus::Pending => {
                &[InternalOrderStatus::InProgress, InternalOrderStatus::Canceled]
            }
            InternalOrderStatus::InProgress => {
                &[InternalOrderStatus::Completed, InternalOrderStatus::Canceled]
            }
            InternalOrderStatus::Completed | InternalOrderStatus::Canceled => &[],
        }
    }

    pub fn badge_variant(&self) -> &'static str {
        match self {
            InternalOrderStatus::Pending => "warning",
            InternalOrderStatus::InProgress => "primary",
            InternalOrderStatus::Completed => "success",
            InternalOrderStatus::Canceled => "error",
        }
    }
}

impl TrackedStatus for InternalOrderStatus {
    fn label(&self) -> &'static str {
        match self {
            InternalOrderStatus::Pending => "Pendiente",
            InternalOrderStatus::InProgress => "En progreso",
            InternalOrderStatus::Completed => "Completado",
            InternalOrderStatus::Canceled => "Cancelado",
        }
    }

    fn current_stage(&self) -> StageStatus {
        match self {
            InternalOrderStatus::Pending => StageStatus::Upcoming,
            InternalOrderStatus::InProgress => StageStatus::InProgress,
            InternalOrderStatus::Completed | InternalOrderStatus::Canceled => StageStatus::Completed,
        }
    }

    fn next_stage_message(&self) -> Option<&'static str> {
        match self {
            InternalOrderStatus::Pending => Some("Esperando iniciar"),
            InternalOrderStatus::InProgress => Some("Esperando completar"),
            InternalOrderStatus::Completed | InternalOrderStatus::Canceled => None,
        }
    }
}

/// Internal order row in the list (a005)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InternalOrderListItem {
    pub id: String,
    pub office_source: OfficeRef,
    pub office_destination: OfficeRef,
    pub status: InternalOrderStatus,
    #[serde(default)]
    pub items_count: u32,
    pub created_on: DateTime<Utc>,
}

impl EntityRecord for InternalOrderListItem {
    fn id(&self) -> &str {
        &self.id
    }
    fn code(&self) -> String {
        format!("Pedido interno #{}", self.id)
    }
    fn entity_index() -> &'static str {
        "a005"
    }
    fn collection_name() -> &'static str {
        "internal-orders"
    }
    fn element_name() -> &'static str {
        "Pedido interno"
    }
    fn list_name() -> &'static str {
        "Pedidos internos"
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InternalOrderItem {
    pub id: String,
    pub product: ProductRef,
    pub quantity: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InternalOrderDetails {
    pub id: String,
    pub office_source: OfficeRef,
    pub office_destination: OfficeRef,
    pub status: InternalOrderStatus,
    #[serde(default)]
    pub note: Option<String>,
    #[serde(default)]
    pub items: Vec<InternalOrderItem>,
    #[serde(default)]
    pub history: Vec<HistoryEntry<InternalOrderStatus>>,
    pub created_on: DateTime<Utc>,
}

impl InternalOrderDetails {
    pub fn total_units(&self) -> u32 {
        self.items.iter().map(|i| i.quantity).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stage_table() {
        use InternalOrderStatus::*;
        assert_eq!(Pending.current_stage(), StageStatus::Upcoming);
        assert_eq!(InProgress.current_stage(), StageStatus::InProgress);
        assert_eq!(Completed.current_stage(), StageStatus::Completed);
        assert_eq!(Canceled.current_stage(), StageStatus::Completed);
        assert!(Completed.is_terminal() && Canceled.is_terminal());
        assert!(!Pending.is_terminal() && !InProgress.is_terminal());
    }

    #[test]
    fn test_wire_values() {
        for status in InternalOrderStatus::ALL {
            assert_eq!(
                serde_json::to_value(status).unwrap(),
                serde_json::Value::String(status.as_str().into())
            );
        }
    }
}
