use crate::domain::common::{Amount, ClientRef, EntityRecord, OfficeRef, ProductRef};
use crate::shared::progress::{HistoryEntry, StageStatus, TrackedStatus};
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// Contract status as exposed by the API
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ContractStatus {
    Pending,
    WithDeposit,
    Paid,
    Active,
    Finished,
    Canceled,
}

impl ContractStatus {
    pub const ALL: [ContractStatus; 6] = [
        ContractStatus::Pending,
        ContractStatus::WithDeposit,
        ContractStatus::Paid,
        ContractStatus::Active,
        ContractStatus::Finished,
        ContractStatus::Canceled,
    ];

    /// Wire value, also used in URL filters
    pub fn as_str(&self) -> &'static str {
        match self {
            ContractStatus::Pending => "PENDING",
            ContractStatus::WithDeposit => "WITH_DEPOSIT",
            ContractStatus::Paid => "PAID",
            ContractStatus::Active => "ACTIVE",
            ContractStatus::Finished => "FINISHED",
            ContractStatus::Canceled => "CANCELED",
        }
    }

    pub fn from_wire(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.as_str() == value)
    }

    /// Statuses reachable from this one
    pub fn allowed_transitions(&self) -> &'static [ContractStatus] {
        match self {
            ContractStatus::Pending => &[
                ContractStatus::WithDeposit,
                ContractStatus::Paid,
                ContractStatus::Canceled,
            ],
            ContractStatus::WithDeposit => &[ContractStatus::Paid, ContractStatus::Canceled],
            ContractStatus::Paid => &[ContractStatus::Active, ContractStatus::Canceled],
            ContractStatus::Active => &[ContractStatus::Finished],
            ContractStatus::Finished | ContractStatus::Canceled => &[],
        }
    }

    /// Badge variant for tables
    pub fn badge_variant(&self) -> &'static str {
        match self {
            ContractStatus::Pending => "warning",
            ContractStatus::WithDeposit | ContractStatus::Paid => "primary",
            ContractStatus::Active => "success",
            ContractStatus::Finished => "neutral",
            ContractStatus::Canceled => "error",
        }
    }
}

impl TrackedStatus for ContractStatus {
    fn label(&self) -> &'static str {
        match self {
            ContractStatus::Pending => "Pendiente",
            ContractStatus::WithDeposit => "Con seña",
            ContractStatus::Paid => "Pagado",
            ContractStatus::Active => "Activo",
            ContractStatus::Finished => "Finalizado",
            ContractStatus::Canceled => "Cancelado",
        }
    }

    fn current_stage(&self) -> StageStatus {
        match self {
            ContractStatus::Pending => StageStatus::Upcoming,
            ContractStatus::WithDeposit | ContractStatus::Paid | ContractStatus::Active => {
                StageStatus::InProgress
            }
            ContractStatus::Finished | ContractStatus::Canceled => StageStatus::Completed,
        }
    }

    fn next_stage_message(&self) -> Option<&'static str> {
        match self {
            ContractStatus::Pending => Some("Esperando seña"),
            ContractStatus::WithDeposit => Some("Esperando pago"),
            ContractStatus::Paid => Some("Esperando retiro"),
            ContractStatus::Active => Some("Esperando devolución"),
            ContractStatus::Finished | ContractStatus::Canceled => None,
        }
    }
}

/// Contract row in the list (a002)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContractListItem {
    pub id: String,
    pub number: i64,
    pub client: ClientRef,
    pub office: OfficeRef,
    pub contract_start: NaiveDate,
    pub contract_end: NaiveDate,
    pub total: Amount,
    pub status: ContractStatus,
}

impl EntityRecord for ContractListItem {
    fn id(&self) -> &str {
        &self.id
    }
    fn code(&self) -> String {
        format!("Contrato #{}", self.number)
    }
    fn entity_index() -> &'static str {
        "a002"
    }
    fn collection_name() -> &'static str {
        "contracts"
    }
    fn element_name() -> &'static str {
        "Contrato"
    }
    fn list_name() -> &'static str {
        "Contratos"
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContractItem {
    pub id: String,
    pub product: ProductRef,
    pub quantity: u32,
    pub price: Amount,
}

impl ContractItem {
    pub fn subtotal(&self) -> Amount {
        Amount(self.price.0 * self.quantity as f64)
    }
}

/// Contract detail with items and status history
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContractDetails {
    pub id: String,
    pub number: i64,
    pub client: ClientRef,
    pub office: OfficeRef,
    pub contract_start: NaiveDate,
    pub contract_end: NaiveDate,
    pub total: Amount,
    #[serde(default)]
    pub deposit: Option<Amount>,
    pub status: ContractStatus,
    #[serde(default)]
    pub items: Vec<ContractItem>,
    #[serde(default)]
    pub history: Vec<HistoryEntry<ContractStatus>>,
    pub created_on: DateTime<Utc>,
}

impl ContractDetails {
    /// Rental length in days, both ends included
    pub fn duration_days(&self) -> i64 {
        (self.contract_end - self.contract_start).num_days() + 1
    }

    pub fn balance(&self) -> Amount {
        Amount(self.total.0 - self.deposit.map(|d| d.0).unwrap_or(0.0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::progress::project_stages;
    use serde_json::json;

    #[test]
    fn test_wire_values_round_trip() {
        for status in ContractStatus::ALL {
            let wire = serde_json::to_value(status).unwrap();
            assert_eq!(wire, json!(status.as_str()));
            assert_eq!(ContractStatus::from_wire(status.as_str()), Some(status));
        }
        assert_eq!(ContractStatus::from_wire("NOPE"), None);
    }

    #[test]
    fn test_terminal_statuses_have_no_transitions() {
        for status in ContractStatus::ALL {
            assert_eq!(status.is_terminal(), status.allowed_transitions().is_empty());
        }
    }

    #[test]
    fn test_details_decoding_and_projection() {
        let details: ContractDetails = serde_json::from_value(json!({
            "id": "1",
            "number": 42,
            "client": { "id": "7", "firstName": "Ana", "lastName": "Pérez" },
            "office": { "id": "1", "name": "Central" },
            "contractStart": "2024-05-01",
            "contractEnd": "2024-05-03",
            "total": "3000.00",
            "deposit": "1000.00",
            "status": "WITH_DEPOSIT",
            "items": [
                { "id": "1", "product": { "id": "3", "sku": "AND-01", "name": "Andamio" }, "quantity": 3, "price": 1000 }
            ],
            "history": [
                { "id": "1", "status": "PENDING", "createdOn": "2024-04-20T12:00:00Z" },
                { "id": "2", "status": "WITH_DEPOSIT", "note": "Seña en efectivo", "createdOn": "2024-04-21T12:00:00Z" }
            ],
            "createdOn": "2024-04-20T12:00:00Z"
        }))
        .unwrap();

        assert_eq!(details.duration_days(), 3);
        assert_eq!(details.balance(), Amount(2000.0));
        assert_eq!(details.items[0].subtotal(), Amount(3000.0));

        let stages = project_stages(details.status, &details.history);
        assert_eq!(
            stages.iter().map(|s| s.status).collect::<Vec<_>>(),
            vec![StageStatus::Completed, StageStatus::InProgress, StageStatus::Upcoming]
        );
        assert!(stages[2].subtitle.contains("Esperando pago"));
        assert_eq!(stages[1].title, "Con seña");
    }
}
