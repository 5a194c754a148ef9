use crate::domain::a002_contract::ContractStatus;
use crate::domain::common::Amount;
use crate::shared::url_filters::{apply_filter, FilterValue, QueryParams};
use serde::{Deserialize, Serialize};

/// Contracts grouped by status
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatusCount {
    pub status: ContractStatus,
    pub count: u32,
}

/// Sales total for one month
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonthlyTotal {
    /// Period in format "YYYY-MM"
    pub month: String,
    pub total: Amount,
}

/// Reports dashboard payload
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportsSummary {
    #[serde(default)]
    pub contracts_by_status: Vec<StatusCount>,
    #[serde(default)]
    pub sales_by_month: Vec<MonthlyTotal>,
}

impl ReportsSummary {
    pub fn total_contracts(&self) -> u32 {
        self.contracts_by_status.iter().map(|c| c.count).sum()
    }

    pub fn total_sales(&self) -> Amount {
        Amount(self.sales_by_month.iter().map(|m| m.total.0).sum())
    }

    /// Bar width in percent relative to the best month
    pub fn month_share(&self, month: &MonthlyTotal) -> f64 {
        let max = self
            .sales_by_month
            .iter()
            .map(|m| m.total.0)
            .fold(0.0_f64, f64::max);
        if max <= 0.0 {
            0.0
        } else {
            (month.total.0 / max * 100.0).clamp(0.0, 100.0)
        }
    }
}

/// Query string of the contracts list filtered by one status (drill-down)
pub fn contracts_drilldown(status: ContractStatus) -> String {
    let params = apply_filter(
        &QueryParams::default(),
        "status",
        Some(&FilterValue::MultipleText(vec![status.as_str().to_string()])),
    );
    params.to_search()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn summary() -> ReportsSummary {
        ReportsSummary {
            contracts_by_status: vec![
                StatusCount { status: ContractStatus::Active, count: 4 },
                StatusCount { status: ContractStatus::Pending, count: 1 },
            ],
            sales_by_month: vec![
                MonthlyTotal { month: "2024-01".into(), total: Amount(500.0) },
                MonthlyTotal { month: "2024-02".into(), total: Amount(1000.0) },
            ],
        }
    }

    #[test]
    fn test_totals_and_share() {
        let s = summary();
        assert_eq!(s.total_contracts(), 5);
        assert_eq!(s.total_sales(), Amount(1500.0));
        assert_eq!(s.month_share(&s.sales_by_month[0]), 50.0);
        assert_eq!(s.month_share(&s.sales_by_month[1]), 100.0);
    }

    #[test]
    fn test_drilldown_query() {
        assert_eq!(contracts_drilldown(ContractStatus::WithDeposit), "?status=WITH_DEPOSIT");
    }
}
