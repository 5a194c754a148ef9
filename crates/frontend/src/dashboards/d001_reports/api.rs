use contracts::dashboards::d001_reports::ReportsSummary;
use contracts::shared::api_error::ApiError;
use serde::Deserialize;
use serde_json::json;

use crate::shared::graphql::execute;

const REPORTS_QUERY: &str = "query ReportsSummary {
    reportsSummary {
        contractsByStatus { status count }
        salesByMonth { month total }
    }
}";

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct ReportsData {
    reports_summary: ReportsSummary,
}

pub async fn fetch_reports_summary() -> Result<ReportsSummary, ApiError> {
    execute::<ReportsData>(REPORTS_QUERY, json!({}))
        .await
        .map(|d| d.reports_summary)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_summary_decodes() {
        let data: ReportsData = serde_json::from_value(json!({
            "reportsSummary": {
                "contractsByStatus": [{ "status": "ACTIVE", "count": 3 }],
                "salesByMonth": [{ "month": "2024-05", "total": 1200 }]
            }
        }))
        .unwrap();
        assert_eq!(data.reports_summary.total_contracts(), 3);
        assert_eq!(data.reports_summary.sales_by_month[0].month, "2024-05");
    }
}
