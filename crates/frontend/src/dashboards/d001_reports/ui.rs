use contracts::dashboards::d001_reports::{contracts_drilldown, MonthlyTotal, ReportsSummary};
use contracts::shared::progress::TrackedStatus;
use contracts::shared::query_state::QueryState;
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::components::A;
use thaw::*;

use crate::dashboards::d001_reports::api;
use crate::shared::components::badge::Badge;
use crate::shared::components::query_feedback::{FetchError, Loading};
use crate::shared::date_utils::format_month;
use crate::shared::export::{export_to_csv, CsvExportable};
use crate::shared::page_frame::{PageFrame, PAGE_CAT_DASHBOARD};
use crate::shared::toast::use_toast;

/// One row of the monthly sales export
struct MonthRow(MonthlyTotal);

impl CsvExportable for MonthRow {
    fn headers() -> Vec<&'static str> {
        vec!["Mes", "Total"]
    }

    fn to_csv_row(&self) -> Vec<String> {
        vec![format_month(&self.0.month), self.0.total.to_csv()]
    }
}

#[component]
pub fn ReportsDashboard() -> impl IntoView {
    let toast = use_toast();
    let state = RwSignal::new(QueryState::<ReportsSummary>::Loading);
    let reload = RwSignal::new(0u32);

    Effect::new(move |_| {
        reload.track();
        spawn_local(async move {
            let result = api::fetch_reports_summary().await;
            if let Err(e) = &result {
                log::warn!("Reports summary failed: {}", e);
            }
            state.try_set(QueryState::from_result(result));
        });
    });

    let export_months = move |_| {
        let rows = state.with_untracked(|s| {
            s.data()
                .map(|r| r.sales_by_month.iter().cloned().map(MonthRow).collect::<Vec<_>>())
                .unwrap_or_default()
        });
        if let Err(e) = export_to_csv(&rows, "ventas-por-mes.csv") {
            log::warn!("Monthly export failed: {}", e);
            toast.error(e);
        }
    };

    view! {
        <PageFrame page_id="d001_reports--dashboard" category=PAGE_CAT_DASHBOARD>
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">"Reportes"</h1>
                </div>
                <div class="page__header-right">
                    <Button
                        appearance=ButtonAppearance::Secondary
                        on_click=move |_| reload.update(|n| *n = n.wrapping_add(1))
                    >
                        "Actualizar"
                    </Button>
                    <Button appearance=ButtonAppearance::Secondary on_click=export_months>
                        "Exportar ventas"
                    </Button>
                </div>
            </div>

            <div class="page__content">
                {move || match state.get() {
                    QueryState::Loading => view! { <Loading /> }.into_any(),
                    QueryState::Error(_) => view! { <FetchError /> }.into_any(),
                    QueryState::Success(summary) => summary_view(summary).into_any(),
                }}
            </div>
        </PageFrame>
    }
}

fn summary_view(summary: ReportsSummary) -> impl IntoView {
    let total_contracts = summary.total_contracts();
    let total_sales = summary.total_sales().format();

    let statuses = summary
        .contracts_by_status
        .iter()
        .map(|c| {
            let href = format!("/contracts{}", contracts_drilldown(c.status));
            let status = c.status;
            let count = c.count;
            view! {
                <li class="report-status">
                    <A href=href>
                        <Badge variant=status.badge_variant()>{status.label()}</Badge>
                        <span class="report-status__count">{count}</span>
                    </A>
                </li>
            }
        })
        .collect_view();

    let months = summary
        .sales_by_month
        .iter()
        .map(|m| {
            let width = format!("width: {:.1}%;", summary.month_share(m));
            view! {
                <div class="report-bar">
                    <span class="report-bar__label">{format_month(&m.month)}</span>
                    <div class="report-bar__track">
                        <div class="report-bar__fill" style=width></div>
                    </div>
                    <span class="report-bar__value">{m.total.format()}</span>
                </div>
            }
        })
        .collect_view();

    let no_sales = summary.sales_by_month.is_empty();

    view! {
        <div class="page__section">
            <h2 class="page__subtitle">"Contratos por estado"</h2>
            <p class="report-total">{format!("Total: {}", total_contracts)}</p>
            <ul class="report-statuses">{statuses}</ul>
        </div>
        <div class="page__section">
            <h2 class="page__subtitle">"Ventas por mes"</h2>
            <p class="report-total">{format!("Total: {}", total_sales)}</p>
            <Show when=move || no_sales>
                <p class="report-empty">"Sin ventas registradas"</p>
            </Show>
            <div class="report-bars">{months}</div>
        </div>
    }
}
