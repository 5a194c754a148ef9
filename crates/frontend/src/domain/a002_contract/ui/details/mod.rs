use contracts::domain::a002_contract::{ContractDetails as Contract, ContractListItem, ContractStatus};
use contracts::domain::common::EntityRecord;
use contracts::shared::api_error::ApiError;
use contracts::shared::progress::{project_stages, TrackedStatus};
use contracts::shared::query_state::QueryState;
use leptos::prelude::*;
use leptos_router::components::A;
use thaw::*;

use crate::domain::a002_contract::api::{change_status, fetch_contract};
use crate::shared::components::badge::Badge;
use crate::shared::components::query_feedback::{FetchError, Loading};
use crate::shared::components::status_actions::StatusWorkflow;
use crate::shared::date_utils::{format_date, format_datetime};
use crate::shared::page_frame::{PageFrame, PAGE_CAT_DETAIL};
use crate::shared::record_query::use_record_query;

#[component]
pub fn ContractDetails() -> impl IntoView {
    let record = use_record_query(fetch_contract);

    let stages = Signal::derive(move || {
        record
            .state
            .with(|s| s.data().map(|c| project_stages(c.status, &c.history)))
            .unwrap_or_default()
    });

    let transitions = Signal::derive(move || {
        record
            .state
            .with(|s| s.data().map(|c| c.status.allowed_transitions()))
            .unwrap_or(&[])
            .iter()
            .map(|s| (s.as_str(), s.label()))
            .collect::<Vec<_>>()
    });

    let on_change = move |wire: &'static str, note: Option<String>| {
        let id = record.id.get_untracked();
        async move {
            let status = ContractStatus::from_wire(wire).ok_or(ApiError::MissingData)?;
            change_status(id, status, note).await
        }
    };

    view! {
        <PageFrame page_id="a002_contract--detail" category=PAGE_CAT_DETAIL>
            {move || match record.state.get() {
                QueryState::Loading => view! { <Loading /> }.into_any(),
                QueryState::Error(_) => view! { <FetchError /> }.into_any(),
                QueryState::Success(contract) => contract_view(contract).into_any(),
            }}

            <Show when=move || record.data().is_some()>
                <StatusWorkflow
                    stages=stages
                    transitions=transitions
                    on_change=on_change
                    on_changed=Callback::new(move |_| record.refetch())
                />
            </Show>
        </PageFrame>
    }
}

fn contract_view(contract: Contract) -> impl IntoView {
    let title = format!("Contrato #{}", contract.number);
    let duration = contract.duration_days();
    let balance = contract.balance();

    view! {
        <div class="page__header">
            <div class="page__header-left">
                <A href=ContractListItem::list_route()>"← Contratos"</A>
                <h1 class="page__title">{title}</h1>
                <Badge variant=contract.status.badge_variant()>{contract.status.label()}</Badge>
            </div>
        </div>

        <div class="page__content">
            <dl class="details-grid">
                <dt>"Cliente"</dt>
                <dd>
                    <A href=format!("/clients/{}", contract.client.id)>{contract.client.full_name()}</A>
                </dd>
                <dt>"Sucursal"</dt>
                <dd>{contract.office.name.clone()}</dd>
                <dt>"Período"</dt>
                <dd>
                    {format!(
                        "{} al {} ({} días)",
                        format_date(contract.contract_start),
                        format_date(contract.contract_end),
                        duration,
                    )}
                </dd>
                <dt>"Total"</dt>
                <dd>{contract.total.format()}</dd>
                <dt>"Seña"</dt>
                <dd>{contract.deposit.map(|d| d.format()).unwrap_or_else(|| "—".into())}</dd>
                <dt>"Saldo"</dt>
                <dd>{balance.format()}</dd>
                <dt>"Creado"</dt>
                <dd>{format_datetime(contract.created_on)}</dd>
            </dl>

            <h2 class="page__subtitle">"Productos"</h2>
            <div class="table-wrapper">
                <Table attr:style="width: 100%;">
                    <TableHeader>
                        <TableRow>
                            <TableHeaderCell>"SKU"</TableHeaderCell>
                            <TableHeaderCell>"Producto"</TableHeaderCell>
                            <TableHeaderCell>"Cantidad"</TableHeaderCell>
                            <TableHeaderCell>"Precio"</TableHeaderCell>
                            <TableHeaderCell>"Subtotal"</TableHeaderCell>
                        </TableRow>
                    </TableHeader>
                    <TableBody>
                        {contract
                            .items
                            .into_iter()
                            .map(|item| {
                                let subtotal = item.subtotal();
                                view! {
                                    <TableRow>
                                        <TableCell>
                                            <TableCellLayout>{item.product.sku}</TableCellLayout>
                                        </TableCell>
                                        <TableCell>
                                            <TableCellLayout truncate=true>{item.product.name}</TableCellLayout>
                                        </TableCell>
                                        <TableCell>
                                            <TableCellLayout>{item.quantity}</TableCellLayout>
                                        </TableCell>
                                        <TableCell>
                                            <TableCellLayout>{item.price.format()}</TableCellLayout>
                                        </TableCell>
                                        <TableCell>
                                            <TableCellLayout>{subtotal.format()}</TableCellLayout>
                                        </TableCell>
                                    </TableRow>
                                }
                            })
                            .collect_view()}
                    </TableBody>
                </Table>
            </div>
        </div>
    }
}
