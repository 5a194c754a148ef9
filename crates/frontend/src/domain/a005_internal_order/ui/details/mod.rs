use contracts::domain::a005_internal_order::{
    InternalOrderDetails as InternalOrder, InternalOrderListItem, InternalOrderStatus,
};
use contracts::domain::common::EntityRecord;
use contracts::shared::api_error::ApiError;
use contracts::shared::progress::{project_stages, TrackedStatus};
use contracts::shared::query_state::QueryState;
use leptos::prelude::*;
use leptos_router::components::A;
use thaw::*;

use crate::domain::a005_internal_order::api::{change_status, fetch_internal_order};
use crate::shared::components::badge::Badge;
use crate::shared::components::query_feedback::{FetchError, Loading};
use crate::shared::components::status_actions::StatusWorkflow;
use crate::shared::date_utils::format_datetime;
use crate::shared::page_frame::{PageFrame, PAGE_CAT_DETAIL};
use crate::shared::record_query::use_record_query;

#[component]
pub fn InternalOrderDetails() -> impl IntoView {
    let record = use_record_query(fetch_internal_order);

    let stages = Signal::derive(move || {
        record
            .state
            .with(|s| s.data().map(|o| project_stages(o.status, &o.history)))
            .unwrap_or_default()
    });

    let transitions = Signal::derive(move || {
        record
            .state
            .with(|s| s.data().map(|o| o.status.allowed_transitions()))
            .unwrap_or(&[])
            .iter()
            .map(|s| (s.as_str(), s.label()))
            .collect::<Vec<_>>()
    });

    let on_change = move |wire: &'static str, note: Option<String>| {
        let id = record.id.get_untracked();
        async move {
            let status = InternalOrderStatus::from_wire(wire).ok_or(ApiError::MissingData)?;
            change_status(id, status, note).await
        }
    };

    view! {
        <PageFrame page_id="a005_internal_order--detail" category=PAGE_CAT_DETAIL>
            {move || match record.state.get() {
                QueryState::Loading => view! { <Loading /> }.into_any(),
                QueryState::Error(_) => view! { <FetchError /> }.into_any(),
                QueryState::Success(order) => order_view(order).into_any(),
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

fn order_view(order: InternalOrder) -> impl IntoView {
    let units = order.total_units();

    view! {
        <div class="page__header">
            <div class="page__header-left">
                <A href=InternalOrderListItem::list_route()>"← Pedidos internos"</A>
                <h1 class="page__title">{format!("Pedido interno #{}", order.id)}</h1>
                <Badge variant=order.status.badge_variant()>{order.status.label()}</Badge>
            </div>
        </div>

        <div class="page__content">
            <dl class="details-grid">
                <dt>"Origen"</dt>
                <dd>{order.office_source.name.clone()}</dd>
                <dt>"Destino"</dt>
                <dd>{order.office_destination.name.clone()}</dd>
                <dt>"Unidades"</dt>
                <dd>{units}</dd>
                <dt>"Creado"</dt>
                <dd>{format_datetime(order.created_on)}</dd>
                <dt>"Nota"</dt>
                <dd>{order.note.clone().unwrap_or_else(|| "—".into())}</dd>
            </dl>

            <h2 class="page__subtitle">"Productos"</h2>
            <div class="table-wrapper">
                <Table attr:style="width: 100%;">
                    <TableHeader>
                        <TableRow>
                            <TableHeaderCell>"SKU"</TableHeaderCell>
                            <TableHeaderCell>"Producto"</TableHeaderCell>
                            <TableHeaderCell>"Cantidad"</TableHeaderCell>
                        </TableRow>
                    </TableHeader>
                    <TableBody>
                        {order
                            .items
                            .into_iter()
                            .map(|item| {
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
