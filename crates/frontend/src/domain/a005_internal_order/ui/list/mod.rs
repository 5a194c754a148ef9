use contracts::domain::a005_internal_order::{InternalOrderListItem, InternalOrderStatus};
use contracts::domain::common::EntityRecord;
use contracts::shared::progress::TrackedStatus;
use leptos::prelude::*;
use leptos_router::components::A;
use serde_json::json;
use thaw::*;

use crate::domain::a005_internal_order::api::{fetch_internal_orders, INTERNAL_ORDER_FILTERS};
use crate::shared::components::badge::Badge;
use crate::shared::components::export_button::ExportButton;
use crate::shared::components::pagination_controls::PaginationControls;
use crate::shared::components::query_feedback::{EmptyRow, FetchError, Loading};
use crate::shared::components::search_input::SearchInput;
use crate::shared::components::status_filter::StatusFilter;
use crate::shared::date_utils::format_datetime;
use crate::shared::page_frame::{PageFrame, PAGE_CAT_LIST};
use crate::shared::paginated_query::use_paginated_query;

#[component]
pub fn InternalOrderList() -> impl IntoView {
    let query = use_paginated_query(&INTERNAL_ORDER_FILTERS, json!({}), fetch_internal_orders);
    let filters = query.filters;
    let status_options = InternalOrderStatus::ALL
        .iter()
        .map(|s| (s.as_str(), s.label()))
        .collect::<Vec<_>>();

    view! {
        <PageFrame page_id="a005_internal_order--list" category=PAGE_CAT_LIST>
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">{InternalOrderListItem::list_name()}</h1>
                    <Badge variant="primary">
                        {move || query.pagination.get().count.unwrap_or(0).to_string()}
                    </Badge>
                </div>
                <div class="page__header-right">
                    <ExportButton entity=InternalOrderListItem::collection_name() filters=filters />
                </div>
            </div>

            <div class="page__content">
                <div class="filter-panel">
                    <Flex gap=FlexGap::Small align=FlexAlign::End>
                        <SearchInput filters=filters placeholder="Sucursal..." />
                        <Button appearance=ButtonAppearance::Subtle on_click=move |_| filters.clear()>
                            "Limpiar filtros"
                        </Button>
                    </Flex>
                    <StatusFilter filters=filters key="status" options=status_options />
                </div>

                <Show when=move || query.error().is_some()>
                    <FetchError />
                </Show>

                <div class="table-wrapper">
                    <Table attr:style="width: 100%;">
                        <TableHeader>
                            <TableRow>
                                <TableHeaderCell>"Pedido"</TableHeaderCell>
                                <TableHeaderCell>"Origen"</TableHeaderCell>
                                <TableHeaderCell>"Destino"</TableHeaderCell>
                                <TableHeaderCell>"Ítems"</TableHeaderCell>
                                <TableHeaderCell>"Creado"</TableHeaderCell>
                                <TableHeaderCell>"Estado"</TableHeaderCell>
                            </TableRow>
                        </TableHeader>
                        <TableBody>
                            <For
                                each=move || query.rows()
                                key=|o| o.id.clone()
                                children=move |order: InternalOrderListItem| {
                                    let href = order.detail_route();
                                    let number = format!("#{}", order.id);
                                    let created = format_datetime(order.created_on);
                                    let items_count = order.items_count;
                                    let status = order.status;
                                    let source = order.office_source.name;
                                    let destination = order.office_destination.name;
                                    view! {
                                        <TableRow>
                                            <TableCell>
                                                <TableCellLayout>
                                                    <A href=href>{number}</A>
                                                </TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout truncate=true>{source}</TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout truncate=true>{destination}</TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>{items_count}</TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>{created}</TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <Badge variant=status.badge_variant()>{status.label()}</Badge>
                                            </TableCell>
                                        </TableRow>
                                    }
                                }
                            />
                            <Show when=move || !query.is_loading() && query.error().is_none() && query.rows().is_empty()>
                                <EmptyRow colspan=6 />
                            </Show>
                        </TableBody>
                    </Table>
                    <Show when=move || query.is_loading()>
                        <Loading />
                    </Show>
                </div>

                <PaginationControls
                    pagination=query.pagination
                    on_page_change=Callback::new(move |page| query.set_page(page))
                />
            </div>
        </PageFrame>
    }
}
