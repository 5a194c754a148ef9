use contracts::domain::a007_sale::Sale;
use contracts::domain::common::EntityRecord;
use leptos::prelude::*;
use serde_json::json;
use thaw::*;

use crate::domain::a007_sale::api::{fetch_sales, SALE_FILTERS};
use crate::shared::components::badge::Badge;
use crate::shared::components::bool_filter::BoolFilter;
use crate::shared::components::export_button::ExportButton;
use crate::shared::components::pagination_controls::PaginationControls;
use crate::shared::components::query_feedback::{EmptyRow, FetchError, Loading};
use crate::shared::components::search_input::SearchInput;
use crate::shared::date_utils::format_datetime;
use crate::shared::page_frame::{PageFrame, PAGE_CAT_LIST};
use crate::shared::paginated_query::use_paginated_query;

#[component]
pub fn SaleList() -> impl IntoView {
    let query = use_paginated_query(&SALE_FILTERS, json!({}), fetch_sales);
    let filters = query.filters;

    view! {
        <PageFrame page_id="a007_sale--list" category=PAGE_CAT_LIST>
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">{Sale::list_name()}</h1>
                    <Badge variant="primary">
                        {move || query.pagination.get().count.unwrap_or(0).to_string()}
                    </Badge>
                </div>
                <div class="page__header-right">
                    <ExportButton entity=Sale::collection_name() filters=filters />
                </div>
            </div>

            <div class="page__content">
                <div class="filter-panel">
                    <Flex gap=FlexGap::Small align=FlexAlign::End>
                        <SearchInput filters=filters placeholder="Cliente o sucursal..." />
                        <BoolFilter filters=filters key="paid" label="Cobro" yes="Cobradas" no="Pendientes" />
                        <Button appearance=ButtonAppearance::Subtle on_click=move |_| filters.clear()>
                            "Limpiar filtros"
                        </Button>
                    </Flex>
                </div>

                <Show when=move || query.error().is_some()>
                    <FetchError />
                </Show>

                <div class="table-wrapper">
                    <Table attr:style="width: 100%;">
                        <TableHeader>
                            <TableRow>
                                <TableHeaderCell>"Venta"</TableHeaderCell>
                                <TableHeaderCell>"Cliente"</TableHeaderCell>
                                <TableHeaderCell>"Sucursal"</TableHeaderCell>
                                <TableHeaderCell>"Ítems"</TableHeaderCell>
                                <TableHeaderCell>"Total"</TableHeaderCell>
                                <TableHeaderCell>"Fecha"</TableHeaderCell>
                                <TableHeaderCell>"Cobro"</TableHeaderCell>
                            </TableRow>
                        </TableHeader>
                        <TableBody>
                            <For
                                each=move || query.rows()
                                key=|s| s.id.clone()
                                children=move |sale: Sale| {
                                    let (paid_variant, paid_label) = if sale.paid {
                                        ("success", "Cobrada")
                                    } else {
                                        ("warning", "Pendiente")
                                    };
                                    let code = sale.code();
                                    let client = sale.client_name();
                                    let total = sale.total.format();
                                    let created = format_datetime(sale.created_on);
                                    let items_count = sale.items_count;
                                    let office = sale.office.name;
                                    view! {
                                        <TableRow>
                                            <TableCell>
                                                <TableCellLayout>{code}</TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout truncate=true>{client}</TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout truncate=true>{office}</TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>{items_count}</TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>
                                                    <span class="table__money">{total}</span>
                                                </TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>{created}</TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <Badge variant=paid_variant>{paid_label}</Badge>
                                            </TableCell>
                                        </TableRow>
                                    }
                                }
                            />
                            <Show when=move || !query.is_loading() && query.error().is_none() && query.rows().is_empty()>
                                <EmptyRow colspan=7 />
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
