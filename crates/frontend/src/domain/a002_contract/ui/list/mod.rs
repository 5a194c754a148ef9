use contracts::domain::a002_contract::{ContractListItem, ContractStatus};
use contracts::domain::common::EntityRecord;
use contracts::shared::progress::TrackedStatus;
use contracts::shared::url_filters::FilterValue;
use leptos::prelude::*;
use leptos_router::components::A;
use thaw::*;

use crate::domain::a002_contract::api::{fetch_contracts, list_defaults, CONTRACT_FILTERS};
use crate::shared::components::badge::Badge;
use crate::shared::components::export_button::ExportButton;
use crate::shared::components::pagination_controls::PaginationControls;
use crate::shared::components::query_feedback::{EmptyRow, FetchError, Loading};
use crate::shared::components::search_input::SearchInput;
use crate::shared::components::status_filter::StatusFilter;
use crate::shared::date_utils::format_date;
use crate::shared::page_frame::{PageFrame, PAGE_CAT_LIST};
use crate::shared::paginated_query::use_paginated_query;

fn status_options() -> Vec<(&'static str, &'static str)> {
    ContractStatus::ALL
        .iter()
        .map(|s| (s.as_str(), s.label()))
        .collect()
}

#[component]
pub fn ContractList() -> impl IntoView {
    let query = use_paginated_query(&CONTRACT_FILTERS, list_defaults(), fetch_contracts);
    let filters = query.filters;

    let number_text = move || filters.int("number").map(|n| n.to_string()).unwrap_or_default();
    let on_number = move |ev: leptos::ev::Event| {
        let raw = event_target_value(&ev);
        let value = raw.trim().parse::<i64>().ok().map(FilterValue::Int);
        filters.set_filter("number", value);
    };

    view! {
        <PageFrame page_id="a002_contract--list" category=PAGE_CAT_LIST>
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">{ContractListItem::list_name()}</h1>
                    <Badge variant="primary">
                        {move || query.pagination.get().count.unwrap_or(0).to_string()}
                    </Badge>
                </div>
                <div class="page__header-right">
                    <ExportButton entity=ContractListItem::collection_name() filters=filters defaults=list_defaults() />
                </div>
            </div>

            <div class="page__content">
                <div class="filter-panel">
                    <Flex gap=FlexGap::Small align=FlexAlign::End>
                        <SearchInput filters=filters placeholder="Cliente o sucursal..." />
                        <div class="filter-panel__field">
                            <label class="filter-panel__label">"N° de contrato"</label>
                            <input
                                type="number"
                                min="1"
                                class="form__input"
                                prop:value=number_text
                                on:change=on_number
                            />
                        </div>
                        <Button appearance=ButtonAppearance::Subtle on_click=move |_| filters.clear()>
                            "Limpiar filtros"
                        </Button>
                    </Flex>
                    <StatusFilter filters=filters key="status" options=status_options() />
                </div>

                <Show when=move || query.error().is_some()>
                    <FetchError />
                </Show>

                <div class="table-wrapper">
                    <Table attr:style="width: 100%;">
                        <TableHeader>
                            <TableRow>
                                <TableHeaderCell>"N°"</TableHeaderCell>
                                <TableHeaderCell>"Cliente"</TableHeaderCell>
                                <TableHeaderCell>"Sucursal"</TableHeaderCell>
                                <TableHeaderCell>"Desde"</TableHeaderCell>
                                <TableHeaderCell>"Hasta"</TableHeaderCell>
                                <TableHeaderCell>"Total"</TableHeaderCell>
                                <TableHeaderCell>"Estado"</TableHeaderCell>
                            </TableRow>
                        </TableHeader>
                        <TableBody>
                            <For
                                each=move || query.rows()
                                key=|c| c.id.clone()
                                children=move |contract: ContractListItem| {
                                    let href = contract.detail_route();
                                    let code = contract.code();
                                    let client = contract.client.full_name();
                                    let office = contract.office.name.clone();
                                    let start = format_date(contract.contract_start);
                                    let end = format_date(contract.contract_end);
                                    let total = contract.total.format();
                                    let status = contract.status;
                                    view! {
                                        <TableRow>
                                            <TableCell>
                                                <TableCellLayout>
                                                    <A href=href>{code}</A>
                                                </TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout truncate=true>{client}</TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout truncate=true>{office}</TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>{start}</TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>{end}</TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>
                                                    <span class="table__money">{total}</span>
                                                </TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <Badge variant=status.badge_variant()>{status.label()}</Badge>
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
