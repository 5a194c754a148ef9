use contracts::domain::a004_supplier::Supplier;
use contracts::domain::common::EntityRecord;
use leptos::prelude::*;
use serde_json::json;
use thaw::*;

use crate::domain::a004_supplier::api::{delete_supplier, fetch_suppliers, SUPPLIER_FILTERS};
use crate::shared::components::badge::Badge;
use crate::shared::components::delete_dialog::DeleteDialog;
use crate::shared::components::export_button::ExportButton;
use crate::shared::components::pagination_controls::PaginationControls;
use crate::shared::components::query_feedback::{EmptyRow, FetchError, Loading};
use crate::shared::components::search_input::SearchInput;
use crate::shared::page_frame::{PageFrame, PAGE_CAT_LIST};
use crate::shared::paginated_query::use_paginated_query;

#[component]
pub fn SupplierList() -> impl IntoView {
    let query = use_paginated_query(&SUPPLIER_FILTERS, json!({}), fetch_suppliers);
    let filters = query.filters;

    let delete_open = RwSignal::new(false);
    let delete_target = RwSignal::new(None::<(String, String)>);

    view! {
        <PageFrame page_id="a004_supplier--list" category=PAGE_CAT_LIST>
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">{Supplier::list_name()}</h1>
                    <Badge variant="primary">
                        {move || query.pagination.get().count.unwrap_or(0).to_string()}
                    </Badge>
                </div>
                <div class="page__header-right">
                    <ExportButton entity=Supplier::collection_name() filters=filters />
                </div>
            </div>

            <div class="page__content">
                <div class="filter-panel">
                    <SearchInput filters=filters placeholder="Nombre, CUIT o email..." />
                </div>

                <Show when=move || query.error().is_some()>
                    <FetchError />
                </Show>

                <div class="table-wrapper">
                    <Table attr:style="width: 100%;">
                        <TableHeader>
                            <TableRow>
                                <TableHeaderCell>"Nombre"</TableHeaderCell>
                                <TableHeaderCell>"CUIT"</TableHeaderCell>
                                <TableHeaderCell>"Email"</TableHeaderCell>
                                <TableHeaderCell>"Teléfono"</TableHeaderCell>
                                <TableHeaderCell>"Localidad"</TableHeaderCell>
                                <TableHeaderCell>""</TableHeaderCell>
                            </TableRow>
                        </TableHeader>
                        <TableBody>
                            <For
                                each=move || query.rows()
                                key=|s| s.id.clone()
                                children=move |supplier: Supplier| {
                                    let target = (supplier.id.clone(), supplier.code());
                                    let dash = || "—".to_string();
                                    let tax_id = supplier.formatted_tax_id().unwrap_or_else(dash);
                                    let locality = supplier
                                        .locality
                                        .as_ref()
                                        .map(|l| l.name.clone())
                                        .unwrap_or_else(dash);
                                    let email = supplier.email.clone().unwrap_or_else(dash);
                                    let phone = supplier.phone.clone().unwrap_or_else(dash);
                                    let name = supplier.name;
                                    view! {
                                        <TableRow>
                                            <TableCell>
                                                <TableCellLayout truncate=true>{name}</TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>{tax_id}</TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout truncate=true>{email}</TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>{phone}</TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout truncate=true>{locality}</TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <Button
                                                    appearance=ButtonAppearance::Subtle
                                                    on_click=move |_| {
                                                        delete_target.set(Some(target.clone()));
                                                        delete_open.set(true);
                                                    }
                                                >
                                                    "Eliminar"
                                                </Button>
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

            <DeleteDialog
                open=delete_open
                target=delete_target
                element_name=Supplier::element_name()
                on_delete=delete_supplier
                on_deleted=Callback::new(move |_| query.refetch())
            />
        </PageFrame>
    }
}
