use contracts::domain::a001_client::Client;
use contracts::domain::common::EntityRecord;
use leptos::prelude::*;
use leptos_router::components::A;
use serde_json::json;
use thaw::*;

use crate::domain::a001_client::api::{delete_client, fetch_clients, CLIENT_FILTERS};
use crate::shared::components::badge::Badge;
use crate::shared::components::delete_dialog::DeleteDialog;
use crate::shared::components::export_button::ExportButton;
use crate::shared::components::pagination_controls::PaginationControls;
use crate::shared::components::query_feedback::{EmptyRow, FetchError, Loading};
use crate::shared::components::search_input::SearchInput;
use crate::shared::date_utils::format_datetime;
use crate::shared::page_frame::{PageFrame, PAGE_CAT_LIST};
use crate::shared::paginated_query::use_paginated_query;

#[component]
pub fn ClientList() -> impl IntoView {
    let query = use_paginated_query(&CLIENT_FILTERS, json!({}), fetch_clients);
    let filters = query.filters;

    let delete_open = RwSignal::new(false);
    let delete_target = RwSignal::new(None::<(String, String)>);
    let ask_delete = move |client: &Client| {
        delete_target.set(Some((client.id.clone(), client.code())));
        delete_open.set(true);
    };

    view! {
        <PageFrame page_id="a001_client--list" category=PAGE_CAT_LIST>
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">{Client::list_name()}</h1>
                    <Badge variant="primary">
                        {move || query.pagination.get().count.unwrap_or(0).to_string()}
                    </Badge>
                </div>
                <div class="page__header-right">
                    <Flex gap=FlexGap::Small>
                        <ExportButton entity=Client::collection_name() filters=filters />
                        <A href="/clients/new">
                            <Button appearance=ButtonAppearance::Primary>"Nuevo cliente"</Button>
                        </A>
                    </Flex>
                </div>
            </div>

            <div class="page__content">
                <div class="filter-panel">
                    <Flex gap=FlexGap::Small align=FlexAlign::End>
                        <SearchInput filters=filters placeholder="Nombre, email o DNI..." />
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
                                <TableHeaderCell>"Nombre"</TableHeaderCell>
                                <TableHeaderCell>"Email"</TableHeaderCell>
                                <TableHeaderCell>"DNI"</TableHeaderCell>
                                <TableHeaderCell>"Teléfono"</TableHeaderCell>
                                <TableHeaderCell>"Localidad"</TableHeaderCell>
                                <TableHeaderCell>"Alta"</TableHeaderCell>
                                <TableHeaderCell>""</TableHeaderCell>
                            </TableRow>
                        </TableHeader>
                        <TableBody>
                            <For
                                each=move || query.rows()
                                key=|client| client.id.clone()
                                children=move |client: Client| {
                                    let href = client.detail_route();
                                    let edit_route = format!("{}/edit", href);
                                    let name = client.full_name();
                                    let dni = client.dni.clone().unwrap_or_else(|| "—".into());
                                    let phone = client.phone.clone().unwrap_or_else(|| "—".into());
                                    let locality = client
                                        .locality
                                        .as_ref()
                                        .map(|l| l.name.clone())
                                        .unwrap_or_else(|| "—".into());
                                    let created = format_datetime(client.created_on);
                                    let email = client.email.clone();
                                    let for_delete = client;
                                    view! {
                                        <TableRow>
                                            <TableCell>
                                                <TableCellLayout truncate=true>
                                                    <A href=href>{name}</A>
                                                </TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout truncate=true>{email}</TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>{dni}</TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>{phone}</TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout truncate=true>{locality}</TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>{created}</TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <Flex gap=FlexGap::Small>
                                                    <A href=edit_route>"Editar"</A>
                                                    <Button
                                                        appearance=ButtonAppearance::Subtle
                                                        on_click=move |_| ask_delete(&for_delete)
                                                    >
                                                        "Eliminar"
                                                    </Button>
                                                </Flex>
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

            <DeleteDialog
                open=delete_open
                target=delete_target
                element_name=Client::element_name()
                on_delete=delete_client
                on_deleted=Callback::new(move |_| query.refetch())
            />
        </PageFrame>
    }
}
