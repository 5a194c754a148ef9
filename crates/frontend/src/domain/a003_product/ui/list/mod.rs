use contracts::domain::a003_product::{Product, ProductType};
use contracts::domain::common::EntityRecord;
use leptos::prelude::*;
use leptos::task::spawn_local;
use serde_json::json;
use thaw::*;

use crate::domain::a003_product::api::{
    delete_product, fetch_brand_options, fetch_products, PRODUCT_FILTERS,
};
use crate::shared::components::badge::Badge;
use crate::shared::components::bool_filter::BoolFilter;
use crate::shared::components::delete_dialog::DeleteDialog;
use crate::shared::components::export_button::ExportButton;
use crate::shared::components::pagination_controls::PaginationControls;
use crate::shared::components::query_feedback::{EmptyRow, FetchError, Loading};
use crate::shared::components::search_input::SearchInput;
use crate::shared::components::status_filter::{IdFilter, StatusFilter};
use crate::shared::page_frame::{PageFrame, PAGE_CAT_LIST};
use crate::shared::paginated_query::use_paginated_query;

fn type_options() -> Vec<(&'static str, &'static str)> {
    ProductType::ALL
        .iter()
        .map(|t| (t.as_str(), t.label()))
        .collect()
}

fn type_variant(product_type: ProductType) -> &'static str {
    match product_type {
        ProductType::Rental => "primary",
        ProductType::Sale => "success",
        ProductType::Service => "neutral",
    }
}

#[component]
pub fn ProductList() -> impl IntoView {
    let query = use_paginated_query(&PRODUCT_FILTERS, json!({}), fetch_products);
    let filters = query.filters;

    // Filter options load on their own; a failure only hides the brand group
    let brands = RwSignal::new(Vec::<(i64, String)>::new());
    spawn_local(async move {
        match fetch_brand_options().await {
            Ok(options) => brands.set(options),
            Err(e) => log::warn!("Brands fetch failed: {}", e),
        }
    });

    let delete_open = RwSignal::new(false);
    let delete_target = RwSignal::new(None::<(String, String)>);

    view! {
        <PageFrame page_id="a003_product--list" category=PAGE_CAT_LIST>
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">{Product::list_name()}</h1>
                    <Badge variant="primary">
                        {move || query.pagination.get().count.unwrap_or(0).to_string()}
                    </Badge>
                </div>
                <div class="page__header-right">
                    <ExportButton entity=Product::collection_name() filters=filters />
                </div>
            </div>

            <div class="page__content">
                <div class="filter-panel">
                    <Flex gap=FlexGap::Small align=FlexAlign::End>
                        <SearchInput filters=filters placeholder="SKU o nombre..." />
                        <BoolFilter filters=filters key="inStock" label="Stock" yes="Con stock" no="Sin stock" />
                        <Button appearance=ButtonAppearance::Subtle on_click=move |_| filters.clear()>
                            "Limpiar filtros"
                        </Button>
                    </Flex>
                    <Flex gap=FlexGap::Large>
                        <StatusFilter filters=filters key="type" label="Tipo" options=type_options() />
                        <IdFilter filters=filters key="brands" label="Marca" options=brands />
                    </Flex>
                </div>

                <Show when=move || query.error().is_some()>
                    <FetchError />
                </Show>

                <div class="table-wrapper">
                    <Table attr:style="width: 100%;">
                        <TableHeader>
                            <TableRow>
                                <TableHeaderCell>"SKU"</TableHeaderCell>
                                <TableHeaderCell>"Nombre"</TableHeaderCell>
                                <TableHeaderCell>"Marca"</TableHeaderCell>
                                <TableHeaderCell>"Tipo"</TableHeaderCell>
                                <TableHeaderCell>"Precio"</TableHeaderCell>
                                <TableHeaderCell>"Stock"</TableHeaderCell>
                                <TableHeaderCell>""</TableHeaderCell>
                            </TableRow>
                        </TableHeader>
                        <TableBody>
                            <For
                                each=move || query.rows()
                                key=|p| p.id.clone()
                                children=move |product: Product| {
                                    let target = (product.id.clone(), product.code());
                                    let brand = product
                                        .brand
                                        .as_ref()
                                        .map(|b| b.name.clone())
                                        .unwrap_or_else(|| "—".into());
                                    let price = product.price.format();
                                    let stock = product.stock_label();
                                    let product_type = product.product_type;
                                    let Product { sku, name, .. } = product;
                                    view! {
                                        <TableRow>
                                            <TableCell>
                                                <TableCellLayout>{sku}</TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout truncate=true>{name}</TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout truncate=true>{brand}</TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <Badge variant=type_variant(product_type)>{product_type.label()}</Badge>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>
                                                    <span class="table__money">{price}</span>
                                                </TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>{stock}</TableCellLayout>
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
                element_name=Product::element_name()
                on_delete=delete_product
                on_deleted=Callback::new(move |_| query.refetch())
            />
        </PageFrame>
    }
}
