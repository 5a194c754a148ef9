use contracts::domain::a001_client::Client;
use contracts::domain::a002_contract::ContractListItem;
use contracts::domain::a003_product::Product;
use contracts::domain::a004_supplier::Supplier;
use contracts::domain::a005_internal_order::InternalOrderListItem;
use contracts::domain::a006_supplier_order::SupplierOrderListItem;
use contracts::domain::a007_sale::Sale;
use contracts::domain::common::EntityRecord;
use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_location;

struct MenuGroup {
    label: &'static str,
    /// (route, label)
    items: Vec<(String, &'static str)>,
}

fn entry<R: EntityRecord>() -> (String, &'static str) {
    (R::list_route(), R::list_name())
}

fn get_menu_groups() -> Vec<MenuGroup> {
    vec![
        MenuGroup {
            label: "Tablero",
            items: vec![("/reports".to_string(), "Reportes")],
        },
        MenuGroup {
            label: "Comercial",
            items: vec![entry::<Client>(), entry::<ContractListItem>(), entry::<Sale>()],
        },
        MenuGroup {
            label: "Inventario",
            items: vec![
                entry::<Product>(),
                entry::<Supplier>(),
                entry::<InternalOrderListItem>(),
                entry::<SupplierOrderListItem>(),
            ],
        },
    ]
}

#[component]
pub fn Sidebar() -> impl IntoView {
    let pathname = use_location().pathname;

    view! {
        <nav class="app-sidebar__content">
            {get_menu_groups()
                .into_iter()
                .map(|group| {
                    view! {
                        <div class="app-sidebar__group">
                            <div class="app-sidebar__group-label">{group.label}</div>
                            {group
                                .items
                                .into_iter()
                                .map(|(route, label)| {
                                    let prefix = route.clone();
                                    let is_active = move || {
                                        pathname.with(|p| {
                                            p == &prefix || p.starts_with(&format!("{}/", prefix))
                                        })
                                    };
                                    view! {
                                        <A href=route>
                                            <div
                                                class="app-sidebar__item"
                                                class:app-sidebar__item--active=is_active
                                            >
                                                {label}
                                            </div>
                                        </A>
                                    }
                                })
                                .collect_view()}
                        </div>
                    }
                })
                .collect_view()}
        </nav>
    }
}
