use contracts::domain::a001_client::Client;
use contracts::domain::common::EntityRecord;
use contracts::shared::query_state::QueryState;
use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;
use thaw::*;

use crate::domain::a001_client::api::{delete_client, fetch_client};
use crate::shared::components::delete_dialog::DeleteDialog;
use crate::shared::components::query_feedback::{FetchError, Loading};
use crate::shared::date_utils::format_datetime;
use crate::shared::page_frame::{PageFrame, PAGE_CAT_DETAIL};
use crate::shared::record_query::use_record_query;

#[component]
pub fn ClientDetails() -> impl IntoView {
    let client = use_record_query(fetch_client).state;

    let delete_open = RwSignal::new(false);
    let delete_target = Signal::derive(move || {
        client.with(|c| c.data().map(|c| (c.id.clone(), c.code())))
    });
    let navigate = StoredValue::new_local(use_navigate());

    view! {
        <PageFrame page_id="a001_client--detail" category=PAGE_CAT_DETAIL>
            {move || match client.get() {
                QueryState::Loading => view! { <Loading /> }.into_any(),
                QueryState::Error(_) => view! { <FetchError /> }.into_any(),
                QueryState::Success(c) => {
                    let edit_route = format!("{}/edit", c.detail_route());
                    view! {
                        <div class="page__header">
                            <div class="page__header-left">
                                <A href=Client::list_route()>"← Clientes"</A>
                                <h1 class="page__title">{c.full_name()}</h1>
                            </div>
                            <div class="page__header-right">
                                <Flex gap=FlexGap::Small>
                                    <A href=edit_route>
                                        <Button appearance=ButtonAppearance::Primary>"Editar"</Button>
                                    </A>
                                    <Button
                                        appearance=ButtonAppearance::Secondary
                                        on_click=move |_| delete_open.set(true)
                                    >
                                        "Eliminar"
                                    </Button>
                                </Flex>
                            </div>
                        </div>
                        <div class="page__content">
                            <dl class="details-grid">
                                <dt>"Email"</dt>
                                <dd>{c.email.clone()}</dd>
                                <dt>"DNI"</dt>
                                <dd>{c.dni.clone().unwrap_or_else(|| "—".into())}</dd>
                                <dt>"Teléfono"</dt>
                                <dd>{c.phone.clone().unwrap_or_else(|| "—".into())}</dd>
                                <dt>"Localidad"</dt>
                                <dd>
                                    {c.locality.as_ref().map(|l| match &l.state {
                                        Some(state) => format!("{}, {}", l.name, state),
                                        None => l.name.clone(),
                                    }).unwrap_or_else(|| "—".into())}
                                </dd>
                                <dt>"Alta"</dt>
                                <dd>{format_datetime(c.created_on)}</dd>
                            </dl>
                        </div>
                    }
                    .into_any()
                }
            }}

            <DeleteDialog
                open=delete_open
                target=delete_target
                element_name=Client::element_name()
                on_delete=delete_client
                on_deleted=Callback::new(move |_| {
                    navigate.with_value(|navigate| navigate(&Client::list_route(), Default::default()));
                })
            />
        </PageFrame>
    }
}
