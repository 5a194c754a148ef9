//! Create and edit form for clients.
//!
//! `/clients/new` starts empty; `/clients/:id/edit` loads the client first.

use contracts::domain::a001_client::{Client, ClientInput};
use contracts::domain::common::{EntityRecord, LocalityRef};
use contracts::shared::api_error::mutation_error_message;
use contracts::shared::query_state::QueryState;
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::components::A;
use leptos_router::hooks::{use_navigate, use_params_map};
use thaw::*;

use crate::domain::a001_client::api::{create_client, fetch_client, fetch_localities, update_client};
use crate::shared::components::query_feedback::{FetchError, Loading};
use crate::shared::page_frame::{PageFrame, PAGE_CAT_FORM};
use crate::shared::toast::use_toast;

#[derive(Clone, Copy)]
struct FormFields {
    first_name: RwSignal<String>,
    last_name: RwSignal<String>,
    email: RwSignal<String>,
    dni: RwSignal<String>,
    phone: RwSignal<String>,
    locality_id: RwSignal<String>,
}

impl FormFields {
    fn new() -> Self {
        Self {
            first_name: RwSignal::new(String::new()),
            last_name: RwSignal::new(String::new()),
            email: RwSignal::new(String::new()),
            dni: RwSignal::new(String::new()),
            phone: RwSignal::new(String::new()),
            locality_id: RwSignal::new(String::new()),
        }
    }

    fn fill(&self, input: ClientInput) {
        self.first_name.set(input.first_name);
        self.last_name.set(input.last_name);
        self.email.set(input.email);
        self.dni.set(input.dni.unwrap_or_default());
        self.phone.set(input.phone.unwrap_or_default());
        self.locality_id.set(input.locality_id.unwrap_or_default());
    }

    fn to_input(self) -> ClientInput {
        ClientInput {
            first_name: self.first_name.get_untracked(),
            last_name: self.last_name.get_untracked(),
            email: self.email.get_untracked(),
            dni: Some(self.dni.get_untracked()),
            phone: Some(self.phone.get_untracked()),
            locality_id: Some(self.locality_id.get_untracked()),
        }
        .normalized()
    }
}

#[component]
pub fn ClientForm() -> impl IntoView {
    let params = use_params_map();
    let editing_id = params.with_untracked(|p| p.get("id"));
    let is_new = editing_id.is_none();

    let fields = FormFields::new();
    let loaded = RwSignal::new(if is_new {
        QueryState::Success(())
    } else {
        QueryState::Loading
    });
    let localities = RwSignal::new(Vec::<LocalityRef>::new());
    let validation_error = RwSignal::new(None::<String>);
    let saving = RwSignal::new(false);
    let toast = use_toast();
    let navigate = StoredValue::new_local(use_navigate());
    let editing_id = StoredValue::new(editing_id);

    if let Some(id) = editing_id.get_value() {
        spawn_local(async move {
            match fetch_client(id).await {
                Ok(client) => {
                    fields.fill(ClientInput::from_client(&client));
                    loaded.set(QueryState::Success(()));
                }
                Err(e) => {
                    log::warn!("Client fetch failed: {}", e);
                    loaded.set(QueryState::Error(e));
                }
            }
        });
    }

    // Options only: the form still works without them
    spawn_local(async move {
        match fetch_localities().await {
            Ok(list) => localities.set(list),
            Err(e) => log::warn!("Localities fetch failed: {}", e),
        }
    });

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if saving.get_untracked() {
            return;
        }
        let input = fields.to_input();
        if let Err(message) = input.validate() {
            validation_error.set(Some(message));
            return;
        }
        validation_error.set(None);
        saving.set(true);

        let id = editing_id.get_value();
        spawn_local(async move {
            let outcome = match id {
                Some(id) => update_client(id, input).await,
                None => create_client(input).await,
            };
            saving.set(false);
            match outcome {
                Ok(saved_id) => {
                    toast.success("Cliente guardado");
                    let route = format!("{}/{}", Client::list_route(), saved_id);
                    navigate.with_value(|navigate| navigate(&route, Default::default()));
                }
                Err(e) => {
                    log::warn!("Client save failed: {}", e);
                    toast.error(mutation_error_message(&e, "No se pudo guardar el cliente"));
                }
            }
        });
    };

    let cancel_route = match editing_id.get_value() {
        Some(id) => format!("{}/{}", Client::list_route(), id),
        None => Client::list_route(),
    };
    let title = if is_new { "Nuevo cliente" } else { "Editar cliente" };

    let text_field = move |label: &'static str, value: RwSignal<String>, input_type: &'static str| {
        view! {
            <div class="form__group">
                <label class="form__label">{label}</label>
                <input
                    type=input_type
                    class="form__input"
                    prop:value=move || value.get()
                    on:input=move |ev| value.set(event_target_value(&ev))
                    disabled=move || saving.get()
                />
            </div>
        }
    };

    view! {
        <PageFrame page_id="a001_client--form" category=PAGE_CAT_FORM>
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">{title}</h1>
                </div>
            </div>

            {move || match loaded.get() {
                QueryState::Loading => view! { <Loading /> }.into_any(),
                QueryState::Error(_) => view! { <FetchError /> }.into_any(),
                QueryState::Success(()) => {
                    let cancel_route = cancel_route.clone();
                    view! {
                        <form class="form" on:submit=on_submit>
                            {move || validation_error.get().map(|message| view! {
                                <div class="alert alert--error">{message}</div>
                            })}
                            {text_field("Nombre", fields.first_name, "text")}
                            {text_field("Apellido", fields.last_name, "text")}
                            {text_field("Email", fields.email, "email")}
                            {text_field("DNI", fields.dni, "text")}
                            {text_field("Teléfono", fields.phone, "tel")}
                            <div class="form__group">
                                <label class="form__label">"Localidad"</label>
                                <select
                                    class="form__input"
                                    prop:value=move || fields.locality_id.get()
                                    on:change=move |ev| fields.locality_id.set(event_target_value(&ev))
                                    disabled=move || saving.get()
                                >
                                    <option value="">"Sin localidad"</option>
                                    {move || localities.get().into_iter().map(|l| {
                                        let selected = fields.locality_id.get_untracked() == l.id;
                                        view! {
                                            <option value=l.id.clone() selected=selected>{l.name.clone()}</option>
                                        }
                                    }).collect_view()}
                                </select>
                            </div>
                            <div class="form__actions">
                                <Flex gap=FlexGap::Small>
                                    <Button
                                        appearance=ButtonAppearance::Primary
                                        button_type=ButtonType::Submit
                                        disabled=saving
                                        loading=saving
                                    >
                                        "Guardar"
                                    </Button>
                                    <A href=cancel_route>"Cancelar"</A>
                                </Flex>
                            </div>
                        </form>
                    }
                    .into_any()
                }
            }}
        </PageFrame>
    }
}
