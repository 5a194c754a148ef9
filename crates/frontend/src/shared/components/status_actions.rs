//! Status-change controls of the detail pages.

use contracts::shared::api_error::{mutation_error_message, ApiError};
use contracts::shared::progress::ProgressStage;
use leptos::prelude::*;
use leptos::task::spawn_local;
use std::future::Future;
use thaw::*;

use super::progress_tracker::ProgressTracker;
use crate::shared::toast::use_toast;

/// (wire value, label) of a reachable status
pub type Transition = (&'static str, &'static str);

/// Buttons for the status transitions allowed from the current status
#[component]
pub fn StatusActions(
    #[prop(into)] transitions: Signal<Vec<Transition>>,
    #[prop(into)] busy: Signal<bool>,
    on_select: Callback<&'static str>,
) -> impl IntoView {
    view! {
        <Show when=move || !transitions.get().is_empty()>
            <div class="status-actions">
                <span class="status-actions__label">"Cambiar estado:"</span>
                <Flex gap=FlexGap::Small>
                    {move || {
                        transitions
                            .get()
                            .into_iter()
                            .map(|(value, label)| {
                                view! {
                                    <Button
                                        appearance=ButtonAppearance::Secondary
                                        disabled=busy
                                        on_click=move |_| on_select.run(value)
                                    >
                                        {label}
                                    </Button>
                                }
                            })
                            .collect_view()
                    }}
                </Flex>
            </div>
        </Show>
    }
}

/// Progress tracker plus the status-change form.
///
/// `on_change(wire, note)` runs the mutation; the history itself comes back
/// from the API, so a success only calls `on_changed` (a refetch).
#[component]
pub fn StatusWorkflow<F, Fut>(
    #[prop(into)] stages: Signal<Vec<ProgressStage>>,
    #[prop(into)] transitions: Signal<Vec<Transition>>,
    on_change: F,
    on_changed: Callback<()>,
) -> impl IntoView
where
    F: Fn(&'static str, Option<String>) -> Fut + 'static,
    Fut: Future<Output = Result<(), ApiError>> + 'static,
{
    let toast = use_toast();
    let changing = RwSignal::new(false);
    let note = RwSignal::new(String::new());
    let on_change = StoredValue::new_local(on_change);

    let on_select = Callback::new(move |wire: &'static str| {
        if changing.get_untracked() {
            return;
        }
        let label = transitions
            .get_untracked()
            .into_iter()
            .find(|(value, _)| *value == wire)
            .map(|(_, label)| label)
            .unwrap_or(wire);
        let text = note.get_untracked().trim().to_string();
        let text = (!text.is_empty()).then_some(text);

        changing.set(true);
        let request = on_change.with_value(|f| f(wire, text));
        spawn_local(async move {
            let outcome = request.await;
            changing.set(false);
            match outcome {
                Ok(()) => {
                    toast.success(format!("Estado cambiado a {}", label));
                    note.set(String::new());
                    on_changed.run(());
                }
                Err(e) => {
                    log::warn!("Status change to {} failed: {}", wire, e);
                    toast.error(mutation_error_message(&e, "No se pudo cambiar el estado"));
                }
            }
        });
    });

    view! {
        <section class="page__section">
            <h2 class="page__subtitle">"Seguimiento"</h2>
            <ProgressTracker stages=stages />
            <Show when=move || !transitions.get().is_empty()>
                <div class="form__group">
                    <label class="form__label">"Nota (opcional)"</label>
                    <input
                        type="text"
                        class="form__input"
                        prop:value=move || note.get()
                        on:input=move |ev| note.set(event_target_value(&ev))
                        disabled=move || changing.get()
                    />
                </div>
            </Show>
            <StatusActions transitions=transitions busy=changing on_select=on_select />
        </section>
    }
}
