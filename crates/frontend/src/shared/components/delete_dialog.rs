//! Confirmation dialog for deleting a record.
//!
//! While the mutation runs the controls are disabled and the dialog cannot
//! be dismissed. A failure keeps it open and shows the server message.

use contracts::shared::api_error::{mutation_error_message, ApiError};
use leptos::prelude::*;
use leptos::task::spawn_local;
use std::future::Future;
use thaw::*;

use crate::shared::toast::use_toast;

#[component]
pub fn DeleteDialog<F, Fut>(
    open: RwSignal<bool>,
    /// (id, code) of the record to delete
    #[prop(into)]
    target: Signal<Option<(String, String)>>,
    /// Singular entity name, e.g. "Producto"
    element_name: &'static str,
    on_delete: F,
    on_deleted: Callback<()>,
) -> impl IntoView
where
    F: Fn(String) -> Fut + 'static,
    Fut: Future<Output = Result<(), ApiError>> + 'static,
{
    let toast = use_toast();
    let deleting = RwSignal::new(false);
    let on_delete = StoredValue::new_local(on_delete);

    // The mask or Esc may try to close the dialog mid-request
    Effect::new(move |_| {
        if !open.get() && deleting.get_untracked() {
            open.set(true);
        }
    });

    let confirm = move |_| {
        let Some((id, code)) = target.get_untracked() else {
            return;
        };
        if deleting.get_untracked() {
            return;
        }
        deleting.set(true);
        let request = on_delete.with_value(|f| f(id));
        spawn_local(async move {
            let outcome = request.await;
            deleting.set(false);
            match outcome {
                Ok(()) => {
                    toast.success(format!("{} {} eliminado", element_name, code));
                    open.set(false);
                    on_deleted.run(());
                }
                Err(e) => {
                    log::warn!("Delete of {} failed: {}", code, e);
                    toast.error(mutation_error_message(
                        &e,
                        &format!("No se pudo eliminar {}", code),
                    ));
                }
            }
        });
    };

    let question = move || {
        target
            .get()
            .map(|(_, code)| format!("¿Eliminar {} {}? Esta acción no se puede deshacer.", element_name, code))
            .unwrap_or_default()
    };

    view! {
        <Dialog open=open mask_closeable=Signal::derive(move || !deleting.get())>
            <DialogSurface>
                <DialogBody>
                    <DialogTitle>{format!("Eliminar {}", element_name)}</DialogTitle>
                    <DialogContent>
                        <p>{question}</p>
                    </DialogContent>
                    <DialogActions>
                        <Button
                            appearance=ButtonAppearance::Primary
                            disabled=deleting
                            loading=deleting
                            on_click=confirm
                        >
                            "Eliminar"
                        </Button>
                        <Button
                            appearance=ButtonAppearance::Subtle
                            disabled=deleting
                            on_click=move |_| open.set(false)
                        >
                            "Cancelar"
                        </Button>
                    </DialogActions>
                </DialogBody>
            </DialogSurface>
        </Dialog>
    }
}
