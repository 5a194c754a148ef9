use contracts::shared::pagination::export_params;
use leptos::prelude::*;
use leptos::task::spawn_local;
use serde_json::Value;
use thaw::*;

use crate::shared::export::download_export;
use crate::shared::toast::use_toast;
use crate::shared::url_filters::UrlFilters;

/// "Exportar CSV" for a list: the gateway export with the list's filters
#[component]
pub fn ExportButton(
    /// Export entity, the collection name (e.g. "contracts")
    entity: &'static str,
    filters: UrlFilters,
    /// The list's default variables (e.g. its ordering)
    #[prop(optional)]
    defaults: Option<Value>,
) -> impl IntoView {
    let toast = use_toast();
    let exporting = RwSignal::new(false);
    let defaults = StoredValue::new(defaults.unwrap_or(Value::Null));

    let on_export = move |_| {
        if exporting.get_untracked() {
            return;
        }
        exporting.set(true);
        let params = filters
            .state
            .with_untracked(|state| defaults.with_value(|d| export_params(d, state)));
        spawn_local(async move {
            if let Err(e) = download_export(entity, &params).await {
                log::warn!("Export of {} failed: {}", entity, e);
                toast.error("No se pudo exportar el listado");
            }
            exporting.set(false);
        });
    };

    view! {
        <Button
            appearance=ButtonAppearance::Secondary
            disabled=exporting
            loading=exporting
            on_click=on_export
        >
            "Exportar CSV"
        </Button>
    }
}
