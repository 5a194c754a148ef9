use contracts::shared::url_filters::FilterValue;
use leptos::prelude::*;

use crate::shared::url_filters::UrlFilters;

/// Three-way select for a `Bool` filter key: any, yes, no
#[component]
pub fn BoolFilter(
    filters: UrlFilters,
    key: &'static str,
    label: &'static str,
    #[prop(default = "Sí")] yes: &'static str,
    #[prop(default = "No")] no: &'static str,
) -> impl IntoView {
    let current = move || match filters.bool(key) {
        Some(true) => "true",
        Some(false) => "false",
        None => "",
    };

    let on_change = move |ev: leptos::ev::Event| {
        let value = match event_target_value(&ev).as_str() {
            "true" => Some(FilterValue::Bool(true)),
            "false" => Some(FilterValue::Bool(false)),
            _ => None,
        };
        filters.set_filter(key, value);
    };

    view! {
        <div class="filter-panel__field">
            <label class="filter-panel__label">{label}</label>
            <select class="form__input" prop:value=current on:change=on_change>
                <option value="">"Todos"</option>
                <option value="true">{yes}</option>
                <option value="false">{no}</option>
            </select>
        </div>
    }
}
