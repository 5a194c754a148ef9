use contracts::shared::url_filters::FilterValue;
use leptos::prelude::*;

use crate::shared::url_filters::UrlFilters;

/// Multi-select checkbox group for a `MultipleText` filter key
#[component]
pub fn StatusFilter(
    filters: UrlFilters,
    key: &'static str,
    /// (wire value, label)
    options: Vec<(&'static str, &'static str)>,
    #[prop(default = "Estado")] label: &'static str,
) -> impl IntoView {
    let toggle = move |value: &'static str, checked: bool| {
        let mut selected = filters.texts(key);
        selected.retain(|v| v != value);
        if checked {
            selected.push(value.to_string());
        }
        filters.set_filter(key, Some(FilterValue::MultipleText(selected)));
    };

    view! {
        <fieldset class="filter-panel__group">
            <legend class="filter-panel__label">{label}</legend>
            {options
                .into_iter()
                .map(|(value, text)| {
                    view! {
                        <label class="filter-panel__option">
                            <input
                                type="checkbox"
                                prop:checked=move || filters.texts(key).iter().any(|v| v == value)
                                on:change=move |ev| toggle(value, event_target_checked(&ev))
                            />
                            {text}
                        </label>
                    }
                })
                .collect_view()}
        </fieldset>
    }
}

/// Multi-select checkbox group for a `MultipleInt` filter key (ids)
#[component]
pub fn IdFilter(
    filters: UrlFilters,
    key: &'static str,
    /// (id, label)
    #[prop(into)]
    options: Signal<Vec<(i64, String)>>,
    label: &'static str,
) -> impl IntoView {
    let selected = move || {
        filters
            .get(key)
            .map(|v| v.as_ints().to_vec())
            .unwrap_or_default()
    };
    let toggle = move |id: i64, checked: bool| {
        let mut ids = selected();
        ids.retain(|v| *v != id);
        if checked {
            ids.push(id);
        }
        filters.set_filter(key, Some(FilterValue::MultipleInt(ids)));
    };

    view! {
        <Show when=move || !options.get().is_empty()>
            <fieldset class="filter-panel__group">
                <legend class="filter-panel__label">{label}</legend>
                {move || {
                    options
                        .get()
                        .into_iter()
                        .map(|(id, text)| {
                            view! {
                                <label class="filter-panel__option">
                                    <input
                                        type="checkbox"
                                        prop:checked=move || selected().contains(&id)
                                        on:change=move |ev| toggle(id, event_target_checked(&ev))
                                    />
                                    {text}
                                </label>
                            }
                        })
                        .collect_view()
                }}
            </fieldset>
        </Show>
    }
}
