use contracts::shared::url_filters::FilterValue;
use leptos::prelude::*;

use crate::shared::url_filters::UrlFilters;

/// Free-text search bound to a `Text` filter key.
///
/// Keystrokes update the box immediately; the URL is written through the
/// throttled setter, so a burst of typing produces a single navigation.
#[component]
pub fn SearchInput(
    filters: UrlFilters,
    #[prop(default = "search")] key: &'static str,
    #[prop(default = "Buscar...")] placeholder: &'static str,
) -> impl IntoView {
    let text = RwSignal::new(filters.text(key));

    // Follow external URL changes (back/forward, "limpiar filtros"), but not
    // while our own write is still pending.
    Effect::new(move |_| {
        let from_url = filters.text(key);
        if !filters.search_pending(key) && text.get_untracked() != from_url {
            text.set(from_url);
        }
    });

    view! {
        <div class="filter-panel__search">
            <input
                type="search"
                class="form__input"
                placeholder=placeholder
                prop:value=move || text.get()
                on:input=move |ev| {
                    let value = event_target_value(&ev);
                    text.set(value.clone());
                    filters.set_search_throttled(key, Some(FilterValue::Text(value)));
                }
            />
        </div>
    }
}
