use contracts::shared::api_error::GENERIC_FETCH_ERROR;
use leptos::prelude::*;
use thaw::*;

/// Generic fetch failure message
#[component]
pub fn FetchError() -> impl IntoView {
    view! { <div class="alert alert--error">{GENERIC_FETCH_ERROR}</div> }
}

#[component]
pub fn Loading() -> impl IntoView {
    view! {
        <div class="page__loading">
            <Spinner />
        </div>
    }
}

/// Table placeholder row when a page has no results
#[component]
pub fn EmptyRow(colspan: u32) -> impl IntoView {
    view! {
        <tr>
            <td class="table__cell table__cell--empty" colspan=colspan>
                "No se encontraron resultados"
            </td>
        </tr>
    }
}
