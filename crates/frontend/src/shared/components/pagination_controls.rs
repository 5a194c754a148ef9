use contracts::shared::pagination::Pagination;
use leptos::prelude::*;

/// Previous/next controls over a 1-based page number
#[component]
pub fn PaginationControls(
    #[prop(into)] pagination: Signal<Pagination>,
    on_page_change: Callback<u32>,
) -> impl IntoView {
    let info = move || {
        let p = pagination.get();
        match (p.no_pages, p.count) {
            (Some(pages), Some(count)) => format!(
                "Página {} de {} ({} resultados)",
                p.active_page,
                pages.max(1),
                count
            ),
            _ => format!("Página {}", p.active_page),
        }
    };

    view! {
        <div class="pagination-controls">
            <button
                class="pagination-btn"
                title="Primera página"
                disabled=move || !pagination.get().can_go_previous()
                on:click=move |_| on_page_change.run(1)
            >
                "«"
            </button>
            <button
                class="pagination-btn"
                title="Página anterior"
                disabled=move || !pagination.get().can_go_previous()
                on:click=move |_| {
                    let page = pagination.get_untracked().active_page;
                    if page > 1 {
                        on_page_change.run(page - 1);
                    }
                }
            >
                "‹"
            </button>
            <span class="pagination-info">{info}</span>
            <button
                class="pagination-btn"
                title="Página siguiente"
                disabled=move || !pagination.get().can_go_next()
                on:click=move |_| {
                    let p = pagination.get_untracked();
                    if p.can_go_next() {
                        on_page_change.run(p.active_page + 1);
                    }
                }
            >
                "›"
            </button>
            <button
                class="pagination-btn"
                title="Última página"
                disabled=move || !pagination.get().can_go_next()
                on:click=move |_| {
                    if let Some(last) = pagination.get_untracked().no_pages {
                        on_page_change.run(last.max(1));
                    }
                }
            >
                "»"
            </button>
        </div>
    }
}
