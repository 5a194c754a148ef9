use leptos::prelude::*;
use leptos_router::components::A;

#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! {
        <div class="page page--not-found">
            <h1 class="page__title">"Página no encontrada"</h1>
            <p>"La dirección que buscás no existe."</p>
            <A href="/reports">"Ir al inicio"</A>
        </div>
    }
}
