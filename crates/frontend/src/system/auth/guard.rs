use contracts::shared::api_error::LOGIN_ROUTE;
use leptos::prelude::*;
use leptos_router::components::Redirect;
use leptos_router::hooks::use_location;

use super::context::use_auth;

/// Renders children only with a stored token; otherwise goes to the login
/// page, remembering where the user was headed.
#[component]
pub fn RequireAuth(children: ChildrenFn) -> impl IntoView {
    let auth = use_auth();
    let location = use_location();

    let login_path = move || {
        let target = format!("{}{}", location.pathname.get(), location.search.get());
        format!("{}?next={}", LOGIN_ROUTE, urlencoding::encode(&target))
    };

    view! {
        <Show
            when=move || auth.get().is_authenticated()
            fallback=move || view! { <Redirect path=login_path() /> }
        >
            {children()}
        </Show>
    }
}
