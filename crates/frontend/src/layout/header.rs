use contracts::shared::api_error::LOGIN_ROUTE;
use leptos::prelude::*;
use leptos_router::hooks::use_navigate;
use thaw::*;

use crate::system::auth::context::{sign_out, use_auth};

#[component]
pub fn Header() -> impl IntoView {
    let auth = use_auth();
    let navigate = StoredValue::new_local(use_navigate());

    let user_name = move || {
        auth.get()
            .user
            .map(|u| u.display_name())
            .unwrap_or_default()
    };

    let on_logout = move |_| {
        sign_out(auth);
        navigate.with_value(|navigate| navigate(LOGIN_ROUTE, Default::default()));
    };

    view! {
        <header class="app-header">
            <span class="app-header__brand">"Alquileres · Administración"</span>
            <Flex gap=FlexGap::Small class="app-header__user">
                <span>{user_name}</span>
                <Button appearance=ButtonAppearance::Subtle on_click=on_logout>
                    "Cerrar sesión"
                </Button>
            </Flex>
        </header>
    }
}
