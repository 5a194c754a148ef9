use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::{use_navigate, use_query_map};

use crate::system::auth::{api, context::sign_in, context::use_auth};

const HOME_ROUTE: &str = "/reports";

/// Where to go after login: the `next` parameter when it is a local path
fn next_route(raw: Option<String>) -> String {
    raw.and_then(|next| urlencoding::decode(&next).ok().map(|s| s.into_owned()))
        .filter(|next| next.starts_with('/') && !next.starts_with("//"))
        .unwrap_or_else(|| HOME_ROUTE.to_string())
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let error_message = RwSignal::new(Option::<String>::None);
    let is_loading = RwSignal::new(false);

    let auth = use_auth();
    let query = use_query_map();
    let navigate = use_navigate();
    let target = Memo::new(move |_| next_route(query.with(|q| q.get("next"))));

    // Already signed in (e.g. back button)
    {
        let navigate = navigate.clone();
        Effect::new(move |_| {
            if auth.get().is_authenticated() {
                navigate(&target.get(), Default::default());
            }
        });
    }

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();

        let email_val = email.get_untracked().trim().to_string();
        let password_val = password.get_untracked();
        if email_val.is_empty() || password_val.is_empty() {
            error_message.set(Some("Ingrese email y contraseña".to_string()));
            return;
        }

        is_loading.set(true);
        error_message.set(None);

        spawn_local(async move {
            match api::login(email_val, password_val).await {
                Ok(response) => {
                    log::info!("Signed in as {}", response.user.email);
                    // The effect above moves on to the target route
                    sign_in(auth, response);
                }
                Err(e) => {
                    log::warn!("Login failed: {}", e);
                    error_message.set(Some(e));
                }
            }
            is_loading.set(false);
        });
    };

    view! {
        <div class="login-container">
            <div class="login-box">
                <h1>"Alquileres"</h1>
                <h2>"Iniciar sesión"</h2>

                <Show when=move || error_message.get().is_some()>
                    <div class="alert alert--error">
                        {move || error_message.get().unwrap_or_default()}
                    </div>
                </Show>

                <form on:submit=on_submit>
                    <div class="form__group">
                        <label for="email">"Email"</label>
                        <input
                            type="email"
                            id="email"
                            class="form__input"
                            autocomplete="username"
                            prop:value=move || email.get()
                            on:input=move |ev| email.set(event_target_value(&ev))
                            required
                            disabled=move || is_loading.get()
                        />
                    </div>

                    <div class="form__group">
                        <label for="password">"Contraseña"</label>
                        <input
                            type="password"
                            id="password"
                            class="form__input"
                            autocomplete="current-password"
                            prop:value=move || password.get()
                            on:input=move |ev| password.set(event_target_value(&ev))
                            required
                            disabled=move || is_loading.get()
                        />
                    </div>

                    <button type="submit" class="btn-primary" disabled=move || is_loading.get()>
                        {move || if is_loading.get() { "Ingresando..." } else { "Ingresar" }}
                    </button>
                </form>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_next_route() {
        assert_eq!(next_route(None), "/reports");
        assert_eq!(
            next_route(Some("%2Fcontracts%3Fstatus%3DPAID".to_string())),
            "/contracts?status=PAID"
        );
        assert_eq!(next_route(Some("/clients".to_string())), "/clients");
    }

    #[test]
    fn test_next_route_rejects_external_targets() {
        assert_eq!(next_route(Some("https://evil.example".to_string())), "/reports");
        assert_eq!(next_route(Some("//evil.example".to_string())), "/reports");
    }
}
