use leptos::prelude::*;
use leptos_router::components::A;

use crate::system::auth::context::{sign_out, use_auth};

/// Shown when the API answers 409: the account's email is not verified yet
#[component]
pub fn VerifyEmailPage() -> impl IntoView {
    let auth = use_auth();
    let email = move || auth.get().user.map(|u| u.email).unwrap_or_default();

    view! {
        <div class="login-container">
            <div class="login-box">
                <h2>"Verificá tu email"</h2>
                <p>
                    "Antes de continuar tenés que confirmar tu dirección de correo. "
                    "Revisá la bandeja de entrada de "
                    <strong>{email}</strong>
                    " y seguí el enlace que te enviamos."
                </p>
                <p>
                    <A href="/login" on:click=move |_| sign_out(auth)>
                        "Volver a iniciar sesión"
                    </A>
                </p>
            </div>
        </div>
    }
}
