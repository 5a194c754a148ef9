use contracts::shared::api_error::LOGIN_ROUTE;
use contracts::system::auth::{LoginResponse, UserInfo};
use leptos::prelude::*;
use leptos::task::spawn_local;

use super::{api, storage};
use crate::shared::api_utils::redirect_to;

#[derive(Clone, Debug, Default, PartialEq)]
pub struct AuthState {
    pub token: Option<String>,
    pub user: Option<UserInfo>,
}

impl AuthState {
    fn from_storage() -> Self {
        Self {
            token: storage::get_token(),
            user: storage::get_user(),
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.token.is_some()
    }
}

/// Auth context provider component
///
/// The session is restored from localStorage synchronously so guarded routes
/// render on reload; the gateway check then runs once in the background.
#[component]
pub fn AuthProvider(children: Children) -> impl IntoView {
    let auth = RwSignal::new(AuthState::from_storage());

    if let Some(token) = auth.get_untracked().token {
        spawn_local(async move {
            match api::check_session(&token).await {
                Ok(session) if session.requires_sign_out() => {
                    log::warn!("Stored session rejected: {:?}", session.error);
                    storage::clear_session();
                    auth.set(AuthState::default());
                    redirect_to(LOGIN_ROUTE);
                }
                Ok(session) => {
                    log::debug!("Session valid for {:?}", session.email);
                }
                // Gateway unreachable: keep the session, the next call decides
                Err(e) => log::warn!("{}", e),
            }
        });
    }

    provide_context(auth);

    children()
}

/// Hook to access auth state
pub fn use_auth() -> RwSignal<AuthState> {
    use_context::<RwSignal<AuthState>>().expect("AuthProvider not found in component tree")
}

/// Store a fresh login and publish it
pub fn sign_in(auth: RwSignal<AuthState>, response: LoginResponse) {
    storage::save_session(&response.token, &response.user);
    auth.set(AuthState {
        token: Some(response.token),
        user: Some(response.user),
    });
}

/// Forget the session locally and tell the gateway
pub fn sign_out(auth: RwSignal<AuthState>) {
    storage::clear_session();
    auth.set(AuthState::default());
    spawn_local(async move {
        if let Err(e) = api::logout().await {
            log::warn!("{}", e);
        }
    });
}
