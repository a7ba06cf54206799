use contracts::system::auth::UserInfo;
use leptos::prelude::*;

use super::api;
use crate::layout::global_context::AppGlobalContext;
use crate::shared::api_client::{use_api, ApiClient, ApiError};

#[derive(Clone, Debug, Default)]
pub struct AuthState {
    pub token: Option<String>,
    pub user_info: Option<UserInfo>,
}

impl AuthState {
    pub fn is_authenticated(&self) -> bool {
        self.token.is_some()
    }
}

/// Auth context provider component.
///
/// A token already in the session counts as signed in; it is trusted until
/// the backend rejects it.
#[component]
pub fn AuthProvider(children: ChildrenFn) -> impl IntoView {
    let client = use_api();
    let (auth_state, set_auth_state) = signal(AuthState {
        token: client.session().token(),
        user_info: None,
    });

    provide_context(auth_state);
    provide_context(set_auth_state);

    children()
}

/// Hook to access auth state
pub fn use_auth() -> (ReadSignal<AuthState>, WriteSignal<AuthState>) {
    let auth_state =
        use_context::<ReadSignal<AuthState>>().expect("AuthProvider not found in component tree");
    let set_auth_state =
        use_context::<WriteSignal<AuthState>>().expect("AuthProvider not found in component tree");

    (auth_state, set_auth_state)
}

/// Helper: Perform login and publish the new auth state
pub async fn do_login(
    client: ApiClient,
    username: String,
    password: String,
    set_auth_state: WriteSignal<AuthState>,
) -> Result<(), ApiError> {
    let response = api::login(&client, username, password).await?;

    set_auth_state.set(AuthState {
        token: Some(response.token),
        user_info: Some(response.user),
    });

    Ok(())
}

/// Helper: Perform logout and drop the page left in the URL
pub fn do_logout(
    client: &ApiClient,
    set_auth_state: WriteSignal<AuthState>,
    ctx: &AppGlobalContext,
) {
    api::logout(client);
    ctx.reset();
    set_auth_state.set(AuthState::default());
}
