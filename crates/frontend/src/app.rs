use crate::app_shell::AppShell;
use crate::layout::global_context::AppGlobalContext;
use crate::shared::api_client::ApiClient;
use crate::shared::config::AppConfig;
use crate::system::auth::context::AuthProvider;
use crate::system::auth::storage::Session;
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    let config = AppConfig::global().clone();

    // One session shared by the client and the auth gate
    let client = ApiClient::new(&config, Session::browser());

    provide_context(config);
    provide_context(client);
    provide_context(AppGlobalContext::new());

    view! {
        <AuthProvider>
            <AppShell />
        </AuthProvider>
    }
}
