use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::layout::global_context::{AppGlobalContext, AppPage};
use crate::shared::api_client::use_api;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_SYSTEM;
use crate::system::auth::context::{do_login, use_auth};

/// Credentials the backend seeds on first start
const DEFAULT_USERNAME: &str = "admin";
const DEFAULT_PASSWORD: &str = "admin";

#[component]
pub fn LoginPage() -> impl IntoView {
    let (username, set_username) = signal(DEFAULT_USERNAME.to_string());
    let (password, set_password) = signal(DEFAULT_PASSWORD.to_string());
    let (error_message, set_error_message) = signal(Option::<String>::None);
    let (is_loading, set_is_loading) = signal(false);

    let client = use_api();
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext not found");
    let (_, set_auth_state) = use_auth();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();

        let username_val = username.get();
        let password_val = password.get();

        set_is_loading.set(true);
        set_error_message.set(None);

        let client = client.clone();
        spawn_local(async move {
            match do_login(client, username_val, password_val, set_auth_state).await {
                Ok(()) => {
                    // Auth state switch swaps this page for the main layout
                    ctx.open(AppPage::Contacts);
                }
                Err(e) => {
                    set_error_message.set(Some(e.user_message()));
                    set_is_loading.set(false);
                }
            }
        });
    };

    view! {
        <PageFrame page_id="sys_login--system" category=PAGE_CAT_SYSTEM class="login-container">
            <div class="login-box">
                <h1>"OpenERP"</h1>
                <h2>"Sign in"</h2>

                <Show when=move || error_message.get().is_some()>
                    <div class="error-message">
                        {move || error_message.get().unwrap_or_default()}
                    </div>
                </Show>

                <form on:submit=on_submit>
                    <div class="form-group">
                        <label for="username">"Username"</label>
                        <input
                            type="text"
                            id="username"
                            prop:value=move || username.get()
                            on:input=move |ev| set_username.set(event_target_value(&ev))
                            required
                            disabled=move || is_loading.get()
                        />
                    </div>

                    <div class="form-group">
                        <label for="password">"Password"</label>
                        <input
                            type="password"
                            id="password"
                            prop:value=move || password.get()
                            on:input=move |ev| set_password.set(event_target_value(&ev))
                            required
                            disabled=move || is_loading.get()
                        />
                    </div>

                    <button
                        type="submit"
                        class="btn-primary"
                        disabled=move || is_loading.get()
                    >
                        {move || if is_loading.get() { "Signing in..." } else { "Sign in" }}
                    </button>
                </form>

                <div class="login-info">
                    <p>"Default credentials:"</p>
                    <p>"Username: " <strong>{DEFAULT_USERNAME}</strong></p>
                    <p>"Password: " <strong>{DEFAULT_PASSWORD}</strong></p>
                </div>
            </div>
        </PageFrame>
    }
}
