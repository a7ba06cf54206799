//! TopHeader component - application top bar.
//!
//! Contains the sidebar toggle, the page title and the signed-in user with
//! a logout action.

use crate::layout::global_context::AppGlobalContext;
use crate::shared::api_client::use_api;
use crate::shared::icons::icon;
use crate::system::auth::context::{do_logout, use_auth};
use leptos::prelude::*;

#[component]
pub fn TopHeader() -> impl IntoView {
    let ctx =
        leptos::context::use_context::<AppGlobalContext>().expect("AppGlobalContext not found");
    let client = use_api();
    let (auth_state, set_auth_state) = use_auth();

    let toggle_sidebar = move |_| {
        ctx.toggle_left();
    };

    let logout = move |_| {
        do_logout(&client, set_auth_state, &ctx);
    };

    let is_sidebar_visible = move || ctx.left_open.get();

    view! {
        <div class="top-header">
            <div class="top-header__brand">
                <button
                    class="top-header__icon-btn"
                    on:click=toggle_sidebar
                    title=move || if is_sidebar_visible() { "Hide navigation" } else { "Show navigation" }
                >
                    {move || if is_sidebar_visible() {
                        icon("panel-left-close")
                    } else {
                        icon("panel-left-open")
                    }}
                </button>
                <span class="top-header__title">{move || ctx.active.get().label()}</span>
            </div>

            <div class="top-header__actions">
                <div class="top-header__user">
                    {icon("user")}
                    <span>
                        {move || auth_state.get().user_info
                            .map(|u| u.username)
                            .unwrap_or_else(|| "Signed in".to_string())}
                    </span>
                </div>

                <button class="top-header__icon-btn" on:click=logout title="Log out">
                    {icon("log-out")}
                </button>
            </div>
        </div>
    }
}
