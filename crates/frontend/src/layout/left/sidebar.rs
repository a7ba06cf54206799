//! Sidebar navigation: one flat item per top-level page

use crate::layout::global_context::{AppGlobalContext, AppPage};
use crate::shared::icons::icon;
use leptos::prelude::*;

#[component]
pub fn Sidebar() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext not found");

    view! {
        <div class="app-sidebar__content">
            <div class="app-sidebar__brand">"OpenERP"</div>
            <nav>
                {AppPage::all().iter().copied().map(|page| {
                    view! {
                        <div
                            class="app-sidebar__item"
                            class:app-sidebar__item--active=move || ctx.active.get() == page
                            style:padding-left="12px"
                            on:click=move |_| ctx.open(page)
                        >
                            <span class="app-sidebar__icon">{icon(page.icon())}</span>
                            <span class="app-sidebar__label">{page.label()}</span>
                        </div>
                    }
                }).collect_view()}
            </nav>
        </div>
    }
}
