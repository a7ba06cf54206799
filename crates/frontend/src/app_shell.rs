//! Application shell: the auth gate and the main layout behind it.

use crate::dashboards::d400_overview::ui::OverviewDashboard;
use crate::domain::a001_contact::ui::ContactList;
use crate::domain::a002_deal::ui::DealList;
use crate::domain::a003_product::ui::ProductList;
use crate::domain::a004_sale_order::ui::SaleOrderList;
use crate::domain::a005_invoice::ui::InvoiceList;
use crate::domain::a006_project::ui::ProjectList;
use crate::layout::global_context::{AppGlobalContext, AppPage};
use crate::layout::left::Sidebar;
use crate::layout::Shell;
use crate::system::auth::context::use_auth;
use crate::system::pages::login::LoginPage;
use leptos::prelude::*;

fn render_page(page: AppPage) -> AnyView {
    match page {
        AppPage::Dashboard => view! { <OverviewDashboard /> }.into_any(),
        AppPage::Contacts => view! { <ContactList /> }.into_any(),
        AppPage::Deals => view! { <DealList /> }.into_any(),
        AppPage::Sales => view! { <SaleOrderList /> }.into_any(),
        AppPage::Invoices => view! { <InvoiceList /> }.into_any(),
        AppPage::Inventory => view! { <ProductList /> }.into_any(),
        AppPage::Projects => view! { <ProjectList /> }.into_any(),
    }
}

/// Main application layout with sidebar and the active page.
///
/// Initializes router integration so the active page follows `?page=...`.
#[component]
fn MainLayout() -> impl IntoView {
    let ctx = leptos::context::use_context::<AppGlobalContext>()
        .expect("AppGlobalContext context not found");

    ctx.init_router_integration();

    view! {
        <Shell
            left=|| view! { <Sidebar /> }.into_any()
            center=move || {
                // Re-rendered only when the page itself changes
                let page = Memo::new(move |_| ctx.active.get());
                (move || render_page(page.get())).into_any()
            }
        />
    }
}

/// Application shell - auth gate component.
///
/// Shows `LoginPage` while no token is stored, `MainLayout` otherwise.
#[component]
pub fn AppShell() -> impl IntoView {
    let (auth_state, _) = use_auth();

    view! {
        <Show
            when=move || auth_state.get().is_authenticated()
            fallback=|| view! { <LoginPage /> }
        >
            <MainLayout />
        </Show>
    }
}
