use crate::dashboards::d400_overview::api::{self, OverviewSnapshot};
use crate::layout::global_context::{AppGlobalContext, AppPage};
use crate::shared::api_client::use_api;
use crate::shared::components::{StatCard, StatusBadge, TableCellMoney};
use crate::shared::icons::icon;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_DASHBOARD;
use crate::shared::request_seq::{still_current, LoadSequence};
use contracts::domain::a002_deal::Deal;
use contracts::domain::common::AggregateId;
use contracts::system::health::HealthStatus;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

/// Backend reachability shown in the dashboard header
#[derive(Debug, Clone, PartialEq)]
enum Backend {
    Checking,
    Online(HealthStatus),
    Offline(String),
}

/// Overview dashboard: module counters, recent deals, backend status
#[component]
pub fn OverviewDashboard() -> impl IntoView {
    let client = use_api();
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext not found");

    let snapshot = RwSignal::new(None::<OverviewSnapshot>);
    let backend = RwSignal::new(Backend::Checking);
    let loading = RwSignal::new(false);
    let seq = StoredValue::new(LoadSequence::new());

    let load = Callback::new(move |()| {
        let client = client.clone();
        let ticket = seq.with_value(|s| s.begin());
        loading.set(true);
        spawn_local(async move {
            let (overview, health) =
                futures::join!(api::load_overview(&client), api::fetch_health(&client));
            if !still_current(seq, ticket) {
                log::debug!("dashboard: stale load discarded");
                return;
            }
            snapshot.set(Some(overview));
            backend.set(match health {
                Ok(status) => Backend::Online(status),
                Err(e) => Backend::Offline(e.user_message()),
            });
            loading.set(false);
        });
    });

    load.run(());

    let count = move |pick: fn(&OverviewSnapshot) -> usize| {
        Signal::derive(move || snapshot.with(|s| s.as_ref().map(pick)))
    };
    let open = move |page: AppPage| Callback::new(move |()| ctx.open(page));

    let backend_view = move || match backend.get() {
        Backend::Checking => view! {
            <StatusBadge variant="neutral" label="Checking backend..." />
        }
        .into_any(),
        Backend::Online(status) => {
            let variant = if status.is_ok() { "success" } else { "warning" };
            let text = match &status.version {
                Some(v) => format!("{} {} · {}", status.app, v, status.status),
                None => format!("{} · {}", status.app, status.status),
            };
            view! {
                <span class="dashboard__backend" title=text>
                    <StatusBadge variant=variant label="Backend online" />
                </span>
            }
            .into_any()
        }
        Backend::Offline(reason) => view! {
            <span class="dashboard__backend" title=reason>
                <StatusBadge variant="error" label="Backend unreachable" />
            </span>
        }
        .into_any(),
    };

    let recent = move || {
        snapshot.with(|s| s.as_ref().map(|s| s.recent_deals.clone()).unwrap_or_default())
    };

    view! {
        <PageFrame page_id="d400_overview--dashboard" category=PAGE_CAT_DASHBOARD>
            <div class="page__header">
                <div class="page__header-text">
                    <h1 class="page__title">"Dashboard"</h1>
                    <p class="page__subtitle">"Overview of your business"</p>
                </div>
                <div class="page__actions">
                    {backend_view}
                    <Button
                        appearance=ButtonAppearance::Secondary
                        on_click=move |_| load.run(())
                        disabled=Signal::derive(move || loading.get())
                    >
                        {icon("refresh")}
                        {move || if loading.get() { "Loading..." } else { "Refresh" }}
                    </Button>
                </div>
            </div>

            <div class="page__content">
                <div class="dashboard__stats">
                    <StatCard label="Contacts" icon_name="customers" value=count(|s| s.contacts) on_click=open(AppPage::Contacts) />
                    <StatCard label="Deals" icon_name="deals" value=count(|s| s.deals) on_click=open(AppPage::Deals) />
                    <StatCard label="Sales Orders" icon_name="orders" value=count(|s| s.orders) on_click=open(AppPage::Sales) />
                    <StatCard label="Invoices" icon_name="invoices" value=count(|s| s.invoices) on_click=open(AppPage::Invoices) />
                    <StatCard label="Products" icon_name="products" value=count(|s| s.products) on_click=open(AppPage::Inventory) />
                    <StatCard label="Projects" icon_name="projects" value=count(|s| s.projects) on_click=open(AppPage::Projects) />
                </div>

                <div class="card">
                    <h3 class="card__title">"Recent Deals"</h3>
                    <Show
                        when=move || snapshot.with(|s| s.as_ref().is_some_and(|s| !s.recent_deals.is_empty()))
                        fallback=|| view! {
                            <div class="empty-state">"No recent deals to display"</div>
                        }
                    >
                        <div class="table">
                            <table class="table__data table--striped">
                                <thead class="table__head">
                                    <tr>
                                        <th class="table__header-cell">"Title"</th>
                                        <th class="table__header-cell table__header-cell--right">"Amount"</th>
                                        <th class="table__header-cell">"Stage"</th>
                                    </tr>
                                </thead>
                                <tbody>
                                    <For
                                        each=recent
                                        key=|d| d.id.as_string()
                                        children=move |d: Deal| {
                                            let stage = d.effective_stage();
                                            view! {
                                                <tr class="table__row">
                                                    <td class="table__cell table__cell--strong">{d.title}</td>
                                                    <TableCellMoney value=d.amount />
                                                    <td class="table__cell">
                                                        <StatusBadge variant=stage.badge_variant() label=stage.display_name() />
                                                    </td>
                                                </tr>
                                            }
                                        }
                                    />
                                </tbody>
                            </table>
                        </div>
                    </Show>
                </div>
            </div>
        </PageFrame>
    }
}
