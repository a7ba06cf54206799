use super::create::{DealCreateForm, DealCreateVm};
use crate::domain::a001_contact::api::{self as contact_api, contact_label};
use crate::domain::a002_deal::api;
use crate::shared::api_client::use_api;
use crate::shared::components::{StatusBadge, TableCellMoney};
use crate::shared::icons::icon;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_LIST;
use crate::shared::request_seq::{still_current, LoadSequence};
use contracts::domain::a001_contact::Contact;
use contracts::domain::a002_deal::Deal;
use contracts::domain::common::AggregateId;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

#[component]
#[allow(non_snake_case)]
pub fn DealList() -> impl IntoView {
    let client = use_api();
    let items = RwSignal::new(Vec::<Deal>::new());
    let contacts = RwSignal::new(Vec::<Contact>::new());
    let loading = RwSignal::new(false);
    let seq = StoredValue::new(LoadSequence::new());

    let load = Callback::new({
        let client = client.clone();
        move |()| {
            let client = client.clone();
            let ticket = seq.with_value(|s| s.begin());
            loading.set(true);
            spawn_local(async move {
                let (deals, contact_list) =
                    futures::join!(api::fetch_all(&client), contact_api::fetch_all(&client));
                if !still_current(seq, ticket) {
                    log::debug!("deals: stale load discarded");
                    return;
                }
                items.set(deals);
                contacts.set(contact_list);
                loading.set(false);
            });
        }
    });

    let vm = DealCreateVm::new(client);

    load.run(());

    view! {
        <PageFrame page_id="a002_deal--list" category=PAGE_CAT_LIST>
            <div class="page__header">
                <div class="page__header-text">
                    <h1 class="page__title">"Deals"</h1>
                    <p class="page__subtitle">"Sales pipeline opportunities"</p>
                </div>
                <div class="page__actions">
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
                <DealCreateForm vm=vm contacts=contacts on_saved=load />

                <div class="card">
                    <h3 class="card__title">
                        {move || format!("All Deals ({})", items.with(|v| v.len()))}
                    </h3>
                    <Show
                        when=move || items.with(|v| !v.is_empty())
                        fallback=|| view! {
                            <div class="empty-state">"No deals yet. Create one above."</div>
                        }
                    >
                        <div class="table">
                            <table class="table__data table--striped">
                                <thead class="table__head">
                                    <tr>
                                        <th class="table__header-cell">"Title"</th>
                                        <th class="table__header-cell table__header-cell--right">"Amount"</th>
                                        <th class="table__header-cell">"Stage"</th>
                                        <th class="table__header-cell">"Contact"</th>
                                    </tr>
                                </thead>
                                <tbody>
                                    <For
                                        each=move || items.get()
                                        key=|d| d.id.as_string()
                                        children=move |d: Deal| {
                                            let stage = d.effective_stage();
                                            let contact_id = d.contact_id;
                                            view! {
                                                <tr class="table__row">
                                                    <td class="table__cell table__cell--strong">{d.title}</td>
                                                    <TableCellMoney value=d.amount />
                                                    <td class="table__cell">
                                                        <StatusBadge variant=stage.badge_variant() label=stage.display_name() />
                                                    </td>
                                                    <td class="table__cell">
                                                        {move || contacts.with(|c| contact_label(c, contact_id))}
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
