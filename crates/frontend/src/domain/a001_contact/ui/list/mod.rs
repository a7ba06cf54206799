use super::create::{ContactCreateForm, ContactCreateVm};
use crate::domain::a001_contact::api;
use crate::shared::api_client::use_api;
use crate::shared::format::text_or_dash;
use crate::shared::icons::icon;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_LIST;
use crate::shared::request_seq::{still_current, LoadSequence};
use contracts::domain::a001_contact::Contact;
use contracts::domain::common::AggregateId;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

#[component]
#[allow(non_snake_case)]
pub fn ContactList() -> impl IntoView {
    let client = use_api();
    let items = RwSignal::new(Vec::<Contact>::new());
    let loading = RwSignal::new(false);
    let seq = StoredValue::new(LoadSequence::new());

    let load = Callback::new({
        let client = client.clone();
        move |()| {
            let client = client.clone();
            let ticket = seq.with_value(|s| s.begin());
            loading.set(true);
            spawn_local(async move {
                let contacts = api::fetch_all(&client).await;
                if !still_current(seq, ticket) {
                    log::debug!("contacts: stale load discarded");
                    return;
                }
                items.set(contacts);
                loading.set(false);
            });
        }
    });

    let vm = ContactCreateVm::new(client);

    load.run(());

    view! {
        <PageFrame page_id="a001_contact--list" category=PAGE_CAT_LIST>
            <div class="page__header">
                <div class="page__header-text">
                    <h1 class="page__title">"Contacts"</h1>
                    <p class="page__subtitle">"Customers and partners"</p>
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
                <ContactCreateForm vm=vm on_saved=load />

                <div class="card">
                    <h3 class="card__title">
                        {move || format!("All Contacts ({})", items.with(|v| v.len()))}
                    </h3>
                    <Show
                        when=move || items.with(|v| !v.is_empty())
                        fallback=|| view! {
                            <div class="empty-state">"No contacts yet. Create one above."</div>
                        }
                    >
                        <div class="table">
                            <table class="table__data table--striped">
                                <thead class="table__head">
                                    <tr>
                                        <th class="table__header-cell">"Name"</th>
                                        <th class="table__header-cell">"Email"</th>
                                        <th class="table__header-cell">"Phone"</th>
                                        <th class="table__header-cell">"Company"</th>
                                    </tr>
                                </thead>
                                <tbody>
                                    <For
                                        each=move || items.get()
                                        key=|c| c.id.as_string()
                                        children=move |c: Contact| view! {
                                            <tr class="table__row">
                                                <td class="table__cell table__cell--strong">{c.name}</td>
                                                <td class="table__cell">{text_or_dash(c.email.as_deref())}</td>
                                                <td class="table__cell">{text_or_dash(c.phone.as_deref())}</td>
                                                <td class="table__cell">{text_or_dash(c.company.as_deref())}</td>
                                            </tr>
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
