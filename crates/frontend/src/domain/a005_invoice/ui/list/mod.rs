use super::create::{InvoiceCreateForm, InvoiceCreateVm};
use crate::domain::a001_contact::api as contact_api;
use crate::domain::a004_sale_order::api as sale_order_api;
use crate::domain::a005_invoice::api;
use crate::shared::api_client::use_api;
use crate::shared::components::{StatusBadge, TableCellMoney};
use crate::shared::format::date_or_dash;
use crate::shared::icons::icon;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_LIST;
use crate::shared::request_seq::{still_current, LoadSequence};
use contracts::domain::a001_contact::Contact;
use contracts::domain::a004_sale_order::SaleOrder;
use contracts::domain::a005_invoice::Invoice;
use contracts::domain::common::AggregateId;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

#[component]
#[allow(non_snake_case)]
pub fn InvoiceList() -> impl IntoView {
    let client = use_api();
    let items = RwSignal::new(Vec::<Invoice>::new());
    let orders = RwSignal::new(Vec::<SaleOrder>::new());
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
                let (invoices, order_list, contact_list) = futures::join!(
                    api::fetch_all(&client),
                    sale_order_api::fetch_all(&client),
                    contact_api::fetch_all(&client)
                );
                if !still_current(seq, ticket) {
                    log::debug!("invoices: stale load discarded");
                    return;
                }
                items.set(invoices);
                orders.set(order_list);
                contacts.set(contact_list);
                loading.set(false);
            });
        }
    });

    let vm = InvoiceCreateVm::new(client);

    load.run(());

    view! {
        <PageFrame page_id="a005_invoice--list" category=PAGE_CAT_LIST>
            <div class="page__header">
                <div class="page__header-text">
                    <h1 class="page__title">"Invoices"</h1>
                    <p class="page__subtitle">"Billing and payment tracking"</p>
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
                <InvoiceCreateForm vm=vm contacts=contacts orders=orders on_saved=load />

                <div class="card">
                    <h3 class="card__title">
                        {move || format!("All Invoices ({})", items.with(|v| v.len()))}
                    </h3>
                    <Show
                        when=move || items.with(|v| !v.is_empty())
                        fallback=|| view! {
                            <div class="empty-state">"No invoices yet. Create one above."</div>
                        }
                    >
                        <div class="table">
                            <table class="table__data table--striped">
                                <thead class="table__head">
                                    <tr>
                                        <th class="table__header-cell">"Invoice #"</th>
                                        <th class="table__header-cell">"Issue date"</th>
                                        <th class="table__header-cell">"Due date"</th>
                                        <th class="table__header-cell table__header-cell--right">"Total"</th>
                                        <th class="table__header-cell">"Status"</th>
                                    </tr>
                                </thead>
                                <tbody>
                                    <For
                                        each=move || items.get()
                                        key=|inv| inv.id.as_string()
                                        children=move |inv: Invoice| view! {
                                            <tr class="table__row">
                                                <td class="table__cell table__cell--strong">{inv.invoice_number}</td>
                                                <td class="table__cell">{date_or_dash(inv.issue_date)}</td>
                                                <td class="table__cell">{date_or_dash(inv.due_date)}</td>
                                                <TableCellMoney value=inv.total bold=true />
                                                <td class="table__cell">
                                                    <StatusBadge variant=inv.status.badge_variant() label=inv.status.display_name() />
                                                </td>
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
