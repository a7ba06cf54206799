use super::create::{ProductCreateForm, ProductCreateVm};
use crate::domain::a003_product::api;
use crate::shared::api_client::use_api;
use crate::shared::components::{StatusBadge, TableCellMoney};
use crate::shared::format::format_number_with_decimals;
use crate::shared::icons::icon;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_LIST;
use crate::shared::request_seq::{still_current, LoadSequence};
use contracts::domain::a003_product::Product;
use contracts::domain::common::AggregateId;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

#[component]
#[allow(non_snake_case)]
pub fn ProductList() -> impl IntoView {
    let client = use_api();
    let items = RwSignal::new(Vec::<Product>::new());
    let loading = RwSignal::new(false);
    let seq = StoredValue::new(LoadSequence::new());

    let load = Callback::new({
        let client = client.clone();
        move |()| {
            let client = client.clone();
            let ticket = seq.with_value(|s| s.begin());
            loading.set(true);
            spawn_local(async move {
                let products = api::fetch_all(&client).await;
                if !still_current(seq, ticket) {
                    log::debug!("inventory: stale load discarded");
                    return;
                }
                items.set(products);
                loading.set(false);
            });
        }
    });

    let vm = ProductCreateVm::new(client);

    load.run(());

    view! {
        <PageFrame page_id="a003_product--list" category=PAGE_CAT_LIST>
            <div class="page__header">
                <div class="page__header-text">
                    <h1 class="page__title">"Inventory"</h1>
                    <p class="page__subtitle">"Products and stock levels"</p>
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
                <ProductCreateForm vm=vm on_saved=load />

                <div class="card">
                    <h3 class="card__title">
                        {move || format!("All Products ({})", items.with(|v| v.len()))}
                    </h3>
                    <Show
                        when=move || items.with(|v| !v.is_empty())
                        fallback=|| view! {
                            <div class="empty-state">"No products yet. Create one above."</div>
                        }
                    >
                        <div class="table">
                            <table class="table__data table--striped">
                                <thead class="table__head">
                                    <tr>
                                        <th class="table__header-cell">"Name"</th>
                                        <th class="table__header-cell">"SKU"</th>
                                        <th class="table__header-cell table__header-cell--right">"Price"</th>
                                        <th class="table__header-cell table__header-cell--right">"Stock"</th>
                                        <th class="table__header-cell">"Status"</th>
                                    </tr>
                                </thead>
                                <tbody>
                                    <For
                                        each=move || items.get()
                                        key=|p| p.id.as_string()
                                        children=move |p: Product| {
                                            let level = p.stock_level();
                                            view! {
                                                <tr class="table__row">
                                                    <td class="table__cell table__cell--strong">{p.name}</td>
                                                    <td class="table__cell table__cell--mono">{p.sku}</td>
                                                    <TableCellMoney value=p.price />
                                                    <td class="table__cell table__cell--right">
                                                        {format_number_with_decimals(p.stock as f64, 0)}
                                                    </td>
                                                    <td class="table__cell">
                                                        <StatusBadge variant=level.badge_variant() label=level.display_name() />
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
