use contracts::domain::a004_sale_order::SaleOrder;
use contracts::domain::common::AggregateId;
use leptos::prelude::*;
use thaw::*;

/// Sale order dropdown; binds the selected id as string, empty for none
#[component]
pub fn SaleOrderPicker(
    value: RwSignal<String>,
    #[prop(into)] orders: Signal<Vec<SaleOrder>>,
) -> impl IntoView {
    view! {
        <Select value=value>
            <option value="">"— No sale order —"</option>
            {move || orders.get().into_iter().map(|o| {
                view! { <option value=o.id.as_string()>{o.order_number}</option> }
            }).collect_view()}
        </Select>
    }
}
