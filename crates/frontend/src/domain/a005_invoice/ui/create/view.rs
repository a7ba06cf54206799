use super::view_model::InvoiceCreateVm;
use crate::domain::a001_contact::ui::ContactPicker;
use crate::domain::a004_sale_order::ui::SaleOrderPicker;
use crate::shared::components::DateInput;
use crate::shared::format::{format_money, EMPTY_CELL};
use crate::shared::icons::icon;
use contracts::domain::a001_contact::Contact;
use contracts::domain::a004_sale_order::SaleOrder;
use contracts::enums::InvoiceStatus;
use leptos::prelude::*;
use thaw::*;

#[component]
pub fn InvoiceCreateForm(
    vm: InvoiceCreateVm,
    #[prop(into)] contacts: Signal<Vec<Contact>>,
    #[prop(into)] orders: Signal<Vec<SaleOrder>>,
    #[prop(into)] on_saved: Callback<()>,
) -> impl IntoView {
    let vm_save = vm.clone();
    let save_disabled = vm.is_save_disabled();
    let total = vm.total();
    let saving = vm.saving;
    let error = vm.error;

    view! {
        <div class="card">
            <h3 class="card__title">"Create New Invoice"</h3>

            {move || error.get().map(|e| view! {
                <div class="error-message">{e}</div>
            })}

            <div class="details-grid--2col">
                <div class="form__group">
                    <label class="form__label">"Invoice number *"</label>
                    <Input value=vm.invoice_number placeholder="INV-0001" />
                </div>
                <div class="form__group">
                    <label class="form__label">"Status"</label>
                    <Select value=vm.status>
                        {InvoiceStatus::all().into_iter().map(|s| view! {
                            <option value=s.code()>{s.display_name()}</option>
                        }).collect_view()}
                    </Select>
                </div>
                <div class="form__group">
                    <label class="form__label">"Sale order"</label>
                    <SaleOrderPicker value=vm.sale_order_id orders=orders />
                </div>
                <div class="form__group">
                    <label class="form__label">"Contact"</label>
                    <ContactPicker value=vm.contact_id contacts=contacts />
                </div>
                <div class="form__group">
                    <label class="form__label">"Subtotal"</label>
                    <Input value=vm.subtotal placeholder="0.00" />
                </div>
                <div class="form__group">
                    <label class="form__label">"Tax"</label>
                    <Input value=vm.tax placeholder="0.00" />
                </div>
                <div class="form__group">
                    <label class="form__label">"Issue date *"</label>
                    <DateInput value=vm.issue_date required=true />
                </div>
                <div class="form__group">
                    <label class="form__label">"Due date"</label>
                    <DateInput value=vm.due_date />
                </div>
            </div>

            <div class="card__summary">
                "Total: "
                <strong>
                    {move || total.get().map(format_money).unwrap_or_else(|| EMPTY_CELL.to_string())}
                </strong>
            </div>

            <div class="card__actions">
                <Button
                    appearance=ButtonAppearance::Primary
                    on_click=move |_| vm_save.save(on_saved)
                    disabled=save_disabled
                >
                    {icon("plus")}
                    {move || if saving.get() { "Creating..." } else { "Create Invoice" }}
                </Button>
            </div>
        </div>
    }
}
