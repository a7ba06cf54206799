use super::view_model::ProductCreateVm;
use crate::shared::icons::icon;
use leptos::prelude::*;
use thaw::*;

#[component]
pub fn ProductCreateForm(vm: ProductCreateVm, #[prop(into)] on_saved: Callback<()>) -> impl IntoView {
    let vm_save = vm.clone();
    let save_disabled = vm.is_save_disabled();
    let saving = vm.saving;
    let error = vm.error;

    view! {
        <div class="card">
            <h3 class="card__title">"Create New Product"</h3>

            {move || error.get().map(|e| view! {
                <div class="error-message">{e}</div>
            })}

            <div class="details-grid--3col">
                <div class="form__group">
                    <label class="form__label">"Name *"</label>
                    <Input value=vm.name placeholder="Product name" />
                </div>
                <div class="form__group">
                    <label class="form__label">"SKU *"</label>
                    <Input value=vm.sku placeholder="Stock keeping unit" />
                </div>
                <div class="form__group">
                    <label class="form__label">"Price"</label>
                    <Input value=vm.price placeholder="0.00" />
                </div>
                <div class="form__group">
                    <label class="form__label">"Stock"</label>
                    <Input value=vm.stock placeholder="0" />
                </div>
                <div class="form__group" style="grid-column: 1 / -1;">
                    <label class="form__label">"Description"</label>
                    <Textarea value=vm.description placeholder="Optional" attr:rows=2 />
                </div>
            </div>

            <div class="card__actions">
                <Button
                    appearance=ButtonAppearance::Primary
                    on_click=move |_| vm_save.save(on_saved)
                    disabled=save_disabled
                >
                    {icon("plus")}
                    {move || if saving.get() { "Creating..." } else { "Create Product" }}
                </Button>
            </div>
        </div>
    }
}
