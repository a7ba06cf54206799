use super::view_model::ContactCreateVm;
use crate::shared::icons::icon;
use leptos::prelude::*;
use thaw::*;

#[component]
pub fn ContactCreateForm(vm: ContactCreateVm, #[prop(into)] on_saved: Callback<()>) -> impl IntoView {
    let vm_save = vm.clone();
    let save_disabled = vm.is_save_disabled();
    let saving = vm.saving;
    let error = vm.error;

    view! {
        <div class="card">
            <h3 class="card__title">"Create New Contact"</h3>

            {move || error.get().map(|e| view! {
                <div class="error-message">{e}</div>
            })}

            <div class="details-grid--2col">
                <div class="form__group">
                    <label class="form__label">"Name *"</label>
                    <Input value=vm.name placeholder="Full name" />
                </div>
                <div class="form__group">
                    <label class="form__label">"Email"</label>
                    <Input value=vm.email placeholder="name@example.com" />
                </div>
                <div class="form__group">
                    <label class="form__label">"Phone"</label>
                    <Input value=vm.phone placeholder="Optional" />
                </div>
                <div class="form__group">
                    <label class="form__label">"Company"</label>
                    <Input value=vm.company placeholder="Optional" />
                </div>
            </div>

            <div class="card__actions">
                <Button
                    appearance=ButtonAppearance::Primary
                    on_click=move |_| vm_save.save(on_saved)
                    disabled=save_disabled
                >
                    {icon("plus")}
                    {move || if saving.get() { "Creating..." } else { "Create Contact" }}
                </Button>
            </div>
        </div>
    }
}
