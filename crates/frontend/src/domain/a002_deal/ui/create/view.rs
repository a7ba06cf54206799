use super::view_model::DealCreateVm;
use crate::domain::a001_contact::ui::ContactPicker;
use crate::shared::icons::icon;
use contracts::domain::a001_contact::Contact;
use contracts::enums::DealStage;
use leptos::prelude::*;
use thaw::*;

#[component]
pub fn DealCreateForm(
    vm: DealCreateVm,
    #[prop(into)] contacts: Signal<Vec<Contact>>,
    #[prop(into)] on_saved: Callback<()>,
) -> impl IntoView {
    let vm_save = vm.clone();
    let save_disabled = vm.is_save_disabled();
    let saving = vm.saving;
    let error = vm.error;

    view! {
        <div class="card">
            <h3 class="card__title">"Create New Deal"</h3>

            {move || error.get().map(|e| view! {
                <div class="error-message">{e}</div>
            })}

            <div class="details-grid--2col">
                <div class="form__group">
                    <label class="form__label">"Title *"</label>
                    <Input value=vm.title placeholder="Deal title" />
                </div>
                <div class="form__group">
                    <label class="form__label">"Amount"</label>
                    <Input value=vm.amount placeholder="0.00" />
                </div>
                <div class="form__group">
                    <label class="form__label">"Stage"</label>
                    <Select value=vm.stage>
                        {DealStage::all().into_iter().map(|s| view! {
                            <option value=s.code()>{s.display_name()}</option>
                        }).collect_view()}
                    </Select>
                </div>
                <div class="form__group">
                    <label class="form__label">"Contact"</label>
                    <ContactPicker value=vm.contact_id contacts=contacts />
                </div>
            </div>

            <div class="card__actions">
                <Button
                    appearance=ButtonAppearance::Primary
                    on_click=move |_| vm_save.save(on_saved)
                    disabled=save_disabled
                >
                    {icon("plus")}
                    {move || if saving.get() { "Creating..." } else { "Create Deal" }}
                </Button>
            </div>
        </div>
    }
}
