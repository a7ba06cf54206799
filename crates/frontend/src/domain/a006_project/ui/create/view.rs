use super::view_model::ProjectCreateVm;
use crate::domain::a001_contact::ui::ContactPicker;
use crate::shared::components::DateInput;
use crate::shared::icons::icon;
use contracts::domain::a001_contact::Contact;
use contracts::enums::ProjectStatus;
use leptos::prelude::*;
use thaw::*;

#[component]
pub fn ProjectCreateForm(
    vm: ProjectCreateVm,
    #[prop(into)] contacts: Signal<Vec<Contact>>,
    #[prop(into)] on_saved: Callback<()>,
) -> impl IntoView {
    let vm_save = vm.clone();
    let save_disabled = vm.is_save_disabled();
    let saving = vm.saving;
    let error = vm.error;

    view! {
        <div class="card">
            <h3 class="card__title">"Create New Project"</h3>

            {move || error.get().map(|e| view! {
                <div class="error-message">{e}</div>
            })}

            <div class="details-grid--3col">
                <div class="form__group">
                    <label class="form__label">"Name *"</label>
                    <Input value=vm.name placeholder="Project name" />
                </div>
                <div class="form__group">
                    <label class="form__label">"Code *"</label>
                    <Input value=vm.code placeholder="PRJ-001" />
                </div>
                <div class="form__group">
                    <label class="form__label">"Status"</label>
                    <Select value=vm.status>
                        {ProjectStatus::all().into_iter().map(|s| view! {
                            <option value=s.code()>{s.display_name()}</option>
                        }).collect_view()}
                    </Select>
                </div>
                <div class="form__group">
                    <label class="form__label">"Contact"</label>
                    <ContactPicker value=vm.contact_id contacts=contacts />
                </div>
                <div class="form__group">
                    <label class="form__label">"Start date"</label>
                    <DateInput value=vm.start_date />
                </div>
                <div class="form__group">
                    <label class="form__label">"End date"</label>
                    <DateInput value=vm.end_date />
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
                    {move || if saving.get() { "Creating..." } else { "Create Project" }}
                </Button>
            </div>
        </div>
    }
}
