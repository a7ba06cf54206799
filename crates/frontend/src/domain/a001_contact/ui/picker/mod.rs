//! Contact dropdown used by deals, orders, invoices and projects

use contracts::domain::a001_contact::Contact;
use contracts::domain::common::AggregateId;
use leptos::prelude::*;
use thaw::*;

/// Binds the selected contact id (as string, empty = none) to `value`
#[component]
pub fn ContactPicker(
    value: RwSignal<String>,
    #[prop(into)] contacts: Signal<Vec<Contact>>,
) -> impl IntoView {
    view! {
        <Select value=value>
            <option value="">"— No contact —"</option>
            {move || contacts.get().into_iter().map(|c| {
                view! { <option value=c.id.as_string()>{c.name}</option> }
            }).collect_view()}
        </Select>
    }
}
