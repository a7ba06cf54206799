use leptos::prelude::*;

/// Native date picker bound to a `yyyy-mm-dd` string signal.
/// The browser displays the date in the user's locale format.
#[component]
pub fn DateInput(value: RwSignal<String>, #[prop(optional)] required: bool) -> impl IntoView {
    view! {
        <input
            type="date"
            class="form__input"
            prop:value=move || value.get()
            on:input=move |ev| value.set(event_target_value(&ev))
            required=required
        />
    }
}
