use crate::shared::format::{format_number_with_decimals, EMPTY_CELL};
use crate::shared::icons::icon;
use leptos::prelude::*;

/// Counter tile on the overview dashboard
#[component]
pub fn StatCard(
    /// Label displayed above the value
    label: &'static str,
    /// Icon name from the icon() helper
    icon_name: &'static str,
    /// Record count (None = still loading)
    #[prop(into)]
    value: Signal<Option<usize>>,
    /// Optional subtitle below the value
    #[prop(into, optional)]
    subtitle: Signal<Option<String>>,
    /// Click handler, e.g. open the matching list page
    #[prop(optional)]
    on_click: Option<Callback<()>>,
) -> impl IntoView {
    let formatted = move || match value.get() {
        Some(v) => format_number_with_decimals(v as f64, 0),
        None => EMPTY_CELL.to_string(),
    };

    let subtitle_view = move || {
        subtitle.get().map(|s| {
            view! { <div class="stat-card__subtitle">{s}</div> }
        })
    };

    view! {
        <div
            class="stat-card"
            class:stat-card--clickable=on_click.is_some()
            on:click=move |_| {
                if let Some(cb) = on_click {
                    cb.run(());
                }
            }
        >
            <div class="stat-card__icon">
                {icon(icon_name)}
            </div>
            <div class="stat-card__content">
                <div class="stat-card__label">{label}</div>
                <div class="stat-card__value">{formatted}</div>
                {subtitle_view}
            </div>
        </div>
    }
}
