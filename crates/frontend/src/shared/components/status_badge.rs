use leptos::prelude::*;
use thaw::*;

/// Thaw colour for a badge variant name ("primary", "success", "warning", "error")
pub fn badge_color(variant: &str) -> BadgeColor {
    match variant {
        "primary" => BadgeColor::Brand,
        "success" => BadgeColor::Success,
        "warning" => BadgeColor::Warning,
        "error" => BadgeColor::Danger,
        _ => BadgeColor::Subtle,
    }
}

/// Tinted badge for enum values (deal stage, order status, stock level)
#[component]
pub fn StatusBadge(variant: &'static str, label: &'static str) -> impl IntoView {
    view! {
        <Badge appearance=BadgeAppearance::Tint color=badge_color(variant)>
            {label}
        </Badge>
    }
}
