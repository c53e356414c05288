//! Area Select Component
//!
//! Reusable delivery area dropdown, shared by the registration form and the
//! customer panel.

use leptos::prelude::*;

/// Delivery areas served by the platform
pub const AREAS: &[(&str, &str)] = &[
    ("DOWNTOWN", "Downtown"),
    ("UPTOWN", "Uptown"),
    ("MIDTOWN", "Midtown"),
    ("RIVERSIDE", "Riverside"),
    ("SUBURBS", "Suburbs"),
];

/// Dropdown of delivery areas; the empty selection means "not chosen yet"
#[component]
pub fn AreaSelect(
    value: Signal<String>,
    on_change: impl Fn(String) + Copy + 'static,
) -> impl IntoView {
    view! {
        <select
            class="area-select"
            prop:value=move || value.get()
            on:change=move |ev| on_change(event_target_value(&ev))
        >
            <option value="">"Choose an area..."</option>
            {AREAS.iter().copied().map(|(zone, label)| {
                view! { <option value=zone>{label}</option> }
            }).collect_view()}
        </select>
    }
}
