//! Summary tile used by the tracker and progress widgets.

use leptos::prelude::*;

#[component]
pub fn StatTile(label: &'static str, #[prop(into)] value: Signal<String>) -> impl IntoView {
    view! {
        <div class="stat-tile">
            <span class="stat-tile__value">{move || value.get()}</span>
            <span class="stat-tile__label">{label}</span>
        </div>
    }
}
