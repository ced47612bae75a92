use crate::core::filter::{button_active, FilterKey};
use crate::layout::global_context::use_portal;
use leptos::prelude::*;

/// Filter buttons shown above the grid. The declared keys mirror the
/// category values in the product data.
const FILTER_BUTTONS: [(&str, &str); 3] = [
    ("all", "Todos"),
    ("producto", "Productos"),
    ("viaje", "Viajes"),
];

#[component]
pub fn FilterBar() -> impl IntoView {
    let portal = use_portal();

    view! {
        <div class="filters">
            {FILTER_BUTTONS.iter().map(|(key, label)| {
                let key = *key;
                let label = *label;
                let class = move || {
                    if portal.active_filter.with(|active| button_active(key, active)) {
                        "filter-btn active"
                    } else {
                        "filter-btn"
                    }
                };
                view! {
                    <button
                        class=class
                        data-filter=key
                        on:click=move |_| portal.set_filter(FilterKey::parse(key))
                    >
                        {label}
                    </button>
                }
            }).collect_view()}
        </div>
    }
}
