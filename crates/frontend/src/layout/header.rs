use crate::shared::fragments::Fragment;
use leptos::prelude::*;

#[component]
pub fn Header() -> impl IntoView {
    view! {
        <Fragment file="header.html" container_id="header-container" />
    }
}
