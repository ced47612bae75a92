use crate::shared::fragments::Fragment;
use leptos::prelude::*;

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <Fragment file="footer.html" container_id="footer-container" />
    }
}
