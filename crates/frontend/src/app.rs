use crate::catalog::CatalogPage;
use crate::core::page::Page;
use crate::layout::global_context::PortalContext;
use crate::layout::Shell;
use crate::system::pages::login::LoginPage;
use crate::system::pages::profile::ProfilePage;
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    // Provide the portal store to the whole app via context. Creating it
    // here also resolves the current-page nav highlight before anything
    // renders.
    let portal = PortalContext::new();
    provide_context(portal);

    view! {
        <Shell center=move || {
            match portal.page {
                Some(Page::Catalog) => view! { <CatalogPage /> }.into_any(),
                Some(Page::Profile) => view! { <ProfilePage /> }.into_any(),
                Some(Page::Login) => view! { <LoginPage /> }.into_any(),
                // Unknown document: chrome only, nothing to render here.
                None => view! { <></> }.into_any(),
            }
        } />
    }
}
