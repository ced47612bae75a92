pub mod footer;
pub mod global_context;
pub mod header;
pub mod sidebar;
pub mod starfield;

use leptos::prelude::*;

/// Page shell shared by every document: header and footer chrome, the
/// sidebar, the star-field decoration and the page content in the middle.
#[component]
pub fn Shell<C>(center: C) -> impl IntoView
where
    C: Fn() -> AnyView + 'static + Send,
{
    view! {
        <header::Header />
        <div class="main-content">
            <sidebar::Sidebar />
            <main class="page-content">
                {center()}
            </main>
        </div>
        <footer::Footer />
        <starfield::Starfield />
    }
}
