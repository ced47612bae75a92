//! Sidebar navigation: decorative chrome fragment plus the typed nav
//! list driving filtering and page transitions.

use crate::core::nav::{item_active, NAV_ITEMS};
use crate::core::page::Page;
use crate::layout::global_context::use_portal;
use crate::shared::browser;
use crate::shared::fragments::Fragment;
use leptos::prelude::*;

#[component]
pub fn Sidebar() -> impl IntoView {
    let portal = use_portal();

    let on_logout = move |_| {
        if browser::confirm("¿Salir del portal galáctico?") {
            browser::navigate_to(Page::Login.href());
        }
    };

    view! {
        <aside class="sidebar">
            <Fragment file="sidebar.html" container_id="sidebar-container" />
            <nav>
                <ul>
                    {NAV_ITEMS.iter().enumerate().map(|(index, item)| {
                        let item = *item;
                        let class = move || {
                            let active = portal
                                .nav_highlight
                                .with(|h| h.as_ref().is_some_and(|h| item_active(&item, index, h)));
                            if active { "nav-item active" } else { "nav-item" }
                        };
                        view! {
                            <li>
                                <a
                                    class=class
                                    href=item.href.unwrap_or("#")
                                    on:click=move |ev| {
                                        ev.prevent_default();
                                        portal.nav_click(index, &item);
                                    }
                                >
                                    {item.label}
                                </a>
                            </li>
                        }
                    }).collect_view()}
                </ul>
            </nav>
            <button id="logoutBtn" class="logout-btn" on:click=on_logout>
                "Cerrar sesión"
            </button>
        </aside>
    }
}
