//! Portal-wide reactive state shared via Leptos context.

use crate::core::filter::FilterKey;
use crate::core::handoff::{HandoffDecision, LocalSlot, PendingFilter};
use crate::core::nav::{self, NavAction, NavHighlight, NavItem};
use crate::core::page::Page;
use crate::shared::browser;
use leptos::prelude::*;

/// Global portal state: which document we are on, the active product
/// filter, and the source of the sidebar highlight.
///
/// Card visibility and filter-button state both derive from the one
/// `active_filter` signal, so they cannot drift apart. A filter arriving
/// through the sidebar or the handoff additionally moves the nav
/// highlight (`apply_filter`); a plain button click does not.
#[derive(Clone, Copy)]
pub struct PortalContext {
    /// Classified from the document path once, at context creation.
    pub page: Option<Page>,
    pub active_filter: RwSignal<FilterKey>,
    pub nav_highlight: RwSignal<Option<NavHighlight>>,
}

impl PortalContext {
    pub fn new() -> Self {
        let page = Page::from_path(&browser::current_path());
        Self {
            page,
            active_filter: RwSignal::new(FilterKey::All),
            // Resolved at creation instead of after a fixed delay: the
            // context exists before anything renders, so no stale
            // highlight can flash first.
            nav_highlight: RwSignal::new(page.map(NavHighlight::Page)),
        }
    }

    /// Set the active filter: cards and filter buttons follow.
    pub fn set_filter(&self, key: FilterKey) {
        self.active_filter.set(key);
    }

    /// Apply a sidebar- or handoff-driven filter: card visibility,
    /// filter-button state and nav highlight move together.
    pub fn apply_filter(&self, key: FilterKey) {
        self.nav_highlight.set(Some(NavHighlight::Filter(key.clone())));
        self.set_filter(key);
    }

    /// Handle a filter request from anywhere in the portal. Away from the
    /// catalog the key is stashed and the browser transitions; the next
    /// catalog load replays it.
    pub fn request_filter(&self, key: FilterKey) {
        match HandoffDecision::decide(self.page) {
            HandoffDecision::ApplyHere => self.apply_filter(key),
            HandoffDecision::StashAndNavigate => {
                PendingFilter::new(LocalSlot).stash(&key);
                browser::navigate_to(Page::Catalog.href());
            }
        }
    }

    /// A click on the sidebar item at `index`.
    pub fn nav_click(&self, index: usize, item: &NavItem) {
        match nav::classify(item.href, item.filter) {
            NavAction::Navigate(href) => browser::navigate_to(&href),
            NavAction::RequestFilter(key) => self.request_filter(key),
            NavAction::HighlightOnly => {
                self.nav_highlight.set(Some(NavHighlight::Item(index)));
            }
        }
    }

    /// Replay a filter stashed by another page, once the catalog has
    /// rendered its products.
    pub fn replay_pending_filter(&self) {
        if let Some(key) = PendingFilter::new(LocalSlot).take() {
            log::info!("🔁 Aplicando filtro pendiente: {}", key.as_str());
            self.apply_filter(key);
        }
    }
}

impl Default for PortalContext {
    fn default() -> Self {
        Self::new()
    }
}

pub fn use_portal() -> PortalContext {
    use_context::<PortalContext>().expect("PortalContext not found")
}
