//! Cross-page filter handoff.
//!
//! A filter requested away from the catalog page cannot be applied in
//! place: the key is stashed in a single browser-local slot, the browser
//! transitions to the catalog document, and the catalog load replays the
//! slot once its products are rendered.

use super::filter::FilterKey;
use super::page::Page;

const PENDING_FILTER_KEY: &str = "activeFilter";

/// Minimal key/value slot backend, so the handoff can run against real
/// localStorage in the browser and an in-memory map in tests.
pub trait SlotStorage {
    fn read(&self, key: &str) -> Option<String>;
    fn write(&self, key: &str, value: &str);
    fn remove(&self, key: &str);
}

/// The single pending-filter slot. Never a queue: a second stash
/// overwrites the first.
pub struct PendingFilter<S: SlotStorage> {
    storage: S,
}

impl<S: SlotStorage> PendingFilter<S> {
    pub fn new(storage: S) -> Self {
        Self { storage }
    }

    /// Persist a filter request for the next catalog page load.
    pub fn stash(&self, key: &FilterKey) {
        self.storage.write(PENDING_FILTER_KEY, key.as_str());
    }

    /// Consume the pending request: read and clear in one step, so a
    /// later catalog load does not replay a stale filter.
    pub fn take(&self) -> Option<FilterKey> {
        let raw = self.storage.read(PENDING_FILTER_KEY)?;
        self.storage.remove(PENDING_FILTER_KEY);
        Some(FilterKey::parse(&raw))
    }
}

/// localStorage-backed slot for the browser build.
pub struct LocalSlot;

impl SlotStorage for LocalSlot {
    fn read(&self, key: &str) -> Option<String> {
        local_storage()?.get_item(key).ok()?
    }

    fn write(&self, key: &str, value: &str) {
        if let Some(storage) = local_storage() {
            let _ = storage.set_item(key, value);
        }
    }

    fn remove(&self, key: &str) {
        if let Some(storage) = local_storage() {
            let _ = storage.remove_item(key);
        }
    }
}

fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window()?.local_storage().ok()?
}

/// How a filter request is handled, depending on where it was made.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HandoffDecision {
    /// Already on the catalog: apply the filter in place.
    ApplyHere,
    /// Elsewhere: stash the key and transition to the catalog document.
    StashAndNavigate,
}

impl HandoffDecision {
    pub fn decide(page: Option<Page>) -> HandoffDecision {
        if page == Some(Page::Catalog) {
            HandoffDecision::ApplyHere
        } else {
            HandoffDecision::StashAndNavigate
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::collections::HashMap;

    #[derive(Default)]
    struct MemSlot(RefCell<HashMap<String, String>>);

    impl SlotStorage for MemSlot {
        fn read(&self, key: &str) -> Option<String> {
            self.0.borrow().get(key).cloned()
        }
        fn write(&self, key: &str, value: &str) {
            self.0.borrow_mut().insert(key.to_string(), value.to_string());
        }
        fn remove(&self, key: &str) {
            self.0.borrow_mut().remove(key);
        }
    }

    #[test]
    fn stash_round_trips_any_key_text() {
        let slot = PendingFilter::new(MemSlot::default());
        for raw in ["producto", "viaje", "all", "categoría rara"] {
            slot.stash(&FilterKey::parse(raw));
            assert_eq!(slot.take(), Some(FilterKey::parse(raw)));
        }
    }

    #[test]
    fn take_clears_the_slot() {
        let slot = PendingFilter::new(MemSlot::default());
        slot.stash(&FilterKey::parse("viaje"));
        assert!(slot.take().is_some());
        assert_eq!(slot.take(), None);
    }

    #[test]
    fn empty_slot_yields_nothing() {
        let slot = PendingFilter::new(MemSlot::default());
        assert_eq!(slot.take(), None);
    }

    #[test]
    fn a_second_stash_overwrites_the_first() {
        let slot = PendingFilter::new(MemSlot::default());
        slot.stash(&FilterKey::parse("producto"));
        slot.stash(&FilterKey::parse("viaje"));
        assert_eq!(slot.take(), Some(FilterKey::parse("viaje")));
        assert_eq!(slot.take(), None);
    }

    #[test]
    fn only_the_catalog_applies_in_place() {
        assert_eq!(
            HandoffDecision::decide(Some(Page::Catalog)),
            HandoffDecision::ApplyHere
        );
        assert_eq!(
            HandoffDecision::decide(Some(Page::Profile)),
            HandoffDecision::StashAndNavigate
        );
        assert_eq!(
            HandoffDecision::decide(Some(Page::Login)),
            HandoffDecision::StashAndNavigate
        );
        assert_eq!(
            HandoffDecision::decide(None),
            HandoffDecision::StashAndNavigate
        );
    }
}
