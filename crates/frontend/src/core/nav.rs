//! Navigation synchronizer: classifies sidebar clicks and resolves which
//! nav item carries the active highlight.

use super::filter::FilterKey;
use super::page::Page;

/// One sidebar navigation entry. A link may declare a target document,
/// a filter key, both, or neither.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavItem {
    pub label: &'static str,
    pub href: Option<&'static str>,
    pub filter: Option<&'static str>,
}

/// The sidebar menu. Inicio and Perfil are page links; Productos and
/// Viajes request a catalog filter instead of navigating.
pub const NAV_ITEMS: [NavItem; 4] = [
    NavItem { label: "Inicio", href: Some("index.html"), filter: None },
    NavItem { label: "Productos", href: None, filter: Some("producto") },
    NavItem { label: "Viajes", href: None, filter: Some("viaje") },
    NavItem { label: "Perfil", href: Some("perfil.html"), filter: None },
];

/// What a click on a nav item should do.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavAction {
    /// Leave the current document for another page.
    Navigate(String),
    /// In-page filter request, subject to the cross-page handoff decision.
    RequestFilter(FilterKey),
    /// Plain highlight toggle, no navigation and no filtering.
    HighlightOnly,
}

/// Classify a nav click from the link's declared attributes.
///
/// A target document always wins over a filter key declared on the same
/// link; a link with neither is a plain highlight toggle.
pub fn classify(href: Option<&str>, filter: Option<&str>) -> NavAction {
    if let Some(href) = href {
        if href.ends_with(".html") {
            return NavAction::Navigate(href.to_string());
        }
    }
    if let Some(filter) = filter {
        return NavAction::RequestFilter(FilterKey::parse(filter));
    }
    NavAction::HighlightOnly
}

/// Source of the current nav highlight.
#[derive(Debug, Clone, PartialEq)]
pub enum NavHighlight {
    /// Page-load highlight: the link targeting the current document.
    Page(Page),
    /// Filter-driven highlight, possibly shared with the home link.
    Filter(FilterKey),
    /// A plain link click; the index is the clicked item's position.
    Item(usize),
}

/// Whether the item at `index` carries the active flag under `highlight`.
///
/// Under a `Filter` highlight the links declaring that key are active;
/// for the "all" sentinel (which has no dedicated nav link) the catalog
/// home link is marked active instead.
pub fn item_active(item: &NavItem, index: usize, highlight: &NavHighlight) -> bool {
    match highlight {
        NavHighlight::Page(page) => item.href == Some(page.href()),
        NavHighlight::Filter(key) => {
            if item.filter.map(FilterKey::parse).as_ref() == Some(key) {
                return true;
            }
            *key == FilterKey::All && item.href == Some(Page::Catalog.href())
        }
        NavHighlight::Item(clicked) => index == *clicked,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn active_labels(highlight: &NavHighlight) -> Vec<&'static str> {
        NAV_ITEMS
            .iter()
            .enumerate()
            .filter(|(i, item)| item_active(item, *i, highlight))
            .map(|(_, item)| item.label)
            .collect()
    }

    #[test]
    fn page_link_always_navigates() {
        assert_eq!(
            classify(Some("perfil.html"), None),
            NavAction::Navigate("perfil.html".into())
        );
    }

    #[test]
    fn target_document_wins_over_filter() {
        // A link carrying both attributes must transition, never filter.
        assert_eq!(
            classify(Some("perfil.html"), Some("viaje")),
            NavAction::Navigate("perfil.html".into())
        );
    }

    #[test]
    fn filter_link_requests_a_filter() {
        assert_eq!(
            classify(Some("#"), Some("producto")),
            NavAction::RequestFilter(FilterKey::parse("producto"))
        );
        assert_eq!(
            classify(None, Some("viaje")),
            NavAction::RequestFilter(FilterKey::parse("viaje"))
        );
    }

    #[test]
    fn bare_link_is_a_highlight_toggle() {
        assert_eq!(classify(Some("#"), None), NavAction::HighlightOnly);
        assert_eq!(classify(None, None), NavAction::HighlightOnly);
    }

    #[test]
    fn page_load_at_perfil_highlights_only_the_profile_link() {
        let highlight = NavHighlight::Page(Page::from_path("/perfil.html").unwrap());
        assert_eq!(active_labels(&highlight), ["Perfil"]);
    }

    #[test]
    fn each_page_highlights_exactly_one_link() {
        for page in [Page::Catalog, Page::Profile] {
            assert_eq!(active_labels(&NavHighlight::Page(page)).len(), 1);
        }
        // The login document has no sidebar entry of its own.
        assert!(active_labels(&NavHighlight::Page(Page::Login)).is_empty());
    }

    #[test]
    fn category_filter_highlights_its_link() {
        let highlight = NavHighlight::Filter(FilterKey::parse("viaje"));
        assert_eq!(active_labels(&highlight), ["Viajes"]);
    }

    #[test]
    fn all_filter_falls_back_to_the_home_link() {
        let highlight = NavHighlight::Filter(FilterKey::All);
        assert_eq!(active_labels(&highlight), ["Inicio"]);
    }

    #[test]
    fn clicked_item_is_the_only_active_one() {
        let highlight = NavHighlight::Item(3);
        assert_eq!(active_labels(&highlight), ["Perfil"]);
    }
}
