//! The three page documents of the portal and path classification.

/// Known page documents of the static site.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    Catalog,
    Profile,
    Login,
}

impl Page {
    /// The document this page lives in, as used in link `href`s.
    pub fn href(&self) -> &'static str {
        match self {
            Page::Catalog => "index.html",
            Page::Profile => "perfil.html",
            Page::Login => "login.html",
        }
    }

    /// Classify a document path into one of the known pages.
    ///
    /// The site root ("/") serves the catalog. Paths naming none of the
    /// three documents are unknown and get no page highlight.
    pub fn from_path(path: &str) -> Option<Page> {
        if path.contains("index.html") || path == "/" {
            Some(Page::Catalog)
        } else if path.contains("perfil.html") {
            Some(Page::Profile)
        } else if path.contains("login.html") {
            Some(Page::Login)
        } else {
            None
        }
    }

}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn root_is_the_catalog() {
        assert_eq!(Page::from_path("/"), Some(Page::Catalog));
        assert_eq!(Page::from_path("/index.html"), Some(Page::Catalog));
        assert_eq!(Page::from_path("/portal/index.html"), Some(Page::Catalog));
    }

    #[test]
    fn profile_and_login_paths() {
        assert_eq!(Page::from_path("/perfil.html"), Some(Page::Profile));
        assert_eq!(Page::from_path("/login.html"), Some(Page::Login));
    }

    #[test]
    fn unknown_path_has_no_page() {
        assert_eq!(Page::from_path("/checkout.html"), None);
        assert_eq!(Page::from_path(""), None);
    }

    #[test]
    fn hrefs_round_trip_through_classification() {
        for page in [Page::Catalog, Page::Profile, Page::Login] {
            assert_eq!(Page::from_path(&format!("/{}", page.href())), Some(page));
        }
    }
}
