//! Filter keys and the card/button matching rules of the filter engine.

/// Sentinel value meaning "no filter, show everything".
pub const ALL: &str = "all";

/// A product-category filter. `All` is the universal sentinel; any other
/// key selects exactly the cards whose category equals it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FilterKey {
    All,
    Category(String),
}

impl FilterKey {
    /// Parse a declared filter attribute. Unknown categories are not an
    /// error: they simply match zero cards.
    pub fn parse(raw: &str) -> FilterKey {
        if raw == ALL {
            FilterKey::All
        } else {
            FilterKey::Category(raw.to_string())
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            FilterKey::All => ALL,
            FilterKey::Category(key) => key,
        }
    }

    /// Whether a card with the given category is visible under this filter.
    pub fn matches(&self, category: &str) -> bool {
        match self {
            FilterKey::All => true,
            FilterKey::Category(key) => key == category,
        }
    }
}

/// Whether a filter button declaring `declared` carries the active flag.
///
/// Buttons and cards derive from the same active key, so filter results
/// and control highlight cannot diverge.
pub fn button_active(declared: &str, active: &FilterKey) -> bool {
    active.as_str() == declared
}
