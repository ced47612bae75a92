//! Thin window/location helpers.
//!
//! Every accessor degrades to a no-op (or a default) when the window is
//! unavailable, so the rlib build stays linkable outside the browser.

use web_sys::window;

/// Current document path, e.g. "/perfil.html". Empty when no window.
pub fn current_path() -> String {
    window()
        .and_then(|w| w.location().pathname().ok())
        .unwrap_or_default()
}

/// Full page transition to another document.
pub fn navigate_to(href: &str) {
    if let Some(w) = window() {
        let _ = w.location().set_href(href);
    }
}

/// Modal acknowledgment (add-to-cart receipt).
pub fn alert(message: &str) {
    if let Some(w) = window() {
        let _ = w.alert_with_message(message);
    }
}

/// Modal yes/no question (logout confirmation). Defaults to "no".
pub fn confirm(message: &str) -> bool {
    window()
        .and_then(|w| w.confirm_with_message(message).ok())
        .unwrap_or(false)
}
