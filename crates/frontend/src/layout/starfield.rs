//! Star-field page decoration: fixed twinkling dots behind the content.

use leptos::prelude::*;

const STAR_COUNT: usize = 50;
const STYLE_ID: &str = "starfield-style";

#[component]
pub fn Starfield() -> impl IntoView {
    Effect::new(move |_| create_starfield());
    view! { <></> }
}

/// Append the star elements and the twinkle keyframes to the document.
/// Guarded by the style element id so a remount never doubles the stars.
fn create_starfield() {
    let document = match web_sys::window().and_then(|w| w.document()) {
        Some(doc) => doc,
        None => return,
    };

    if let Ok(Some(_)) = document.query_selector(&format!("#{}", STYLE_ID)) {
        return;
    }

    let body = match document.body() {
        Some(b) => b,
        None => return,
    };

    for _ in 0..STAR_COUNT {
        if let Ok(star) = document.create_element("div") {
            let css = format!(
                "position: fixed; width: {:.2}px; height: {:.2}px; \
                 background: white; border-radius: 50%; left: {:.2}vw; \
                 top: {:.2}vh; opacity: {:.2}; z-index: -1; \
                 animation: twinkle {:.2}s infinite alternate;",
                js_sys::Math::random() * 3.0,
                js_sys::Math::random() * 3.0,
                js_sys::Math::random() * 100.0,
                js_sys::Math::random() * 100.0,
                js_sys::Math::random() * 0.7 + 0.3,
                js_sys::Math::random() * 3.0 + 2.0,
            );
            let _ = star.set_attribute("style", &css);
            let _ = body.append_child(&star);
        }
    }

    if let (Some(head), Ok(style)) = (document.head(), document.create_element("style")) {
        let _ = style.set_attribute("id", STYLE_ID);
        style.set_text_content(Some(
            "@keyframes twinkle { 0% { opacity: 0.3; } 100% { opacity: 0.8; } }",
        ));
        let _ = head.append_child(&style);
    }
}
