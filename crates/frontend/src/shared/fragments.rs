//! Shared HTML fragment loader.
//!
//! Header, sidebar chrome and footer are plain HTML snippets fetched by
//! relative path and inlined into their containers. A failed fetch is
//! tolerated: it logs a warning and leaves the container empty.

use gloo_net::http::Request;
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

async fn fetch_fragment(file: &str) -> Result<String, String> {
    let response = Request::get(&format!("components/{}", file))
        .send()
        .await
        .map_err(|e| e.to_string())?;
    if !response.ok() {
        return Err(format!("Error HTTP: {}", response.status()));
    }
    response.text().await.map_err(|e| e.to_string())
}

/// A container filled with a fetched HTML fragment.
#[component]
pub fn Fragment(
    /// Fragment file name under `components/`.
    file: &'static str,
    /// Container element id (fixed DOM contract).
    container_id: &'static str,
) -> impl IntoView {
    let html = RwSignal::new(String::new());

    Effect::new(move |_| {
        spawn_local(async move {
            match fetch_fragment(file).await {
                Ok(markup) => html.set(markup),
                Err(e) => log::warn!("⚠️ Fragmento {} no se cargó: {}", file, e),
            }
        });
    });

    view! {
        <div id=container_id inner_html=move || html.get()></div>
    }
}
