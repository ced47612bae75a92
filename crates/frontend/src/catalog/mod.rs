//! Catalog page: product fetch, card grid, filter bar and the replay of
//! a filter handed over from another page.

pub mod api;
pub mod filter_bar;
pub mod product_card;

use crate::catalog::filter_bar::FilterBar;
use crate::catalog::product_card::ProductCard;
use crate::layout::global_context::use_portal;
use contracts::catalog::Product;
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

#[component]
pub fn CatalogPage() -> impl IntoView {
    let portal = use_portal();
    let products = RwSignal::new(Vec::<Product>::new());
    let load_error = RwSignal::new(Option::<String>::None);

    Effect::new(move |_| {
        spawn_local(async move {
            match api::fetch_products().await {
                Ok(list) => {
                    log::info!("📦 {} productos cargados", list.len());
                    products.set(list);
                    // The pending-filter slot is consumed only once the
                    // cards exist, so the replayed filter has something
                    // to act on.
                    portal.replay_pending_filter();
                }
                Err(e) => {
                    log::error!("❌ Error cargando productos: {}", e);
                    load_error.set(Some(e));
                }
            }
        });
    });

    view! {
        <section class="catalog">
            <FilterBar />
            <div id="products-template-container" class="products-grid">
                <Show
                    when=move || load_error.get().is_none()
                    fallback=move || view! {
                        <div class="error-message">
                            <h3>"⚠️ Error cargando productos"</h3>
                            <p><strong>{move || load_error.get().unwrap_or_default()}</strong></p>
                        </div>
                    }
                >
                    {move || {
                        products
                            .get()
                            .into_iter()
                            .map(|product| view! { <ProductCard product=product /> })
                            .collect_view()
                    }}
                </Show>
            </div>
        </section>
    }
}
