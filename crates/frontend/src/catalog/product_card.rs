use crate::layout::global_context::use_portal;
use crate::shared::browser;
use contracts::catalog::Product;
use leptos::prelude::*;

/// One product card. Visibility derives from the active filter, so
/// re-filtering never rebuilds the grid.
#[component]
pub fn ProductCard(product: Product) -> impl IntoView {
    let portal = use_portal();

    let category = product.category.clone();
    let display = {
        let category = category.clone();
        move || {
            if portal.active_filter.with(|key| key.matches(&category)) {
                "block"
            } else {
                "none"
            }
        }
    };

    let on_add_to_cart = {
        let name = product.name.clone();
        move |_| {
            browser::alert(&format!(
                "🌌 ¡Felicidades! \nHas adquirido: {}\n\nRecibirás los documentos en tu correo cósmico.",
                name
            ));
        }
    };

    view! {
        <article class="product-card" data-category=category.clone() style:display=display>
            <img class="product-img" src=product.image alt=product.name.clone() />
            <h3 class="product-title">{product.name}</h3>
            <p class="product-description">{product.description}</p>
            <span class="product-price">{product.price}</span>
            <span class="product-category">{category.clone()}</span>
            <button class="add-to-cart" on:click=on_add_to_cart>
                "Añadir al carrito"
            </button>
        </article>
    }
}
