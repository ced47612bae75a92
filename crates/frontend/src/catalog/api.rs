//! Product list fetch. All-or-nothing: a non-success status or transport
//! error yields the error panel, never a partial render.

use contracts::catalog::Product;
use gloo_net::http::Request;

const PRODUCTS_URL: &str = "data/products.json";

pub async fn fetch_products() -> Result<Vec<Product>, String> {
    let response = Request::get(PRODUCTS_URL)
        .send()
        .await
        .map_err(|e| e.to_string())?;
    if !response.ok() {
        return Err(status_error(response.status()));
    }
    response.json().await.map_err(|e| e.to_string())
}

fn status_error(status: u16) -> String {
    format!("Error HTTP: {}", status)
}
