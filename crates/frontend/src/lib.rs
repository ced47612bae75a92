pub mod app;
pub mod catalog;
pub mod core;
pub mod layout;
pub mod shared;
pub mod system;

use wasm_bindgen::prelude::wasm_bindgen;

#[wasm_bindgen(start)]
pub fn start() {
    // initializes logging using the `log` crate
    _ = console_log::init_with_level(log::Level::Debug);
    console_error_panic_hook::set_once();

    log::info!("🚀 Iniciando portal galáctico");
    leptos::mount::mount_to_body(app::App);
}
