pub mod assets;
pub mod common;
pub mod config;
pub mod frontend;
pub mod gallery;
pub mod models;

/// WASM hydration entry point
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    leptos::mount::hydrate_body(frontend::App);
}
