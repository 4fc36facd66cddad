pub mod api;
pub mod app;
pub mod components;
pub mod config;
pub mod console;
pub mod handlers;
pub mod model;
pub mod relay;
pub mod sections;
pub mod state;

#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    use crate::app::*;
    console_error_panic_hook::set_once();
    leptos::mount::hydrate_body(App);
}
