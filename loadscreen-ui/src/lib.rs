mod app;
mod components;
mod config;
mod hooks;
mod rendering;

use wasm_bindgen::prelude::*;

#[wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    _ = console_log::init_with_level(log::Level::Debug);

    if let Some(window) = web_sys::window() {
        if let Ok(query) = window.location().search() {
            config::apply_query_overrides(&query);
        }
    }

    leptos::mount_to_body(app::App);
}
