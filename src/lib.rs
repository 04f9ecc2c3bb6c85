mod api;
mod app;
mod components;
mod config;
mod debounce;
mod logging;
mod state;
mod storage;

use wasm_bindgen::prelude::*;

#[wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();
    logging::init_logging(config::AppConfig::default().log_level);
    tracing::info!("Starting release calendar, build {}", config::BUILD_HASH);
    leptos::mount::mount_to_body(app::App);
}
