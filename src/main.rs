//! Shopping List Frontend Entry Point

mod models;
mod store;
mod context;
mod components;
mod app;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    if let Err(e) = console_logger::init() {
        web_sys::console::error_1(&format!("[APP] Logger init failed: {}", e).into());
    }
    log::info!("[APP] Mounting shopping list");
    mount_to_body(App);
}
