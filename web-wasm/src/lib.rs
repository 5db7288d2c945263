//! Catalog Admin Web App (Leptos + WASM)

mod api;
mod app;
mod components;
mod config;
mod cookie;
mod feedback;
mod handle;

pub use api::{catalog_api, FetchTransport, WebCatalogApi};
pub use cookie::CookieSessionStore;
pub use feedback::SignalFeedback;
pub use handle::{ConsoleHandle, WebConsole};

use wasm_bindgen::prelude::*;

#[wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();
    wasm_logger::init(wasm_logger::Config::default());
    leptos::mount::mount_to_body(app::App);
}
