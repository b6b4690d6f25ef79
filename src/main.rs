mod app;
mod components;
mod config;
mod core;
mod models;
mod utils;

use app::App;
use leptos::prelude::*;
use wasm_bindgen::JsCast;

fn main() {
    console_error_panic_hook::set_once();

    // Configuration is loaded exactly once, here, and handed to the app
    // explicitly; nothing reads it from ambient state.
    let config = config::load();
    utils::log::debug(
        config.debug_mode,
        &format!("starting {} v{}", config::APP_NAME, config.version),
    );

    let root = document()
        .get_element_by_id("app")
        .expect("app mount point missing")
        .unchecked_into::<web_sys::HtmlElement>();

    mount_to(root, move || view! { <App config=config /> }).forget();
}
