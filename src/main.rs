//! Notes Frontend Entry Point

mod models;
mod api;
mod config;
mod color;
mod format;
mod form;
mod dialog;
mod store;
mod context;
mod components;
mod app;

use app::App;
use config::Config;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();

    let config = Config::from_env();
    if let Err(err) = console_logger::init(config.log_level) {
        web_sys::console::warn_1(&format!("logger already set: {}", err).into());
    }

    mount_to_body(move || view! { <App config=config /> });
}
