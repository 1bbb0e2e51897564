pub mod app;
pub mod auth;
pub mod components;
pub mod config;
pub mod logging;
pub mod navigation;
pub mod pages;

use leptos::*;
use wasm_bindgen::prelude::wasm_bindgen;

use crate::app::App;
use crate::config::SiteConfig;

#[wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();

    let config = SiteConfig::from_build_env();
    logging::init(config.log_level);
    log::info!("mounting site, log level {}", config.log_level);

    mount_to_body(move || view! { <App config=config /> });
}
