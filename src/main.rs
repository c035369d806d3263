//! Crochet Catalogue Frontend Entry Point

mod config;
mod logger;
mod fetch;
mod storage;
mod navigation;
mod context;
mod store;
mod components;
mod app;

use app::App;
use config::SiteConfig;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();

    let config = SiteConfig::default();
    logger::init(config.log_level);

    mount_to_body(move || view! { <App config=config.clone() /> });
}
