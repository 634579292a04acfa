//! EcoMed Store Frontend Entry Point

mod app;
mod components;
mod logging;
mod store;

use app::App;
use ecomed_catalog::StoreConfig;
use leptos::prelude::*;

/// Store settings bundled with the build
const STORE_CONFIG: &str = include_str!("../config/store.json");

fn main() {
    console_error_panic_hook::set_once();

    let (config, config_error) = match StoreConfig::from_json(STORE_CONFIG) {
        Ok(config) => (config, None),
        Err(err) => (StoreConfig::default(), Some(err)),
    };
    logging::init(&config.log_level);
    if let Some(err) = config_error {
        log::warn!("Falling back to default store config: {}", err);
    }

    mount_to_body(move || view! { <App config=config /> });
}
