use wasm_bindgen::prelude::*;

use crate::domain::logging::{LogComponent, get_logger};

pub mod app;
pub mod application;
pub mod domain;
pub mod global_state;
pub mod infrastructure;
pub mod macros;
pub mod presentation;

/// WASM entry point: wire logging and configuration, then mount the app
#[wasm_bindgen(start)]
pub fn initialize() {
    console_error_panic_hook::set_once();

    let console_logger = Box::new(infrastructure::services::ConsoleLogger::for_build());
    domain::logging::init_logger(console_logger);

    let browser_time_provider = Box::new(infrastructure::services::BrowserTimeProvider::new());
    domain::logging::init_time_provider(browser_time_provider);

    let config = infrastructure::config::AppConfig::from_page();
    get_logger().info(
        LogComponent::Presentation("Initialize"),
        &format!("🚀 Starting with default symbol {}", config.default_symbol),
    );
    infrastructure::config::init_config(config);

    leptos::mount_to_body(app::App);
}
