use wasm_bindgen::prelude::*;

use crate::config::{AppConfig, init_config};
use crate::domain::errors::AppError;
use crate::domain::logging::{LogComponent, LogLevel, emit};
use crate::infrastructure::{BrowserTimeProvider, ConsoleLogger};

pub mod app;
pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;
pub mod presentation;
pub mod time_utils;

/// Install panic hook, clock, logger and configuration.
#[wasm_bindgen(start)]
pub fn initialize() {
    console_error_panic_hook::set_once();
    domain::logging::init_time_provider(Box::new(BrowserTimeProvider::new()));

    let loaded = AppConfig::read_from_document();
    let settings = match &loaded {
        Ok(Some(settings)) => settings.clone(),
        _ => AppConfig::default(),
    };
    domain::logging::init_logger(Box::new(ConsoleLogger::new(settings.log_level())));
    if let Err(err) = loaded {
        log_warn!(
            LogComponent::Presentation("Initialize"),
            "Ignoring invalid #{} configuration: {}",
            config::CONFIG_ELEMENT_ID,
            err
        );
    }
    let settings_level = settings.log_level();
    init_config(settings);

    emit(LogLevel::Info, LogComponent::Presentation("Initialize"), || {
        format!("🚀 Price graph initialized, log level {}", settings_level)
    });
}

/// Mount the app onto `<body>`, charting `coin_id` or the configured default coin.
///
/// Rejects an invalid coin id instead of mounting a graph that can never load.
#[wasm_bindgen(js_name = mountPriceGraph)]
pub fn mount_price_graph(coin_id: Option<String>) -> Result<(), AppError> {
    let coin_id = app::resolve_coin_id(coin_id, &config::config().default_coin)?;
    emit(LogLevel::Info, LogComponent::Presentation("Mount"), || {
        format!("📊 Mounting price graph for {}", coin_id)
    });
    app::mount(&coin_id);
    Ok(())
}
