//! Extension Renamer - Main entry point
//!
//! Loads configuration, sets up logging and runs the iced application.

use anyhow::Context;

use extren_core::config::ConfigManager;
use extren_core::logging::{init_tracing, init_tracing_with_file};

mod app;
mod handlers;
mod theme;
mod widgets;

fn main() -> anyhow::Result<()> {
    let config_path = ConfigManager::default_path();
    let mut config_manager = ConfigManager::new(&config_path);

    if let Err(e) = config_manager.load_or_create() {
        eprintln!("Warning: Failed to load config: {}. Using defaults.", e);
    }
    let settings = config_manager.settings().clone();

    let level = settings.logging.level;
    let _log_guard = if settings.logging.file_output {
        init_tracing_with_file(level, &config_manager.logs_folder())
    } else {
        init_tracing(level);
        None
    };

    tracing::info!("Extension Renamer starting");
    tracing::info!("Config: {}", config_path.display());
    tracing::info!("Core version: {}", extren_core::version());
    if settings.logging.file_output {
        tracing::info!("Logs: {}", config_manager.logs_folder().display());
    }

    app::run(&settings.window).context("GUI event loop failed")?;

    tracing::info!("Window closed, exiting");
    Ok(())
}
