//! Configuration management for Extension Renamer.
//!
//! This module provides:
//! - TOML-based configuration with logical sections
//! - Atomic file writes (write to temp, then rename)
//! - Validation on load with automatic defaults
//!
//! # Example
//!
//! ```no_run
//! use extren_core::config::ConfigManager;
//!
//! let mut config = ConfigManager::new(ConfigManager::default_path());
//! config.load_or_create().unwrap();
//!
//! println!("Logs folder: {}", config.settings().paths.logs_folder);
//! ```

mod manager;
mod settings;

pub use manager::{ConfigError, ConfigManager, ConfigResult};
pub use settings::{ConfigSection, LoggingSettings, PathSettings, Settings, WindowSettings};

use directories::ProjectDirs;

/// Platform directories for this application, if a home directory exists.
pub(crate) fn project_dirs() -> Option<ProjectDirs> {
    ProjectDirs::from("", "", "extension-renamer")
}
