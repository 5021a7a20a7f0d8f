//! Settings struct with TOML-based sections.
//!
//! Settings are organized into logical sections that map to TOML tables.
//! They are read at startup only; nothing chosen in the window is saved.

use serde::{Deserialize, Serialize};

use crate::logging::LogLevel;

/// Root settings structure containing all configuration sections.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Settings {
    /// Path-related settings.
    #[serde(default)]
    pub paths: PathSettings,

    /// Logging configuration.
    #[serde(default)]
    pub logging: LoggingSettings,

    /// Main window geometry.
    #[serde(default)]
    pub window: WindowSettings,
}

/// Path configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PathSettings {
    /// Folder for log files.
    #[serde(default = "default_logs_folder")]
    pub logs_folder: String,
}

fn default_logs_folder() -> String {
    super::project_dirs()
        .map(|dirs| dirs.data_local_dir().join("logs").to_string_lossy().into_owned())
        .unwrap_or_else(|| ".logs".to_string())
}

impl Default for PathSettings {
    fn default() -> Self {
        Self {
            logs_folder: default_logs_folder(),
        }
    }
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingSettings {
    /// Default level when RUST_LOG is not set.
    #[serde(default)]
    pub level: LogLevel,

    /// Also write a daily log file to `paths.logs_folder`.
    #[serde(default = "default_true")]
    pub file_output: bool,
}

fn default_true() -> bool {
    true
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: LogLevel::default(),
            file_output: true,
        }
    }
}

/// Main window geometry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WindowSettings {
    #[serde(default = "default_width")]
    pub width: f32,

    #[serde(default = "default_height")]
    pub height: f32,
}

fn default_width() -> f32 {
    550.0
}

fn default_height() -> f32 {
    280.0
}

impl Default for WindowSettings {
    fn default() -> Self {
        Self {
            width: default_width(),
            height: default_height(),
        }
    }
}

/// Names of config sections.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ConfigSection {
    Paths,
    Logging,
    Window,
}

impl ConfigSection {
    /// All sections, in file order.
    pub const ALL: [ConfigSection; 3] = [
        ConfigSection::Paths,
        ConfigSection::Logging,
        ConfigSection::Window,
    ];

    /// Get the TOML table name for this section.
    pub fn table_name(&self) -> &'static str {
        match self {
            ConfigSection::Paths => "paths",
            ConfigSection::Logging => "logging",
            ConfigSection::Window => "window",
        }
    }

    /// Comment written above the section.
    pub fn comment(&self) -> &'static str {
        match self {
            ConfigSection::Paths => "# Working directories",
            ConfigSection::Logging => "# Logging configuration (RUST_LOG overrides level)",
            ConfigSection::Window => "# Main window size",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_settings_serializes() {
        let settings = Settings::default();
        let toml = toml::to_string_pretty(&settings).unwrap();
        assert!(toml.contains("[paths]"));
        assert!(toml.contains("[logging]"));
        assert!(toml.contains("level = \"info\""));
        assert!(toml.contains("[window]"));
    }

    #[test]
    fn missing_fields_use_defaults() {
        let minimal = "[logging]\nlevel = \"debug\"";
        let parsed: Settings = toml::from_str(minimal).unwrap();
        assert_eq!(parsed.logging.level, LogLevel::Debug);
        assert!(parsed.logging.file_output);
        assert_eq!(parsed.window.width, 550.0);
        assert_eq!(parsed.window.height, 280.0);
    }

    #[test]
    fn section_names_are_unique() {
        let names: Vec<_> = ConfigSection::ALL.iter().map(|s| s.table_name()).collect();
        assert_eq!(names, ["paths", "logging", "window"]);
    }
}
